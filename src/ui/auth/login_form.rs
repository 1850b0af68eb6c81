//! Login form component

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::core::auth::{self, LoginRequest, SubmitState};
use crate::core::validation;
use crate::ui::icon::{Icon, icons};
use crate::ui::use_mount_transition;

/// Login form component
#[component]
pub fn LoginForm(
    /// Callback invoked with no arguments after a successful login
    #[prop(optional, into)]
    on_success: Option<Callback<()>>,
) -> impl IntoView {
    // Form state
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let submit = RwSignal::new(SubmitState::Idle);
    let mounted = use_mount_transition(30);

    // Per-field errors, cleared on edit, recomputed in full on submit
    let username_error = RwSignal::new(None::<String>);
    let password_error = RwSignal::new(None::<String>);

    let validate_username_field = move || {
        username_error.set(
            validation::validate_username(&username.get())
                .err()
                .map(|e| e.to_string()),
        );
    };

    let validate_password_field = move || {
        password_error.set(
            validation::validate_password(&password.get())
                .err()
                .map(|e| e.to_string()),
        );
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        if submit.get().in_flight() {
            return;
        }

        // A new attempt discards the previous outcome
        submit.set(SubmitState::Idle);

        let errors = validation::validate_login(&username.get(), &password.get());
        username_error.set(errors.username.as_ref().map(ToString::to_string));
        password_error.set(errors.password.as_ref().map(ToString::to_string));
        if !errors.is_empty() {
            return;
        }

        submit.set(SubmitState::Submitting);

        let request = LoginRequest {
            username: username.get(),
            password: password.get(),
        };

        spawn_local(async move {
            match auth::login(&request).await {
                Ok(()) => {
                    // The page can navigate away while the call is pending:
                    // try_set is a no-op after teardown and returns the
                    // rejected value, which also gates the callback
                    let torn_down = submit.try_set(SubmitState::Success).is_some();
                    if !torn_down {
                        if let Some(callback) = on_success {
                            callback.run(());
                        }
                    }
                }
                Err(err) => {
                    submit.try_set(SubmitState::Failed(err));
                }
            }
        });
    };

    view! {
        <main class=move || {
            format!(
                "min-h-[calc(100vh-4rem)] flex items-center justify-center px-4 py-12 \
                 transition-all duration-300 {}",
                if mounted.get() { "opacity-100 translate-y-0" } else { "opacity-0 translate-y-2" },
            )
        }>
            <section
                class="w-full max-w-md bg-theme-primary rounded-2xl shadow-lg border border-theme p-6 sm:p-8"
                aria-labelledby="login-title"
            >
                <header class="mb-6 text-center">
                    <h1 id="login-title" class="text-2xl font-bold text-theme-primary">
                        "Welcome back"
                    </h1>
                    <p class="mt-1 text-sm text-theme-secondary">
                        "Sign in to your CourseAcademy account."
                    </p>
                </header>

                <form on:submit=on_submit novalidate=true class="space-y-5">
                    // Form-level error, only reachable once the real backend lands
                    {move || {
                        submit.get().error().map(|err| {
                            view! {
                                <div class="p-3 bg-red-100 dark:bg-red-900/30 border border-red-300 dark:border-red-700 rounded-lg">
                                    <p class="text-sm text-red-700 dark:text-red-300">{err.to_string()}</p>
                                </div>
                            }
                        })
                    }}

                    // Username field
                    <div>
                        <label for="username" class="block text-sm font-medium text-theme-primary mb-1">
                            "Username"
                        </label>
                        <div class="relative">
                            <span class="absolute inset-y-0 left-0 pl-3 flex items-center">
                                <Icon name=icons::USER class="w-4 h-4 text-theme-tertiary" />
                            </span>
                            <input
                                type="text"
                                id="username"
                                name="username"
                                autocomplete="username"
                                placeholder="Username"
                                class="input-base pl-10"
                                class:border-red-500=move || username_error.get().is_some()
                                aria-invalid=move || if username_error.get().is_some() { "true" } else { "false" }
                                aria-describedby=move || username_error.get().map(|_| "username-error")
                                prop:value=move || username.get()
                                on:input=move |ev| {
                                    username.set(event_target_value(&ev));
                                    username_error.set(None);
                                }
                                on:blur=move |_| { validate_username_field(); }
                            />
                        </div>
                        {move || {
                            username_error.get().map(|error| {
                                view! {
                                    <p id="username-error" class="mt-1 text-sm text-red-500">{error}</p>
                                }
                            })
                        }}
                    </div>

                    // Password field
                    <div>
                        <label for="password" class="block text-sm font-medium text-theme-primary mb-1">
                            "Password"
                        </label>
                        <div class="relative">
                            <span class="absolute inset-y-0 left-0 pl-3 flex items-center">
                                <Icon name=icons::LOCK class="w-4 h-4 text-theme-tertiary" />
                            </span>
                            <input
                                type=move || if show_password.get() { "text" } else { "password" }
                                id="password"
                                name="password"
                                autocomplete="current-password"
                                placeholder="Password"
                                class="input-base pl-10 pr-10"
                                class:border-red-500=move || password_error.get().is_some()
                                aria-invalid=move || if password_error.get().is_some() { "true" } else { "false" }
                                aria-describedby=move || password_error.get().map(|_| "password-error")
                                prop:value=move || password.get()
                                on:input=move |ev| {
                                    password.set(event_target_value(&ev));
                                    password_error.set(None);
                                }
                                on:blur=move |_| { validate_password_field(); }
                            />
                            <button
                                type="button"
                                class="absolute inset-y-0 right-0 pr-3 flex items-center text-theme-tertiary hover:text-theme-secondary"
                                aria-label=move || {
                                    if show_password.get() { "Hide password" } else { "Show password" }
                                }
                                on:click=move |_| show_password.update(|v| *v = !*v)
                            >
                                {move || {
                                    if show_password.get() {
                                        view! { <Icon name=icons::EYE_CLOSED class="w-4 h-4" /> }.into_any()
                                    } else {
                                        view! { <Icon name=icons::EYE class="w-4 h-4" /> }.into_any()
                                    }
                                }}
                            </button>
                        </div>
                        {move || {
                            password_error.get().map(|error| {
                                view! {
                                    <p id="password-error" class="mt-1 text-sm text-red-500">{error}</p>
                                }
                            })
                        }}
                    </div>

                    // Submit row
                    <div class="flex items-center justify-between gap-4">
                        <button
                            type="submit"
                            class="btn-base btn-primary flex-1"
                            disabled=move || submit.get().in_flight()
                        >
                            {move || {
                                if submit.get().in_flight() {
                                    view! {
                                        <span class="flex items-center justify-center gap-2">
                                            <Icon name=icons::LOADER class="w-4 h-4 animate-spin" />
                                            "Signing in..."
                                        </span>
                                    }
                                        .into_any()
                                } else {
                                    view! { <span class="block">"Sign in"</span> }.into_any()
                                }
                            }}
                        </button>

                        <div class="flex-none">
                            {move || {
                                if submit.get().succeeded() {
                                    view! {
                                        <span class="flex items-center gap-2 text-sm text-emerald-600">
                                            <Icon name=icons::CHECK class="w-4 h-4" />
                                            "Signed in"
                                        </span>
                                    }
                                        .into_any()
                                } else {
                                    view! {
                                        <A
                                            href="/signup"
                                            attr:class="text-sm text-accent-primary hover:underline"
                                        >
                                            "Create account"
                                        </A>
                                    }
                                        .into_any()
                                }
                            }}
                        </div>
                    </div>
                </form>
            </section>
        </main>
    }
}
