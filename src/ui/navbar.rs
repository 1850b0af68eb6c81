//! Responsive navigation bar
//!
//! Three mutually exclusive layouts are rendered and the breakpoint classes
//! decide which one is visible; the only logic-owned state is the mobile
//! panel's open flag.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::ui::common::{Button, ButtonSize, ButtonVariant, Dropdown};
use crate::ui::icon::{Icon, icons};
use crate::ui::theme::use_theme_context;
use crate::ui::use_mount_transition;

struct NavItem {
    label: &'static str,
    href: &'static str,
}

static NAV_ITEMS: [NavItem; 4] = [
    NavItem { label: "Home", href: "/" },
    NavItem { label: "Courses", href: "/courses" },
    NavItem { label: "About", href: "/about" },
    NavItem { label: "Contact", href: "/contact" },
];

/// Navigation bar component
#[component]
pub fn Navbar() -> impl IntoView {
    let mounted = use_mount_transition(50);
    let mobile_open = RwSignal::new(false);

    let enter_class = move || {
        if mounted.get() {
            "opacity-100 translate-y-0"
        } else {
            "opacity-0 -translate-y-1"
        }
    };

    let go_login = Callback::new(move |_| {
        let navigate = use_navigate();
        navigate("/login", Default::default());
    });
    let go_signup = Callback::new(move |_| {
        let navigate = use_navigate();
        navigate("/signup", Default::default());
    });

    view! {
        <header class="sticky top-0 z-40">
            <nav
                class="backdrop-blur-md bg-theme-primary/70 border-b border-theme shadow-sm"
                aria-label="Main navigation"
            >
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                    // Desktop (lg and up)
                    <div class=move || {
                        format!(
                            "hidden lg:grid grid-cols-3 items-center h-16 transition-all duration-300 ease-out {}",
                            enter_class(),
                        )
                    }>
                        <div class="flex items-center">
                            <Brand />
                        </div>

                        <ul class="flex items-center justify-center space-x-6">
                            {NAV_ITEMS
                                .iter()
                                .map(|item| {
                                    view! {
                                        <li>
                                            <A
                                                href=item.href
                                                attr:class="text-sm font-medium text-theme-secondary hover:text-accent-primary transition-colors duration-200"
                                            >
                                                {item.label}
                                            </A>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>

                        <div class="flex justify-end items-center space-x-3">
                            <ThemeToggle />
                            <Button variant=ButtonVariant::Ghost size=ButtonSize::Small on_click=go_login>
                                "Log in"
                            </Button>
                            <Button size=ButtonSize::Small on_click=go_signup>
                                "Sign up"
                            </Button>
                        </div>
                    </div>

                    // Tablet (md to lg): nav links collapse into a dropdown
                    <div class=move || {
                        format!(
                            "hidden md:flex lg:hidden items-center justify-between h-16 transition-all duration-300 ease-out {}",
                            enter_class(),
                        )
                    }>
                        <Brand />

                        <div class="flex-1 flex justify-center">
                            <Dropdown label="Menu">
                                {NAV_ITEMS
                                    .iter()
                                    .map(|item| {
                                        view! {
                                            <A
                                                href=item.href
                                                attr:class="block px-4 py-2 text-sm text-theme-secondary hover:bg-theme-secondary"
                                            >
                                                {item.label}
                                            </A>
                                        }
                                    })
                                    .collect_view()}
                            </Dropdown>
                        </div>

                        <div class="flex items-center space-x-2">
                            <ThemeToggle />
                            <Button variant=ButtonVariant::Ghost size=ButtonSize::Small on_click=go_login>
                                "Log in"
                            </Button>
                            <Button size=ButtonSize::Small on_click=go_signup>
                                "Sign up"
                            </Button>
                        </div>
                    </div>

                    // Mobile (below md): hamburger toggles the panel below
                    <div class=move || {
                        format!(
                            "flex md:hidden items-center justify-between h-14 transition-all duration-300 ease-out {}",
                            enter_class(),
                        )
                    }>
                        <Brand />

                        <div class="flex items-center gap-2">
                            <ThemeToggle />
                            <button
                                type="button"
                                class="inline-flex items-center justify-center rounded-md p-2 text-theme-secondary hover:bg-theme-secondary transition-colors"
                                aria-expanded=move || if mobile_open.get() { "true" } else { "false" }
                                aria-label=move || {
                                    if mobile_open.get() { "Close menu" } else { "Open menu" }
                                }
                                on:click=move |_| mobile_open.update(|v| *v = !*v)
                            >
                                {move || {
                                    if mobile_open.get() {
                                        view! { <Icon name=icons::X class="w-5 h-5" /> }.into_any()
                                    } else {
                                        view! { <Icon name=icons::MENU class="w-5 h-5" /> }.into_any()
                                    }
                                }}
                            </button>
                        </div>
                    </div>

                    // Mobile panel (slide down); a click on any entry closes it
                    <div class=move || {
                        format!(
                            "md:hidden overflow-hidden transition-all duration-300 ease-out {}",
                            if mobile_open.get() {
                                "max-h-[600px] opacity-100"
                            } else {
                                "max-h-0 opacity-0"
                            },
                        )
                    }>
                        <div class="px-4 pb-4" on:click=move |_| mobile_open.set(false)>
                            <ul class="flex flex-col gap-2 mt-3 border-t border-theme pt-3">
                                {NAV_ITEMS
                                    .iter()
                                    .map(|item| {
                                        view! {
                                            <li>
                                                <A
                                                    href=item.href
                                                    attr:class="block px-3 py-2 rounded-md text-base font-medium text-theme-secondary hover:bg-theme-secondary transition-colors"
                                                >
                                                    {item.label}
                                                </A>
                                            </li>
                                        }
                                    })
                                    .collect_view()}

                                <li>
                                    <div class="flex items-center gap-2 px-3">
                                        <Button
                                            variant=ButtonVariant::Ghost
                                            on_click=go_login
                                            class="flex-1".to_string()
                                        >
                                            "Log in"
                                        </Button>
                                        <Button on_click=go_signup class="flex-1".to_string()>
                                            "Sign up"
                                        </Button>
                                    </div>
                                </li>
                            </ul>
                        </div>
                    </div>
                </div>
            </nav>
        </header>
    }
}

/// Brand link back to the home page
#[component]
fn Brand() -> impl IntoView {
    view! {
        <A href="/" attr:class="inline-flex items-center gap-2 hover:opacity-90 transition-opacity">
            <Icon name=icons::BOOK_OPEN class="w-6 h-6" />
            <span class="text-lg font-semibold tracking-tight text-theme-primary">
                "CourseAcademy"
            </span>
        </A>
    }
}

/// Light/dark mode toggle button
#[component]
fn ThemeToggle() -> impl IntoView {
    let theme = use_theme_context();

    view! {
        <button
            type="button"
            class="p-2 rounded-lg hover:bg-theme-secondary transition-colors text-theme-secondary"
            aria-label="Toggle theme"
            on:click=move |_| theme.toggle()
        >
            {move || {
                if theme.is_dark.get() {
                    view! {
                        // Sun
                        <svg class="w-5 h-5" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                            <path
                                stroke-linecap="round"
                                stroke-linejoin="round"
                                stroke-width="2"
                                d="M12 3v1m0 16v1m9-9h-1M4 12H3m15.364 6.364l-.707-.707M6.343 6.343l-.707-.707m12.728 0l-.707.707M6.343 17.657l-.707.707M16 12a4 4 0 11-8 0 4 4 0 018 0z"
                            />
                        </svg>
                    }
                } else {
                    view! {
                        // Moon
                        <svg class="w-5 h-5" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                            <path
                                stroke-linecap="round"
                                stroke-linejoin="round"
                                stroke-width="2"
                                d="M20.354 15.354A9 9 0 018.646 3.646 9.003 9.003 0 0012 21a9.003 9.003 0 008.354-5.646z"
                            />
                        </svg>
                    }
                }
            }}
        </button>
    }
}
