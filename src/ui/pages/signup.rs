//! Signup page component

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::ui::auth::SignupForm;

/// Signup page: renders the form and hands off to the login page afterwards
#[component]
pub fn SignupPage() -> impl IntoView {
    let on_success = move |_| {
        let navigate = use_navigate();
        navigate("/login", Default::default());
    };

    view! { <SignupForm on_success=Callback::new(on_success) /> }
}
