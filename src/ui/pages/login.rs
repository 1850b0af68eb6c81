//! Login page component

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::ui::auth::LoginForm;

/// Login page: renders the form and goes home once signed in
#[component]
pub fn LoginPage() -> impl IntoView {
    let on_success = move |_| {
        let navigate = use_navigate();
        navigate("/", Default::default());
    };

    view! { <LoginForm on_success=Callback::new(on_success) /> }
}
