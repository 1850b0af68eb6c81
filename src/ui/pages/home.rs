//! Home page component

use leptos::prelude::*;
use leptos_router::components::A;

/// Landing page with the hero section and auth call-to-actions
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <main class="min-h-[calc(100vh-4rem)] flex items-center justify-center px-4">
            <div class="text-center max-w-3xl mx-auto py-20">
                <h1 class="text-5xl sm:text-6xl font-bold text-theme-primary mb-6 tracking-tight">
                    "Learn without limits"
                </h1>
                <p class="text-xl text-theme-secondary max-w-2xl mx-auto mb-10 leading-relaxed">
                    "CourseAcademy brings expert-led courses to your browser. "
                    "Pick a topic, set your pace, and start today."
                </p>

                <div class="flex flex-col sm:flex-row items-center justify-center gap-4">
                    <A
                        href="/signup"
                        attr:class="px-6 py-3 bg-accent-primary hover:bg-accent-primary-hover text-white font-medium rounded-lg transition-colors"
                    >
                        "Get started"
                    </A>
                    <A
                        href="/login"
                        attr:class="px-6 py-3 border border-theme text-theme-primary hover:bg-theme-secondary font-medium rounded-lg transition-colors"
                    >
                        "Sign in"
                    </A>
                </div>
            </div>
        </main>
    }
}
