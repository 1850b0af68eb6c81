//! UI components for the CourseAcademy front-end

pub mod auth;
pub mod common;
pub mod icon;
pub mod navbar;
pub mod pages;
pub mod theme;

pub use icon::{Icon, icons};
pub use navbar::Navbar;

use leptos::prelude::*;

/// Returns a signal that flips to true `delay_ms` after the first client
/// render, driving the CSS enter transitions. Stays false during SSR.
pub(crate) fn use_mount_transition(delay_ms: u32) -> RwSignal<bool> {
    let mounted = RwSignal::new(false);

    #[cfg(not(feature = "ssr"))]
    {
        use gloo_timers::future::TimeoutFuture;
        use leptos::task::spawn_local;

        Effect::new(move |_| {
            spawn_local(async move {
                TimeoutFuture::new(delay_ms).await;
                // The owning component may have been torn down while we slept
                mounted.try_set(true);
            });
        });
    }
    #[cfg(feature = "ssr")]
    let _ = delay_ms;

    mounted
}
