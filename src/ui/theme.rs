//! Theme context for the light/dark mode toggle.
//!
//! Follows `prefers-color-scheme` until the user picks a mode explicitly;
//! explicit picks are persisted to localStorage.

use leptos::prelude::*;

#[cfg(not(feature = "ssr"))]
use leptos::web_sys;

#[allow(dead_code)]
const STORAGE_KEY: &str = "courseacademy-theme";

/// Theme mode options
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ThemeMode {
    /// Follow the system preference
    #[default]
    Auto,
    Dark,
    Light,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Auto => "auto",
            ThemeMode::Dark => "dark",
            ThemeMode::Light => "light",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "dark" => ThemeMode::Dark,
            "light" => ThemeMode::Light,
            _ => ThemeMode::Auto,
        }
    }
}

/// Reactive theme state provided at the application root
#[derive(Clone, Copy)]
pub struct ThemeContext {
    /// Current mode setting
    pub mode: RwSignal<ThemeMode>,
    /// Effective dark flag, resolving Auto against the system preference
    pub is_dark: Memo<bool>,
    system_prefers_dark: RwSignal<bool>,
}

impl ThemeContext {
    /// Flip to the opposite of the current effective theme.
    /// Always results in an explicit (persisted) mode.
    pub fn toggle(&self) {
        let next = if self.is_dark.get_untracked() {
            ThemeMode::Light
        } else {
            ThemeMode::Dark
        };
        self.set_mode(next);
    }

    /// Set the mode and persist it to localStorage.
    pub fn set_mode(&self, mode: ThemeMode) {
        self.mode.set(mode);

        #[cfg(not(feature = "ssr"))]
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(STORAGE_KEY, mode.as_str());
        }
    }

    /// Sync the `dark` class on `<html>` with the effective theme.
    fn apply_class(&self) {
        #[cfg(not(feature = "ssr"))]
        if let Some(html) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let class_list = html.class_list();
            if self.is_dark.get_untracked() {
                let _ = class_list.add_1("dark");
            } else {
                let _ = class_list.remove_1("dark");
            }
        }
    }
}

fn load_persisted_mode() -> ThemeMode {
    #[cfg(not(feature = "ssr"))]
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
        if let Ok(Some(value)) = storage.get_item(STORAGE_KEY) {
            return ThemeMode::from_str(&value);
        }
    }
    ThemeMode::Auto
}

fn detect_system_prefers_dark() -> bool {
    #[cfg(not(feature = "ssr"))]
    if let Some(window) = web_sys::window() {
        if let Ok(Some(media_query)) = window.match_media("(prefers-color-scheme: dark)") {
            return media_query.matches();
        }
    }
    false
}

/// Provide the theme context to the component tree
pub fn provide_theme_context() -> ThemeContext {
    let mode = RwSignal::new(load_persisted_mode());
    let system_prefers_dark = RwSignal::new(detect_system_prefers_dark());

    let is_dark = Memo::new(move |_| match mode.get() {
        ThemeMode::Dark => true,
        ThemeMode::Light => false,
        ThemeMode::Auto => system_prefers_dark.get(),
    });

    let ctx = ThemeContext {
        mode,
        is_dark,
        system_prefers_dark,
    };

    // Track system preference changes while in Auto mode
    #[cfg(not(feature = "ssr"))]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        Effect::new(move |_| {
            if let Some(window) = web_sys::window() {
                if let Ok(Some(media_query)) = window.match_media("(prefers-color-scheme: dark)") {
                    let handler = Closure::<dyn Fn(web_sys::MediaQueryListEvent)>::new(
                        move |e: web_sys::MediaQueryListEvent| {
                            system_prefers_dark.set(e.matches());
                        },
                    );
                    let _ = media_query.add_event_listener_with_callback(
                        "change",
                        handler.as_ref().unchecked_ref(),
                    );
                    // The listener lives for the whole session
                    handler.forget();
                }
            }
        });
    }

    // Re-apply the document class whenever the effective theme changes.
    // Effects never run during SSR, so this is client-only by construction.
    Effect::new(move |_| {
        let _ = ctx.is_dark.get();
        ctx.apply_class();
    });

    provide_context(ctx);
    ctx
}

/// Use the theme context from anywhere in the component tree
pub fn use_theme_context() -> ThemeContext {
    expect_context::<ThemeContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_round_trips_through_its_string_form() {
        for mode in [ThemeMode::Auto, ThemeMode::Dark, ThemeMode::Light] {
            assert_eq!(ThemeMode::from_str(mode.as_str()), mode);
        }
    }

    #[test]
    fn unknown_persisted_values_fall_back_to_auto() {
        assert_eq!(ThemeMode::from_str("solarized"), ThemeMode::Auto);
        assert_eq!(ThemeMode::from_str(""), ThemeMode::Auto);
    }
}
