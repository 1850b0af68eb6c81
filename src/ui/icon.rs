use leptos::prelude::*;

#[component]
pub fn Icon(
    /// Icon name (without the .svg extension)
    name: &'static str,
    /// CSS classes for sizing and color
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=""
            aria-hidden="true"
            draggable=false
        />
    }
}

/// Predefined icon names matching the files under public/icons
pub mod icons {
    pub const USER: &str = "user";
    pub const LOCK: &str = "lock";
    pub const MAIL: &str = "mail";
    pub const EYE: &str = "eye";
    pub const EYE_CLOSED: &str = "eye-closed";
    pub const CHECK: &str = "check";
    pub const MENU: &str = "menu";
    pub const X: &str = "x";
    pub const LOADER: &str = "loader";
    pub const BOOK_OPEN: &str = "book-open";
}
