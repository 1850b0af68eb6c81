use leptos::prelude::*;

/// Horizontal alignment of the dropdown panel relative to its trigger
#[derive(Clone, Copy, PartialEq)]
pub enum DropdownAlign {
    Left,
    Center,
    Right,
}

impl DropdownAlign {
    fn class(&self) -> &'static str {
        match self {
            DropdownAlign::Left => "left-0",
            DropdownAlign::Center => "left-1/2 -translate-x-1/2",
            DropdownAlign::Right => "right-0",
        }
    }
}

/// Click-to-open dropdown with a text trigger button.
/// A click anywhere inside the panel closes it again.
#[component]
pub fn Dropdown(
    /// Text shown on the trigger button
    label: &'static str,
    /// Panel alignment
    #[prop(default = DropdownAlign::Center)]
    align: DropdownAlign,
    /// Panel content
    children: ChildrenFn,
) -> impl IntoView {
    let open = RwSignal::new(false);

    let panel_class = format!(
        "absolute mt-2 min-w-[10rem] rounded-lg border border-theme bg-theme-primary \
         shadow-lg py-1 z-50 {}",
        align.class()
    );

    view! {
        <div class="relative inline-block">
            <button
                type="button"
                class="btn-base btn-outline btn-sm"
                aria-haspopup="true"
                aria-expanded=move || if open.get() { "true" } else { "false" }
                on:click=move |_| open.update(|v| *v = !*v)
            >
                {label}
            </button>
            <Show when=move || open.get()>
                <div class=panel_class.clone() on:click=move |_| open.set(false)>
                    {children()}
                </div>
            </Show>
        </div>
    }
}
