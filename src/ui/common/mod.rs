//! Common reusable UI components

pub mod button;
pub mod dropdown;

pub use button::{Button, ButtonSize, ButtonVariant};
pub use dropdown::{Dropdown, DropdownAlign};
