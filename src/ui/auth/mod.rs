//! Authentication form components
//!
//! Self-contained login and signup forms. Submission is stubbed in
//! [`crate::core::auth`] until the real backend exists.

mod login_form;
mod signup_form;

pub use login_form::LoginForm;
pub use signup_form::SignupForm;
