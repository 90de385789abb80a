//! Themed form components.
//!
//! Each component takes a [`crate::theme::ThemeName`] and resolves its
//! palette at render time; geometry lives in the shared stylesheet
//! ([`crate::styles::COMPONENT_STYLES`]).

mod button;
mod form_text_input;
mod icon;
mod spinner;
mod text_input;

pub use button::*;
pub use form_text_input::*;
pub use icon::*;
pub use spinner::*;
pub use text_input::*;
