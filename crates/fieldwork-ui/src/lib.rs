//! Fieldwork UI Components
//!
//! Themed Dioxus form components built around [`FormTextInput`]: a
//! labeled text field with icon accessories, a clear-input control, a
//! password-reveal toggle, a loading spinner, and inline error display.
//!
//! ## Theming
//!
//! Every component accepts a [`ThemeName`] and pulls its colors from the
//! matching [`Palette`] at render time. Three palettes ship with the
//! crate:
//! - **Light**: dark text on white
//! - **Dark**: light text on deep navy
//! - **Black**: light text on pure black
//!
//! Geometry is shared across themes and lives in [`COMPONENT_STYLES`];
//! inject it once per document:
//!
//! ```rust,ignore
//! rsx! {
//!     style { {fieldwork_ui::COMPONENT_STYLES} }
//!     FormTextInput {
//!         label: "Email".to_string(),
//!         icon_left: IconName::Mail,
//!         theme: ThemeName::Dark,
//!         on_input: move |s| email.set(s),
//!     }
//! }
//! ```

pub mod components;
pub mod styles;
pub mod theme;

pub use components::*;
pub use styles::COMPONENT_STYLES;
pub use theme::{Palette, ParseThemeError, ThemeName};
