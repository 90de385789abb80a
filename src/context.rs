//! Theme context for the gallery.
//!
//! The selected theme lives in a Signal provided at the app root. Pages
//! and the theme picker read and write it through [`use_theme`]; the app
//! root watches the signal and persists changes to the config file.

use dioxus::prelude::*;

use fieldwork_ui::ThemeName;

/// Hook to access the selected theme from context.
///
/// # Example
///
/// ```ignore
/// let theme = use_theme();
///
/// rsx! {
///     FormTextInput { theme: theme(), .. }
/// }
/// ```
pub fn use_theme() -> Signal<ThemeName> {
    use_context::<Signal<ThemeName>>()
}
