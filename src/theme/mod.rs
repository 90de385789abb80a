//! Gallery chrome styling.
//!
//! Layout-only rules for the shell, navigation, demo sections, and the
//! bottom sheet. Palette colors come inline from the selected theme.

mod styles;

pub use styles::GLOBAL_STYLES;
