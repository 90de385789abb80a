//! Gallery-only components.

mod bottom_sheet;
mod nav;
mod theme_picker;

pub use bottom_sheet::BottomSheet;
pub use nav::TopNav;
pub use theme_picker::ThemePicker;
