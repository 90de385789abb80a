//! Property-based tests for the form field decision layer
//!
//! Uses proptest to verify the right-accessory precedence rules and the
//! theme palette/parse invariants across arbitrary inputs.

use proptest::prelude::*;

use fieldwork_ui::theme::ThemeName;
use fieldwork_ui::{FieldError, RightAccessory};

// ============================================================================
// Strategy Generators
// ============================================================================

/// Generate arbitrary field values, including empty and whitespace-only.
fn value_strategy() -> impl Strategy<Value = Option<String>> {
    prop::option::of(prop::string::string_regex(".{0,40}").expect("valid regex"))
}

/// Generate one of the shipped themes.
fn theme_strategy() -> impl Strategy<Value = ThemeName> {
    prop::sample::select(ThemeName::all().to_vec())
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// The right slot resolves to exactly one control, and the clear
    /// control appears exactly when a handler is present and the value is
    /// non-empty.
    #[test]
    fn clear_requires_handler_and_content(
        has_handler in any::<bool>(),
        value in value_strategy(),
        has_icon in any::<bool>(),
        secure in any::<bool>(),
    ) {
        let slot = RightAccessory::select(has_handler, value.as_deref(), has_icon, secure);
        let can_clear = has_handler && value.as_deref().is_some_and(|v| !v.is_empty());
        prop_assert_eq!(slot == RightAccessory::Clear, can_clear);
    }

    /// Without a clearable value, the custom icon beats the password
    /// toggle and the toggle only appears for secure fields.
    #[test]
    fn icon_beats_password_toggle(
        value in value_strategy(),
        has_icon in any::<bool>(),
        secure in any::<bool>(),
    ) {
        let slot = RightAccessory::select(false, value.as_deref(), has_icon, secure);
        let expected = if has_icon {
            RightAccessory::Icon
        } else if secure {
            RightAccessory::PasswordToggle
        } else {
            RightAccessory::None
        };
        prop_assert_eq!(slot, expected);
    }

    /// Emptying the value always demotes the clear control to whatever
    /// the remaining props select.
    #[test]
    fn clearing_the_value_releases_the_slot(
        value in prop::string::string_regex(".{1,40}").expect("valid regex"),
        has_icon in any::<bool>(),
        secure in any::<bool>(),
    ) {
        let before = RightAccessory::select(true, Some(&value), has_icon, secure);
        prop_assert_eq!(before, RightAccessory::Clear);

        let after = RightAccessory::select(true, Some(""), has_icon, secure);
        let expected = RightAccessory::select(false, None, has_icon, secure);
        prop_assert_eq!(after, expected);
    }

    /// Every shipped theme parses back from its own name, case aside.
    #[test]
    fn theme_names_roundtrip(theme in theme_strategy()) {
        let parsed: ThemeName = theme.as_str().parse().unwrap();
        prop_assert_eq!(parsed, theme);

        let shouted: ThemeName = theme.as_str().to_uppercase().parse().unwrap();
        prop_assert_eq!(shouted, theme);
    }

    /// Unknown names never parse and report the offending input.
    #[test]
    fn unknown_theme_names_are_rejected(name in "[a-z]{1,12}") {
        prop_assume!(ThemeName::all().iter().all(|t| t.as_str() != name));
        let err = name.parse::<ThemeName>().unwrap_err();
        prop_assert!(err.to_string().contains(&name));
    }

    /// Every palette keeps its danger token distinct from the resting
    /// input colors, so error tinting is always visible.
    #[test]
    fn danger_is_distinct_in_every_palette(theme in theme_strategy()) {
        let palette = theme.palette();
        prop_assert_ne!(palette.danger, palette.title_text);
        prop_assert_ne!(palette.danger, palette.separator);
        prop_assert_ne!(palette.danger, palette.background);
    }
}

// ============================================================================
// Plain Invariants
// ============================================================================

#[test]
fn default_field_error_renders_nothing() {
    let error = FieldError::default();
    assert!(!error.error);
    assert!(error.reason.is_none());
}

#[test]
fn default_theme_is_light() {
    assert_eq!(ThemeName::default(), ThemeName::Light);
}
