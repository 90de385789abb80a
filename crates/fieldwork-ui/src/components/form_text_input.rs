//! Form Text Input Component
//!
//! The composed form field: optional label, a themed text-input host
//! (standard or bottom-sheet), left/right icon accessories, a clear-input
//! control, a password-reveal toggle, a loading spinner, and an inline
//! error message.
//!
//! The widget is a controlled, presentational composition. Render-time
//! decisions (right-slot winner, padding classes, color layers, test ids)
//! are computed by pure helpers in this module so the decision table can
//! be tested without a running renderer.

use dioxus::prelude::*;

use crate::components::button::IconButton;
use crate::components::icon::{Icon, IconName};
use crate::components::spinner::Spinner;
use crate::components::text_input::{BottomSheetTextInput, TextInput};
use crate::theme::{Palette, ThemeName};

/// Suffix appended to the widget's test id for the left icon.
const ICON_LEFT_SUFFIX: &str = "-icon-left";
/// Suffix appended to the widget's test id for the right icon slot.
const ICON_RIGHT_SUFFIX: &str = "-icon-right";
/// Fixed identifier carried by the clear-input control.
const CLEAR_TEST_ID: &str = "clear-text-input";
/// Accessory glyph dimension inside the field.
const ACCESSORY_ICON_SIZE: u32 = 20;

/// Display-only error state for a form field.
///
/// Carries no validation logic; the widget only renders it. `error` tints
/// the label, border, and entered text in the palette's danger color;
/// `reason` adds a message below the field.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct FieldError {
    /// Tint the field in the danger color.
    pub error: bool,
    /// Message rendered below the field.
    pub reason: Option<String>,
}

impl FieldError {
    /// An error with a visible reason.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            error: true,
            reason: Some(reason.into()),
        }
    }

    /// Danger tint only, no message.
    pub fn flagged() -> Self {
        Self {
            error: true,
            reason: None,
        }
    }
}

/// The single control chosen for the field's right accessory slot.
///
/// The slot is exclusive: the clear control (handler present and value
/// non-empty) beats the caller's right icon, which beats the password
/// toggle. The loading spinner is independent of this choice and shares
/// the slot's position when active.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum RightAccessory {
    /// Nothing occupies the slot.
    #[default]
    None,
    /// The clear-input control.
    Clear,
    /// The caller's custom right icon.
    Icon,
    /// The password-reveal toggle.
    PasswordToggle,
}

impl RightAccessory {
    /// Resolves the slot by strict precedence.
    pub fn select(
        has_clear_handler: bool,
        value: Option<&str>,
        has_icon_right: bool,
        secure_text_entry: bool,
    ) -> Self {
        let can_clear = has_clear_handler && value.is_some_and(|v| !v.is_empty());
        if can_clear {
            RightAccessory::Clear
        } else if has_icon_right {
            RightAccessory::Icon
        } else if secure_text_entry {
            RightAccessory::PasswordToggle
        } else {
            RightAccessory::None
        }
    }
}

/// Padding classes layered on the host when accessories need room.
///
/// The right side reserves space for the password toggle or the custom
/// icon; the transient clear control reuses whatever room is already
/// there.
fn padding_classes(has_icon_left: bool, has_right_affordance: bool) -> String {
    let mut classes = String::new();
    if has_icon_left {
        classes.push_str("form-input-icon-left");
    }
    if has_right_affordance {
        if !classes.is_empty() {
            classes.push(' ');
        }
        classes.push_str("form-input-icon-right");
    }
    classes
}

/// Inline style for the host input: theme colors, then error colors, then
/// the caller's override, in that order. Later declarations win, which
/// gives the override final precedence.
fn compose_input_style(palette: &Palette, is_error: bool, override_style: Option<&str>) -> String {
    let mut style = format!(
        "background-color: {}; border-color: {}; color: {};",
        palette.background, palette.separator, palette.title_text
    );
    if is_error {
        style.push_str(&format!(
            " color: {}; border-color: {};",
            palette.danger, palette.danger
        ));
    }
    if let Some(extra) = override_style {
        if !extra.is_empty() {
            style.push(' ');
            style.push_str(extra);
        }
    }
    style
}

/// Inline style for the label: title color, or danger when flagged.
fn label_style(palette: &Palette, is_error: bool) -> String {
    let color = if is_error {
        palette.danger
    } else {
        palette.title_text
    };
    format!("color: {};", color)
}

/// Derives a slot identifier from the widget's test id stem.
/// Without a stem, no identifier is attached anywhere.
fn accessory_test_id(stem: Option<&str>, suffix: &str) -> Option<String> {
    stem.map(|stem| format!("{stem}{suffix}"))
}

/// Whether entered text is currently obscured. Secure entry is requested
/// by the caller and suspended while the reveal toggle is on.
fn obscures_text(secure_text_entry: bool, show_password: bool) -> bool {
    secure_text_entry && !show_password
}

/// Properties for the FormTextInput component.
#[derive(Clone, PartialEq, Props)]
pub struct FormTextInputProps {
    /// Label text above the field.
    #[props(default)]
    pub label: Option<String>,
    /// Display-only error state.
    #[props(default)]
    pub error: FieldError,
    /// Show the loading spinner in the accessory slot.
    #[props(default = false)]
    pub loading: bool,
    /// Treat as a password field: obscure text and add the reveal toggle.
    #[props(default = false)]
    pub secure_text_entry: bool,
    /// Icon pinned inside the left edge of the field.
    #[props(default)]
    pub icon_left: Option<IconName>,
    /// Icon pinned inside the right edge of the field.
    #[props(default)]
    pub icon_right: Option<IconName>,
    /// When set (and the value is non-empty), shows the clear control.
    #[props(default)]
    pub on_clear_input: Option<EventHandler<()>>,
    /// Palette for every color token.
    #[props(default)]
    pub theme: ThemeName,
    /// Host the input for bottom-sheet embedding.
    #[props(default = false)]
    pub bottom_sheet: bool,
    /// Extra element rendered inside the field wrap, after the accessories.
    #[props(default)]
    pub left: Option<Element>,
    /// Inline style for the outer container.
    #[props(default)]
    pub container_style: Option<String>,
    /// Inline style appended after every computed input style layer.
    #[props(default)]
    pub input_style: Option<String>,
    /// Identifier stem for the input and its icon slots.
    #[props(default)]
    pub test_id: Option<String>,
    // Pass-through host properties.
    /// Controlled value.
    #[props(default)]
    pub value: Option<String>,
    /// Placeholder text; doubles as the accessibility label.
    #[props(default)]
    pub placeholder: Option<String>,
    /// Whether the input is disabled.
    #[props(default = false)]
    pub disabled: bool,
    /// Grab focus once mounted.
    #[props(default = false)]
    pub autofocus: bool,
    /// Handler called with the new text on every edit.
    #[props(default)]
    pub on_input: EventHandler<String>,
    /// Handler called when Enter is pressed.
    #[props(default)]
    pub on_submit: EventHandler<()>,
    /// Handler called when the input gains focus.
    #[props(default)]
    pub on_focus: EventHandler<()>,
    /// Handler called when the input loses focus.
    #[props(default)]
    pub on_blur: EventHandler<()>,
}

/// Themed form field wrapping one of the two text-input hosts.
///
/// The only local state is the password-visibility flag, owned by this
/// component and flipped by the reveal toggle; everything else comes in
/// through props.
///
/// # Example
///
/// ```rust,ignore
/// let mut password = use_signal(String::new);
///
/// rsx! {
///     FormTextInput {
///         label: "Password".to_string(),
///         placeholder: "enter your password".to_string(),
///         secure_text_entry: true,
///         icon_left: IconName::Lock,
///         theme: ThemeName::Dark,
///         value: password(),
///         on_input: move |s| password.set(s),
///         test_id: "sign-in-password".to_string(),
///     }
/// }
/// ```
#[component]
pub fn FormTextInput(props: FormTextInputProps) -> Element {
    let mut show_password = use_signal(|| false);
    let revealed = show_password();

    let palette = props.theme.palette();
    let is_error = props.error.error;

    let accessory = RightAccessory::select(
        props.on_clear_input.is_some(),
        props.value.as_deref(),
        props.icon_right.is_some(),
        props.secure_text_entry,
    );
    let secure = obscures_text(props.secure_text_entry, revealed);

    let host_classes = padding_classes(
        props.icon_left.is_some(),
        props.secure_text_entry || props.icon_right.is_some(),
    );
    let host_style = compose_input_style(palette, is_error, props.input_style.as_deref());
    let label_style = label_style(palette, is_error);
    let right_test_id = accessory_test_id(props.test_id.as_deref(), ICON_RIGHT_SUFFIX);

    let error_reason = props.error.reason.clone().filter(|r| !r.is_empty());

    let on_clear = props.on_clear_input;
    let right_slot: Element = match accessory {
        RightAccessory::None => rsx! {},
        RightAccessory::Clear => rsx! {
            IconButton {
                class: "form-accessory form-accessory-right".to_string(),
                aria_label: "Clear input".to_string(),
                test_id: CLEAR_TEST_ID.to_string(),
                onclick: move |_| {
                    tracing::debug!("clear-input pressed");
                    if let Some(handler) = &on_clear {
                        handler.call(());
                    }
                },
                Icon {
                    name: IconName::CircleX,
                    size: ACCESSORY_ICON_SIZE,
                    color: palette.auxiliary_tint.to_string(),
                }
            }
        },
        RightAccessory::Icon => match props.icon_right {
            Some(name) => rsx! {
                Icon {
                    name: name,
                    size: ACCESSORY_ICON_SIZE,
                    color: palette.auxiliary_text.to_string(),
                    class: "form-accessory form-accessory-right".to_string(),
                    test_id: right_test_id.clone(),
                }
            },
            None => rsx! {},
        },
        RightAccessory::PasswordToggle => {
            let toggle_label = if revealed { "Hide password" } else { "Show password" };
            let toggle_glyph = if revealed { IconName::EyeOff } else { IconName::Eye };
            rsx! {
                IconButton {
                    class: "form-accessory form-accessory-right".to_string(),
                    aria_label: toggle_label.to_string(),
                    test_id: right_test_id.clone(),
                    onclick: move |_| {
                        show_password.toggle();
                        tracing::debug!("password visibility toggled, revealed: {}", show_password());
                    },
                    Icon {
                        name: toggle_glyph,
                        size: ACCESSORY_ICON_SIZE,
                        color: palette.auxiliary_text.to_string(),
                    }
                }
            }
        }
    };

    rsx! {
        div {
            class: "form-field",
            style: props.container_style.clone(),
            if let Some(label) = &props.label {
                label {
                    class: "form-label",
                    style: "{label_style}",
                    "{label}"
                }
            }
            div { class: "form-field-wrap",
                if props.bottom_sheet {
                    BottomSheetTextInput {
                        value: props.value.clone(),
                        placeholder: props.placeholder.clone(),
                        secure: secure,
                        disabled: props.disabled,
                        autofocus: props.autofocus,
                        style: host_style.clone(),
                        class: host_classes.clone(),
                        theme: props.theme,
                        test_id: props.test_id.clone(),
                        accessibility_label: props.placeholder.clone(),
                        on_input: props.on_input,
                        on_submit: props.on_submit,
                        on_focus: props.on_focus,
                        on_blur: props.on_blur,
                    }
                } else {
                    TextInput {
                        value: props.value.clone(),
                        placeholder: props.placeholder.clone(),
                        secure: secure,
                        disabled: props.disabled,
                        autofocus: props.autofocus,
                        style: host_style.clone(),
                        class: host_classes.clone(),
                        theme: props.theme,
                        test_id: props.test_id.clone(),
                        accessibility_label: props.placeholder.clone(),
                        on_input: props.on_input,
                        on_submit: props.on_submit,
                        on_focus: props.on_focus,
                        on_blur: props.on_blur,
                    }
                }
                if let Some(name) = props.icon_left {
                    Icon {
                        name: name,
                        size: ACCESSORY_ICON_SIZE,
                        color: palette.auxiliary_text.to_string(),
                        class: "form-accessory form-accessory-left".to_string(),
                        test_id: accessory_test_id(props.test_id.as_deref(), ICON_LEFT_SUFFIX),
                    }
                }
                {right_slot}
                if props.loading {
                    Spinner {
                        color: palette.body_text.to_string(),
                        class: "form-accessory form-accessory-right".to_string(),
                    }
                }
                if let Some(left) = props.left.clone() {
                    {left}
                }
            }
            if let Some(reason) = error_reason {
                p {
                    class: "form-error",
                    style: "color: {palette.danger};",
                    "{reason}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ThemeName;

    #[test]
    fn clear_wins_over_icon_and_password() {
        let slot = RightAccessory::select(true, Some("abc"), true, true);
        assert_eq!(slot, RightAccessory::Clear);
    }

    #[test]
    fn empty_value_falls_back_to_icon_then_password() {
        assert_eq!(
            RightAccessory::select(true, Some(""), true, true),
            RightAccessory::Icon
        );
        assert_eq!(
            RightAccessory::select(true, Some(""), false, true),
            RightAccessory::PasswordToggle
        );
        assert_eq!(
            RightAccessory::select(true, Some(""), false, false),
            RightAccessory::None
        );
    }

    #[test]
    fn missing_value_behaves_like_empty() {
        assert_eq!(
            RightAccessory::select(true, None, true, false),
            RightAccessory::Icon
        );
    }

    #[test]
    fn value_without_handler_is_not_clearable() {
        assert_eq!(
            RightAccessory::select(false, Some("abc"), false, false),
            RightAccessory::None
        );
        assert_eq!(
            RightAccessory::select(false, Some("abc"), false, true),
            RightAccessory::PasswordToggle
        );
    }

    #[test]
    fn no_danger_color_without_error() {
        for theme in ThemeName::all() {
            let palette = theme.palette();
            for override_style in [None, Some("padding: 2px;")] {
                let style = compose_input_style(palette, false, override_style);
                assert!(
                    !style.contains(palette.danger),
                    "{theme}: {style}"
                );
                assert!(!label_style(palette, false).contains(palette.danger));
            }
        }
    }

    #[test]
    fn error_tints_label_border_and_text() {
        for theme in ThemeName::all() {
            let palette = theme.palette();
            let style = compose_input_style(palette, true, None);
            assert!(style.contains(&format!("color: {};", palette.danger)));
            assert!(style.contains(&format!("border-color: {};", palette.danger)));
            assert!(label_style(palette, true).contains(palette.danger));
        }
    }

    #[test]
    fn caller_override_is_the_final_layer() {
        let palette = ThemeName::Light.palette();
        let style = compose_input_style(palette, true, Some("border-color: gold;"));
        let danger_at = style.rfind(palette.danger).unwrap();
        let override_at = style.rfind("border-color: gold;").unwrap();
        assert!(override_at > danger_at);
    }

    #[test]
    fn empty_override_adds_nothing() {
        let palette = ThemeName::Light.palette();
        assert_eq!(
            compose_input_style(palette, false, Some("")),
            compose_input_style(palette, false, None)
        );
    }

    #[test]
    fn padding_classes_reserve_accessory_room() {
        assert_eq!(padding_classes(false, false), "");
        assert_eq!(padding_classes(true, false), "form-input-icon-left");
        assert_eq!(padding_classes(false, true), "form-input-icon-right");
        assert_eq!(
            padding_classes(true, true),
            "form-input-icon-left form-input-icon-right"
        );
    }

    #[test]
    fn test_ids_derive_from_the_stem() {
        assert_eq!(
            accessory_test_id(Some("login"), ICON_LEFT_SUFFIX),
            Some("login-icon-left".to_string())
        );
        assert_eq!(
            accessory_test_id(Some("login"), ICON_RIGHT_SUFFIX),
            Some("login-icon-right".to_string())
        );
        assert_eq!(accessory_test_id(None, ICON_LEFT_SUFFIX), None);
    }

    #[test]
    fn obscuring_follows_the_reveal_toggle() {
        // secure field: obscured until revealed, again after a second toggle
        let mut revealed = false;
        assert!(obscures_text(true, revealed));
        revealed = !revealed;
        assert!(!obscures_text(true, revealed));
        revealed = !revealed;
        assert!(obscures_text(true, revealed));
        // plain field: never obscured, toggle state irrelevant
        assert!(!obscures_text(false, false));
        assert!(!obscures_text(false, true));
    }

    #[test]
    fn field_error_constructors() {
        assert!(!FieldError::default().error);
        assert_eq!(FieldError::default().reason, None);

        let err = FieldError::new("Required");
        assert!(err.error);
        assert_eq!(err.reason.as_deref(), Some("Required"));

        let flagged = FieldError::flagged();
        assert!(flagged.error);
        assert_eq!(flagged.reason, None);
    }
}
