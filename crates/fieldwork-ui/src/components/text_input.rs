//! Text Input Hosts
//!
//! The two interchangeable single-line input implementations:
//! - TextInput: the standard host, rendered in normal document flow
//! - BottomSheetTextInput: the same host prepared for bottom-sheet
//!   embedding (presses inside the field are contained so they cannot
//!   reach the sheet's dismiss backdrop)
//!
//! Both accept the same [`TextInputProps`] superset; a composed widget can
//! switch hosts without touching any other prop.

use dioxus::prelude::*;

use crate::theme::{Palette, ThemeName};

/// Properties shared by both input hosts.
#[derive(Clone, PartialEq, Props)]
pub struct TextInputProps {
    /// Controlled value. When absent the input manages its own text.
    #[props(default)]
    pub value: Option<String>,
    /// Placeholder text, shown muted.
    #[props(default)]
    pub placeholder: Option<String>,
    /// Obscure entered text (password rendering).
    #[props(default = false)]
    pub secure: bool,
    /// Whether the input is disabled.
    #[props(default = false)]
    pub disabled: bool,
    /// Grab focus once mounted.
    #[props(default = false)]
    pub autofocus: bool,
    /// Inline style appended after the host's own theme colors, so the
    /// caller's declarations take precedence.
    #[props(default)]
    pub style: Option<String>,
    /// Optional additional CSS classes.
    #[props(default)]
    pub class: Option<String>,
    /// Palette for the host's own background/border/text colors.
    #[props(default)]
    pub theme: ThemeName,
    /// Optional test identifier, attached as `data-testid`.
    #[props(default)]
    pub test_id: Option<String>,
    /// Accessible label for screen readers.
    #[props(default)]
    pub accessibility_label: Option<String>,
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

/// Standard single-line text input host.
///
/// Applies the palette's background/border/text colors, then the caller's
/// `style` on top. Autocorrection, autocapitalization, and spell checking
/// are suppressed.
///
/// # Example
///
/// ```rust,ignore
/// let mut name = use_signal(String::new);
///
/// rsx! {
///     TextInput {
///         value: name(),
///         placeholder: "your name".to_string(),
///         on_input: move |s| name.set(s),
///     }
/// }
/// ```
#[component]
pub fn TextInput(props: TextInputProps) -> Element {
    let autofocus = props.autofocus;
    let class = host_class(props.class.as_deref());
    let style = host_style(props.theme.palette(), props.style.as_deref());

    rsx! {
        input {
            class: "{class}",
            style: "{style}",
            r#type: input_type(props.secure),
            value: props.value.clone(),
            placeholder: props.placeholder.clone(),
            disabled: props.disabled,
            autocomplete: "off",
            autocapitalize: "none",
            "autocorrect": "off",
            spellcheck: false,
            "data-testid": props.test_id.clone(),
            "aria-label": props.accessibility_label.clone(),
            oninput: move |e| props.on_input.call(e.value()),
            onkeydown: move |e: KeyboardEvent| {
                if e.key() == Key::Enter {
                    props.on_submit.call(());
                }
            },
            onfocus: move |_| props.on_focus.call(()),
            onblur: move |_| props.on_blur.call(()),
            onmounted: move |event| async move {
                if autofocus {
                    let _ = event.data().set_focus(true).await;
                }
            },
        }
    }
}

/// Bottom-sheet-hosted text input.
///
/// Identical to [`TextInput`] except that pointer events inside the field
/// stop at the host wrapper, so pressing into the input never bubbles to
/// the sheet's backdrop-dismiss handler.
#[component]
pub fn BottomSheetTextInput(props: TextInputProps) -> Element {
    rsx! {
        div {
            class: "bottom-sheet-input",
            onclick: move |e| e.stop_propagation(),
            TextInput {
                value: props.value.clone(),
                placeholder: props.placeholder.clone(),
                secure: props.secure,
                disabled: props.disabled,
                autofocus: props.autofocus,
                style: props.style.clone(),
                class: props.class.clone(),
                theme: props.theme,
                test_id: props.test_id.clone(),
                accessibility_label: props.accessibility_label.clone(),
                on_input: props.on_input,
                on_submit: props.on_submit,
                on_focus: props.on_focus,
                on_blur: props.on_blur,
            }
        }
    }
}

/// Maps the secure flag to the DOM input type.
fn input_type(secure: bool) -> &'static str {
    if secure {
        "password"
    } else {
        "text"
    }
}

/// Base class plus any caller additions.
fn host_class(extra: Option<&str>) -> String {
    match extra {
        Some(extra) if !extra.is_empty() => format!("form-input {}", extra),
        _ => "form-input".to_string(),
    }
}

/// Theme colors first, caller style last so it wins.
fn host_style(palette: &Palette, extra: Option<&str>) -> String {
    let mut style = format!(
        "background-color: {}; border-color: {}; color: {};",
        palette.background, palette.separator, palette.title_text
    );
    if let Some(extra) = extra {
        if !extra.is_empty() {
            style.push(' ');
            style.push_str(extra);
        }
    }
    style
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::LIGHT;

    #[test]
    fn secure_flag_selects_password_type() {
        assert_eq!(input_type(true), "password");
        assert_eq!(input_type(false), "text");
    }

    #[test]
    fn host_class_merges_extras() {
        assert_eq!(host_class(None), "form-input");
        assert_eq!(host_class(Some("")), "form-input");
        assert_eq!(host_class(Some("wide")), "form-input wide");
    }

    #[test]
    fn host_style_applies_palette_tokens() {
        let style = host_style(&LIGHT, None);
        assert!(style.contains(LIGHT.background));
        assert!(style.contains(LIGHT.separator));
        assert!(style.contains(LIGHT.title_text));
    }

    #[test]
    fn caller_style_comes_last() {
        let style = host_style(&LIGHT, Some("color: red;"));
        let theme_at = style.find(LIGHT.title_text).unwrap();
        let caller_at = style.find("color: red;").unwrap();
        assert!(caller_at > theme_at);
    }
}
