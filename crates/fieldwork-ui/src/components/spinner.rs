//! Loading Indicator Component
//!
//! An indeterminate spinning ring. The ring track is translucent and the
//! leading arc takes the caller's color, so it stays legible on every
//! palette. Animation lives in [`crate::styles::COMPONENT_STYLES`].

use dioxus::prelude::*;

/// Properties for the Spinner component
#[derive(Clone, PartialEq, Props)]
pub struct SpinnerProps {
    /// Color of the leading arc (any CSS color).
    pub color: String,
    /// Optional positioning/extra classes.
    #[props(default)]
    pub class: Option<String>,
    /// Optional test identifier, attached as `data-testid`.
    #[props(default)]
    pub test_id: Option<String>,
}

/// Indeterminate activity indicator.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Spinner { color: "#2f343d".to_string() }
/// }
/// ```
#[component]
pub fn Spinner(props: SpinnerProps) -> Element {
    let extra_class = props.class.as_deref().unwrap_or("");
    let full_class = if extra_class.is_empty() {
        "spinner".to_string()
    } else {
        format!("spinner {}", extra_class)
    };

    rsx! {
        span {
            class: "{full_class}",
            style: "border-top-color: {props.color};",
            role: "progressbar",
            "aria-label": "Loading",
            "data-testid": props.test_id.clone(),
        }
    }
}
