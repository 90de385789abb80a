//! Icon Component
//!
//! Renders a named glyph as an inline Lucide SVG. Icons are stroke-based,
//! sized by a single dimension, and take their color from a prop rather
//! than a stylesheet so accessory slots can tint them per theme.

use dioxus::prelude::*;

/// The glyphs available to form components.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum IconName {
    /// Circled X, used by the clear-input accessory.
    CircleX,
    /// Open eye, shown while a password field is obscured.
    Eye,
    /// Crossed-out eye, shown while a password field is revealed.
    EyeOff,
    /// Person silhouette.
    User,
    /// Envelope.
    Mail,
    /// Padlock.
    Lock,
    /// Magnifier.
    Search,
}

impl IconName {
    /// Kebab-case identifier, attached as `data-icon` for inspection.
    pub fn as_str(self) -> &'static str {
        match self {
            IconName::CircleX => "circle-x",
            IconName::Eye => "eye",
            IconName::EyeOff => "eye-off",
            IconName::User => "user",
            IconName::Mail => "mail",
            IconName::Lock => "lock",
            IconName::Search => "search",
        }
    }

    /// Every glyph, in display order.
    pub fn all() -> &'static [IconName] {
        &[
            IconName::CircleX,
            IconName::Eye,
            IconName::EyeOff,
            IconName::User,
            IconName::Mail,
            IconName::Lock,
            IconName::Search,
        ]
    }
}

/// Properties for the Icon component.
#[derive(Clone, PartialEq, Props)]
pub struct IconProps {
    /// Which glyph to draw.
    pub name: IconName,
    /// Width and height in pixels.
    #[props(default = 20)]
    pub size: u32,
    /// Stroke color (any CSS color).
    pub color: String,
    /// Optional positioning/extra classes.
    #[props(default)]
    pub class: Option<String>,
    /// Optional test identifier, attached as `data-testid`.
    #[props(default)]
    pub test_id: Option<String>,
}

/// Draws a single Lucide glyph.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Icon {
///         name: IconName::Mail,
///         size: 20,
///         color: "#9ca2a8".to_string(),
///     }
/// }
/// ```
#[component]
pub fn Icon(props: IconProps) -> Element {
    rsx! {
        svg {
            xmlns: "http://www.w3.org/2000/svg",
            class: props.class.clone(),
            "data-icon": props.name.as_str(),
            "data-testid": props.test_id.clone(),
            width: "{props.size}",
            height: "{props.size}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "{props.color}",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            {glyph(props.name)}
        }
    }
}

/// Lucide path data for each glyph.
fn glyph(name: IconName) -> Element {
    match name {
        IconName::CircleX => rsx! {
            circle { cx: "12", cy: "12", r: "10" }
            path { d: "m15 9-6 6" }
            path { d: "m9 9 6 6" }
        },
        IconName::Eye => rsx! {
            path { d: "M2 12s3-7 10-7 10 7 10 7-3 7-10 7-10-7-10-7Z" }
            circle { cx: "12", cy: "12", r: "3" }
        },
        IconName::EyeOff => rsx! {
            path { d: "M9.88 9.88a3 3 0 1 0 4.24 4.24" }
            path { d: "M10.73 5.08A10.43 10.43 0 0 1 12 5c7 0 10 7 10 7a13.16 13.16 0 0 1-1.67 2.68" }
            path { d: "M6.61 6.61A13.526 13.526 0 0 0 2 12s3 7 10 7a9.74 9.74 0 0 0 5.39-1.61" }
            line { x1: "2", x2: "22", y1: "2", y2: "22" }
        },
        IconName::User => rsx! {
            path { d: "M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2" }
            circle { cx: "12", cy: "7", r: "4" }
        },
        IconName::Mail => rsx! {
            rect { width: "20", height: "16", x: "2", y: "4", rx: "2" }
            path { d: "m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7" }
        },
        IconName::Lock => rsx! {
            rect { width: "18", height: "11", x: "3", y: "11", rx: "2", ry: "2" }
            path { d: "M7 11V7a5 5 0 0 1 10 0v4" }
        },
        IconName::Search => rsx! {
            circle { cx: "11", cy: "11", r: "8" }
            path { d: "m21 21-4.3-4.3" }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_identifiers_are_kebab_case() {
        for icon in IconName::all() {
            let id = icon.as_str();
            assert!(!id.is_empty());
            assert!(id.chars().all(|c| c.is_ascii_lowercase() || c == '-'));
        }
    }

    #[test]
    fn icon_identifiers_are_unique() {
        let all = IconName::all();
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a.as_str(), b.as_str());
            }
        }
    }

    #[test]
    fn password_glyphs_are_distinct() {
        assert_ne!(IconName::Eye.as_str(), IconName::EyeOff.as_str());
    }
}
