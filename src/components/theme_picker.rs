//! Theme picker pills.

use dioxus::prelude::*;

use fieldwork_ui::ThemeName;

use crate::context::use_theme;

/// Pill row switching the active theme.
///
/// Writes straight to the theme signal; the app root persists the choice.
#[component]
pub fn ThemePicker() -> Element {
    let mut theme = use_theme();
    let active = theme();

    rsx! {
        div {
            class: "theme-picker",
            role: "radiogroup",
            "aria-label": "Theme",
            for option in ThemeName::all().iter().copied() {
                button {
                    key: "{option}",
                    class: if option == active { "theme-pill theme-pill-active" } else { "theme-pill" },
                    r#type: "button",
                    "data-testid": "theme-{option}",
                    "aria-pressed": (option == active).to_string(),
                    onclick: move |_| {
                        tracing::info!("theme switched to {}", option);
                        theme.set(option);
                    },
                    "{option}"
                }
            }
        }
    }
}
