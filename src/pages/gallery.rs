//! Component gallery page.
//!
//! One section per widget feature: theming, icon accessories, clearing,
//! password reveal, error display, the loading spinner, style overrides,
//! and the bottom-sheet host.

use dioxus::prelude::*;

use fieldwork_ui::{Button, ButtonVariant, FieldError, FormTextInput, IconName};

use crate::app::Route;
use crate::components::{BottomSheet, ThemePicker, TopNav};
use crate::context::use_theme;

#[component]
pub fn Gallery() -> Element {
    let theme = use_theme();
    let active = theme();

    let mut name = use_signal(String::new);
    let mut search = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut username = use_signal(String::new);
    let mut invite = use_signal(String::new);
    let mut loading = use_signal(|| false);
    let mut sheet_open = use_signal(|| false);
    let mut note = use_signal(String::new);

    rsx! {
        TopNav { current: Route::Gallery {} }
        div { class: "page",
            h1 { class: "page-title", "Fieldwork" }
            p { class: "page-subtitle", "Form components, three palettes, one stylesheet." }

            div { class: "section",
                h2 { class: "section-title", "Theme" }
                ThemePicker {}
            }

            div { class: "section",
                h2 { class: "section-title", "Basic" }
                FormTextInput {
                    label: "Full name".to_string(),
                    placeholder: "Ada Lovelace".to_string(),
                    theme: active,
                    value: name(),
                    on_input: move |s| name.set(s),
                    test_id: "name".to_string(),
                }
                FormTextInput {
                    label: "Color code".to_string(),
                    placeholder: "0D0E12".to_string(),
                    input_style: "font-family: monospace; letter-spacing: 0.15em; padding-right: 45px;".to_string(),
                    container_style: "margin-bottom: 0;".to_string(),
                    theme: active,
                    left: rsx! {
                        span { class: "input-hint", "HEX" }
                    },
                    test_id: "color-code".to_string(),
                }
            }

            div { class: "section",
                h2 { class: "section-title", "Icons and clearing" }
                FormTextInput {
                    label: "Search".to_string(),
                    placeholder: "search contacts".to_string(),
                    icon_left: IconName::Search,
                    theme: active,
                    value: search(),
                    on_input: move |s| search.set(s),
                    on_clear_input: move |_| search.set(String::new()),
                    test_id: "search".to_string(),
                }
                FormTextInput {
                    label: "Email".to_string(),
                    placeholder: "you@example.com".to_string(),
                    icon_left: IconName::Mail,
                    icon_right: IconName::User,
                    theme: active,
                    test_id: "email".to_string(),
                }
            }

            div { class: "section",
                h2 { class: "section-title", "Password" }
                FormTextInput {
                    label: "Password".to_string(),
                    placeholder: "enter your password".to_string(),
                    secure_text_entry: true,
                    icon_left: IconName::Lock,
                    theme: active,
                    value: password(),
                    on_input: move |s| password.set(s),
                    test_id: "password".to_string(),
                }
            }

            div { class: "section",
                h2 { class: "section-title", "Error and loading" }
                FormTextInput {
                    label: "Username".to_string(),
                    placeholder: "pick a username".to_string(),
                    error: FieldError::new("That name is taken"),
                    theme: active,
                    value: username(),
                    on_input: move |s| username.set(s),
                    test_id: "username".to_string(),
                }
                FormTextInput {
                    label: "Invite code".to_string(),
                    placeholder: "paste your code".to_string(),
                    loading: loading(),
                    theme: active,
                    value: invite(),
                    on_input: move |s| invite.set(s),
                    test_id: "invite".to_string(),
                }
                div { class: "demo-row",
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| loading.toggle(),
                        if loading() { "Stop spinner" } else { "Spin" }
                    }
                }
            }

            div { class: "section",
                h2 { class: "section-title", "Bottom sheet" }
                Button {
                    onclick: move |_| sheet_open.set(true),
                    "Open sheet"
                }
            }
        }
        if sheet_open() {
            BottomSheet {
                title: "Add a note".to_string(),
                theme: active,
                on_close: move |_| sheet_open.set(false),
                FormTextInput {
                    placeholder: "type a note".to_string(),
                    bottom_sheet: true,
                    autofocus: true,
                    theme: active,
                    value: note(),
                    on_input: move |s| note.set(s),
                    on_clear_input: move |_| note.set(String::new()),
                    on_submit: move |_| sheet_open.set(false),
                    test_id: "sheet-note".to_string(),
                }
            }
        }
    }
}
