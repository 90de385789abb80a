//! Modal bottom sheet.
//!
//! Dim backdrop that closes on click. Clicks inside the sheet stay
//! contained, so embedded form fields and their accessories keep working.

use dioxus::prelude::*;

use fieldwork_ui::ThemeName;

/// Properties for the BottomSheet component.
#[derive(Clone, PartialEq, Props)]
pub struct BottomSheetProps {
    /// Sheet heading.
    pub title: String,
    /// Active theme, paints the sheet surface.
    pub theme: ThemeName,
    /// Called when the backdrop is clicked.
    pub on_close: EventHandler<()>,
    /// Sheet body.
    pub children: Element,
}

/// Bottom-anchored sheet over a dimmed backdrop.
#[component]
pub fn BottomSheet(props: BottomSheetProps) -> Element {
    let palette = props.theme.palette();

    rsx! {
        div {
            class: "sheet-overlay",
            "data-testid": "sheet-overlay",
            onclick: move |_| props.on_close.call(()),
            div {
                class: "sheet",
                style: "background-color: {palette.background}; color: {palette.body_text};",
                onclick: move |e| e.stop_propagation(),
                div { class: "sheet-handle" }
                h2 { class: "sheet-title", "{props.title}" }
                {props.children}
            }
        }
    }
}
