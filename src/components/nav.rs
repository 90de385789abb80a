//! Top navigation bar.

use dioxus::prelude::*;

use crate::app::Route;
use crate::context::use_theme;

#[derive(Props, Clone, PartialEq)]
pub struct TopNavProps {
    /// Current active route.
    pub current: Route,
}

/// Header bar with links to both pages.
#[component]
pub fn TopNav(props: TopNavProps) -> Element {
    let theme = use_theme();
    let palette = theme().palette();

    rsx! {
        nav {
            class: "top-nav",
            style: "border-color: {palette.separator};",
            span { class: "nav-title", "Fieldwork" }
            Link {
                to: Route::Gallery {},
                class: if matches!(props.current, Route::Gallery {}) { "nav-link nav-link-active" } else { "nav-link" },
                "Gallery"
            }
            Link {
                to: Route::SignIn {},
                class: if matches!(props.current, Route::SignIn {}) { "nav-link nav-link-active" } else { "nav-link" },
                "Sign in"
            }
        }
    }
}
