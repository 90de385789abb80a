use dioxus::prelude::*;

use fieldwork_ui::{ThemeName, COMPONENT_STYLES};

use crate::config::{self, GalleryConfig};
use crate::pages::{Gallery, SignIn};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Component gallery
/// - `/sign-in` - Sign-in form demo
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Gallery {},
    #[route("/sign-in")]
    SignIn {},
}

/// Root application component.
///
/// Provides global styles, the theme context, and routing. Theme changes
/// are written back to the config file as they happen.
#[component]
pub fn App() -> Element {
    let theme: Signal<ThemeName> = use_signal(crate::initial_theme);

    use_context_provider(|| theme);

    // Persist the selection; the mount-time run rewrites the loaded value.
    use_effect(move || {
        let selected = theme();
        let dir = crate::config_dir();
        if let Err(e) = config::save(&dir, &GalleryConfig::with_theme(selected)) {
            tracing::error!("Failed to persist theme: {:#}", e);
        }
    });

    let palette = theme().palette();

    rsx! {
        style { {GLOBAL_STYLES} }
        style { {COMPONENT_STYLES} }
        div {
            class: "gallery-shell",
            style: "background-color: {palette.background}; color: {palette.body_text};",
            "data-theme": "{theme()}",
            Router::<Route> {}
        }
    }
}
