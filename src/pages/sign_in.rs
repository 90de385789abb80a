//! Sign-in demo page.
//!
//! Shows the composed field in a real form. State is display-only: the
//! errors come from checking for empty fields locally and the spinner
//! from a simulated request. No actual authentication happens.

use std::time::Duration;

use dioxus::prelude::*;

use fieldwork_ui::{Button, FieldError, FormTextInput, IconName};

use crate::app::Route;
use crate::components::TopNav;
use crate::context::use_theme;

#[component]
pub fn SignIn() -> Element {
    let theme = use_theme();
    let active = theme();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut email_error = use_signal(FieldError::default);
    let mut password_error = use_signal(FieldError::default);
    let mut submitting = use_signal(|| false);
    let mut greeting = use_signal(|| None::<String>);

    let mut submit = move || {
        if submitting() {
            return;
        }
        let email_missing = email().is_empty();
        let password_missing = password().is_empty();
        email_error.set(if email_missing {
            FieldError::new("Email is required")
        } else {
            FieldError::default()
        });
        password_error.set(if password_missing {
            FieldError::new("Password is required")
        } else {
            FieldError::default()
        });
        greeting.set(None);
        if email_missing || password_missing {
            return;
        }
        submitting.set(true);
        spawn(async move {
            // Pretend to talk to a backend.
            tokio::time::sleep(Duration::from_millis(900)).await;
            submitting.set(false);
            greeting.set(Some(format!("Signed in as {}", email())));
            tracing::info!("demo sign-in completed");
        });
    };

    rsx! {
        TopNav { current: Route::SignIn {} }
        div { class: "page",
            h1 { class: "page-title", "Sign in" }
            p { class: "page-subtitle", "The composed field in a working form." }

            FormTextInput {
                label: "Email".to_string(),
                placeholder: "you@example.com".to_string(),
                icon_left: IconName::Mail,
                error: email_error(),
                theme: active,
                value: email(),
                on_input: move |s| email.set(s),
                on_clear_input: move |_| email.set(String::new()),
                on_submit: move |_| submit(),
                test_id: "sign-in-email".to_string(),
            }
            FormTextInput {
                label: "Password".to_string(),
                placeholder: "enter your password".to_string(),
                secure_text_entry: true,
                icon_left: IconName::Lock,
                error: password_error(),
                loading: submitting(),
                theme: active,
                value: password(),
                on_input: move |s| password.set(s),
                on_submit: move |_| submit(),
                test_id: "sign-in-password".to_string(),
            }
            div { class: "demo-row",
                Button {
                    disabled: submitting(),
                    onclick: move |_| submit(),
                    if submitting() { "Signing in..." } else { "Sign in" }
                }
            }
            if let Some(message) = greeting() {
                p { class: "page-subtitle", "data-testid": "sign-in-result", "{message}" }
            }
        }
    }
}
