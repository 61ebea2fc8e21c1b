//! Login and registration view (the `auth` route).

use api::{LoginBody, RegisterBody};
use dioxus::prelude::*;
use store::Session;

use crate::client::use_services;
use crate::Route;

#[component]
pub fn Auth() -> Element {
    let services = use_services();
    let nav = use_navigator();
    let mut registering = use_signal(|| false);
    let mut first_name = use_signal(String::new);
    let mut last_name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut notice = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let services = services.clone();
        spawn(async move {
            error.set(None);
            notice.set(None);

            let e = email().trim().to_string();
            let p = password();
            if e.is_empty() || p.is_empty() {
                error.set(Some("Email and password are required".to_string()));
                return;
            }

            loading.set(true);
            if registering() {
                let body = RegisterBody {
                    email: e,
                    password: p,
                    first_name: first_name().trim().to_string(),
                    last_name: last_name().trim().to_string(),
                };
                match services.auth.register(&body).await {
                    Ok(_) => {
                        registering.set(false);
                        notice.set(Some("Account created, you can sign in now".to_string()));
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
                loading.set(false);
                return;
            }

            let token = match services.auth.login(&LoginBody::new(e, p)).await {
                Ok(envelope) => envelope.into_data().filter(|token| !token.is_empty()),
                Err(err) => {
                    loading.set(false);
                    error.set(Some(err.to_string()));
                    return;
                }
            };
            let Some(token) = token else {
                loading.set(false);
                error.set(Some("Login response carried no token".to_string()));
                return;
            };

            match services.factory().sessions().write(&Session::new(token)).await {
                Ok(()) => {
                    tracing::info!("Signed in");
                    nav.push(Route::Home {});
                }
                Err(err) => {
                    loading.set(false);
                    error.set(Some(err.to_string()));
                }
            }
        });
    };

    rsx! {
        section {
            class: "auth",

            h1 {
                if registering() { "Create account" } else { "Sign in" }
            }

            form {
                onsubmit: handle_submit,

                if registering() {
                    input {
                        placeholder: "First name",
                        value: "{first_name}",
                        oninput: move |evt| first_name.set(evt.value()),
                    }
                    input {
                        placeholder: "Last name",
                        value: "{last_name}",
                        oninput: move |evt| last_name.set(evt.value()),
                    }
                }
                input {
                    r#type: "email",
                    placeholder: "Email",
                    value: "{email}",
                    oninput: move |evt| email.set(evt.value()),
                }
                input {
                    r#type: "password",
                    placeholder: "Password",
                    value: "{password}",
                    oninput: move |evt| password.set(evt.value()),
                }
                button {
                    r#type: "submit",
                    disabled: loading(),
                    if loading() {
                        "Loading..."
                    } else if registering() {
                        "Register"
                    } else {
                        "Sign in"
                    }
                }
            }

            if let Some(msg) = error() {
                p { class: "error", "{msg}" }
            }
            if let Some(msg) = notice() {
                p { class: "notice", "{msg}" }
            }

            button {
                class: "link",
                onclick: move |_| {
                    registering.set(!registering());
                    error.set(None);
                },
                if registering() { "Have an account? Sign in" } else { "No account? Register" }
            }
        }
    }
}
