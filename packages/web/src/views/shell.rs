//! Root layout: owns the backend client and turns 401s into navigation.

use dioxus::prelude::*;
use futures::StreamExt;

use crate::client::{connect, session_expired_hook, SessionExpired};
use crate::Route;

#[component]
pub fn Shell() -> Element {
    let nav = use_navigator();

    let expiry = use_coroutine(move |mut rx: UnboundedReceiver<SessionExpired>| async move {
        while rx.next().await.is_some() {
            tracing::info!("Session expired, returning to login");
            nav.replace(Route::Auth {});
        }
    });

    use_context_provider(move || connect(session_expired_hook(expiry.tx())));

    rsx! {
        main {
            class: "app",
            Outlet::<Route> {}
        }
    }
}
