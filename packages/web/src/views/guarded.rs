//! Layout for routes that need a verified session.

use api::Navigation;
use dioxus::prelude::*;

use crate::client::use_services;
use crate::Route;

/// Runs the navigation guard on every transition into or within the gated section and
/// only renders the nested route once the session is verified.
#[component]
pub fn Guarded() -> Element {
    let services = use_services();
    let route = use_route::<Route>();
    let nav = use_navigator();

    // Held in a signal so the guard runs again on every transition in this section
    let mut target = use_signal(|| route.clone());
    if *target.peek() != route {
        target.set(route);
    }

    let outcome = use_resource(move || {
        let guard = services.guard();
        let route = target();
        async move { guard.before_access(&route).await }
    });

    use_effect(move || {
        if *outcome.read() == Some(Navigation::RedirectToLogin) {
            nav.replace(Route::Auth {});
        }
    });

    let outcome = *outcome.read();
    match outcome {
        Some(Navigation::Proceed) => rsx! { Outlet::<Route> {} },
        Some(Navigation::RedirectToLogin) => rsx! {},
        None => rsx! {
            p { class: "muted", "Checking session..." }
        },
    }
}
