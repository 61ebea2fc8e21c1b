use dioxus::prelude::*;

use views::{Auth, Guarded, Home, Shell};

mod client;
mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Auth {},
        #[layout(Guarded)]
            #[route("/home")]
            Home {},
}

impl api::RouteMeta for Route {
    fn requires_auth(&self) -> bool {
        matches!(self, Route::Home {})
    }
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        Router::<Route> {}
    }
}
