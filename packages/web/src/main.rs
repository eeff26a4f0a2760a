use dioxus::prelude::*;

use ui::SessionProvider;
use views::{Auth, ContractDetail, Profile};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/auth")]
    Auth {},
    #[route("/profile")]
    Profile {},
    #[route("/contracts/:contract_id")]
    ContractDetail { contract_id: i64 },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        SessionProvider {
            Router::<Route> {}
        }
    }
}

/// Redirect `/` to `/auth`; the auth view bounces signed-in users on to
/// their profile.
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Auth {});
    rsx! {}
}
