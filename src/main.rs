mod card;
mod effect;
mod hooks;
mod primitives;
mod web;

use dioxus::prelude::*;
use tracing::info;

use card::{Showcase, Tuner};

#[derive(Routable, Clone, PartialEq)]
enum Route {
    #[route("/")]
    Showcase {},
    #[route("/tune")]
    Tuner {},
}

#[allow(non_snake_case)]
fn App() -> Element {
    use_hook(|| info!("card tilt ready"));

    rsx! {
        div {
            id: "main",
            Router::<Route> {}
        }
    }
}

fn main() {
    console_error_panic_hook::set_once();
    dioxus::launch(App);
}
