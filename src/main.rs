use dioxus::prelude::*;

mod components;
mod error;
mod fade;
mod layout;
mod media;
mod playback;
mod tracks;

use components::AppView;

const APP_CSS: Asset = asset!("/assets/styling/app.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Meta { name: "viewport", content: "width=device-width, initial-scale=1" }
        document::Meta { name: "theme-color", content: "#000000" }
        document::Meta { name: "mobile-web-app-capable", content: "yes" }
        document::Meta { name: "apple-mobile-web-app-title", content: "Dream Vinyl" }

        document::Stylesheet { href: APP_CSS }

        Router::<AppView> {}
    }
}
