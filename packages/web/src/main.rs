use dioxus::prelude::*;

use store::AppConfig;
use ui::{AppProvider, AppShell};

const CONFIG: &str = include_str!("../assets/digiraksha.toml");
const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

fn main() {
    if let Err(e) = dioxus::logger::init(tracing::Level::INFO) {
        eprintln!("Logger already installed: {e}");
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(|| {
        let config = AppConfig::from_toml_or_default(CONFIG);
        tracing::info!("Loaded {}", AppConfig::filename());
        config
    });

    rsx! {
        document::Title { "DigiRaksha" }
        document::Script { src: TAILWIND_CDN }

        AppProvider { config,
            AppShell {}
        }
    }
}
