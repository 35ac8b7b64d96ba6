#![allow(non_snake_case)]

mod client;

use dioxus_logger::tracing::Level;
use holocron::config::Config;

fn main() {
    let level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };
    if let Err(e) = dioxus_logger::init(level) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    #[cfg(not(target_arch = "wasm32"))]
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };
    #[cfg(target_arch = "wasm32")]
    let config = Config::default();

    dioxus::LaunchBuilder::new()
        .with_context(config)
        .launch(client::App);
}
