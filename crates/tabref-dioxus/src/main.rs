use dioxus::prelude::*;

mod host;
mod ui;

use tabref_config::Settings;
use ui::App;

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("tabref starting up!");
    log::info!("Config path: {}", Settings::config_path().display());

    dioxus::LaunchBuilder::desktop()
        .with_cfg(make_window_config())
        .launch(app_root);
}

fn app_root() -> Element {
    // Settings load once at startup; a missing or unreadable file falls
    // back to the defaults rather than stopping the app.
    let settings = match Settings::load() {
        Ok(Some(settings)) => {
            log::info!("Loaded settings from {}", Settings::config_path().display());
            settings
        }
        Ok(None) => {
            log::info!("No settings file found, using defaults");
            Settings::default()
        }
        Err(e) => {
            log::warn!("Failed to load settings, using defaults: {e}");
            Settings::default()
        }
    };

    rsx! {
        App { settings: settings }
    }
}

fn make_window_config() -> dioxus::desktop::Config {
    use dioxus::desktop::{Config, WindowBuilder};

    let window = WindowBuilder::new()
        .with_title("tabref")
        .with_always_on_top(false);

    Config::default().with_window(window)
}
