use relm4::prelude::*;
use rotary_dial::config;
use rotary_dial::gui::app::AppModel;
use rotary_dial::sys::runtime;

fn main() {
    env_logger::init();

    match config::write_default_config() {
        Ok(path) => log::debug!("Settings file: {}", path.display()),
        Err(e) => log::warn!("Failed to write default settings: {}", e),
    }
    let settings = config::load_or_default();

    let (tx, rx) = async_channel::bounded(32);

    // Start Background Services
    runtime::start_background_services(tx);

    let app = RelmApp::new("org.rotary.dial");

    app.run::<AppModel>((settings, rx));
}
