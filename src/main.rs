//! Opens the picker window.

use floem::prelude::*;
use floem::window::WindowConfig;
use unreal_color_picker::{color_picker, PickerConfig};

fn main() {
    // Clamping and all-fields editing are library options; the window keeps
    // the defaults. `RUST_LOG` still overrides the log level.
    let config = PickerConfig::default();

    env_logger::Builder::new()
        .filter_level(config.log_level)
        .parse_default_env()
        .init();
    log::info!("starting {} at {}", config.window_title, config.initial_color.to_hex());

    let color = RwSignal::new(config.initial_color);
    let window = WindowConfig::default()
        .size(config.window_size)
        .title(config.window_title.clone());

    floem::Application::new()
        .window(
            move |_| {
                color_picker(&config, color).on_event_stop(
                    floem::event::EventListener::WindowClosed,
                    |_| floem::quit_app(),
                )
            },
            Some(window),
        )
        .run();
}
