use config::{Config, DisplayKind};
use device_display::impl_console::DeviceDisplayConsole;
use device_display::impl_gui::DeviceDisplayGui;
use library::logger::impl_console::LoggerConsole;
use library::logger::interface::Logger;
use sound_classifier::impl_teachable_machine::SoundClassifierLoaderTeachableMachine;
use sound_classifier::interface::SoundClassifierLoader;
use sound_monitor::main::SoundMonitor;
use std::sync::{Arc, Mutex};

mod config;
mod device_display;
mod library;
mod sound_classifier;
mod sound_monitor;

const WINDOW_TITLE: &str = "Alarm Sound Monitor";

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = Config::default();

    let logger: Arc<dyn Logger + Send + Sync> = Arc::new(LoggerConsole::new(config.logger_timezone));

    let loader = SoundClassifierLoaderTeachableMachine::new(config.clone(), logger.clone())?;

    // A model that cannot be loaded ends the program here
    let sound_classifier = loader.load(&config.model_descriptor_url())?;

    match config.display {
        DisplayKind::Console => {
            let device_display = Arc::new(Mutex::new(DeviceDisplayConsole::new(
                config.canvas_width,
                config.canvas_height,
            )));

            let sound_monitor =
                SoundMonitor::new(config, logger, sound_classifier, device_display);

            sound_monitor.run()
        }
        DisplayKind::Gui => {
            let device_display_gui =
                DeviceDisplayGui::new(config.canvas_width, config.canvas_height);
            let window = device_display_gui.window(config.frame_rate);
            let device_display = Arc::new(Mutex::new(device_display_gui));

            let sound_monitor = SoundMonitor::new(
                config.clone(),
                logger.clone(),
                sound_classifier,
                device_display,
            );

            std::thread::spawn(move || {
                if let Err(e) = sound_monitor.run() {
                    let _ = logger.error(&format!("Sound monitor stopped: {}", e));
                }
            });

            DeviceDisplayGui::run_window(
                WINDOW_TITLE,
                config.canvas_width,
                config.canvas_height,
                window,
            )
        }
    }
}
