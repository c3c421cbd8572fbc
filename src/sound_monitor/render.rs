use crate::config::Config;
use crate::device_display::interface::{DeviceDisplay, TextAlign};
use crate::sound_monitor::core::Model;
use crate::sound_monitor::display::display_cue;
use std::sync::{Arc, Mutex};

const BACKGROUND_GRAY: u8 = 255;
const TEXT_GRAY: u8 = 0;
/// Distance of the raw label's baseline row from the bottom edge.
const LABEL_BOTTOM_OFFSET: f32 = 16.0;

#[derive(Clone)]
pub struct Render {
    device_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>>,
    config: Config,
}

impl Render {
    pub fn new(
        device_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>>,
        config: Config,
    ) -> Self {
        Self {
            device_display,
            config,
        }
    }

    /// Draws the raw label small at the bottom and its cue large in the middle.
    pub fn render(&self, model: &Model) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut device_display = self.device_display.lock().map_err(|e| e.to_string())?;

        let width = device_display.width();
        let height = device_display.height();
        let label = model.current();

        device_display.background(BACKGROUND_GRAY)?;

        device_display.text_size(self.config.label_text_size)?;
        device_display.text_align(TextAlign::CENTER)?;
        device_display.fill(TEXT_GRAY)?;
        device_display.text(label, width / 2.0, height - LABEL_BOTTOM_OFFSET)?;

        device_display.text_size(self.config.cue_text_size)?;
        device_display.text(display_cue(label), width / 2.0, height / 2.0)?;

        device_display.present()?;

        Ok(())
    }
}
