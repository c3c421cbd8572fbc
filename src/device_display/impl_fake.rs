use crate::device_display::frame::{Frame, FrameBuilder};
use crate::device_display::interface::{DeviceDisplay, TextAlign};
use crate::library::logger::interface::Logger;
use std::error::Error;
use std::sync::{Arc, Mutex};

pub struct DeviceDisplayFake {
    logger: Arc<dyn Logger + Send + Sync>,
    width: f32,
    height: f32,
    builder: FrameBuilder,
    presented: Arc<Mutex<Vec<Frame>>>,
}

impl DeviceDisplayFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>, width: f32, height: f32) -> Self {
        Self {
            logger: logger.with_namespace("display").with_namespace("fake"),
            width,
            height,
            builder: FrameBuilder::new(),
            presented: Arc::new(Mutex::new(vec![])),
        }
    }

    /// Handle to every presented frame, oldest first.
    pub fn presented(&self) -> Arc<Mutex<Vec<Frame>>> {
        self.presented.clone()
    }
}

impl DeviceDisplay for DeviceDisplayFake {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn background(&mut self, gray: u8) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.builder.background(gray);
        Ok(())
    }

    fn fill(&mut self, gray: u8) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.builder.fill(gray);
        Ok(())
    }

    fn text_size(&mut self, size: f32) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.builder.text_size(size);
        Ok(())
    }

    fn text_align(&mut self, align: TextAlign) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.builder.text_align(align);
        Ok(())
    }

    fn text(&mut self, text: &str, x: f32, y: f32) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.builder.text(text, x, y);
        Ok(())
    }

    fn present(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        let frame = self.builder.finish();
        self.logger.info(&format!(
            "DeviceDisplayFake::present({:?})",
            frame.texts.iter().map(|t| &t.text).collect::<Vec<_>>()
        ))?;
        self.presented.lock().map_err(|e| e.to_string())?.push(frame);
        Ok(())
    }
}
