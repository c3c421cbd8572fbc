use crate::device_display::frame::{Frame, FrameBuilder};
use crate::device_display::interface::{DeviceDisplay, TextAlign};
use std::error::Error;
use std::io::Write;

/// Prints the frame's text as a box, only when it differs from the last one.
pub struct DeviceDisplayConsole {
    width: f32,
    height: f32,
    builder: FrameBuilder,
    last_frame: Option<Frame>,
    out: Box<dyn Write + Send + Sync>,
}

impl DeviceDisplayConsole {
    pub fn new(width: f32, height: f32) -> Self {
        Self::with_writer(width, height, Box::new(std::io::stdout()))
    }

    pub fn with_writer(width: f32, height: f32, out: Box<dyn Write + Send + Sync>) -> Self {
        Self {
            width,
            height,
            builder: FrameBuilder::new(),
            last_frame: None,
            out,
        }
    }

    fn render_display(&mut self, frame: &Frame) -> Result<(), Box<dyn Error + Send + Sync>> {
        let mut texts = frame.texts.iter().collect::<Vec<_>>();
        texts.sort_by(|a, b| a.y.total_cmp(&b.y));

        let inner = texts
            .iter()
            .map(|t| t.text.chars().count())
            .max()
            .unwrap_or(0)
            + 2;

        writeln!(self.out, "┌{}┐", "─".repeat(inner))?;
        for item in texts {
            writeln!(self.out, "│{:^width$}│", item.text, width = inner)?;
        }
        writeln!(self.out, "└{}┘", "─".repeat(inner))?;
        self.out.flush()?;
        Ok(())
    }
}

impl DeviceDisplay for DeviceDisplayConsole {
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
        if self.last_frame.as_ref() != Some(&frame) {
            self.render_display(&frame)?;
            self.last_frame = Some(frame);
        }
        Ok(())
    }
}
