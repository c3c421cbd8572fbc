use std::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Start,
    Center,
    #[allow(dead_code)]
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextAlign {
    pub horizontal: Align,
    pub vertical: Align,
}

impl TextAlign {
    pub const CENTER: TextAlign = TextAlign {
        horizontal: Align::Center,
        vertical: Align::Center,
    };
}

impl Default for TextAlign {
    fn default() -> Self {
        Self {
            horizontal: Align::Start,
            vertical: Align::Start,
        }
    }
}

/// Canvas-style drawing surface. Draw calls accumulate until `present`.
pub trait DeviceDisplay: Send + Sync {
    fn width(&self) -> f32;

    fn height(&self) -> f32;

    /// Fill the whole surface with a gray level, discarding anything drawn before
    fn background(&mut self, gray: u8) -> Result<(), Box<dyn Error + Send + Sync>>;

    /// Gray level used by subsequent text
    fn fill(&mut self, gray: u8) -> Result<(), Box<dyn Error + Send + Sync>>;

    fn text_size(&mut self, size: f32) -> Result<(), Box<dyn Error + Send + Sync>>;

    fn text_align(&mut self, align: TextAlign) -> Result<(), Box<dyn Error + Send + Sync>>;

    /// Draw text anchored at (x, y) using the current fill, size and alignment
    fn text(&mut self, text: &str, x: f32, y: f32) -> Result<(), Box<dyn Error + Send + Sync>>;

    /// Show the frame drawn since the last `background`
    fn present(&mut self) -> Result<(), Box<dyn Error + Send + Sync>>;
}
