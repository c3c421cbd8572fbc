use crate::device_display::interface::TextAlign;

#[derive(Debug, Clone, PartialEq)]
pub struct TextItem {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub align: TextAlign,
    pub gray: u8,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Frame {
    pub background: u8,
    pub texts: Vec<TextItem>,
}

/// Tracks the drawing style the way a canvas does and collects a `Frame`.
#[derive(Debug, Clone)]
pub struct FrameBuilder {
    frame: Frame,
    fill: u8,
    size: f32,
    align: TextAlign,
}

impl Default for FrameBuilder {
    fn default() -> Self {
        Self {
            frame: Frame::default(),
            fill: 0,
            size: 12.0,
            align: TextAlign::default(),
        }
    }
}

impl FrameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn background(&mut self, gray: u8) {
        self.frame = Frame {
            background: gray,
            texts: vec![],
        };
    }

    pub fn fill(&mut self, gray: u8) {
        self.fill = gray;
    }

    pub fn text_size(&mut self, size: f32) {
        self.size = size;
    }

    pub fn text_align(&mut self, align: TextAlign) {
        self.align = align;
    }

    pub fn text(&mut self, text: &str, x: f32, y: f32) {
        self.frame.texts.push(TextItem {
            text: text.to_string(),
            x,
            y,
            size: self.size,
            align: self.align,
            gray: self.fill,
        });
    }

    /// Hands over the collected frame. Style carries over to the next one.
    pub fn finish(&mut self) -> Frame {
        std::mem::take(&mut self.frame)
    }
}
