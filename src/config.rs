use chrono::{Offset, Utc};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DisplayKind {
    Gui,
    #[allow(dead_code)]
    Console,
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Base location of the Teachable Machine audio model, with trailing slash.
    pub model_url: String,
    /// Limit for each request made while loading the model.
    pub http_timeout: Duration,
    pub frame_rate: Duration,
    pub classify_rate: Duration,
    /// Chance in [0, 1] that a fake classification round reports an error.
    pub error_rate: f64,
    pub canvas_width: f32,
    pub canvas_height: f32,
    pub label_text_size: f32,
    pub cue_text_size: f32,
    pub logger_timezone: chrono::FixedOffset,
    pub display: DisplayKind,
}

impl Config {
    pub fn model_descriptor_url(&self) -> String {
        format!("{}model.json", self.model_url)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model_url: "https://teachablemachine.withgoogle.com/models/mKSeYbKrA/".to_string(),
            http_timeout: Duration::from_secs(10),
            frame_rate: Duration::from_millis(1000 / 60),
            classify_rate: Duration::from_millis(1000),
            error_rate: 0.05,
            canvas_width: 640.0,
            canvas_height: 520.0,
            label_text_size: 32.0,
            cue_text_size: 56.0,
            logger_timezone: central_european_time(),
            display: DisplayKind::Gui,
        }
    }
}

fn central_european_time() -> chrono::FixedOffset {
    chrono::FixedOffset::east_opt(3600).unwrap_or_else(|| Utc.fix())
}
