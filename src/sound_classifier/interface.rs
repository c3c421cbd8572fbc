use std::sync::mpsc::Receiver;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub label: String,
    pub confidence: f32,
}

impl Classification {
    pub fn new(label: impl Into<String>, confidence: f32) -> Self {
        Self {
            label: label.into(),
            confidence,
        }
    }
}

/// Ranked classifications for one audio window, highest confidence first.
pub type ClassificationResult = Result<Vec<Classification>, Box<dyn std::error::Error + Send + Sync>>;

pub trait SoundClassifier: Send + Sync {
    /// Starts listening and yields one result per classified audio window.
    /// The stream runs until the classifier stops or the receiver is dropped.
    fn start_classifying(&self) -> Receiver<ClassificationResult>;
}

pub trait SoundClassifierLoader {
    fn load(
        &self,
        model_url: &str,
    ) -> Result<Arc<dyn SoundClassifier + Send + Sync>, Box<dyn std::error::Error + Send + Sync>>;
}

/// Accepts `http(s)://.../model.json` model descriptors.
pub fn validate_model_url(model_url: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let rest = model_url
        .strip_prefix("https://")
        .or_else(|| model_url.strip_prefix("http://"))
        .ok_or_else(|| format!("Model location is not an http(s) URL: {:?}", model_url))?;

    let host = rest.split('/').next().unwrap_or_default();
    if host.is_empty() {
        return Err(format!("Model location has no host: {:?}", model_url).into());
    }

    if !rest.ends_with("/model.json") {
        return Err(format!("Model location is not a model.json descriptor: {:?}", model_url).into());
    }

    Ok(())
}
