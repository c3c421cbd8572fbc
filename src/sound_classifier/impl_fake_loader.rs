use crate::config::Config;
use crate::library::logger::interface::Logger;
use crate::sound_classifier::impl_fake::SoundClassifierFake;
use crate::sound_classifier::interface::{
    validate_model_url, SoundClassifier, SoundClassifierLoader,
};
use crate::sound_monitor::display::AlarmSound;
use std::sync::Arc;

pub const BACKGROUND_NOISE_LABEL: &str = "Rumore di fondo";

/// Skips the network: any well-formed location yields the alarm labels.
pub struct SoundClassifierLoaderFake {
    config: Config,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl SoundClassifierLoaderFake {
    pub fn new(config: Config, logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            config,
            logger: logger.with_namespace("sound_classifier_loader"),
        }
    }
}

impl SoundClassifierLoader for SoundClassifierLoaderFake {
    fn load(
        &self,
        model_url: &str,
    ) -> Result<Arc<dyn SoundClassifier + Send + Sync>, Box<dyn std::error::Error + Send + Sync>>
    {
        self.logger.info(&format!("Loading model from {}", model_url))?;

        validate_model_url(model_url)?;

        let labels = AlarmSound::ALL
            .iter()
            .map(|sound| sound.label().to_string())
            .chain(std::iter::once(BACKGROUND_NOISE_LABEL.to_string()))
            .collect::<Vec<_>>();

        Ok(Arc::new(SoundClassifierFake::new(
            labels,
            self.config.classify_rate,
            self.config.error_rate,
            self.logger.clone(),
        )))
    }
}
