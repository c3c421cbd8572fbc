use super::main::SoundMonitor;
use crate::sound_monitor::core::{Effect, Msg};
use std::time::Instant;

impl SoundMonitor {
    pub fn interpret_effect(
        &self,
        effect: Effect,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        match effect {
            Effect::SubscribeClassifier => {
                self.logger.info("Starting classification")?;
                let results = self.sound_classifier.start_classifying();
                for result in results.iter() {
                    self.send(Msg::ClassifyDone(result))?;
                }
                self.logger.info("Classifier stopped sending results")?;
                Ok(())
            }
            Effect::SubscribeFrameClock => loop {
                std::thread::sleep(self.config.frame_rate);
                self.send(Msg::Tick(Instant::now()))?;
            },
            Effect::Render => {
                let model = self.model.lock().map_err(|e| e.to_string())?.clone();
                self.render.render(&model)
            }
            Effect::ReportError { message } => self.logger.error(&message),
        }
    }
}
