use crate::library::logger::interface::Logger;
use crate::sound_classifier::interface::{Classification, ClassificationResult, SoundClassifier};
use rand::distr::{Distribution, Uniform};
use rand::Rng;
use std::sync::mpsc::{channel, Receiver};
use std::sync::Arc;
use std::time::Duration;

/// Scores a fixed label set at random on its own thread.
pub struct SoundClassifierFake {
    labels: Vec<String>,
    classify_rate: Duration,
    error_rate: f64,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl SoundClassifierFake {
    pub fn new(
        labels: Vec<String>,
        classify_rate: Duration,
        error_rate: f64,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Self {
        Self {
            labels,
            classify_rate,
            error_rate: error_rate.clamp(0.0, 1.0),
            logger: logger.with_namespace("fake"),
        }
    }
}

impl SoundClassifier for SoundClassifierFake {
    fn start_classifying(&self) -> Receiver<ClassificationResult> {
        let (tx, rx) = channel();
        let labels = self.labels.clone();
        let classify_rate = self.classify_rate;
        let error_rate = self.error_rate;
        let logger = self.logger.clone();

        std::thread::spawn(move || {
            let _ = logger.info("Listening to microphone...");
            let mut rng = rand::rng();
            loop {
                std::thread::sleep(classify_rate);
                let result = classify_window(&mut rng, &labels, error_rate);
                if tx.send(result).is_err() {
                    let _ = logger.info("Result receiver dropped, stopping");
                    break;
                }
            }
        });

        rx
    }
}

/// Scores every label at random and ranks them, or fails with `error_rate` odds.
pub fn classify_window<R: Rng>(
    rng: &mut R,
    labels: &[String],
    error_rate: f64,
) -> ClassificationResult {
    if labels.is_empty() {
        return Err("Model has no labels".into());
    }

    if rng.random_bool(error_rate.clamp(0.0, 1.0)) {
        return Err("Audio window could not be classified".into());
    }

    let score_dist = Uniform::new(0.0f32, 1.0)?;

    let mut classifications = labels
        .iter()
        .map(|label| Classification::new(label.clone(), score_dist.sample(&mut *rng)))
        .collect::<Vec<_>>();

    let total: f32 = classifications.iter().map(|c| c.confidence).sum();
    if total > 0.0 {
        for classification in classifications.iter_mut() {
            classification.confidence /= total;
        }
    }

    classifications.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));

    Ok(classifications)
}
