use crate::sound_classifier::interface::{Classification, ClassificationResult, SoundClassifier};
use std::sync::mpsc::{channel, Receiver};

#[derive(Debug, Clone, PartialEq)]
pub enum ScriptStep {
    Classified(Vec<Classification>),
    Failed(String),
}

impl ScriptStep {
    pub fn top(label: &str) -> Self {
        ScriptStep::Classified(vec![Classification::new(label, 1.0)])
    }

    fn to_result(&self) -> ClassificationResult {
        match self {
            ScriptStep::Classified(classifications) => Ok(classifications.clone()),
            ScriptStep::Failed(message) => Err(message.clone().into()),
        }
    }
}

/// Replays a fixed list of results, then closes the stream.
pub struct SoundClassifierScripted {
    steps: Vec<ScriptStep>,
}

impl SoundClassifierScripted {
    pub fn new(steps: Vec<ScriptStep>) -> Self {
        Self { steps }
    }
}

impl SoundClassifier for SoundClassifierScripted {
    fn start_classifying(&self) -> Receiver<ClassificationResult> {
        let (tx, rx) = channel();
        let steps = self.steps.clone();

        std::thread::spawn(move || {
            for step in steps {
                if tx.send(step.to_result()).is_err() {
                    break;
                }
            }
        });

        rx
    }
}
