use crate::sound_classifier::interface::ClassificationResult;
use std::time::Instant;

pub const WAITING_LABEL: &str = "waiting...";

/// Latest classification label. Starts `Idle` and never goes back to it.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Model {
    #[default]
    Idle,
    Active {
        label: String,
    },
}

impl Model {
    pub fn current(&self) -> &str {
        match self {
            Model::Idle => WAITING_LABEL,
            Model::Active { label } => label,
        }
    }

    pub fn update(&mut self, label: impl Into<String>) {
        *self = Model::Active {
            label: label.into(),
        };
    }
}

#[derive(Debug)]
pub enum Msg {
    #[allow(dead_code)]
    Tick(Instant),
    ClassifyDone(ClassificationResult),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    SubscribeClassifier,
    SubscribeFrameClock,
    Render,
    ReportError { message: String },
}

pub fn init() -> (Model, Vec<Effect>) {
    (
        Model::Idle,
        vec![Effect::SubscribeClassifier, Effect::SubscribeFrameClock],
    )
}

pub fn transition(model: Model, msg: Msg) -> (Model, Vec<Effect>) {
    match msg {
        Msg::Tick(_) => (model, vec![Effect::Render]),

        Msg::ClassifyDone(Ok(classifications)) => match classifications.into_iter().next() {
            Some(top) => {
                let mut model = model;
                model.update(top.label);
                (model, vec![])
            }
            None => (
                model,
                vec![Effect::ReportError {
                    message: "Classifier returned no results".to_string(),
                }],
            ),
        },

        Msg::ClassifyDone(Err(e)) => (
            model,
            vec![Effect::ReportError {
                message: format!("Classification failed: {}", e),
            }],
        ),
    }
}
