use crate::config::Config;
use crate::library::logger::interface::Logger;
use crate::sound_classifier::impl_fake::SoundClassifierFake;
use crate::sound_classifier::interface::{
    validate_model_url, SoundClassifier, SoundClassifierLoader,
};
use serde::Deserialize;
use std::sync::Arc;

/// The parts of a TensorFlow.js `model.json` the loader checks for.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelDescriptor {
    pub model_topology: serde_json::Value,
    #[serde(default)]
    pub weights_manifest: Vec<serde_json::Value>,
}

/// Teachable Machine `metadata.json` published next to `model.json`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelMetadata {
    pub word_labels: Vec<String>,
    #[serde(default)]
    pub model_name: Option<String>,
}

pub fn parse_model_descriptor(
    body: &str,
) -> Result<ModelDescriptor, Box<dyn std::error::Error + Send + Sync>> {
    let descriptor: ModelDescriptor = serde_json::from_str(body)
        .map_err(|e| format!("Model descriptor is not a TensorFlow.js model: {}", e))?;
    Ok(descriptor)
}

pub fn parse_model_metadata(
    body: &str,
) -> Result<ModelMetadata, Box<dyn std::error::Error + Send + Sync>> {
    let metadata: ModelMetadata = serde_json::from_str(body)
        .map_err(|e| format!("Model metadata is malformed: {}", e))?;

    if metadata.word_labels.is_empty() {
        return Err("Model metadata lists no labels".into());
    }

    Ok(metadata)
}

/// `.../model.json` -> `.../metadata.json`
pub fn metadata_url(model_url: &str) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
    let base = model_url
        .strip_suffix("model.json")
        .ok_or_else(|| format!("Model location is not a model.json descriptor: {:?}", model_url))?;
    Ok(format!("{}metadata.json", base))
}

/// Fetches a Teachable Machine audio model over HTTP and classifies over its labels.
/// Scores are drawn at random; there is no TensorFlow.js runtime in-process.
pub struct SoundClassifierLoaderTeachableMachine {
    config: Config,
    logger: Arc<dyn Logger + Send + Sync>,
    client: reqwest::blocking::Client,
}

impl SoundClassifierLoaderTeachableMachine {
    pub fn new(
        config: Config,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let client = reqwest::blocking::Client::builder()
            .timeout(config.http_timeout)
            .build()?;

        Ok(Self {
            config,
            logger: logger.with_namespace("sound_classifier_loader"),
            client,
        })
    }

    fn fetch(&self, url: &str) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        self.logger.info(&format!("GET {}", url))?;

        let response = self.client.get(url).send()?;
        if !response.status().is_success() {
            return Err(format!("Failed to fetch {}: HTTP {}", url, response.status()).into());
        }

        Ok(response.text()?)
    }
}

impl SoundClassifierLoader for SoundClassifierLoaderTeachableMachine {
    fn load(
        &self,
        model_url: &str,
    ) -> Result<Arc<dyn SoundClassifier + Send + Sync>, Box<dyn std::error::Error + Send + Sync>>
    {
        self.logger.info(&format!("Loading model from {}", model_url))?;

        validate_model_url(model_url)?;

        let descriptor = parse_model_descriptor(&self.fetch(model_url)?)?;
        let metadata = parse_model_metadata(&self.fetch(&metadata_url(model_url)?)?)?;

        self.logger.info(&format!(
            "Model {} loaded: {} weight groups, labels {:?}",
            metadata.model_name.as_deref().unwrap_or("(unnamed)"),
            descriptor.weights_manifest.len(),
            metadata.word_labels
        ))?;

        Ok(Arc::new(SoundClassifierFake::new(
            metadata.word_labels,
            self.config.classify_rate,
            self.config.error_rate,
            self.logger.clone(),
        )))
    }
}
