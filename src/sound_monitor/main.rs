use crate::config::Config;
use crate::device_display::interface::DeviceDisplay;
use crate::library::logger::interface::Logger;
use crate::sound_classifier::interface::SoundClassifier;
use crate::sound_monitor::core::{init, Msg, Model};
use crate::sound_monitor::render::Render;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct SoundMonitor {
    pub model: Arc<Mutex<Model>>,
    pub msg_sender: Sender<Msg>,
    pub msg_receiver: Arc<Mutex<Receiver<Msg>>>,
    pub config: Config,
    pub logger: Arc<dyn Logger + Send + Sync>,
    pub sound_classifier: Arc<dyn SoundClassifier + Send + Sync>,
    pub render: Render,
}

impl SoundMonitor {
    pub fn new(
        config: Config,
        logger: Arc<dyn Logger + Send + Sync>,
        sound_classifier: Arc<dyn SoundClassifier + Send + Sync>,
        device_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>>,
    ) -> Self {
        let (msg_sender, msg_receiver) = channel();
        let (initial_model, _) = init();

        Self {
            model: Arc::new(Mutex::new(initial_model)),
            msg_sender,
            msg_receiver: Arc::new(Mutex::new(msg_receiver)),
            render: Render::new(device_display, config.clone()),
            config,
            logger: logger.with_namespace("sound_monitor"),
            sound_classifier,
        }
    }

    pub fn current_label(&self) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        let model = self.model.lock().map_err(|e| e.to_string())?;
        Ok(model.current().to_string())
    }

    pub fn send(&self, msg: Msg) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.msg_sender.send(msg).map_err(|e| e.to_string())?;
        Ok(())
    }

    pub fn recv(&self) -> Result<Msg, Box<dyn std::error::Error + Send + Sync>> {
        let msg = self
            .msg_receiver
            .lock()
            .map_err(|e| e.to_string())?
            .recv()?;
        Ok(msg)
    }
}
