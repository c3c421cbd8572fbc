use super::main::SoundMonitor;
use crate::sound_monitor::core::{init, transition, Effect, Msg};

impl SoundMonitor {
    /// Runs until the message channel fails. Classification never stops on its own.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let (initial_model, effects) = init();
        *self.model.lock().map_err(|e| e.to_string())? = initial_model;

        self.execute_effects(effects)?;

        loop {
            let msg = self.recv()?;
            self.step(msg)?;
        }
    }

    pub fn step(&self, msg: Msg) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let is_tick = matches!(msg, Msg::Tick(_));

        let effects = {
            let mut model = self.model.lock().map_err(|e| e.to_string())?;
            let old_label = model.current().to_string();
            let (new_model, effects) = transition(model.clone(), msg);

            if !is_tick {
                self.logger.info(&format!(
                    "label: {:?} -> {:?}, effects: {:?}",
                    old_label,
                    new_model.current(),
                    effects
                ))?;
            }

            *model = new_model;
            effects
        };

        self.execute_effects(effects)
    }

    fn execute_effects(
        &self,
        effects: Vec<Effect>,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        for effect in effects {
            match effect {
                Effect::SubscribeClassifier | Effect::SubscribeFrameClock => {
                    let self_clone = self.clone();
                    std::thread::spawn(move || {
                        if let Err(e) = self_clone.interpret_effect(effect.clone()) {
                            let _ = self_clone
                                .logger
                                .error(&format!("Effect {:?} failed: {}", effect, e));
                        }
                    });
                }
                effect => self.interpret_effect(effect)?,
            }
        }
        Ok(())
    }
}
