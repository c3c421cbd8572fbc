/// Shown whenever the current label is not one of the alarm sounds.
pub const ALL_CLEAR_CUE: &str = "Tutto ok";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlarmSound {
    BurglarAlarm,
    FireAlarm,
    EarthquakeAlarm,
    AmbulanceSiren,
    PoliceSiren,
}

impl AlarmSound {
    pub const ALL: [AlarmSound; 5] = [
        AlarmSound::BurglarAlarm,
        AlarmSound::FireAlarm,
        AlarmSound::EarthquakeAlarm,
        AlarmSound::AmbulanceSiren,
        AlarmSound::PoliceSiren,
    ];

    /// Label exactly as the model emits it.
    pub fn label(&self) -> &'static str {
        match self {
            AlarmSound::BurglarAlarm => "Allarme antifurto",
            AlarmSound::FireAlarm => "Allarme Antincendio",
            AlarmSound::EarthquakeAlarm => "Allarme Antisismico",
            AlarmSound::AmbulanceSiren => "Sirena Ambulanza",
            AlarmSound::PoliceSiren => "Sirena Polizia",
        }
    }

    pub fn cue(&self) -> &'static str {
        match self {
            AlarmSound::BurglarAlarm => "ALLARME ANTIFURTO",
            AlarmSound::FireAlarm => "ALLARME ANTINCENDIO",
            AlarmSound::EarthquakeAlarm => "ALLARME ANTISISMICO",
            AlarmSound::AmbulanceSiren => "SIRENA AMBULANZA",
            AlarmSound::PoliceSiren => "SIRENA POLIZIA",
        }
    }

    /// Case-sensitive, untrimmed match against the model labels.
    pub fn from_label(label: &str) -> Option<AlarmSound> {
        AlarmSound::ALL
            .into_iter()
            .find(|sound| sound.label() == label)
    }
}

pub fn display_cue(label: &str) -> &'static str {
    AlarmSound::from_label(label)
        .map(|sound| sound.cue())
        .unwrap_or(ALL_CLEAR_CUE)
}
