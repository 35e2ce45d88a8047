/// What the presentation layer should do with a translation
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Hash, Eq, Deserialize, Serialize)]
pub enum Action {
    /// Display the translated text
    Show(String),
    /// Play a tone at a frequency (Hz) for a duration (ms)
    Tone(u32, u32),
    /// Pause for a duration (ms)
    Rest(u32),
}

impl Action {
    pub fn show(text: &str) -> Self {
        Self::Show(text.to_owned())
    }
}
