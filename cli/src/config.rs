use serde::Deserialize;

/// Playback timing and behavior, loaded from a TOML file.
///
/// Every field has a default, so an empty (or missing) file is a valid
/// config. A dash sounds twice as long as a dot; the rest at a word boundary
/// is twice the rest between letter groups.
#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default = "default_frequency")]
    pub frequency: u32,
    #[serde(default = "default_dot_ms")]
    pub dot_ms: u32,
    #[serde(default = "default_dash_ms")]
    pub dash_ms: u32,
    #[serde(default = "default_letter_gap_ms")]
    pub letter_gap_ms: u32,
    #[serde(default = "default_word_gap_ms")]
    pub word_gap_ms: u32,
    #[serde(default)]
    pub play: bool,
}

fn default_frequency() -> u32 {
    2000
}

fn default_dot_ms() -> u32 {
    400
}

fn default_dash_ms() -> u32 {
    800
}

fn default_letter_gap_ms() -> u32 {
    1000
}

fn default_word_gap_ms() -> u32 {
    2000
}

impl Default for Config {
    fn default() -> Self {
        Self {
            frequency: default_frequency(),
            dot_ms: default_dot_ms(),
            dash_ms: default_dash_ms(),
            letter_gap_ms: default_letter_gap_ms(),
            word_gap_ms: default_word_gap_ms(),
            play: false,
        }
    }
}

pub fn load(raw_str: &str) -> Result<Config, toml::de::Error> {
    toml::from_str::<Config>(raw_str)
}
