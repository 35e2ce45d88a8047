use crate::config::Config;
use morse_core::{Action, ERROR_MARKER};

/// Parse a Morse string into the tone and rest actions that sound it out.
///
/// Tokens are the space-separated letter groups of the translator's output:
/// each dot and dash becomes a tone, a word boundary marker becomes the long
/// rest, and every token is followed by the letter-group rest. Error markers
/// and line breaks are silent.
pub fn schedule(morse: &str, config: &Config) -> Vec<Action> {
    let mut actions = vec![];

    for token in morse.split(' ') {
        for symbol in token.chars() {
            match symbol {
                '.' => actions.push(Action::Tone(config.frequency, config.dot_ms)),
                '-' => actions.push(Action::Tone(config.frequency, config.dash_ms)),
                '/' => actions.push(Action::Rest(config.word_gap_ms)),
                // everything else (the error marker, line breaks) is silent
                _ => {}
            }
        }

        actions.push(Action::Rest(config.letter_gap_ms));
    }

    actions
}
