#[macro_use]
extern crate lazy_static;

use morse_core::Translator;

mod table;
mod translate;

pub use table::{code_table, lookup, reverse_lookup};
pub use translate::{is_morse, translate};

/// Translator between plain text and Morse code.
///
/// The direction is picked per call: input made up entirely of Morse symbols
/// is decoded, anything else is encoded. Untranslatable characters become the
/// error marker on encode and are dropped on decode; the translator itself
/// never fails.
///
/// Note that an empty (or whitespace-only) string counts as Morse and decodes
/// to an empty result, so callers that want to treat such input as "nothing
/// to do" must check for it before translating.
#[derive(Debug, Default)]
pub struct MorseTranslator;

impl MorseTranslator {
    pub fn new() -> Self {
        Self
    }
}

impl Translator for MorseTranslator {
    fn translate(&self, text: &str) -> String {
        translate::translate(text)
    }

    fn is_morse(&self, text: &str) -> bool {
        translate::is_morse(text)
    }
}
