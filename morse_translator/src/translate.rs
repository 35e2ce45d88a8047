//! Classifies input as Morse or plain text and converts it to the other form
use crate::table;
use morse_core::ERROR_MARKER;
use regex::Regex;

lazy_static! {
    // everything a Morse string may contain: dots, dashes, letter separators
    // (spaces), word boundary markers, line breaks, and the error marker
    static ref MORSE_SHAPE: Regex = Regex::new(r"^[.\- /\n\x{FFFD}]*$").unwrap();
}

/// Whether the text is made up entirely of Morse symbols.
///
/// An empty or whitespace-only string passes this check vacuously and will be
/// decoded to an empty result; callers that want different handling for such
/// input must check for it themselves before translating.
pub fn is_morse(text: &str) -> bool {
    MORSE_SHAPE.is_match(text)
}

/// Translate between plain text and Morse code.
///
/// Input that passes [`is_morse`] is decoded, anything else is encoded. The
/// result is trimmed and sentence-capitalized in both directions; for Morse
/// output the capitalization has no visible effect.
pub fn translate(text: &str) -> String {
    if is_morse(text) {
        decode(text)
    } else {
        encode(text)
    }
}

fn decode(text: &str) -> String {
    let mut decoded = String::new();

    for token in text.split(' ') {
        // a lone slash marks a word boundary
        if token == "/" {
            decoded.push(' ');
            continue;
        }

        let code = token.replace('\n', "");

        if code == ERROR_MARKER.to_string() {
            // the untranslatable unit is dropped, but a line break fused to
            // it survives
            if token.contains('\n') {
                decoded.push('\n');
            }
            continue;
        }

        // tokens whose sequence has no table entry contribute nothing
        if let Some(c) = table::reverse_lookup(&code) {
            if token.starts_with('\n') {
                decoded.push('\n');
                decoded.push(c);
            } else if token.contains('\n') {
                decoded.push(c);
                decoded.push('\n');
            } else {
                decoded.push(c);
            }
        }
    }

    sentence_capitalize(decoded.trim())
}

fn encode(text: &str) -> String {
    let mut encoded = String::new();

    // the table holds uppercase keys only
    for c in text.to_uppercase().chars() {
        if c == '\n' {
            encoded.push('\n');
            continue;
        }

        if c.is_whitespace() {
            encoded.push_str("/ ");
            continue;
        }

        match table::lookup(c) {
            Some(seq) => {
                encoded.push_str(seq);
                encoded.push(' ');
            }
            None => {
                encoded.push(ERROR_MARKER);
                encoded.push(' ');
            }
        }
    }

    // a trailing word separator with nothing after it is dropped
    if encoded.ends_with("/ ") {
        encoded.truncate(encoded.len() - 2);
    }

    sentence_capitalize(encoded.trim())
}

/// Force the first character to uppercase and everything after it to
/// lowercase
fn sentence_capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(|c| c.to_lowercase()))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_morse() {
        assert!(is_morse("... --- ..."));
        assert!(is_morse(".-"));
        assert!(is_morse("-..-. / \n"));
        assert!(is_morse("\u{FFFD}"));
        assert!(!is_morse("A"));
        assert!(!is_morse("... --- ...!"));
    }

    #[test]
    fn test_is_morse_vacuous_on_whitespace() {
        // documented edge case: empty and whitespace-only strings pass
        assert!(is_morse(""));
        assert!(is_morse(" "));
        assert!(is_morse("  "));
    }

    #[test]
    fn test_sentence_capitalize() {
        assert_eq!(sentence_capitalize("hello"), "Hello");
        assert_eq!(sentence_capitalize("HELLO THERE"), "Hello there");
        assert_eq!(sentence_capitalize("... --- ..."), "... --- ...");
        assert_eq!(sentence_capitalize(""), "");
    }

    #[test]
    fn test_encode_basic() {
        assert_eq!(encode("sos"), "... --- ...");
        assert_eq!(encode("hi"), ".... ..");
    }

    #[test]
    fn test_encode_word_boundary() {
        assert_eq!(encode("a b"), ".- / -...");
    }

    #[test]
    fn test_encode_drops_trailing_separator() {
        assert_eq!(encode("ab "), ".- -...");
    }

    #[test]
    fn test_encode_newline() {
        assert_eq!(encode("hi\nyo"), ".... .. \n-.-- ---");
    }

    #[test]
    fn test_encode_unmapped_marks_error() {
        assert_eq!(encode("ñ"), "\u{FFFD}");
        assert_eq!(encode("aña"), ".- \u{FFFD} .-");
    }

    #[test]
    fn test_decode_basic() {
        assert_eq!(decode("... --- ..."), "Sos");
        assert_eq!(decode(".... .. / - .... . .-. ."), "Hi there");
    }

    #[test]
    fn test_decode_newline_position() {
        // a leading newline in a token goes before the character, a trailing
        // one after it
        assert_eq!(decode(".... \n--- ..."), "H\nos");
        assert_eq!(decode("....\n --- ..."), "H\nos");
    }

    #[test]
    fn test_decode_drops_unknown_token() {
        assert_eq!(decode("... ------- ..."), "Ss");
    }

    #[test]
    fn test_decode_error_marker() {
        // the marker itself decodes to nothing
        assert_eq!(decode("... \u{FFFD} ..."), "Ss");
        // but a line break fused to it survives
        assert_eq!(decode("... \u{FFFD}\n ..."), "S\ns");
    }

    #[test]
    fn test_translate_dispatch() {
        assert_eq!(translate("sos"), "... --- ...");
        assert_eq!(translate("... --- ..."), "Sos");
        assert_eq!(translate(""), "");
    }
}
