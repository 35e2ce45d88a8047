//! Fixed table mapping characters to their Morse code sequences
use std::collections::HashMap;

// every supported character and its sequence: the 26 uppercase letters, the
// 10 digits, and 17 punctuation marks
const ENTRIES: [(char, &str); 53] = [
    ('A', ".-"),
    ('B', "-..."),
    ('C', "-.-."),
    ('D', "-.."),
    ('E', "."),
    ('F', "..-."),
    ('G', "--."),
    ('H', "...."),
    ('I', ".."),
    ('J', ".---"),
    ('K', "-.-"),
    ('L', ".-.."),
    ('M', "--"),
    ('N', "-."),
    ('O', "---"),
    ('P', ".--."),
    ('Q', "--.-"),
    ('R', ".-."),
    ('S', "..."),
    ('T', "-"),
    ('U', "..-"),
    ('V', "...-"),
    ('W', ".--"),
    ('X', "-..-"),
    ('Y', "-.--"),
    ('Z', "--.."),
    ('1', ".----"),
    ('2', "..---"),
    ('3', "...--"),
    ('4', "....-"),
    ('5', "....."),
    ('6', "-...."),
    ('7', "--..."),
    ('8', "---.."),
    ('9', "----."),
    ('0', "-----"),
    ('.', ".-.-.-"),
    (',', "--..--"),
    ('?', "..--.."),
    ('\'', ".----."),
    ('!', ".-.--"),
    ('/', "-..-."),
    ('(', "-.--."),
    (')', "-.--.-"),
    ('&', ".-..."),
    (':', "---..."),
    (';', "-.-.-."),
    ('=', "-...-"),
    ('-', "-....-"),
    ('_', "..--.-"),
    ('"', ".-..-."),
    ('$', "...-..-"),
    ('@', ".--.-."),
];

lazy_static! {
    static ref CODE_TABLE: HashMap<char, &'static str> = ENTRIES.iter().cloned().collect();
    // the entry list assigns every character a distinct sequence, so inverting
    // it loses nothing (pinned by a test below)
    static ref REVERSE_TABLE: HashMap<&'static str, char> =
        ENTRIES.iter().map(|&(c, seq)| (seq, c)).collect();
}

/// Look up the Morse sequence for a character. The table only holds uppercase
/// keys, so callers must uppercase first
pub fn lookup(c: char) -> Option<&'static str> {
    CODE_TABLE.get(&c).copied()
}

/// Look up the character a Morse sequence stands for
pub fn reverse_lookup(seq: &str) -> Option<char> {
    REVERSE_TABLE.get(seq).copied()
}

/// The whole character-to-sequence table
pub fn code_table() -> &'static HashMap<char, &'static str> {
    &CODE_TABLE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_round_trip() {
        for &(c, seq) in ENTRIES.iter() {
            assert_eq!(lookup(c), Some(seq));
            assert_eq!(reverse_lookup(seq), Some(c));
        }
    }

    #[test]
    fn test_table_is_exactly_invertible() {
        // no two characters may share a sequence
        assert_eq!(REVERSE_TABLE.len(), ENTRIES.len());
        assert_eq!(CODE_TABLE.len(), ENTRIES.len());
    }

    #[test]
    fn test_sequences_are_dots_and_dashes() {
        for &(_, seq) in ENTRIES.iter() {
            assert!(!seq.is_empty());
            assert!(seq.chars().all(|s| s == '.' || s == '-'));
        }
    }

    #[test]
    fn test_lookup_is_uppercase_only() {
        assert_eq!(lookup('a'), None);
        assert_eq!(lookup('A'), Some(".-"));
    }

    #[test]
    fn test_unmapped_characters() {
        assert_eq!(lookup(' '), None);
        assert_eq!(lookup('%'), None);
        assert_eq!(reverse_lookup(""), None);
        assert_eq!(reverse_lookup("......."), None);
    }
}
