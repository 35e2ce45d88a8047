use morse_core::Machine;
use std::{error::Error, io, io::Write};

/// Reads lines of text to translate from stdin
pub struct StdinMachine {}

impl StdinMachine {
    pub fn new() -> Self {
        Self {}
    }
}

impl Machine for StdinMachine {
    fn read(&mut self) -> Result<String, Box<dyn Error>> {
        // keep prompting until the line has something to translate; an empty
        // or whitespace-only line would be (vacuously) classified as Morse
        // and decode to nothing
        loop {
            print!("Text> ");
            io::stdout().flush()?;

            let mut input = String::new();
            // blocks until input is read
            if io::stdin().read_line(&mut input)? == 0 {
                return Err("end of input".into());
            }

            let trimmed = input.trim();
            if !trimmed.is_empty() {
                return Ok(trimmed.to_owned());
            }
        }
    }
}
