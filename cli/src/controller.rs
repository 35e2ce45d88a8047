use morse_core::{Action, Controller};

/// Writes translations and playback actions to stdout
pub struct StdoutController {}

impl Controller for StdoutController {
    fn new() -> Self {
        Self {}
    }

    fn dispatch(&mut self, action: Action) {
        match action {
            Action::Show(text) => println!("{}", text),
            other => println!("{:?}", other),
        }
    }
}
