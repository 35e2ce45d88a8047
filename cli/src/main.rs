use clap::{App, Arg};
use morse_core::{Action, Controller, Machine, Translator};
use morse_translator::{code_table, MorseTranslator};

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

mod config;
mod controller;
mod dispatcher;
mod machine;

use config::Config;
use controller::StdoutController;
use machine::StdinMachine;

pub fn main() {
    let matches = App::new("morse")
        .version("0.1.0")
        .about(
            "Translates plain text to Morse code and Morse code back to plain text.

Input made up entirely of dots, dashes, spaces, slashes, and line breaks is
decoded; anything else is encoded. Pass TEXT to translate once, or run with
no arguments for an interactive loop.",
        )
        .arg(
            Arg::with_name("TEXT")
                .help("Text to translate; reads lines from stdin when omitted")
                .index(1),
        )
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .help("Path to the config file")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("play")
                .short("p")
                .long("play")
                .help("Also print the tone schedule for Morse output"),
        )
        .arg(
            Arg::with_name("table")
                .long("table")
                .help("Print the code table as JSON and exit"),
        )
        .get_matches();

    if matches.is_present("table") {
        println!("{}", dump_table());
        return;
    }

    let config = load_config(matches.value_of("config"));
    let play = matches.is_present("play") || config.play;

    let translator = MorseTranslator::new();
    let mut controller: Box<dyn Controller> = Box::new(StdoutController::new());

    if let Some(text) = matches.value_of("TEXT") {
        translate_line(&translator, controller.as_mut(), &config, play, text);
        return;
    }

    println!("[INFO] Reading lines from stdin; end input to exit");
    let mut machine = StdinMachine::new();
    loop {
        match machine.read() {
            Ok(line) => translate_line(&translator, controller.as_mut(), &config, play, &line),
            Err(_) => break,
        }
    }
}

/// Translate one line and dispatch the result, followed by its tone schedule
/// when the output is Morse and playback is on
fn translate_line(
    translator: &MorseTranslator,
    controller: &mut dyn Controller,
    config: &Config,
    play: bool,
    text: &str,
) {
    // nothing to translate; an empty string would be classified as Morse and
    // decode to an empty result
    if text.trim().is_empty() {
        return;
    }

    let output = translator.translate(text);
    controller.dispatch(Action::show(&output));

    if play && translator.is_morse(&output) {
        for action in dispatcher::schedule(&output, config) {
            controller.dispatch(action);
        }
    }
}

/// Load the config from the override path or the default location, falling
/// back to the defaults when there is no file
fn load_config(path_override: Option<&str>) -> Config {
    if let Some(p) = path_override {
        let raw = match fs::read_to_string(p) {
            Ok(raw) => raw,
            Err(e) => panic!("unable to read config file {:?}: {:?}", p, e),
        };
        return match config::load(&raw) {
            Ok(parsed) => parsed,
            Err(e) => panic!("unable to parse config file {:?}: {:?}", p, e),
        };
    }

    let path: PathBuf = match dirs::config_dir() {
        Some(base) => base.join("morse").join("config.toml"),
        None => return Config::default(),
    };

    match fs::read_to_string(&path) {
        Ok(raw) => match config::load(&raw) {
            Ok(parsed) => {
                println!("[INFO] Loaded config from {:?}", path);
                parsed
            }
            Err(e) => panic!("unable to parse config file {:?}: {:?}", path, e),
        },
        // no file at the default location is fine
        Err(_) => Config::default(),
    }
}

/// Format the code table as pretty JSON, keyed by character
fn dump_table() -> String {
    let table: BTreeMap<String, String> = code_table()
        .iter()
        .map(|(&c, &seq)| (c.to_string(), seq.to_string()))
        .collect();

    serde_json::to_string_pretty(&table).expect("unable to serialize the code table")
}
