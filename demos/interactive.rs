//! Interactive demo feeding stdin lines through the phone input.
//!
//! Each line is treated as the full text of the field after a keystroke.
//! The reported result and the render description are printed as JSON.
//!
//! # Running
//!
//! ```bash
//! cargo run --example interactive
//! cargo run --example interactive -- '{"errorText": "Start with +", "disableFlags": true}'
//! ```

use phone_input::{ChangeResult, PhoneInput, PhoneInputConfig};
use std::env;
use std::io::{self, BufRead};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Optional JSON config as the first argument
    let config = match env::args().nth(1) {
        Some(json) => PhoneInputConfig::from_json(&json)?,
        None => PhoneInputConfig::default(),
    };
    config.validate()?;

    let mut input = PhoneInput::new(config, |result: &ChangeResult| {
        match serde_json::to_string(result) {
            Ok(json) => println!("change: {json}"),
            Err(e) => eprintln!("failed to serialize result: {e}"),
        }
    })
    .on_focus(|| println!("focus"))
    .on_blur(|| println!("blur"));

    input.mount();
    input.focus();

    println!("Type a phone number per line (Ctrl-D to quit):");
    for line in io::stdin().lock().lines() {
        let line = line?;
        if input.handle_text_change(&line).is_none() {
            println!("ignored: field is disabled");
            continue;
        }
        println!("view: {}", serde_json::to_string_pretty(&input.view())?);
    }

    input.blur();
    Ok(())
}
