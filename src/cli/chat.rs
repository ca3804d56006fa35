use std::sync::RwLock;

use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::chat::{Transcript, exchange};
use crate::core::AppConfig;

pub async fn run() -> Result<()> {
    let mut rl = DefaultEditor::new().expect("Editor failed");

    let config = AppConfig::default();
    let transcript = RwLock::new(Transcript::new());

    loop {
        let readline = rl.readline(">>> ");
        match readline {
            Ok(line) => {
                let reply = exchange(&transcript, &config, line.as_str()).await;
                println!("{}", reply);
            }
            Err(ReadlineError::Interrupted) => break,
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }

    Ok(())
}
