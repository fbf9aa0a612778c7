//! Interactive conversation loop
//!
//! Reads one message per line, answers it, and prints an emotional summary
//! when the user says goodbye. With autosave on, the snapshot is rewritten
//! after every answered message, so an interrupted chat keeps its history.

use anchor_core::{is_exit_command, AnchorConfig, Companion, SessionStore};
use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::sync::Arc;

const SPEAKER: &str = "\u{2693} Emotional Anchor:";
const PROMPT: &str = "You: ";

/// Run the chat against the configured store and persist it afterwards
pub fn handle_chat_command(session: Option<String>, no_save: bool) -> Result<()> {
    let config = AnchorConfig::load_or_default().context("Failed to load config")?;
    let classifier = config.classifier().context("Failed to load lexicon")?;
    let snapshot = config.snapshot_path()?;

    let store = Arc::new(SessionStore::open(&snapshot, config.history_cap));
    let session_id = session.unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
    log::info!("Starting chat session {session_id}");

    let companion = Companion::new(
        Arc::new(classifier),
        Arc::new(anchor_core::CannedResponses::default()),
        Arc::clone(&store),
        session_id,
    );

    let autosave = (config.autosave && !no_save).then_some(snapshot.as_path());
    let stdin = io::stdin();
    let stdout = io::stdout();
    let result = run_chat(&companion, stdin.lock(), stdout.lock(), autosave);

    if let Some(path) = autosave {
        store.save_to_file(path);
    }
    result.map(|answered| log::info!("Chat ended after {answered} messages"))
}

/// Drive one conversation until an exit command or end of input.
///
/// When `autosave` is set, the store is written there after each answered
/// message, before the reply is printed. Returns the number of messages
/// answered.
pub fn run_chat<R: BufRead, W: Write>(
    companion: &Companion,
    mut input: R,
    mut output: W,
    autosave: Option<&Path>,
) -> Result<usize> {
    writeln!(output, "{SPEAKER} Initializing...")?;
    writeln!(
        output,
        "I'm your steady companion through life's emotional waves."
    )?;
    writeln!(output, "Type 'quit' to end our conversation.\n")?;

    let mut answered = 0;
    let mut line = String::new();

    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        line.clear();
        match input.read_line(&mut line) {
            Ok(0) => {
                writeln!(output)?;
                farewell(companion, &mut output)?;
                break;
            }
            Ok(_) => {}
            Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                log::warn!("Unreadable input: {e}");
                writeln!(output, "{SPEAKER} I'm having trouble processing. Let's try again.")?;
                writeln!(output, "How are you feeling right now?")?;
                continue;
            }
            Err(e) => return Err(e).context("Failed to read input"),
        }

        let message = line.trim();
        if is_exit_command(message) {
            farewell(companion, &mut output)?;
            break;
        }
        if message.is_empty() {
            writeln!(output, "{SPEAKER} I'm listening...")?;
            continue;
        }

        let reply = companion.respond(message);
        answered += 1;
        log::debug!("Detected '{}' for session {}", reply.category, companion.session_id());
        if let Some(path) = autosave {
            companion.store().save_to_file(path);
        }
        writeln!(output, "{SPEAKER} {}", reply.text)?;
    }

    Ok(answered)
}

fn farewell<W: Write>(companion: &Companion, output: &mut W) -> Result<()> {
    writeln!(output, "\n{SPEAKER} {}", companion.summary())?;
    writeln!(
        output,
        "Remember - I'm always here when you need steady ground. Take care."
    )?;
    Ok(())
}
