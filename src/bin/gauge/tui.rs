use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use gauge::Ctx;
use log::{debug, warn};
use rustyline::config::Configurer;
use rustyline::error::ReadlineError;
use rustyline::Editor;

use super::EvalState;

const PROMPT: &str = "> ";

/// `<data dir>/history`, or `None` when there is nowhere to keep it.
fn history_file() -> Option<PathBuf> {
    let dirs = ProjectDirs::from("github", "gauge", "gauge")?;
    let dir = dirs.data_dir();
    if let Err(e) = fs::create_dir_all(dir) {
        warn!("not keeping history in {}: {e}", dir.display());
        return None;
    }
    Some(dir.join("history"))
}

pub fn drive() -> Result<()> {
    let history = history_file();
    let mut rl = Editor::<()>::new().context("starting the line editor")?;
    rl.set_auto_add_history(true);
    if let Some(path) = history.as_ref().filter(|p| p.exists()) {
        rl.load_history(path)
            .with_context(|| format!("loading {}", path.display()))?;
    }

    let mut ctx = Ctx::empty();
    loop {
        match rl.readline(PROMPT) {
            Ok(line) => {
                if super::eval(&line, &mut ctx) == EvalState::Done {
                    break;
                }
            }
            Err(ReadlineError::Eof | ReadlineError::Interrupted) => break,
            Err(e) => return Err(e).context("reading a line"),
        }
    }
    debug!(
        "leaving with {} value(s) on the stack, {} variable(s)",
        ctx.inspect_stack().len(),
        ctx.inspect_variables().len()
    );

    if let Some(path) = history {
        rl.save_history(&path)
            .with_context(|| format!("saving {}", path.display()))?;
    }
    Ok(())
}
