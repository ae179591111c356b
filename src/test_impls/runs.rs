use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use super::run_to_string;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RunList {
    pub runs: Vec<Run>,
}

/// One line and the stack it must leave behind, as `pstack` would print it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Run {
    pub expr: String,
    pub stack: String,
}

impl RunList {
    pub fn open(content: impl AsRef<str>) -> Result<Self> {
        Ok(toml::from_str(content.as_ref())?)
    }

    pub fn save(&mut self) -> Result<String> {
        self.runs.sort_by(|a, b| a.expr.cmp(&b.expr));
        Ok(toml::to_string_pretty(self)?)
    }
}

impl Run {
    pub fn check(&self) -> Result<()> {
        let got = run_to_string(&self.expr).context("running expression")?;
        if got != self.stack {
            bail!(
                "incorrect stack for {:?}: we got {got}, expected {}",
                self.expr,
                self.stack
            );
        }
        Ok(())
    }
}
