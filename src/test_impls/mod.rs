mod runs;

use anyhow::{anyhow, Context, Result};
use log::debug;

use crate::{evaluate, Ctx, Value};

pub use runs::{Run, RunList};

/// Evaluate `line` in a fresh context, failing on anything the line reports.
pub fn scan_eval(line: &str) -> Result<Vec<Value>> {
    let mut ctx = Ctx::empty();
    scan_eval_in(line, &mut ctx)?;
    Ok(ctx.inspect_stack().to_vec())
}

pub fn scan_eval_in(line: &str, ctx: &mut Ctx) -> Result<()> {
    let report = evaluate(line, ctx);
    debug!("{line:?}: {report:?}");
    report
        .into_result()
        .with_context(|| anyhow!("evaluating {:?}", line))
}

/// The stack after `line`, as the shell's `pstack` prints it.
pub fn run_to_string(line: &str) -> Result<String> {
    let mut ctx = Ctx::empty();
    scan_eval_in(line, &mut ctx)?;
    Ok(ctx.fmt_stack())
}
