use std::collections::HashMap;

use log::{debug, trace};

use crate::scan::{self, Token, TokenKind};
use crate::{Ctx, GaugeError, Op, Value, FUNCTIONS, OPERATORS};

type Table = HashMap<&'static str, Op>;

/// What happened while evaluating one line.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct LineReport {
    /// non-fatal conditions, in the order they happened
    pub conditions: Vec<GaugeError>,
    /// the lexical error that cut the line short
    pub fatal: Option<GaugeError>,
}

impl LineReport {
    pub fn is_success(&self) -> bool {
        self.conditions.is_empty() && self.fatal.is_none()
    }

    pub fn lexical_offset(&self) -> Option<usize> {
        match self.fatal {
            Some(GaugeError::Lexical { offset }) => Some(offset),
            _ => None,
        }
    }

    /// every error, the fatal one last
    pub fn errors(&self) -> impl Iterator<Item = &GaugeError> {
        self.conditions.iter().chain(self.fatal.iter())
    }

    pub fn into_result(self) -> Result<(), GaugeError> {
        match self.conditions.into_iter().chain(self.fatal).next() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn record(&mut self, result: Result<(), GaugeError>) {
        if let Err(e) = result {
            debug!("condition: {e}");
            self.conditions.push(e);
        }
    }
}

/// Match and execute one token at a time, left to right. Only a lexical
/// error stops the line; everything the line did before it stays done.
pub fn evaluate(line: &str, ctx: &mut Ctx) -> LineReport {
    let mut report = LineReport::default();
    for token in scan::tokens(line) {
        match token {
            Ok(token) => exec(&token, ctx, &mut report),
            Err(e) => {
                debug!("abandoning {line:?}: {e}");
                report.fatal = Some(e);
            }
        }
    }
    report
}

fn exec(token: &Token, ctx: &mut Ctx, report: &mut LineReport) {
    match token.kind {
        TokenKind::Whitespace => (),
        TokenKind::String => ctx.push(Value::Text(
            token.text().expect("string rule captures").to_string(),
        )),
        TokenKind::Int => report.record(
            token
                .lexeme
                .parse::<i64>()
                .map(|i| ctx.push(Value::Int(i)))
                .map_err(|_| GaugeError::Overflow {
                    op: token.lexeme.clone(),
                }),
        ),
        TokenKind::Float => ctx.push(Value::Float(
            token.lexeme.parse().expect("float rule is digits.digits"),
        )),
        TokenKind::Operator | TokenKind::Identifier => {
            dispatch(&token.key(), &[&*OPERATORS, &*FUNCTIONS], ctx, report)
        }
        TokenKind::VarRead => report.record(read_var(token, ctx)),
        TokenKind::VarWrite => report.record(write_var(token, ctx)),
    }
}

/// Every table is consulted independently: a lexeme in two tables runs twice,
/// and a failure in one doesn't skip the next.
fn dispatch(key: &str, tables: &[&Table], ctx: &mut Ctx, report: &mut LineReport) {
    let mut found = false;
    for table in tables {
        if let Some(op) = table.get(key) {
            found = true;
            report.record(ctx.apply(op));
        }
    }
    if !found {
        debug!("no operation for {key:?}, passing over it");
    }
}

fn read_var(token: &Token, ctx: &mut Ctx) -> Result<(), GaugeError> {
    let name = token.name().expect("variable rules capture a name");
    if let Some(unit) = token.unit() {
        trace!("unit {unit:?} on {name:?} is not converted");
    }
    let value = ctx
        .read(name)
        .cloned()
        .ok_or_else(|| GaugeError::UndefinedVariable(name.to_string()))?;
    ctx.push(value);
    Ok(())
}

fn write_var(token: &Token, ctx: &mut Ctx) -> Result<(), GaugeError> {
    let name = token.name().expect("variable rules capture a name");
    if let Some(unit) = token.unit() {
        trace!("unit {unit:?} on {name:?} is not converted");
    }
    let value = ctx.pop(&token.lexeme)?;
    ctx.write(name, value);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(line: &str) -> (Ctx, LineReport) {
        let mut ctx = Ctx::empty();
        let report = evaluate(line, &mut ctx);
        (ctx, report)
    }

    #[test]
    fn interleaved_execution_survives_lexical_error() {
        let (ctx, report) = run("3 @ 4");
        assert_eq!(ctx.inspect_stack(), &[Value::Int(3)]);
        assert_eq!(report.lexical_offset(), Some(2));
        assert!(report.conditions.is_empty());
    }

    #[test]
    fn conditions_do_not_stop_the_line() {
        let (ctx, report) = run("(y) p 5");
        assert_eq!(ctx.inspect_stack(), &[Value::Int(5)]);
        assert_eq!(report.conditions.len(), 2);
        assert_eq!(
            report.conditions[0],
            GaugeError::UndefinedVariable("y".to_string())
        );
        assert!(matches!(
            report.conditions[1],
            GaugeError::StackUnderflow { .. }
        ));
        assert!(report.fatal.is_none());
    }

    #[test]
    fn unknown_identifiers_pass_through() {
        let (ctx, report) = run("1 frobnicate 2");
        assert!(report.is_success());
        assert_eq!(ctx.inspect_stack(), &[Value::Int(1), Value::Int(2)]);
    }

    #[test]
    fn case_insensitive_dispatch() {
        let (ctx, report) = run("1 0 OR 2 SQRT");
        assert!(report.is_success());
        assert_eq!(ctx.inspect_stack()[0], Value::Int(1));
        assert_eq!(ctx.inspect_stack()[1], Value::Float(2f64.sqrt()));
    }

    fn pop_table() -> Table {
        HashMap::from([(
            "p",
            Op {
                name: "p",
                arity: 1,
                f: crate::ops::o_pop,
            },
        )])
    }

    #[test]
    fn lexeme_in_both_tables_runs_twice() {
        let (ops, funcs) = (pop_table(), pop_table());
        let mut ctx = Ctx::empty();
        for i in 1..=3 {
            ctx.push(Value::Int(i));
        }
        let mut report = LineReport::default();
        dispatch("p", &[&ops, &funcs], &mut ctx, &mut report);
        assert!(report.is_success());
        assert_eq!(ctx.inspect_stack(), &[Value::Int(1)]);

        // the first pops the last value, the second still runs and underflows
        dispatch("p", &[&ops, &funcs], &mut ctx, &mut report);
        assert!(ctx.inspect_stack().is_empty());
        assert!(matches!(
            report.conditions[..],
            [GaugeError::StackUnderflow { .. }]
        ));
    }

    #[test]
    fn write_underflow() {
        let (ctx, report) = run("(>x)");
        assert_eq!(
            report.into_result(),
            Err(GaugeError::StackUnderflow {
                op: "(>x)".to_string(),
                needed: 1,
                found: 0
            })
        );
        assert!(ctx.inspect_variables().is_empty());
    }

    #[test]
    fn huge_integer_literal() {
        let (ctx, report) = run("99999999999999999999 1");
        assert!(matches!(
            report.conditions[..],
            [GaugeError::Overflow { .. }]
        ));
        assert_eq!(ctx.inspect_stack(), &[Value::Int(1)]);
    }

    #[test]
    fn errors_lists_fatal_last() {
        let (_, report) = run("p 1 $");
        let errors: Vec<_> = report.errors().collect();
        assert_eq!(errors.len(), 2);
        assert!(errors[1].is_fatal());
    }
}
