mod vars;

use std::collections::HashMap;

use itertools::Itertools;
use log::debug;

use crate::ops::Op;
use crate::{GaugeError, Value};

pub use vars::Vars;

/// The one evaluation context of a session: the value stack and the variables.
#[derive(Clone, Default, Debug)]
pub struct Ctx {
    stack: Vec<Value>,
    vars: Vars,
}

impl Ctx {
    pub fn empty() -> Self {
        Ctx::default()
    }

    pub fn push(&mut self, v: Value) {
        self.stack.push(v);
    }

    /// `op` only names the culprit in the underflow report.
    pub fn pop(&mut self, op: impl ToString) -> Result<Value, GaugeError> {
        self.stack.pop().ok_or_else(|| GaugeError::StackUnderflow {
            op: op.to_string(),
            needed: 1,
            found: 0,
        })
    }

    /// Run `op` on the top `op.arity` values. Nothing is popped on underflow;
    /// operands of a failing operation are consumed and not restored.
    pub fn apply(&mut self, op: &Op) -> Result<(), GaugeError> {
        let found = self.stack.len();
        if found < op.arity {
            return Err(GaugeError::StackUnderflow {
                op: op.name.to_string(),
                needed: op.arity,
                found,
            });
        }
        let args = self.stack.split_off(found - op.arity);
        debug!("{:?} on {:?}", op, args);
        let out = op.call(&args)?;
        self.stack.extend(out);
        Ok(())
    }

    pub fn read(&self, name: impl AsRef<str>) -> Option<&Value> {
        self.vars.read(name)
    }

    pub fn write(&mut self, name: impl ToString, value: Value) {
        self.vars.write(name, value);
    }

    /// bottom first
    pub fn inspect_stack(&self) -> &[Value] {
        &self.stack
    }

    pub fn inspect_variables(&self) -> &HashMap<String, Value> {
        self.vars.as_map()
    }

    pub fn vars(&self) -> &Vars {
        &self.vars
    }

    pub fn fmt_stack(&self) -> String {
        format!("[{}]", self.stack.iter().join(", "))
    }
}
