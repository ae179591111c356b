mod impl_functions;
mod impl_operators;
pub mod maff;

use std::fmt;

use crate::error::Fault;
use crate::{GaugeError, Value};

pub use impl_functions::*;
pub use impl_operators::*;

/// Receives exactly `arity` operands, deepest first, and returns what to push back.
pub type OpFn = fn(&[Value]) -> Result<Vec<Value>, Fault>;

#[derive(Copy, Clone)]
pub struct Op {
    pub name: &'static str,
    pub arity: usize,
    pub f: OpFn,
}

impl Op {
    pub fn call(&self, args: &[Value]) -> Result<Vec<Value>, GaugeError> {
        debug_assert_eq!(args.len(), self.arity, "operand count for {}", self.name);
        (self.f)(args).map_err(|fault| fault.at(self.name))
    }
}

impl fmt::Debug for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Op({}/{})", self.name, self.arity)
    }
}

impl PartialEq for Op {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}
