mod number;

use std::cmp::Ordering;
use std::fmt;

use crate::error::Fault;

pub use number::{checked_float, truncate, Num};

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    Bool(bool),
    Text(String),
}

impl Value {
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Int(_) => "integer",
            Value::Float(_) => "float",
            Value::Bool(_) => "boolean",
            Value::Text(_) => "text",
        }
    }

    /// zero, empty text and false are falsy; everything else (NaN included) is truthy
    pub fn truthy(&self) -> bool {
        match self {
            Value::Int(i) => *i != 0,
            Value::Float(f) => *f != 0.,
            Value::Bool(b) => *b,
            Value::Text(s) => !s.is_empty(),
        }
    }

    pub fn num(&self) -> Option<Num> {
        match self {
            Value::Int(i) => Some(Num::Int(*i)),
            Value::Float(f) => Some(Num::Float(*f)),
            Value::Bool(b) => Some(Num::Int(i64::from(*b))),
            Value::Text(_) => None,
        }
    }

    pub fn when_num(&self) -> Result<Num, Fault> {
        self.num()
            .ok_or_else(|| Fault::mismatch(format!("expected a number, found {}", self.kind())))
    }

    /// the integer in the value, for bitwise work; floats don't qualify
    pub fn when_integral(&self) -> Result<i64, Fault> {
        match self {
            Value::Int(i) => Ok(*i),
            Value::Bool(b) => Ok(i64::from(*b)),
            other => Err(Fault::mismatch(format!(
                "expected an integer, found {}",
                other.kind()
            ))),
        }
    }

    pub fn when_f64(&self) -> Result<f64, Fault> {
        Ok(self.when_num()?.approx_f64())
    }

    /// `None` when the two are comparable but unordered (NaN)
    pub fn compare(&self, other: &Value) -> Result<Option<Ordering>, Fault> {
        if let (Value::Text(a), Value::Text(b)) = (self, other) {
            return Ok(Some(a.cmp(b)));
        }
        match (self.num(), other.num()) {
            (Some(Num::Int(a)), Some(Num::Int(b))) => Ok(Some(a.cmp(&b))),
            (Some(Num::Int(a)), Some(Num::Float(b))) => Ok(cmp_int_float(a, b)),
            (Some(Num::Float(a)), Some(Num::Int(b))) => {
                Ok(cmp_int_float(b, a).map(Ordering::reverse))
            }
            (Some(a), Some(b)) => Ok(a.approx_f64().partial_cmp(&b.approx_f64())),
            _ => Err(Fault::mismatch(format!(
                "cannot compare {} with {}",
                self.kind(),
                other.kind()
            ))),
        }
    }
}

/// Exact: the integer is never rounded through `f64`.
fn cmp_int_float(a: i64, b: f64) -> Option<Ordering> {
    // 2^63, the first float past i64::MAX
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;
    if b.is_nan() {
        return None;
    }
    if b >= LIMIT {
        return Some(Ordering::Less);
    }
    if b < -LIMIT {
        return Some(Ordering::Greater);
    }
    let floor = b.floor();
    match a.cmp(&(floor as i64)) {
        Ordering::Equal if b > floor => Some(Ordering::Less),
        o => Some(o),
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(v) => write!(f, "{v:?}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Text(s) => write!(f, "'{s}'"),
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}
