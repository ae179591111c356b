use crate::error::Fault;
use crate::Value;

/// The numeric view of a value: booleans count as 0 and 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Num {
    Int(i64),
    Float(f64),
}

impl Num {
    pub fn approx_f64(self) -> f64 {
        match self {
            Num::Int(i) => i as f64,
            Num::Float(f) => f,
        }
    }

    /// integer path when both sides are integers, float path otherwise
    pub fn dyad(
        self,
        other: Num,
        int: impl FnOnce(i64, i64) -> Option<i64>,
        float: impl FnOnce(f64, f64) -> f64,
    ) -> Result<Value, Fault> {
        match (self, other) {
            (Num::Int(a), Num::Int(b)) => int(a, b).map(Value::Int).ok_or(Fault::Overflow),
            (a, b) => {
                let (a, b) = (a.approx_f64(), b.approx_f64());
                Ok(Value::Float(checked_float(&[a, b], float(a, b))?))
            }
        }
    }

    pub fn monad(
        self,
        int: impl FnOnce(i64) -> Option<i64>,
        float: impl FnOnce(f64) -> f64,
    ) -> Result<Value, Fault> {
        match self {
            Num::Int(a) => int(a).map(Value::Int).ok_or(Fault::Overflow),
            Num::Float(a) => Ok(Value::Float(checked_float(&[a], float(a))?)),
        }
    }
}

/// NaN out of non-NaN inputs is a domain error; infinity out of finite inputs is an overflow.
pub fn checked_float(inputs: &[f64], result: f64) -> Result<f64, Fault> {
    if result.is_nan() && !inputs.iter().any(|v| v.is_nan()) {
        return Err(Fault::Domain("math domain error"));
    }
    if result.is_infinite() && inputs.iter().all(|v| v.is_finite()) {
        return Err(Fault::Overflow);
    }
    Ok(result)
}

/// Truncate toward zero, refusing anything an `i64` can't hold.
pub fn truncate(v: f64) -> Result<i64, Fault> {
    if v.is_nan() {
        return Err(Fault::Domain("cannot convert NaN to an integer"));
    }
    let t = v.trunc();
    // i64::MAX as f64 rounds up to 2^63
    if t < i64::MIN as f64 || t >= i64::MAX as f64 {
        return Err(Fault::Overflow);
    }
    Ok(t as i64)
}
