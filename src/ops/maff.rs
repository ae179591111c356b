use crate::error::Fault;
use crate::value::checked_float;
use crate::Value;

pub type Out = Result<Vec<Value>, Fault>;

const ARITY: &str = "operand count is checked by Ctx::apply";

pub fn one(v: Value) -> Out {
    Ok(vec![v])
}

pub fn monad(args: &[Value]) -> &Value {
    match args {
        [y] => y,
        _ => unreachable!("{}", ARITY),
    }
}

/// (A, B) where B was on top
pub fn dyad(args: &[Value]) -> (&Value, &Value) {
    match args {
        [a, b] => (a, b),
        _ => unreachable!("{}", ARITY),
    }
}

/// (A, B, C) where C was on top
pub fn triad(args: &[Value]) -> (&Value, &Value, &Value) {
    match args {
        [a, b, c] => (a, b, c),
        _ => unreachable!("{}", ARITY),
    }
}

/// monad, num -> float
pub fn m0ff(args: &[Value], f: impl FnOnce(f64) -> Result<f64, Fault>) -> Out {
    let y = monad(args).when_f64()?;
    one(Value::Float(checked_float(&[y], f(y)?)?))
}

/// dyad, (num, num) -> float
pub fn d0ff(args: &[Value], f: impl FnOnce(f64, f64) -> Result<f64, Fault>) -> Out {
    let (a, b) = dyad(args);
    let (a, b) = (a.when_f64()?, b.when_f64()?);
    one(Value::Float(checked_float(&[a, b], f(a, b)?)?))
}

pub fn positive(v: f64) -> Result<f64, Fault> {
    if v <= 0. {
        Err(Fault::Domain("math domain error"))
    } else {
        Ok(v)
    }
}
