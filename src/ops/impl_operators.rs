use std::cmp::Ordering::{self, *};

use crate::error::Fault;
use crate::value::checked_float;
use crate::Value;

use super::maff::{dyad, monad, one, triad, Out};

pub fn o_pop(_args: &[Value]) -> Out {
    Ok(vec![])
}

pub fn o_add(args: &[Value]) -> Out {
    let (a, b) = dyad(args);
    if let (Value::Text(a), Value::Text(b)) = (a, b) {
        return one(Value::Text(format!("{a}{b}")));
    }
    one(a.when_num()?.dyad(b.when_num()?, i64::checked_add, |a, b| a + b)?)
}

pub fn o_sub(args: &[Value]) -> Out {
    let (a, b) = dyad(args);
    one(a.when_num()?.dyad(b.when_num()?, i64::checked_sub, |a, b| a - b)?)
}

pub fn o_mul(args: &[Value]) -> Out {
    let (a, b) = dyad(args);
    one(a.when_num()?.dyad(b.when_num()?, i64::checked_mul, |a, b| a * b)?)
}

/// always true division
pub fn o_div(args: &[Value]) -> Out {
    let (a, b) = dyad(args);
    let (a, b) = (a.when_f64()?, b.when_f64()?);
    if b == 0. {
        return Err(Fault::DivisionByZero);
    }
    one(Value::Float(checked_float(&[a, b], a / b)?))
}

/// `fmod`: the remainder takes the sign of the dividend
pub fn o_mod(args: &[Value]) -> Out {
    let (a, b) = dyad(args);
    let (a, b) = (a.when_f64()?, b.when_f64()?);
    let r = a % b;
    if r.is_nan() && !a.is_nan() && !b.is_nan() {
        return Err(Fault::Domain("math domain error"));
    }
    one(Value::Float(r))
}

pub fn o_incr(args: &[Value]) -> Out {
    one(monad(args).when_num()?.monad(|y| y.checked_add(1), |y| y + 1.)?)
}

pub fn o_decr(args: &[Value]) -> Out {
    one(monad(args).when_num()?.monad(|y| y.checked_sub(1), |y| y - 1.)?)
}

pub fn o_neg(args: &[Value]) -> Out {
    one(monad(args).when_num()?.monad(i64::checked_neg, |y| -y)?)
}

fn compare_with(args: &[Value], pred: impl FnOnce(Option<Ordering>) -> bool) -> Out {
    let (a, b) = dyad(args);
    one(Value::Bool(pred(a.compare(b)?)))
}

pub fn o_eq(args: &[Value]) -> Out {
    compare_with(args, |o| o == Some(Equal))
}

pub fn o_ne(args: &[Value]) -> Out {
    compare_with(args, |o| o != Some(Equal))
}

pub fn o_gt(args: &[Value]) -> Out {
    compare_with(args, |o| o == Some(Greater))
}

pub fn o_lt(args: &[Value]) -> Out {
    compare_with(args, |o| o == Some(Less))
}

pub fn o_ge(args: &[Value]) -> Out {
    compare_with(args, |o| matches!(o, Some(Greater | Equal)))
}

pub fn o_le(args: &[Value]) -> Out {
    compare_with(args, |o| matches!(o, Some(Less | Equal)))
}

/// A B C ? -> A if C else B
pub fn o_choose(args: &[Value]) -> Out {
    let (a, b, c) = triad(args);
    one(if c.truthy() { a.clone() } else { b.clone() })
}

fn bitwise(args: &[Value], f: fn(i64, i64) -> i64) -> Out {
    let (a, b) = dyad(args);
    if let (Value::Bool(x), Value::Bool(y)) = (a, b) {
        return one(Value::Bool(f(i64::from(*x), i64::from(*y)) != 0));
    }
    one(Value::Int(f(a.when_integral()?, b.when_integral()?)))
}

pub fn o_bit_and(args: &[Value]) -> Out {
    bitwise(args, |a, b| a & b)
}

pub fn o_bit_or(args: &[Value]) -> Out {
    bitwise(args, |a, b| a | b)
}

pub fn o_bit_xor(args: &[Value]) -> Out {
    bitwise(args, |a, b| a ^ b)
}

pub fn o_bit_not(args: &[Value]) -> Out {
    one(Value::Int(!monad(args).when_integral()?))
}

fn shift_operands(args: &[Value]) -> Result<(i64, i64), Fault> {
    let (a, b) = dyad(args);
    let (a, b) = (a.when_integral()?, b.when_integral()?);
    if b < 0 {
        return Err(Fault::Domain("negative shift count"));
    }
    Ok((a, b))
}

/// arithmetic shift; floors like division by a power of two
pub fn o_shr(args: &[Value]) -> Out {
    let (a, b) = shift_operands(args)?;
    let r = if b >= 64 {
        if a < 0 {
            -1
        } else {
            0
        }
    } else {
        a >> b
    };
    one(Value::Int(r))
}

pub fn o_shl(args: &[Value]) -> Out {
    let (a, b) = shift_operands(args)?;
    if a == 0 {
        return one(Value::Int(0));
    }
    if b >= 64 {
        return Err(Fault::Overflow);
    }
    let r = a << b;
    if r >> b != a {
        return Err(Fault::Overflow);
    }
    one(Value::Int(r))
}

pub fn o_not(args: &[Value]) -> Out {
    one(Value::Bool(!monad(args).truthy()))
}

/// both operands are already evaluated; returns the deciding operand
pub fn o_and(args: &[Value]) -> Out {
    let (a, b) = dyad(args);
    one(if a.truthy() { b.clone() } else { a.clone() })
}

pub fn o_or(args: &[Value]) -> Out {
    let (a, b) = dyad(args);
    one(if a.truthy() { a.clone() } else { b.clone() })
}
