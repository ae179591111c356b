use std::cmp::Ordering::*;
use std::f64::consts::PI;

use crate::error::Fault;
use crate::value::{truncate, Num};
use crate::Value;

use super::maff::{d0ff, dyad, m0ff, monad, one, positive, triad, Out};

fn le(a: &Value, b: &Value) -> Result<bool, Fault> {
    Ok(matches!(a.compare(b)?, Some(Less | Equal)))
}

fn ge(a: &Value, b: &Value) -> Result<bool, Fault> {
    Ok(matches!(a.compare(b)?, Some(Greater | Equal)))
}

pub fn f_abs(args: &[Value]) -> Out {
    one(monad(args).when_num()?.monad(i64::checked_abs, f64::abs)?)
}

/// truncates toward zero
pub fn f_int(args: &[Value]) -> Out {
    let y = match monad(args).when_num()? {
        Num::Int(i) => i,
        Num::Float(f) => truncate(f)?,
    };
    one(Value::Int(y))
}

/// A B C rng -> A <= C <= B
pub fn f_rng(args: &[Value]) -> Out {
    let (a, b, c) = triad(args);
    // the upper bound is only compared once the lower one holds
    let inside = le(a, c)? && le(c, b)?;
    one(Value::Bool(inside))
}

pub fn f_pi(_args: &[Value]) -> Out {
    one(Value::Float(PI))
}

pub fn f_cos(args: &[Value]) -> Out {
    m0ff(args, |y| Ok(y.cos()))
}

pub fn f_lg(args: &[Value]) -> Out {
    m0ff(args, |y| positive(y).map(f64::log10))
}

pub fn f_min(args: &[Value]) -> Out {
    let (a, b) = dyad(args);
    let pick = if le(a, b)? { a } else { b };
    one(pick.clone())
}

pub fn f_sin(args: &[Value]) -> Out {
    m0ff(args, |y| Ok(y.sin()))
}

pub fn f_acos(args: &[Value]) -> Out {
    m0ff(args, |y| Ok(y.acos()))
}

pub fn f_ctg(args: &[Value]) -> Out {
    m0ff(args, |y| match y.tan() {
        t if t == 0. => Err(Fault::DivisionByZero),
        t => Ok(1. / t),
    })
}

pub fn f_ln(args: &[Value]) -> Out {
    m0ff(args, |y| positive(y).map(f64::ln))
}

pub fn f_sqr(args: &[Value]) -> Out {
    let y = monad(args).when_num()?;
    one(y.dyad(y, i64::checked_mul, |a, b| a * b)?)
}

pub fn f_asin(args: &[Value]) -> Out {
    m0ff(args, |y| Ok(y.asin()))
}

/// Always machine epsilon; the operand is consumed but doesn't scale the result.
pub fn f_eps(args: &[Value]) -> Out {
    let _ = monad(args);
    one(Value::Float(f64::EPSILON))
}

/// A B log -> log of A in base B
pub fn f_log(args: &[Value]) -> Out {
    d0ff(args, |a, b| {
        let base = positive(b)?.ln();
        if base == 0. {
            return Err(Fault::DivisionByZero);
        }
        Ok(positive(a)?.ln() / base)
    })
}

pub fn f_sqrt(args: &[Value]) -> Out {
    m0ff(args, |y| Ok(y.sqrt()))
}

pub fn f_atg2(args: &[Value]) -> Out {
    d0ff(args, |a, b| Ok(a.atan2(b)))
}

pub fn f_exp(args: &[Value]) -> Out {
    m0ff(args, |y| Ok(y.exp()))
}

pub fn f_max(args: &[Value]) -> Out {
    let (a, b) = dyad(args);
    let pick = if ge(a, b)? { a } else { b };
    one(pick.clone())
}

pub fn f_pow(args: &[Value]) -> Out {
    d0ff(args, |a, b| {
        if a == 0. && b < 0. {
            return Err(Fault::Domain("math domain error"));
        }
        Ok(a.powf(b))
    })
}

pub fn f_tg(args: &[Value]) -> Out {
    m0ff(args, |y| Ok(y.tan()))
}

pub fn f_atg(args: &[Value]) -> Out {
    m0ff(args, |y| Ok(y.atan()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn floats(out: Out) -> f64 {
        match out.as_deref() {
            Ok([Value::Float(f)]) => *f,
            other => panic!("expected a single float, got {other:?}"),
        }
    }

    #[test]
    fn int_truncates() {
        assert_eq!(f_int(&[Value::Float(-2.5)]), Ok(vec![Value::Int(-2)]));
        assert_eq!(f_int(&[Value::Int(7)]), Ok(vec![Value::Int(7)]));
        assert_eq!(f_int(&[Value::Bool(true)]), Ok(vec![Value::Int(1)]));
    }

    #[test]
    fn logs() {
        assert!((floats(f_log(&[Value::Int(8), Value::Int(2)])) - 3.).abs() < 1e-12);
        assert!((floats(f_lg(&[Value::Int(1000)])) - 3.).abs() < 1e-12);
        assert!(matches!(f_ln(&[Value::Int(0)]), Err(Fault::Domain(_))));
        assert_eq!(
            f_log(&[Value::Int(8), Value::Int(1)]),
            Err(Fault::DivisionByZero)
        );
    }

    #[test]
    fn domain_errors() {
        assert!(matches!(f_sqrt(&[Value::Int(-1)]), Err(Fault::Domain(_))));
        assert!(matches!(f_acos(&[Value::Int(2)]), Err(Fault::Domain(_))));
        assert!(matches!(
            f_pow(&[Value::Int(0), Value::Int(-1)]),
            Err(Fault::Domain(_))
        ));
        assert_eq!(f_exp(&[Value::Int(1000)]), Err(Fault::Overflow));
        assert_eq!(f_ctg(&[Value::Int(0)]), Err(Fault::DivisionByZero));
    }

    #[test]
    fn rng_bounds() {
        let inside = [Value::Int(1), Value::Int(5), Value::Float(2.5)];
        let outside = [Value::Int(1), Value::Int(5), Value::Int(6)];
        assert_eq!(f_rng(&inside), Ok(vec![Value::Bool(true)]));
        assert_eq!(f_rng(&outside), Ok(vec![Value::Bool(false)]));
        assert_eq!(
            f_rng(&[Value::Int(5), Value::Int(5), Value::Int(5)]),
            Ok(vec![Value::Bool(true)])
        );
    }

    #[test]
    fn rng_short_circuits() {
        let below = [Value::Int(5), Value::from("x"), Value::Int(1)];
        assert_eq!(f_rng(&below), Ok(vec![Value::Bool(false)]));
        let above = [Value::Int(0), Value::from("x"), Value::Int(1)];
        assert!(matches!(f_rng(&above), Err(Fault::TypeMismatch(_))));
    }

    #[test]
    fn atg2_takes_y_then_x() {
        let quarter = floats(f_atg2(&[Value::Int(1), Value::Int(1)]));
        assert!((quarter - std::f64::consts::FRAC_PI_4).abs() < 1e-12);
        let half = floats(f_atg2(&[Value::Int(1), Value::Int(0)]));
        assert!((half - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn sqr_overflow() {
        assert_eq!(f_sqr(&[Value::Float(1e200)]), Err(Fault::Overflow));
        assert_eq!(f_sqr(&[Value::Int(i64::MAX)]), Err(Fault::Overflow));
    }

    #[test]
    fn min_max_keep_operand() {
        let args = [Value::Int(3), Value::Float(2.5)];
        assert_eq!(f_min(&args), Ok(vec![Value::Float(2.5)]));
        assert_eq!(f_max(&args), Ok(vec![Value::Int(3)]));
        let args = [Value::from("b"), Value::from("a")];
        assert_eq!(f_min(&args), Ok(vec![Value::from("a")]));
    }

    #[test]
    fn eps_ignores_operand() {
        assert_eq!(floats(f_eps(&[Value::Int(1_000_000)])), f64::EPSILON);
        assert_eq!(floats(f_eps(&[Value::from("x")])), f64::EPSILON);
    }

    #[test]
    fn text_rejected() {
        assert!(matches!(
            f_cos(&[Value::from("x")]),
            Err(Fault::TypeMismatch(_))
        ));
    }
}
