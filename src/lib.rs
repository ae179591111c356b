pub mod ctx;
pub mod error;
pub mod eval;
pub mod ops;
pub mod scan;
pub mod test_impls;
pub mod value;

use std::collections::HashMap;

use lazy_static::lazy_static;

pub use crate::ctx::*;
pub use crate::error::GaugeError;
pub use crate::eval::*;
pub use crate::ops::Op;
pub use crate::scan::{scan, Token, TokenKind};
pub use crate::value::Value;

macro_rules! op {
    ($s:expr, $arity:expr, $f:expr) => {
        (
            $s,
            Op {
                name: $s,
                arity: $arity,
                f: $f,
            },
        )
    };
}

fn primitive_operators() -> HashMap<&'static str, Op> {
    use ops::*;
    HashMap::from([
        op!("+", 2, o_add),
        op!("-", 2, o_sub),
        op!("*", 2, o_mul),
        op!("/", 2, o_div),
        op!("%", 2, o_mod),
        op!("p", 1, o_pop),
        op!("++", 1, o_incr),
        op!("--", 1, o_decr),
        op!("/-/", 1, o_neg),
        op!("==", 2, o_eq),
        op!("!=", 2, o_ne),
        op!(">", 2, o_gt),
        op!("<", 2, o_lt),
        op!(">=", 2, o_ge),
        op!("<=", 2, o_le),
        op!("?", 3, o_choose),
        op!("&", 2, o_bit_and),
        op!("|", 2, o_bit_or),
        op!("^", 2, o_bit_xor),
        op!("~", 1, o_bit_not),
        op!(">>", 2, o_shr),
        op!("<<", 2, o_shl),
        op!("not", 1, o_not),
        op!("!", 1, o_not),
        op!("or", 2, o_or),
        // unreachable from the scanner, which splits these into two bitwise tokens
        op!("||", 2, o_or),
        op!("and", 2, o_and),
        op!("&&", 2, o_and),
    ])
}

fn primitive_functions() -> HashMap<&'static str, Op> {
    use ops::*;
    HashMap::from([
        op!("abs", 1, f_abs),
        op!("int", 1, f_int),
        op!("flr", 1, f_int),
        op!("rng", 3, f_rng),
        op!("pi", 0, f_pi),
        op!("cos", 1, f_cos),
        op!("lg", 1, f_lg),
        op!("min", 2, f_min),
        op!("sin", 1, f_sin),
        op!("acos", 1, f_acos),
        op!("ctg", 1, f_ctg),
        op!("ln", 1, f_ln),
        op!("sqr", 1, f_sqr),
        op!("asin", 1, f_asin),
        op!("eps", 1, f_eps),
        op!("log", 2, f_log),
        op!("sqrt", 1, f_sqrt),
        // unreachable from the scanner, identifiers carry no digits
        op!("atg2", 2, f_atg2),
        op!("exp", 1, f_exp),
        op!("max", 2, f_max),
        op!("pow", 2, f_pow),
        op!("tg", 1, f_tg),
        op!("atg", 1, f_atg),
    ])
}

lazy_static! {
    /// Keyed by lower-cased lexeme.
    pub static ref OPERATORS: HashMap<&'static str, Op> = primitive_operators();
    pub static ref FUNCTIONS: HashMap<&'static str, Op> = primitive_functions();
}
