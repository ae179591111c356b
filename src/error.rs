use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GaugeError {
    #[error("lexical error at {offset}")]
    Lexical { offset: usize },
    #[error("stack underflow: '{op}' needs {needed} value(s), the stack holds {found}")]
    StackUnderflow {
        op: String,
        needed: usize,
        found: usize,
    },
    #[error("Undefined: {0}")]
    UndefinedVariable(String),
    #[error("type mismatch in '{op}': {detail}")]
    TypeMismatch { op: String, detail: String },
    #[error("division by zero in '{op}'")]
    DivisionByZero { op: String },
    #[error("'{op}': {detail}")]
    Domain { op: String, detail: &'static str },
    #[error("'{op}': result is beyond the numeric range")]
    Overflow { op: String },
}

impl GaugeError {
    /// Only a lexical error stops the rest of the line.
    pub fn is_fatal(&self) -> bool {
        matches!(self, GaugeError::Lexical { .. })
    }
}

/// A failure inside an operation body, before we know which lexeme ran it.
#[derive(Debug, Clone, PartialEq)]
pub enum Fault {
    TypeMismatch(String),
    DivisionByZero,
    Domain(&'static str),
    Overflow,
}

impl Fault {
    pub fn mismatch(detail: impl ToString) -> Fault {
        Fault::TypeMismatch(detail.to_string())
    }

    pub fn at(self, op: impl ToString) -> GaugeError {
        let op = op.to_string();
        match self {
            Fault::TypeMismatch(detail) => GaugeError::TypeMismatch { op, detail },
            Fault::DivisionByZero => GaugeError::DivisionByZero { op },
            Fault::Domain(detail) => GaugeError::Domain { op, detail },
            Fault::Overflow => GaugeError::Overflow { op },
        }
    }
}
