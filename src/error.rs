use thiserror::Error;

pub type Result<T> = std::result::Result<T, CasError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CasError {
    #[error("parse error: {0}")]
    Parse(String),
    #[error("division by zero")]
    DivisionByZero,
    #[error("unknown operator: {0:?}")]
    UnknownOperator(char),
    #[error("operator {op:?} expects {expected} operand(s), got {found}")]
    Arity {
        op: char,
        expected: usize,
        found: usize,
    },
    #[error("no value for variable {0}")]
    UnboundVariable(String),
    #[error("variable not found: {0}")]
    VariableNotFound(String),
    #[error("cannot isolate {variable} in {expr}")]
    UnsupportedIsolation { variable: String, expr: String },
    #[error("inconsistent equation: {0} == 0")]
    Inconsistent(String),
    #[error("variable {0} is not determined by the system")]
    Underdetermined(String),
    #[error("gave up after {0} elimination steps")]
    StepLimit(usize),
}

impl CasError {
    /// The system provably has no unique solution.
    pub fn is_unsolvable(&self) -> bool {
        matches!(self, CasError::Inconsistent(_) | CasError::Underdetermined(_))
    }

    /// The engine could not handle the system; it may still be solvable.
    pub fn is_unsupported(&self) -> bool {
        matches!(
            self,
            CasError::UnsupportedIsolation { .. } | CasError::StepLimit(_)
        )
    }
}
