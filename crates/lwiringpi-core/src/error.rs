use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum BindingError {
    /// A script argument could not be coerced to the declared parameter type.
    /// `position` is 1-based.
    #[error("bad argument #{position} to '{operation}' ({fault})")]
    ArgumentType {
        operation: &'static str,
        position: usize,
        fault: ArgumentFault,
    },
    /// The name is not in the dispatch table.
    #[error("no such operation: '{0}'")]
    NoSuchOperation(String),
    /// Anything reported by the native side, carried through unmodified.
    #[error("native fault ({code}): {message}")]
    NativeFault { code: i32, message: String },
    #[error("configuration error: {0}")]
    Config(String),
    /// A native function asked for an argument its descriptor does not declare.
    #[error("internal binding error: {0}")]
    Internal(String),
}

impl BindingError {
    pub(crate) fn argument(operation: &'static str, position: usize, fault: ArgumentFault) -> Self {
        BindingError::ArgumentType {
            operation,
            position,
            fault,
        }
    }

    /// Position of the offending argument, for `ArgumentType` errors.
    pub fn position(&self) -> Option<usize> {
        match self {
            BindingError::ArgumentType { position, .. } => Some(*position),
            _ => None,
        }
    }
}

/// Why one argument was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArgumentFault {
    /// Not a number and not a numeric string. `got` is the script type name,
    /// or "no value" for a missing argument.
    #[error("number expected, got {got}")]
    TypeMismatch { got: &'static str },
    #[error("number has no integer representation")]
    NotInteger,
    #[error("integer {0} out of range")]
    OutOfRange(i64),
}

pub type BindingResult<T> = Result<T, BindingError>;
