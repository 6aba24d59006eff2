//=====================================================
// File: interpreter/errors.rs
//=====================================================
// Author: ZobieLabs
// License: Duality Public License (DPL v1.0)
// Goal: Recoverable script errors and the termination signal
// Objective: Keep scripting errors and deliberate process exit on two
//            disjoint channels so no frame can swallow an exit request
//=====================================================

use thiserror::Error;

use crate::types::ArrayError;

//=====================================================
// Section 1.0 - Error Kinds
//=====================================================

/// Wrong number of input arguments.
pub const CODE_INPUT_COUNT: u32 = 77;
/// Wrong number of output arguments.
pub const CODE_OUTPUT_COUNT: u32 = 78;
/// Invalid subscript.
pub const CODE_INVALID_INDEX: u32 = 21;
/// Name not bound in any visible scope.
pub const CODE_UNDEFINED: u32 = 4;
/// No overload registered for the operand type.
pub const CODE_UNDEFINED_OPERATION: u32 = 144;
/// Catch-all status used by built-ins.
pub const CODE_GENERIC: u32 = 999;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Arity,
    Type,
    Shape,
    Value,
    OverloadNotFound,
    Allocation,
    Index,
    Unsupported,
    Undefined,
}

impl ErrorKind {
    pub fn code_str(self) -> &'static str {
        match self {
            ErrorKind::Arity => "E001",
            ErrorKind::Type => "E002",
            ErrorKind::Shape => "E003",
            ErrorKind::Value => "E004",
            ErrorKind::OverloadNotFound => "E005",
            ErrorKind::Allocation => "E006",
            ErrorKind::Index => "E007",
            ErrorKind::Unsupported => "E008",
            ErrorKind::Undefined => "E009",
        }
    }
}

//=====================================================
// Section 2.0 - Recoverable Errors
//=====================================================

/// A recoverable scripting error.
///
/// The evaluator aborts the current statement when it sees one of these and
/// then resumes its loop.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ScriptError {
    pub kind: ErrorKind,
    pub code: u32,
    pub function: Option<String>,
    /// 1-based argument position, when a specific argument is at fault.
    pub position: Option<usize>,
    pub message: String,
}

impl ScriptError {
    pub fn new(kind: ErrorKind, code: u32, message: impl Into<String>) -> Self {
        Self {
            kind,
            code,
            function: None,
            position: None,
            message: message.into(),
        }
    }

    pub fn in_function(mut self, name: impl Into<String>) -> Self {
        self.function = Some(name.into());
        self
    }

    pub fn at_position(mut self, position: usize) -> Self {
        self.position = Some(position);
        self
    }

    pub fn code_str(&self) -> &'static str {
        self.kind.code_str()
    }

    pub fn input_count(function: &str, min: usize, max: usize) -> Self {
        let message = if min == max {
            format!("{function}: Wrong number of input arguments: {min} expected.")
        } else {
            format!("{function}: Wrong number of input argument(s): {min} to {max} expected.")
        };
        ScriptError::new(ErrorKind::Arity, CODE_INPUT_COUNT, message).in_function(function)
    }

    pub fn output_count(function: &str, max: usize) -> Self {
        ScriptError::new(
            ErrorKind::Arity,
            CODE_OUTPUT_COUNT,
            format!("{function}: Wrong number of output arguments: {max} expected."),
        )
        .in_function(function)
    }

    pub fn wrong_type(function: &str, position: usize, expected: &str) -> Self {
        ScriptError::new(
            ErrorKind::Type,
            CODE_GENERIC,
            format!("{function}: Wrong type for input argument #{position}: {expected} expected."),
        )
        .in_function(function)
        .at_position(position)
    }

    pub fn wrong_size(function: &str, position: usize, expected: &str) -> Self {
        ScriptError::new(
            ErrorKind::Shape,
            CODE_GENERIC,
            format!("{function}: Wrong size for input argument #{position}: {expected} expected."),
        )
        .in_function(function)
        .at_position(position)
    }

    pub fn wrong_value(function: &str, position: usize, expected: &str) -> Self {
        ScriptError::new(
            ErrorKind::Value,
            CODE_GENERIC,
            format!("{function}: Wrong value for input argument #{position}: {expected}."),
        )
        .in_function(function)
        .at_position(position)
    }

    pub fn undefined(name: &str) -> Self {
        ScriptError::new(
            ErrorKind::Undefined,
            CODE_UNDEFINED,
            format!("Undefined variable: {name}"),
        )
    }
}

impl From<ArrayError> for ScriptError {
    fn from(value: ArrayError) -> Self {
        let (kind, code) = match &value {
            ArrayError::SizeOverflow { .. } | ArrayError::AllocationFailed { .. } => {
                (ErrorKind::Allocation, CODE_GENERIC)
            }
            ArrayError::ShapeMismatch { .. } => (ErrorKind::Shape, CODE_GENERIC),
            ArrayError::IndexOutOfRange { .. } | ArrayError::InvalidIndex => {
                (ErrorKind::Index, CODE_INVALID_INDEX)
            }
            ArrayError::UnsupportedRank { .. } => (ErrorKind::Unsupported, CODE_GENERIC),
        };
        ScriptError::new(kind, code, value.to_string())
    }
}

//=====================================================
// Section 3.0 - Termination Signal
//=====================================================

/// Deliberate request to end the interpreter process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Termination {
    pub status: i32,
}

/// Anything that stops normal evaluation of a call.
///
/// Frames that recover from scripting errors must go through
/// [`Interrupt::recoverable`] so that `Abort` always keeps unwinding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Interrupt {
    #[error(transparent)]
    Error(#[from] ScriptError),
    #[error("execution aborted with exit status {}", .0.status)]
    Abort(Termination),
}

impl Interrupt {
    /// Splits the two channels: recoverable errors come back as `Ok`,
    /// termination stays an `Err` for the caller to re-propagate.
    pub fn recoverable(self) -> Result<ScriptError, Termination> {
        match self {
            Interrupt::Error(error) => Ok(error),
            Interrupt::Abort(termination) => Err(termination),
        }
    }

    pub fn is_abort(&self) -> bool {
        matches!(self, Interrupt::Abort(_))
    }

    pub fn as_error(&self) -> Option<&ScriptError> {
        match self {
            Interrupt::Error(error) => Some(error),
            Interrupt::Abort(_) => None,
        }
    }
}

impl From<ArrayError> for Interrupt {
    fn from(value: ArrayError) -> Self {
        Interrupt::Error(value.into())
    }
}

impl From<Termination> for Interrupt {
    fn from(value: Termination) -> Self {
        Interrupt::Abort(value)
    }
}

pub type CallResult<T> = Result<T, Interrupt>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn array_errors_map_to_kinds() {
        let err: ScriptError = ArrayError::SizeOverflow {
            shape: vec![usize::MAX, 2],
        }
        .into();
        assert_eq!(err.kind, ErrorKind::Allocation);
        assert_eq!(err.code_str(), "E006");

        let err: ScriptError = ArrayError::IndexOutOfRange { index: 9, size: 3 }.into();
        assert_eq!(err.kind, ErrorKind::Index);
        assert_eq!(err.code, CODE_INVALID_INDEX);
    }

    #[test]
    fn termination_is_not_recoverable() {
        let interrupt = Interrupt::from(Termination { status: 3 });
        assert!(interrupt.is_abort());
        assert!(interrupt.as_error().is_none());
        assert_eq!(interrupt.recoverable(), Err(Termination { status: 3 }));
    }

    #[test]
    fn input_count_message_names_range() {
        let err = ScriptError::input_count("argn", 0, 1);
        assert_eq!(
            err.message,
            "argn: Wrong number of input argument(s): 0 to 1 expected."
        );
        assert_eq!(err.function.as_deref(), Some("argn"));
        assert_eq!(err.code, CODE_INPUT_COUNT);
    }
}

//=====================================================
// End of file
//=====================================================
