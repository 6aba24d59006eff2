//=====================================================
// File: interpreter/mod.rs
//=====================================================
// Author: ZobieLabs
// License: Duality Public License (DPL v1.0)
// Goal: Interpreter-side state and control flow
// Objective: Expose the context, error channels, host boundary, and
//            statement loop consumed by the evaluator
//=====================================================

pub mod channel;
pub mod context;
pub mod errors;
pub mod host;
pub mod session;

pub use channel::{EmittedError, ErrorChannel};
pub use context::{Context, NARGIN, NARGOUT};
pub use errors::{
    CODE_GENERIC, CODE_INPUT_COUNT, CODE_INVALID_INDEX, CODE_OUTPUT_COUNT, CODE_UNDEFINED,
    CODE_UNDEFINED_OPERATION, CallResult, ErrorKind, Interrupt, ScriptError, Termination,
};
pub use host::Host;
pub use session::{Outcome, Session, Statement, try_catch};

//=====================================================
// End of file
//=====================================================
