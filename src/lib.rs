//=====================================================
// File: lib.rs
//=====================================================
// Author: ZobieLabs
// License: Duality Public License (DPL v1.0)
// Goal: numscript library main interface
// Objective: Export the value hierarchy, overload resolver, native
//            gateway, and interpreter state of the numscript core
//=====================================================

pub mod config;
pub mod gateway;
pub mod interpreter;
pub mod logging;
pub mod overload;
pub mod symbol;
pub mod types;

pub use config::{ConfigRegister, ExecutionMode, InterpreterConfig};
pub use interpreter::{
    CallResult, Context, ErrorKind, Host, Interrupt, ScriptError, Session, Termination,
};
pub use overload::OverloadResolver;
pub use types::{Double, HandleArray, StringArray, TypeTag, Value, ValueRef};

//=====================================================
// End of file
//=====================================================
