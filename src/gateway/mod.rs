//=====================================================
// File: gateway/mod.rs
//=====================================================
// Author: ZobieLabs
// License: Duality Public License (DPL v1.0)
// Goal: Native function calling convention
// Objective: Define the uniform built-in signature, its arity contract,
//            registration tables, and shared argument checks
//=====================================================

pub mod core_builtins;

use crate::interpreter::{CallResult, Context, ScriptError};
use crate::types::{Value, ValueRef};

//=====================================================
// Section 1.0 - Calling Convention
//=====================================================

/// Body of a built-in: borrowed arguments and the requested return count
/// in, outputs out.
pub type NativeFn = fn(&mut Context, &[ValueRef], usize) -> CallResult<Vec<ValueRef>>;

/// Declared input/output bounds of a built-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signature {
    pub name: &'static str,
    pub min_inputs: usize,
    pub max_inputs: usize,
    pub max_outputs: usize,
}

impl Signature {
    pub const fn new(
        name: &'static str,
        min_inputs: usize,
        max_inputs: usize,
        max_outputs: usize,
    ) -> Self {
        Self {
            name,
            min_inputs,
            max_inputs,
            max_outputs,
        }
    }

    pub fn check_arity(&self, inputs: usize, outputs: usize) -> Result<(), ScriptError> {
        if inputs < self.min_inputs || inputs > self.max_inputs {
            return Err(ScriptError::input_count(
                self.name,
                self.min_inputs,
                self.max_inputs,
            ));
        }
        if outputs > self.max_outputs {
            return Err(ScriptError::output_count(self.name, self.max_outputs));
        }
        Ok(())
    }
}

//=====================================================
// Section 2.0 - Registration
//=====================================================

#[derive(Debug, Clone, Copy)]
pub struct GatewayEntry {
    pub signature: Signature,
    pub body: NativeFn,
}

pub fn register_all(ctx: &mut Context, entries: &[GatewayEntry]) {
    for entry in entries {
        ctx.register_native(entry.signature, entry.body);
    }
}

//=====================================================
// Section 3.0 - Argument Checks
//=====================================================

/// Visits arguments left to right with their 1-based position and stops
/// at the first rejected one.
pub fn check_args<F>(args: &[ValueRef], mut check: F) -> Result<(), ScriptError>
where
    F: FnMut(usize, &Value) -> Result<(), ScriptError>,
{
    for (index, arg) in args.iter().enumerate() {
        check(index + 1, &arg.borrow())?;
    }
    Ok(())
}

/// Accepts a 1x1 non-complex double and returns its value.
pub fn real_scalar(function: &str, position: usize, value: &Value) -> Result<f64, ScriptError> {
    let Some(number) = value.as_double() else {
        return Err(ScriptError::wrong_type(function, position, "A real scalar"));
    };
    if !number.is_scalar() {
        return Err(ScriptError::wrong_size(function, position, "A scalar"));
    }
    if number.is_complex() {
        return Err(ScriptError::wrong_type(function, position, "A real"));
    }
    number
        .get_real(0)
        .ok_or_else(|| ScriptError::wrong_size(function, position, "A scalar"))
}


//=====================================================
// End of file
//=====================================================
