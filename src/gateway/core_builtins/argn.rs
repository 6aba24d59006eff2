//=====================================================
// File: gateway/core_builtins/argn.rs
//=====================================================
// Author: ZobieLabs
// License: Duality Public License (DPL v1.0)
// Goal: argn built-in
// Objective: Report the requested-return and supplied-argument counts of
//            the enclosing call frame
//=====================================================

use crate::gateway::{GatewayEntry, Signature, check_args, real_scalar};
use crate::interpreter::{CallResult, Context, NARGIN, NARGOUT, ScriptError};
use crate::types::{Double, ValueRef};

pub const SIGNATURE: Signature = Signature::new("argn", 0, 1, 2);

pub const ENTRY: GatewayEntry = GatewayEntry {
    signature: SIGNATURE,
    body: argn,
};

/// `lhs = argn()`, `[lhs, rhs] = argn()`, `argn(1)`, `argn(2)`,
/// `[lhs, rhs] = argn(0)`.
///
/// The two-output form returns the return count first and the argument
/// count second. Outside any call frame the outputs are `[]` placeholders.
pub fn argn(ctx: &mut Context, args: &[ValueRef], ret_count: usize) -> CallResult<Vec<ValueRef>> {
    let mut selector = None;
    check_args(args, |position, value| {
        selector = Some(real_scalar(SIGNATURE.name, position, value)?);
        Ok(())
    })?;

    let (Some(nargin), Some(nargout)) = (ctx.lookup(NARGIN), ctx.lookup(NARGOUT)) else {
        let mut outputs = vec![ValueRef::new(Double::empty())];
        if ret_count == 2 {
            outputs.push(ValueRef::new(Double::empty()));
        }
        return Ok(outputs);
    };

    let outputs = match selector {
        None if ret_count >= 2 => vec![nargout, nargin],
        None => vec![nargout],
        Some(which) if which == 1.0 => vec![nargout],
        Some(which) if which == 2.0 => vec![nargin],
        Some(which) if which == 0.0 => {
            if ret_count == 2 {
                vec![nargout, nargin]
            } else {
                vec![nargout]
            }
        }
        Some(_) => {
            return Err(ScriptError::wrong_value(SIGNATURE.name, 1, "'0', '1' or '2'").into());
        }
    };
    Ok(outputs)
}

//=====================================================
// End of file
//=====================================================
