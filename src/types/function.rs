//=====================================================
// File: types/function.rs
//=====================================================
// Author: ZobieLabs
// License: Duality Public License (DPL v1.0)
// Goal: Native functions as first-class values
// Objective: Wrap a gateway body with its signature and enforce the
//            input/output count rules shared by every built-in
//=====================================================

use std::fmt;

use tracing::debug;

use crate::gateway::{NativeFn, Signature};
use crate::interpreter::{CallResult, Context, ScriptError};

use super::value::ValueRef;

#[derive(Clone, Copy)]
pub struct Function {
    signature: Signature,
    body: NativeFn,
}

impl Function {
    pub fn new(signature: Signature, body: NativeFn) -> Self {
        Self { signature, body }
    }

    pub fn name(&self) -> &'static str {
        self.signature.name
    }

    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    /// Runs the body after checking argument and return counts.
    ///
    /// At most `ret_count` outputs (at least one slot) are handed back; a
    /// body that produces fewer than a multi-value request is an arity error.
    pub fn call(
        &self,
        ctx: &mut Context,
        args: &[ValueRef],
        ret_count: usize,
    ) -> CallResult<Vec<ValueRef>> {
        let signature = &self.signature;
        signature.check_arity(args.len(), ret_count)?;
        debug!(
            function = signature.name,
            inputs = args.len(),
            outputs = ret_count,
            "calling native function"
        );

        let mut outputs = (self.body)(ctx, args, ret_count)?;
        let requested = ret_count.max(1);
        if requested > 1 && outputs.len() < requested {
            return Err(ScriptError::output_count(signature.name, outputs.len()).into());
        }
        outputs.truncate(requested);
        Ok(outputs)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
            .field("signature", &self.signature)
            .finish_non_exhaustive()
    }
}

//=====================================================
// End of file
//=====================================================
