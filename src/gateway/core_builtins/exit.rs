//=====================================================
// File: gateway/core_builtins/exit.rs
//=====================================================
// Author: ZobieLabs
// License: Duality Public License (DPL v1.0)
// Goal: exit built-in
// Objective: Record the exit status and raise the termination signal,
//            deferring to an interactive host that may refuse to close
//=====================================================

use tracing::info;

use crate::gateway::{GatewayEntry, Signature, check_args, real_scalar};
use crate::interpreter::{CallResult, Context, ScriptError, Termination};
use crate::types::ValueRef;

pub const SIGNATURE: Signature = Signature::new("exit", 0, 1, 1);

pub const ENTRY: GatewayEntry = GatewayEntry {
    signature: SIGNATURE,
    body: exit,
};

/// `exit()` asks an attached interactive host for permission to close;
/// `exit(n)` closes it unconditionally. Without a host, or in `nwni` mode,
/// both forms terminate directly.
pub fn exit(ctx: &mut Context, args: &[ValueRef], _ret_count: usize) -> CallResult<Vec<ValueRef>> {
    let mut status = 0;
    check_args(args, |position, value| {
        let requested = real_scalar(SIGNATURE.name, position, value)?;
        status = exit_status(position, requested)?;
        Ok(())
    })?;

    let mut should_exit = true;
    if ctx.config().mode().is_interactive() {
        if let Some(host) = ctx.host_mut() {
            if args.is_empty() {
                should_exit = host.can_close();
            } else {
                host.force_close();
            }
        }
    }

    if !should_exit {
        info!("host refused to close, exit cancelled");
        return Ok(Vec::new());
    }

    let config = ctx.config_mut();
    config.set_exit_status(status);
    config.set_force_quit(true);
    info!(status, "exit requested");
    Err(Termination { status }.into())
}

fn exit_status(position: usize, requested: f64) -> Result<i32, ScriptError> {
    let in_range = requested >= f64::from(i32::MIN) && requested <= f64::from(i32::MAX);
    if requested.fract() != 0.0 || !in_range {
        return Err(ScriptError::wrong_value(
            SIGNATURE.name,
            position,
            "An integer value expected",
        ));
    }
    Ok(requested as i32)
}


//=====================================================
// End of file
//=====================================================
