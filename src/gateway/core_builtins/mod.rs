//=====================================================
// File: gateway/core_builtins/mod.rs
//=====================================================
// Author: ZobieLabs
// License: Duality Public License (DPL v1.0)
// Goal: Core interpreter built-ins
// Objective: Group the session-level built-ins and register them with a
//            context
//=====================================================

pub mod argn;
pub mod exit;

use super::{GatewayEntry, register_all};
use crate::interpreter::Context;

pub const ENTRIES: [GatewayEntry; 2] = [argn::ENTRY, exit::ENTRY];

pub fn register(ctx: &mut Context) {
    register_all(ctx, &ENTRIES);
}

//=====================================================
// End of file
//=====================================================
