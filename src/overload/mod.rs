//=====================================================
// File: overload/mod.rs
//=====================================================
// Author: ZobieLabs
// License: Duality Public License (DPL v1.0)
// Goal: Type-directed operator overloading
// Objective: Map (operator, type tag) to a function registered under a
//            mangled name and call it at run time
//=====================================================

use tracing::debug;

use crate::interpreter::{
    CODE_UNDEFINED_OPERATION, CallResult, Context, ErrorKind, ScriptError,
};
use crate::symbol::Symbol;
use crate::types::{Function, TypeTag, ValueRef};

/// Operator key for `value("name")` property access.
pub const EXTRACTION: &str = "e";
/// Operator key for display.
pub const PRINT: &str = "p";

//=====================================================
// Section 1.0 - Resolver
//=====================================================

pub struct OverloadResolver;

impl OverloadResolver {
    /// Builds the lookup name `%<type code>_<operator>`, e.g. `%h_e`.
    pub fn mangle(operator: &str, tag: TypeTag) -> Symbol {
        Symbol::from(format!("%{}_{}", tag.short_code(), operator))
    }

    /// Finds the callable bound to the mangled name, if any.
    pub fn resolve(ctx: &Context, operator: &str, tag: TypeTag) -> Result<Function, ScriptError> {
        let name = Self::mangle(operator, tag);
        let Some(value) = ctx.lookup(&name) else {
            return Err(not_found(operator, tag, &name));
        };
        let function = value.borrow().as_function().copied();
        function.ok_or_else(|| not_found(operator, tag, &name))
    }

    /// Calls the overload of `operator` for the receiver's type.
    ///
    /// The receiver is appended after `args` and exactly one return value is
    /// requested.
    pub fn call(
        ctx: &mut Context,
        operator: &str,
        receiver: &ValueRef,
        mut args: Vec<ValueRef>,
    ) -> CallResult<Vec<ValueRef>> {
        let tag = receiver.type_tag();
        let function = Self::resolve(ctx, operator, tag)?;
        debug!(operator, overload = function.name(), "dispatching overload");
        // The handler may keep the receiver after returning, so it is
        // always retained here.
        args.push(receiver.clone());
        function.call(ctx, &args, 1)
    }
}

fn not_found(operator: &str, tag: TypeTag, name: &Symbol) -> ScriptError {
    ScriptError::new(
        ErrorKind::OverloadNotFound,
        CODE_UNDEFINED_OPERATION,
        format!(
            "Undefined operator '{operator}' for type '{tag}': check arguments or define function {name} for overloading."
        ),
    )
}


//=====================================================
// End of file
//=====================================================
