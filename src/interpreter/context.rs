//=====================================================
// File: interpreter/context.rs
//=====================================================
// Author: ZobieLabs
// License: Duality Public License (DPL v1.0)
// Goal: Interpreter state handed to every native call
// Objective: Bundle symbol table, configuration register, interactive
//            host, and error channel behind one explicit context object
//=====================================================

use std::fmt;

use tracing::debug;

use super::channel::ErrorChannel;
use super::errors::{CallResult, ScriptError};
use super::host::Host;
use crate::config::{ConfigRegister, InterpreterConfig};
use crate::gateway::{NativeFn, Signature};
use crate::overload::OverloadResolver;
use crate::symbol::SymbolTable;
use crate::types::{Double, Function, OptionalArgs, TypeTag, ValueRef};

/// Name bound to the supplied-argument count inside a call frame.
pub const NARGIN: &str = "nargin";
/// Name bound to the requested-return count inside a call frame.
pub const NARGOUT: &str = "nargout";

pub struct Context {
    symbols: SymbolTable,
    config: ConfigRegister,
    host: Option<Box<dyn Host>>,
    errors: ErrorChannel,
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl Context {
    pub fn new() -> Self {
        Self::with_config(&InterpreterConfig::default())
    }

    pub fn with_config(config: &InterpreterConfig) -> Self {
        Self {
            symbols: SymbolTable::new(),
            config: ConfigRegister::new(config),
            host: None,
            errors: ErrorChannel::new(),
        }
    }

    //=================================================
    // Section 1.0 - Accessors
    //=================================================

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    pub fn symbols_mut(&mut self) -> &mut SymbolTable {
        &mut self.symbols
    }

    pub fn lookup(&self, name: &str) -> Option<ValueRef> {
        self.symbols.lookup(name)
    }

    pub fn config(&self) -> &ConfigRegister {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut ConfigRegister {
        &mut self.config
    }

    pub fn errors(&self) -> &ErrorChannel {
        &self.errors
    }

    pub fn errors_mut(&mut self) -> &mut ErrorChannel {
        &mut self.errors
    }

    pub fn attach_host(&mut self, host: Box<dyn Host>) {
        self.host = Some(host);
    }

    pub fn detach_host(&mut self) -> Option<Box<dyn Host>> {
        self.host.take()
    }

    pub fn host_mut(&mut self) -> Option<&mut (dyn Host + 'static)> {
        self.host.as_deref_mut()
    }

    //=================================================
    // Section 2.0 - Registration
    //=================================================

    /// Binds a built-in under its plain name in the global scope.
    pub fn register_native(&mut self, signature: Signature, body: NativeFn) {
        debug!(function = signature.name, "registering native function");
        self.symbols
            .put_global(signature.name, ValueRef::new(Function::new(signature, body)));
    }

    /// Binds a built-in as the `operator` overload for values of `tag`.
    pub fn register_overload(
        &mut self,
        operator: &str,
        tag: TypeTag,
        signature: Signature,
        body: NativeFn,
    ) {
        let name = OverloadResolver::mangle(operator, tag);
        debug!(function = signature.name, overload = %name, "registering overload");
        self.symbols
            .put_global(name, ValueRef::new(Function::new(signature, body)));
    }

    //=================================================
    // Section 3.0 - Calls & Frames
    //=================================================

    /// Runs `body` inside a new call frame that binds `nargin` and
    /// `nargout`. The frame is popped on every exit path.
    pub fn with_frame<T, F>(&mut self, nargin: usize, nargout: usize, body: F) -> CallResult<T>
    where
        F: FnOnce(&mut Context) -> CallResult<T>,
    {
        self.symbols.push_scope();
        self.symbols
            .put(NARGIN, ValueRef::new(Double::scalar(nargin as f64)));
        self.symbols
            .put(NARGOUT, ValueRef::new(Double::scalar(nargout as f64)));
        let result = body(self);
        self.symbols.pop_scope();
        result
    }

    /// Looks `name` up and invokes whatever it is bound to.
    pub fn call(
        &mut self,
        name: &str,
        args: &[ValueRef],
        ret_count: usize,
    ) -> CallResult<Vec<ValueRef>> {
        let target = self
            .lookup(name)
            .ok_or_else(|| ScriptError::undefined(name))?;
        target.invoke(self, args, &OptionalArgs::new(), ret_count)
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("symbols", &self.symbols)
            .field("config", &self.config)
            .field("host_attached", &self.host.is_some())
            .field("errors", &self.errors)
            .finish()
    }
}


//=====================================================
// End of file
//=====================================================
