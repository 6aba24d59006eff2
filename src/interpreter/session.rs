//=====================================================
// File: interpreter/session.rs
//=====================================================
// Author: ZobieLabs
// License: Duality Public License (DPL v1.0)
// Goal: Statement loop and error recovery frames
// Objective: Report recoverable errors and keep going, while letting the
//            termination signal reach the top of the loop untouched
//=====================================================

use tracing::info;

use super::context::Context;
use super::errors::{CallResult, ScriptError, Termination};
use crate::types::ValueRef;

pub type Statement = Box<dyn FnOnce(&mut Context) -> CallResult<Vec<ValueRef>>>;

#[derive(Debug)]
pub enum Outcome {
    Completed(Vec<ValueRef>),
    /// The statement was aborted; the error has been emitted.
    Failed(ScriptError),
}

#[derive(Debug)]
pub struct Session {
    ctx: Context,
}

impl Session {
    pub fn new(ctx: Context) -> Self {
        Self { ctx }
    }

    pub fn context(&self) -> &Context {
        &self.ctx
    }

    pub fn context_mut(&mut self) -> &mut Context {
        &mut self.ctx
    }

    pub fn into_context(self) -> Context {
        self.ctx
    }

    /// Runs one statement. Only a termination request is returned as `Err`.
    pub fn run_statement<F>(&mut self, statement: F) -> Result<Outcome, Termination>
    where
        F: FnOnce(&mut Context) -> CallResult<Vec<ValueRef>>,
    {
        match statement(&mut self.ctx) {
            Ok(values) => Ok(Outcome::Completed(values)),
            Err(interrupt) => {
                let error = interrupt.recoverable()?;
                self.ctx.errors_mut().emit(error.code, error.message.clone());
                Ok(Outcome::Failed(error))
            }
        }
    }

    /// Runs statements in order until they are exhausted or one requests
    /// termination, and returns the process exit status.
    pub fn run<I>(&mut self, statements: I) -> i32
    where
        I: IntoIterator<Item = Statement>,
    {
        for statement in statements {
            if let Err(termination) = self.run_statement(statement) {
                info!(status = termination.status, "session terminated");
                return termination.status;
            }
        }
        self.ctx.config().exit_status()
    }
}

/// A scripting `try ... catch` frame.
///
/// Recoverable errors are handed to `handler`; termination passes through.
pub fn try_catch<T, B, H>(ctx: &mut Context, body: B, handler: H) -> CallResult<T>
where
    B: FnOnce(&mut Context) -> CallResult<T>,
    H: FnOnce(&mut Context, ScriptError) -> CallResult<T>,
{
    match body(ctx) {
        Ok(value) => Ok(value),
        Err(interrupt) => {
            let error = interrupt.recoverable()?;
            handler(ctx, error)
        }
    }
}


//=====================================================
// End of file
//=====================================================
