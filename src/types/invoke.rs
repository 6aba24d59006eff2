//=====================================================
// File: types/invoke.rs
//=====================================================
// Author: ZobieLabs
// License: Duality Public License (DPL v1.0)
// Goal: Callable contract shared by every value
// Objective: Dispatch `value(args...)` to identity read, property access
//            overload, or subscript extraction, in that order
//=====================================================

use tracing::debug;

use super::ndarray::Subscript;
use super::value::{Value, ValueRef};
use crate::interpreter::{
    CODE_GENERIC, CODE_INVALID_INDEX, CallResult, Context, ErrorKind, ScriptError,
};
use crate::overload::{OverloadResolver, EXTRACTION};
use crate::symbol::Symbol;

/// Named arguments supplied as `name=value` at a call site.
pub type OptionalArgs = Vec<(Symbol, ValueRef)>;

impl ValueRef {
    /// Evaluates `self(args...)`.
    ///
    /// Function values are called. Any other value is dispatched by arity
    /// first and argument type second:
    /// no arguments returns the value itself, a single string argument goes
    /// to the `%<tag>_e` overload, and everything else is subscript
    /// extraction.
    pub fn invoke(
        &self,
        ctx: &mut Context,
        args: &[ValueRef],
        opts: &OptionalArgs,
        ret_count: usize,
    ) -> CallResult<Vec<ValueRef>> {
        let function = self.borrow().as_function().copied();
        if let Some(function) = function {
            reject_options(function.name(), opts)?;
            return function.call(ctx, args, ret_count);
        }

        if args.is_empty() {
            return Ok(vec![self.clone()]);
        }

        if args.len() == 1 && args[0].borrow().is_string() {
            debug!(receiver = %self.type_tag(), "forwarding property access to overload");
            return OverloadResolver::call(ctx, EXTRACTION, self, args.to_vec());
        }

        reject_options("extraction", opts)?;
        let subscripts = args
            .iter()
            .enumerate()
            .map(|(i, arg)| to_subscript(&arg.borrow(), i + 1))
            .collect::<Result<Vec<_>, _>>()?;
        let extracted = self.borrow().extract(&subscripts)?;
        Ok(vec![ValueRef::new(extracted)])
    }
}

fn reject_options(function: &str, opts: &OptionalArgs) -> Result<(), ScriptError> {
    match opts.first() {
        None => Ok(()),
        Some((name, _)) => Err(ScriptError::new(
            ErrorKind::Type,
            CODE_GENERIC,
            format!("{function}: Unexpected named argument '{name}'."),
        )
        .in_function(function)),
    }
}

/// Converts one call argument into 0-based positions.
fn to_subscript(arg: &Value, position: usize) -> Result<Subscript, ScriptError> {
    match arg {
        Value::String(text) if text.as_scalar() == Some(":") => Ok(Subscript::All),
        Value::Double(index) if !index.is_complex() => {
            let mut positions = Vec::with_capacity(index.size());
            for &raw in index.real().as_slice() {
                if raw < 1.0 || raw.fract() != 0.0 || !raw.is_finite() {
                    return Err(invalid_index(position));
                }
                positions.push(raw as usize - 1);
            }
            Ok(Subscript::Positions {
                positions,
                shape: index.shape().to_vec(),
            })
        }
        _ => Err(ScriptError::new(
            ErrorKind::Type,
            CODE_GENERIC,
            format!(
                "Wrong type for index #{position}: real or ':' expected, {} given.",
                arg.type_name()
            ),
        )
        .at_position(position)),
    }
}

fn invalid_index(position: usize) -> ScriptError {
    ScriptError::new(ErrorKind::Index, CODE_INVALID_INDEX, "Invalid index.").at_position(position)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Double, HandleArray, NdArray, StringArray};

    #[test]
    fn fractional_indices_are_rejected() {
        let index = Value::Double(Double::scalar(1.5));
        let err = to_subscript(&index, 2).expect_err("fractional");
        assert_eq!(err.kind, ErrorKind::Index);
        assert_eq!(err.position, Some(2));
    }

    #[test]
    fn colon_string_selects_everything() {
        let colon = Value::String(StringArray::scalar(":"));
        assert_eq!(to_subscript(&colon, 1).expect("colon"), Subscript::All);
    }

    #[test]
    fn zero_arguments_return_the_receiver() {
        let mut ctx = Context::new();
        let handles = ValueRef::new(HandleArray::scalar(11));
        let out = handles
            .invoke(&mut ctx, &[], &OptionalArgs::new(), 1)
            .expect("identity read");
        assert_eq!(out.len(), 1);
        assert!(out[0].ptr_eq(&handles));
    }

    #[test]
    fn numeric_arguments_extract_elements() {
        let mut ctx = Context::new();
        let handles = ValueRef::new(
            HandleArray::from_vec(&[1, 3], vec![4, 5, 6]).expect("build"),
        );
        let index = ValueRef::new(Double::from_real(
            NdArray::from_vec(&[1, 2], vec![3.0, 1.0]).expect("index"),
        ));
        let out = handles
            .invoke(&mut ctx, &[index], &OptionalArgs::new(), 1)
            .expect("extract");
        let picked = out[0].borrow();
        let picked = picked.as_handle().expect("handle result");
        assert_eq!(picked.data().as_slice(), &[6, 4]);
    }
}

//=====================================================
// End of file
//=====================================================
