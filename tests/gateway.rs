//==============================================
// File: tests/gateway.rs
// Author: ZobieLabs
// License: Duality Public License (DPL v1.0)
// Goal: Native calling convention
// Objective: Check arity enforcement, argument validation order, and
//            output-count handling for registered built-ins
//==============================================

use numscript::gateway::{GatewayEntry, Signature, check_args, real_scalar, register_all};
use numscript::interpreter::{CODE_GENERIC, CODE_INPUT_COUNT, CODE_OUTPUT_COUNT};
use numscript::symbol::Symbol;
use numscript::types::OptionalArgs;
use numscript::{
    CallResult, Context, Double, ErrorKind, Interrupt, ScriptError, StringArray, ValueRef,
};

const WEIGHTED: Signature = Signature::new("weighted", 3, 3, 1);
const SPLIT: Signature = Signature::new("split", 1, 1, 2);

/// `weighted(a, b, c)`: a + 2b + 3c over three real scalars.
fn weighted(_ctx: &mut Context, args: &[ValueRef], _ret_count: usize) -> CallResult<Vec<ValueRef>> {
    let mut total = 0.0;
    check_args(args, |position, value| {
        total += position as f64 * real_scalar(WEIGHTED.name, position, value)?;
        Ok(())
    })?;
    Ok(vec![ValueRef::new(Double::scalar(total))])
}

/// `split(x)` declares two outputs but only ever produces one.
fn split(_ctx: &mut Context, args: &[ValueRef], _ret_count: usize) -> CallResult<Vec<ValueRef>> {
    Ok(vec![args[0].clone()])
}

fn context() -> Context {
    let mut ctx = Context::new();
    register_all(
        &mut ctx,
        &[
            GatewayEntry {
                signature: WEIGHTED,
                body: weighted,
            },
            GatewayEntry {
                signature: SPLIT,
                body: split,
            },
        ],
    );
    ctx
}

fn number(value: f64) -> ValueRef {
    ValueRef::new(Double::scalar(value))
}

fn script_error(result: CallResult<Vec<ValueRef>>) -> ScriptError {
    match result {
        Err(Interrupt::Error(error)) => error,
        other => panic!("expected a script error, got {other:?}"),
    }
}

#[test]
fn valid_call_runs_the_body() {
    let mut ctx = context();
    let outputs = ctx
        .call("weighted", &[number(1.0), number(1.0), number(1.0)], 1)
        .expect("weighted");
    let value = outputs[0].borrow();
    assert_eq!(value.as_double().and_then(|d| d.get_real(0)), Some(6.0));
}

#[test]
fn first_invalid_argument_from_the_left_is_reported() {
    let mut ctx = context();
    let row = ValueRef::new(Double::new(&[1, 2], false).expect("1x2"));
    let args = vec![number(1.0), ValueRef::new(StringArray::scalar("b")), row];
    let error = script_error(ctx.call("weighted", &args, 1));
    assert_eq!(error.position, Some(2));
    assert_eq!(error.kind, ErrorKind::Type);
    assert_eq!(error.code, CODE_GENERIC);
    assert_eq!(error.function.as_deref(), Some("weighted"));
}

#[test]
fn check_args_stops_at_the_first_rejection() {
    let args = vec![number(1.0), number(-1.0), number(-2.0)];
    let mut visited = Vec::new();
    let result = check_args(&args, |position, value| {
        visited.push(position);
        match real_scalar("probe", position, value)? {
            negative if negative < 0.0 => {
                Err(ScriptError::wrong_value("probe", position, "A positive value expected"))
            }
            _ => Ok(()),
        }
    });
    assert_eq!(result.expect_err("negative").position, Some(2));
    assert_eq!(visited, vec![1, 2]);
}

#[test]
fn input_count_is_enforced() {
    let mut ctx = context();
    let error = script_error(ctx.call("weighted", &[number(1.0)], 1));
    assert_eq!(error.kind, ErrorKind::Arity);
    assert_eq!(error.code, CODE_INPUT_COUNT);
    assert_eq!(error.message, "weighted: Wrong number of input arguments: 3 expected.");
}

#[test]
fn output_count_is_enforced() {
    let mut ctx = context();
    let args = [number(1.0), number(2.0), number(3.0)];
    let error = script_error(ctx.call("weighted", &args, 2));
    assert_eq!(error.code, CODE_OUTPUT_COUNT);
}

#[test]
fn body_that_underdelivers_is_an_output_error() {
    let mut ctx = context();
    assert_eq!(ctx.call("split", &[number(4.0)], 1).expect("one output").len(), 1);
    let error = script_error(ctx.call("split", &[number(4.0)], 2));
    assert_eq!(error.code, CODE_OUTPUT_COUNT);
}

#[test]
fn zero_requested_outputs_still_fill_one_slot() {
    let mut ctx = context();
    let outputs = ctx.call("split", &[number(4.0)], 0).expect("statement call");
    assert_eq!(outputs.len(), 1);
}

#[test]
fn function_values_reject_named_arguments() {
    let mut ctx = context();
    let function = ctx.lookup("split").expect("registered");
    let opts: OptionalArgs = vec![(Symbol::from("mode"), number(1.0))];
    let error = script_error(function.invoke(&mut ctx, &[number(1.0)], &opts, 1));
    assert_eq!(error.kind, ErrorKind::Type);
    assert!(error.message.contains("'mode'"), "{}", error.message);
}

//==============================================
// End of file
//==============================================
