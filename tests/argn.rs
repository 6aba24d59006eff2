//==============================================
// File: tests/argn.rs
// Author: ZobieLabs
// License: Duality Public License (DPL v1.0)
// Goal: argn behaviour inside and outside call frames
// Objective: Check every selector and output-count combination
//==============================================

use numscript::gateway::core_builtins;
use numscript::interpreter::{CODE_GENERIC, CODE_INPUT_COUNT, CODE_OUTPUT_COUNT, NARGOUT};
use numscript::{
    CallResult, Context, Double, ErrorKind, Interrupt, ScriptError, StringArray, ValueRef,
};

fn context() -> Context {
    let mut ctx = Context::new();
    core_builtins::register(&mut ctx);
    ctx
}

/// Calls `argn` from a frame entered with two arguments and three returns.
fn argn_in_frame(ctx: &mut Context, args: &[ValueRef], ret_count: usize) -> CallResult<Vec<ValueRef>> {
    ctx.with_frame(2, 3, |ctx| ctx.call("argn", args, ret_count))
}

fn scalars(values: &[ValueRef]) -> Vec<f64> {
    values
        .iter()
        .map(|value| {
            value
                .borrow()
                .as_double()
                .and_then(|number| number.get_real(0))
                .expect("real scalar output")
        })
        .collect()
}

fn script_error(result: CallResult<Vec<ValueRef>>) -> ScriptError {
    match result {
        Err(Interrupt::Error(error)) => error,
        other => panic!("expected a script error, got {other:?}"),
    }
}

fn selector(which: f64) -> Vec<ValueRef> {
    vec![ValueRef::new(Double::scalar(which))]
}

#[test]
fn single_output_reports_return_count() {
    let mut ctx = context();
    let outputs = argn_in_frame(&mut ctx, &[], 1).expect("argn");
    assert_eq!(scalars(&outputs), vec![3.0]);
}

#[test]
fn two_outputs_report_returns_then_arguments() {
    let mut ctx = context();
    let outputs = argn_in_frame(&mut ctx, &[], 2).expect("argn");
    assert_eq!(scalars(&outputs), vec![3.0, 2.0]);
}

#[test]
fn selectors_pick_one_count() {
    let mut ctx = context();
    let returns = argn_in_frame(&mut ctx, &selector(1.0), 1).expect("argn(1)");
    let arguments = argn_in_frame(&mut ctx, &selector(2.0), 1).expect("argn(2)");
    assert_eq!(scalars(&returns), vec![3.0]);
    assert_eq!(scalars(&arguments), vec![2.0]);
}

#[test]
fn selector_zero_follows_output_count() {
    let mut ctx = context();
    let both = argn_in_frame(&mut ctx, &selector(0.0), 2).expect("[lhs, rhs] = argn(0)");
    let one = argn_in_frame(&mut ctx, &selector(0.0), 1).expect("argn(0)");
    assert_eq!(scalars(&both), vec![3.0, 2.0]);
    assert_eq!(scalars(&one), vec![3.0]);
}

#[test]
fn outputs_share_the_frame_bindings() {
    let mut ctx = context();
    let shared = ctx
        .with_frame(2, 3, |ctx| {
            let outputs = ctx.call("argn", &[], 1)?;
            let bound = ctx.lookup(NARGOUT).expect("nargout bound in frame");
            Ok(outputs[0].ptr_eq(&bound))
        })
        .expect("argn");
    assert!(shared);
}

#[test]
fn unknown_selector_is_a_value_error() {
    let mut ctx = context();
    let error = script_error(argn_in_frame(&mut ctx, &selector(5.0), 1));
    assert_eq!(error.kind, ErrorKind::Value);
    assert_eq!(error.code, CODE_GENERIC);
    assert_eq!(error.position, Some(1));
    assert!(error.message.contains("'0', '1' or '2'"), "{}", error.message);
}

#[test]
fn selector_must_be_a_real_scalar() {
    let mut ctx = context();

    let text = vec![ValueRef::new(StringArray::scalar("1"))];
    assert_eq!(script_error(argn_in_frame(&mut ctx, &text, 1)).kind, ErrorKind::Type);

    let complex = vec![ValueRef::new(Double::complex_scalar(1.0, 2.0))];
    assert_eq!(script_error(argn_in_frame(&mut ctx, &complex, 1)).kind, ErrorKind::Type);

    let row = Double::new(&[1, 2], false).expect("1x2 double");
    let row = vec![ValueRef::new(row)];
    assert_eq!(script_error(argn_in_frame(&mut ctx, &row, 1)).kind, ErrorKind::Shape);
}

#[test]
fn arity_is_checked_before_the_body() {
    let mut ctx = context();

    let two_args = vec![
        ValueRef::new(Double::scalar(1.0)),
        ValueRef::new(Double::scalar(2.0)),
    ];
    let error = script_error(argn_in_frame(&mut ctx, &two_args, 1));
    assert_eq!(error.code, CODE_INPUT_COUNT);

    let error = script_error(argn_in_frame(&mut ctx, &[], 3));
    assert_eq!(error.code, CODE_OUTPUT_COUNT);
    assert_eq!(error.kind, ErrorKind::Arity);
}

#[test]
fn single_count_selector_cannot_fill_two_outputs() {
    let mut ctx = context();
    let error = script_error(argn_in_frame(&mut ctx, &selector(1.0), 2));
    assert_eq!(error.code, CODE_OUTPUT_COUNT);
}

#[test]
fn outside_a_frame_outputs_are_empty_placeholders() {
    let mut ctx = context();

    let one = ctx.call("argn", &[], 1).expect("argn at top level");
    assert_eq!(one.len(), 1);

    let two = ctx.call("argn", &[], 2).expect("[lhs, rhs] = argn() at top level");
    assert_eq!(two.len(), 2);
    for output in one.iter().chain(two.iter()) {
        let value = output.borrow();
        let number = value.as_double().expect("double placeholder");
        assert!(number.is_empty());
        assert_eq!(number.shape(), &[0, 0]);
    }
}

//==============================================
// End of file
//==============================================
