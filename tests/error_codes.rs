use numscript::gateway::core_builtins;
use numscript::overload::{OverloadResolver, PRINT};
use numscript::types::{ArrayError, NdArray};
use numscript::{Context, Double, ScriptError, TypeTag, ValueRef};

#[test]
fn arity_error_uses_e001() {
    let mut ctx = Context::new();
    core_builtins::register(&mut ctx);
    let args = vec![
        ValueRef::new(Double::scalar(1.0)),
        ValueRef::new(Double::scalar(1.0)),
    ];
    let err = ctx.call("argn", &args, 1).expect_err("too many inputs");
    assert_eq!(err.as_error().map(ScriptError::code_str), Some("E001"));
}

#[test]
fn shape_mismatch_uses_e003() {
    let err = NdArray::from_vec(&[2, 2], vec![1.0, 2.0]).expect_err("3 elements short");
    assert!(matches!(err, ArrayError::ShapeMismatch { .. }));
    let script_err: ScriptError = err.into();
    assert_eq!(script_err.code_str(), "E003");
}

#[test]
fn argn_selector_error_uses_e004() {
    let mut ctx = Context::new();
    core_builtins::register(&mut ctx);
    let err = ctx
        .with_frame(0, 1, |ctx| {
            ctx.call("argn", &[ValueRef::new(Double::scalar(9.0))], 1)
        })
        .expect_err("bad selector");
    assert_eq!(err.as_error().map(ScriptError::code_str), Some("E004"));
}

#[test]
fn missing_overload_uses_e005() {
    let ctx = Context::new();
    let err = OverloadResolver::resolve(&ctx, PRINT, TypeTag::String).expect_err("unregistered");
    assert_eq!(err.code_str(), "E005");
}

#[test]
fn oversized_allocation_uses_e006() {
    let err = Double::new(&[usize::MAX, 3], false).expect_err("overflow");
    let script_err: ScriptError = err.into();
    assert_eq!(script_err.code_str(), "E006");
}

#[test]
fn unbound_name_uses_e009() {
    let mut ctx = Context::new();
    let err = ctx.call("nowhere", &[], 1).expect_err("unbound");
    assert_eq!(err.as_error().map(ScriptError::code_str), Some("E009"));
}
