//=====================================================
// File: main.rs
//=====================================================
// Author: ZobieLabs
// License: Duality Public License (DPL v1.0)
// Goal: numscript CLI entry point
// Objective: Call one built-in as a non-interactive session statement and
//            turn a termination request into the process exit status
//=====================================================

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use clap::Parser;
use numscript::gateway::core_builtins;
use numscript::interpreter::Outcome;
use numscript::{
    Context, Double, ExecutionMode, InterpreterConfig, Session, StringArray, ValueRef, logging,
};

#[derive(Debug, Parser)]
#[command(
    name = "numscript",
    about = "Calls a numscript built-in from the command line.",
    version
)]
struct Args {
    /// TOML file with interpreter settings.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Execution mode, overriding the config file.
    #[arg(long, value_enum)]
    mode: Option<ExecutionMode>,

    /// Number of values requested from the call.
    #[arg(long, default_value_t = 1)]
    nargout: usize,

    /// Run the call inside a frame with these argument/return counts.
    #[arg(long, num_args = 2, value_names = ["NARGIN", "NARGOUT"])]
    frame: Option<Vec<usize>>,

    /// Built-in to call.
    function: String,

    /// Arguments: numbers become real scalars, anything else a string.
    #[arg(allow_hyphen_values = true)]
    args: Vec<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut config = match &args.config {
        Some(path) => InterpreterConfig::load(path)
            .with_context(|| format!("failed to load {}", path.display()))?,
        None => InterpreterConfig::default(),
    };
    if let Some(mode) = args.mode {
        config.mode = mode;
    }
    logging::init(config.log_filter.as_deref());

    let mut ctx = Context::with_config(&config);
    core_builtins::register(&mut ctx);
    let mut session = Session::new(ctx);

    let call_args: Vec<ValueRef> = args.args.iter().map(|raw| parse_arg(raw)).collect();
    let Args {
        function,
        nargout,
        frame,
        ..
    } = args;
    let outcome = session.run_statement(move |ctx| match frame.as_deref() {
        Some(&[nargin, frame_nargout]) => ctx.with_frame(nargin, frame_nargout, |ctx| {
            ctx.call(&function, &call_args, nargout)
        }),
        _ => ctx.call(&function, &call_args, nargout),
    });

    match outcome {
        Ok(Outcome::Completed(values)) => {
            for value in values {
                println!("{}", value.borrow());
            }
        }
        Ok(Outcome::Failed(error)) => eprintln!("{error}"),
        Err(termination) => std::process::exit(termination.status),
    }
    Ok(())
}

fn parse_arg(raw: &str) -> ValueRef {
    match raw.parse::<f64>() {
        Ok(number) => ValueRef::new(Double::scalar(number)),
        Err(_) => ValueRef::new(StringArray::scalar(raw)),
    }
}

//=====================================================
// End of file
//=====================================================
