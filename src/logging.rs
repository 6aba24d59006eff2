//=============================================
// File: logging.rs
//=============================================
// Author: ZobieLabs
// License: Duality Public License (DPL v1.0)
// Goal: Tracing setup for numscript processes
// Objective: Install one fmt subscriber whose filter comes from RUST_LOG
//            or the config file
//=============================================

use std::sync::OnceLock;

use tracing::Level;
use tracing_subscriber::EnvFilter;

static INIT: OnceLock<()> = OnceLock::new();

/// Installs the global subscriber. Later calls are no-ops.
///
/// `RUST_LOG` wins over `directive`; with neither, `info` is used.
pub fn init(directive: Option<&str>) {
    INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| match directive {
                Some(directive) => EnvFilter::try_new(directive),
                None => Ok(EnvFilter::default().add_directive(Level::INFO.into())),
            })
            .unwrap_or_else(|_| EnvFilter::default().add_directive(Level::INFO.into()));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init();
    });
}

//=============================================
// End of file
//=============================================
