//=====================================================
// File: config.rs
//=====================================================
// Author: ZobieLabs
// License: Duality Public License (DPL v1.0)
// Goal: Interpreter configuration
// Objective: Load startup settings from TOML and hold the runtime register
//            (execution mode, exit status, force-quit flag)
//=====================================================

use std::fs;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use thiserror::Error;

//=====================================================
// Section 1.0 - Execution Mode
//=====================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionMode {
    /// Embedded through the programmatic API.
    Api,
    /// Full session with a desktop host.
    #[default]
    Std,
    /// Terminal session without a window.
    Nw,
    /// No window and no interaction.
    Nwni,
}

impl ExecutionMode {
    /// Whether an interactive host may be attached in this mode.
    pub fn is_interactive(self) -> bool {
        !matches!(self, ExecutionMode::Nwni)
    }
}

//=====================================================
// Section 2.0 - Startup Configuration
//=====================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InterpreterConfig {
    pub mode: ExecutionMode,
    /// `tracing` filter directive, e.g. `numscript=debug`.
    pub log_filter: Option<String>,
}

impl InterpreterConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    pub fn with_mode(mut self, mode: ExecutionMode) -> Self {
        self.mode = mode;
        self
    }
}

//=====================================================
// Section 3.0 - Runtime Register
//=====================================================

/// Interpreter-wide settings that built-ins may read and update.
#[derive(Debug, Clone, Default)]
pub struct ConfigRegister {
    mode: ExecutionMode,
    exit_status: i32,
    force_quit: bool,
}

impl ConfigRegister {
    pub fn new(config: &InterpreterConfig) -> Self {
        Self {
            mode: config.mode,
            ..Self::default()
        }
    }

    pub fn mode(&self) -> ExecutionMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: ExecutionMode) {
        self.mode = mode;
    }

    pub fn exit_status(&self) -> i32 {
        self.exit_status
    }

    pub fn set_exit_status(&mut self, status: i32) {
        self.exit_status = status;
    }

    pub fn force_quit(&self) -> bool {
        self.force_quit
    }

    pub fn set_force_quit(&mut self, force_quit: bool) {
        self.force_quit = force_quit;
    }
}


//=====================================================
// End of file
//=====================================================
