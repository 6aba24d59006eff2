//=====================================================
// File: interpreter/channel.rs
//=====================================================
// Author: ZobieLabs
// License: Duality Public License (DPL v1.0)
// Goal: User-visible error channel
// Objective: Record every error reported to the user, in order, with its
//            numeric code
//=====================================================

use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmittedError {
    pub code: u32,
    pub message: String,
}

#[derive(Debug, Default)]
pub struct ErrorChannel {
    emitted: Vec<EmittedError>,
}

impl ErrorChannel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emit(&mut self, code: u32, message: impl Into<String>) {
        let message = message.into();
        warn!(code, %message, "script error");
        self.emitted.push(EmittedError { code, message });
    }

    pub fn last(&self) -> Option<&EmittedError> {
        self.emitted.last()
    }

    pub fn len(&self) -> usize {
        self.emitted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.emitted.is_empty()
    }

    pub fn drain(&mut self) -> Vec<EmittedError> {
        std::mem::take(&mut self.emitted)
    }
}

//=====================================================
// End of file
//=====================================================
