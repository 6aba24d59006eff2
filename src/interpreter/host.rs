//=====================================================
// File: interpreter/host.rs
//=====================================================
// Author: ZobieLabs
// License: Duality Public License (DPL v1.0)
// Goal: Interactive host boundary
// Objective: Let built-ins ask the desktop/console host whether the
//            session may close, or tell it to close unconditionally
//=====================================================

/// The application embedding an interactive session.
///
/// Both calls are synchronous.
pub trait Host {
    /// Asks for permission to close. A host may refuse, e.g. while it holds
    /// unsaved state.
    fn can_close(&mut self) -> bool;

    /// Closes without asking.
    fn force_close(&mut self);
}

//=====================================================
// End of file
//=====================================================
