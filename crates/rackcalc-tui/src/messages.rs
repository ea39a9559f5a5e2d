//! TUI message types (Elm Messages).

use rackcalc_core::RawInputs;

use crate::keymap::KeyAction;

/// Messages that drive the TUI update cycle.
#[derive(Debug, Clone)]
pub enum TuiMessage {
    /// Key press event forwarded from the event loop.
    KeyPress(KeyAction),
    /// Replace all four fields, e.g. with values given on the command line.
    SetInputs(RawInputs),
    /// Status line text.
    Log(String),
    /// Quit the application.
    Quit,
}
