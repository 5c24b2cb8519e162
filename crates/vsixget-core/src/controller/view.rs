//! View model for the operation state machine.
//!
//! The controller computes [`ViewState`] values; a [`Render`] implementation
//! is the only thing that touches the terminal. This keeps every transition
//! testable with a recording renderer.

/// Version display slot: pending while resolution is in flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionSlot {
    Pending,
    Found(String),
}

/// Publisher/extension info shown as soon as parsing succeeds, before the
/// version is known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemInfo {
    pub publisher: String,
    pub extension: String,
    pub version: VersionSlot,
}

/// Complete description of what the front end shows at any point.
///
/// `Loading` doubles as the busy state: the action control is disabled from
/// the first `Loading` render until the next `Success` or `Error`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    Idle,
    Loading { info: Option<ItemInfo> },
    Success {
        info: ItemInfo,
        link: String,
        filename: String,
    },
    Error { message: String },
}

/// Rendering boundary applied after every state transition.
pub trait Render {
    fn render(&mut self, state: &ViewState);
}
