//! Client-side state models.
//!
//! DESIGN
//! ======
//! State is split by concern (`form`, `ui`) so each view owns a small
//! focused model wrapped in its own `RwSignal`. Models are plain
//! snapshots replaced wholesale on every update; nothing is shared
//! across component boundaries.

pub mod form;
pub mod ui;
