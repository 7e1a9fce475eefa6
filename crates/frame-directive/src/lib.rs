//! Frame directive resolution for incoming chat-originated documents.
//!
//! Turns a free-text request plus explicit hints into an unambiguous
//! [`FrameDirective`] describing which overlays to apply to a PDF. The
//! resolver is a pure function with no I/O and no failure path.

mod directive;
mod resolve;

pub use directive::FrameDirective;
pub use resolve::{TRIGGERS, Trigger, resolve};
