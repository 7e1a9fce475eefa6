//! Overlay orchestration for frame directives.
//!
//! This crate owns everything between a resolved [`FrameDirective`] and a
//! framed PDF on disk:
//! 1. Check that the assets the directive needs are present
//! 2. Read the source document
//! 3. Delegate composition to an external [`Compositor`]
//! 4. Persist the composed bytes atomically under a derived name
//!
//! The compositing algorithm itself lives outside this workspace; the
//! orchestrator only relays its success or failure.

mod assets;
mod compositor;
mod overlay;
mod report;
mod types;

pub use assets::FrameAssets;
pub use compositor::{CommandCompositor, Compositor};
pub use frame_directive::{FrameDirective, resolve};
pub use overlay::{OUTPUT_PREFIX, Overlayer, framed_output_path};
pub use report::{OverlayReport, OverlayRequest};
pub use types::{AssetKind, OverlayError, Result};
