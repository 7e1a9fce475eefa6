#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Resolved overlay decision for a single document.
///
/// A directive is a plain value: two structurally equal inputs to
/// [`resolve`](crate::resolve) always produce a structurally equal directive.
/// The default directive applies nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FrameDirective {
    /// Apply the front background template.
    pub apply_front: bool,
    /// Apply rear stamp frames.
    pub apply_rear: bool,
    /// Stamp a folio/sequence number atop the other overlays.
    pub apply_folio: bool,
    /// Restrict overlays to the document's first page.
    pub only_first_page: bool,
}

impl FrameDirective {
    /// Directive for an auto-frame source: full framing, folio per the hint.
    pub fn auto_frame(folio_hint: bool) -> Self {
        Self {
            apply_front: true,
            apply_rear: true,
            apply_folio: folio_hint,
            only_first_page: false,
        }
    }

    /// Whether any frame overlay (front or rear) is requested.
    ///
    /// A folio stamp with no frames is only meaningful for hand-built
    /// directives; the resolver never produces that shape.
    pub fn has_frames(&self) -> bool {
        self.apply_front || self.apply_rear
    }

    /// Whether the directive requests no overlay work at all.
    pub fn is_empty(&self) -> bool {
        !self.apply_front && !self.apply_rear && !self.apply_folio
    }
}
