use crate::types::Result;
use std::path::PathBuf;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Transport-agnostic inbound request shape.
///
/// Built per incoming request and discarded once a report is produced.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OverlayRequest {
    /// Free-text intent ("quiero el marco con folio", ...).
    pub intent: String,
    /// Explicit folio request carried alongside the text.
    #[cfg_attr(feature = "serde", serde(default))]
    pub folio_hint: bool,
    /// Whether the request came from an auto-frame source, which bypasses
    /// text-based intent inference entirely.
    #[cfg_attr(feature = "serde", serde(default))]
    pub auto_frame_source: bool,
    /// The source document to frame.
    pub source_path: PathBuf,
}

/// Outcome record returned to the caller: success with the output location,
/// or failure with a reason. Never both.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OverlayReport {
    pub success: bool,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub output_path: Option<PathBuf>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub error: Option<String>,
}

impl OverlayReport {
    pub fn success(output_path: impl Into<PathBuf>) -> Self {
        Self {
            success: true,
            output_path: Some(output_path.into()),
            error: None,
        }
    }

    pub fn failure(reason: impl Into<String>) -> Self {
        Self {
            success: false,
            output_path: None,
            error: Some(reason.into()),
        }
    }
}

impl From<Result<PathBuf>> for OverlayReport {
    fn from(result: Result<PathBuf>) -> Self {
        match result {
            Ok(path) => Self::success(path),
            Err(err) => Self::failure(err.to_string()),
        }
    }
}
