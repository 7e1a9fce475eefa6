use std::path::PathBuf;
use thiserror::Error;

/// Which required asset a precondition check refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    /// The single front-background template document.
    Front,
    /// The directory of rear-frame templates.
    Rear,
}

impl AssetKind {
    pub fn name(&self) -> &'static str {
        match self {
            AssetKind::Front => "front",
            AssetKind::Rear => "rear",
        }
    }
}

#[derive(Error, Debug)]
pub enum OverlayError {
    #[error("missing {kind} asset: {path}", kind = .0.name(), path = .1.display())]
    MissingAsset(AssetKind, PathBuf),
    #[error("source document unreadable: {path}", path = .0.display())]
    SourceUnreadable(PathBuf),
    #[error("composition failed: {0}")]
    CompositionFailed(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
    #[error("internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, OverlayError>;
