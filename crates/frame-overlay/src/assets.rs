use crate::types::{AssetKind, OverlayError, Result};
use frame_directive::FrameDirective;
use std::path::{Path, PathBuf};

/// Locations of the overlay templates, resolved once at startup.
///
/// Both paths are read-only inputs; this crate never writes to them. They
/// are passed in explicitly so tests can point the orchestrator at
/// alternate asset sets.
#[derive(Debug, Clone)]
pub struct FrameAssets {
    /// The front-background template document.
    pub front_template: PathBuf,
    /// Directory holding the rear-frame templates. Selection among them is
    /// the compositor's business.
    pub rear_frames_dir: PathBuf,
}

impl Default for FrameAssets {
    fn default() -> Self {
        Self {
            front_template: PathBuf::from("static/marcoparaactas.pdf"),
            rear_frames_dir: PathBuf::from("static/marcostraceros"),
        }
    }
}

impl FrameAssets {
    pub fn new(front_template: impl Into<PathBuf>, rear_frames_dir: impl Into<PathBuf>) -> Self {
        Self {
            front_template: front_template.into(),
            rear_frames_dir: rear_frames_dir.into(),
        }
    }

    /// Check presence of the assets this directive actually needs.
    ///
    /// Unused capabilities impose no asset requirement: a directive with
    /// `apply_front == false` passes even if the front template is gone.
    pub fn check_for(&self, directive: &FrameDirective) -> Result<()> {
        if directive.apply_front && !self.front_template.is_file() {
            return Err(OverlayError::MissingAsset(
                AssetKind::Front,
                self.front_template.clone(),
            ));
        }
        if directive.apply_rear && !self.rear_frames_dir.is_dir() {
            return Err(OverlayError::MissingAsset(
                AssetKind::Rear,
                self.rear_frames_dir.clone(),
            ));
        }
        Ok(())
    }

    /// Log what is present at the configured locations.
    ///
    /// Informational only, for process startup; per-request enforcement is
    /// [`check_for`](Self::check_for).
    pub fn log_inventory(&self) {
        if self.front_template.is_file() {
            log::info!("front template found: {}", self.front_template.display());
        } else {
            log::warn!(
                "front template missing: {}",
                self.front_template.display()
            );
        }
        match count_entries(&self.rear_frames_dir) {
            Some(count) => log::info!(
                "rear frames found: {count} in {}",
                self.rear_frames_dir.display()
            ),
            None => log::warn!(
                "rear frames directory missing: {}",
                self.rear_frames_dir.display()
            ),
        }
    }
}

fn count_entries(dir: &Path) -> Option<usize> {
    Some(std::fs::read_dir(dir).ok()?.count())
}
