//! The orchestration pipeline: precondition check, composition, persistence.

use crate::assets::FrameAssets;
use crate::compositor::Compositor;
use crate::report::{OverlayReport, OverlayRequest};
use crate::types::{OverlayError, Result};
use frame_directive::{FrameDirective, resolve};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Marker prepended to the source filename for the composed output.
pub const OUTPUT_PREFIX: &str = "enmarcado_";

/// Derive the output location for a source document.
///
/// Same directory as the source, filename prefixed with [`OUTPUT_PREFIX`].
pub fn framed_output_path(source: &Path) -> Result<PathBuf> {
    let name = source.file_name().ok_or_else(|| {
        OverlayError::Internal(format!("source path has no file name: {}", source.display()))
    })?;
    let mut framed = std::ffi::OsString::from(OUTPUT_PREFIX);
    framed.push(name);
    Ok(source.with_file_name(framed))
}

/// Orchestrates overlay application for one request at a time.
///
/// Holds the asset configuration and the compositing collaborator; each
/// [`process`](Self::process) call runs to completion (success or failure)
/// before returning. Failed attempts are reported once and never retried
/// here; retry policy belongs to the caller. Concurrent requests against
/// the same source path are not coordinated: last writer wins on the
/// derived output name.
#[derive(Debug)]
pub struct Overlayer<C> {
    assets: FrameAssets,
    compositor: C,
}

impl<C: Compositor> Overlayer<C> {
    pub fn new(assets: FrameAssets, compositor: C) -> Self {
        Self { assets, compositor }
    }

    pub fn assets(&self) -> &FrameAssets {
        &self.assets
    }

    /// Apply a directive to the document at `source` and persist the result.
    ///
    /// Returns the output location on success. Precondition checks run
    /// before any source I/O: a missing required asset fails the request
    /// without touching the source document.
    pub async fn process(
        &self,
        source: impl AsRef<Path>,
        directive: &FrameDirective,
    ) -> Result<PathBuf> {
        let source = source.as_ref();
        let output = framed_output_path(source)?;

        if directive.apply_folio && !directive.has_frames() {
            // Ambiguous intent: a folio stamp with nothing to stamp onto.
            // Processed as-is rather than silently corrected.
            log::warn!(
                "folio requested with no front or rear frame for {}",
                source.display()
            );
        }

        self.assets.check_for(directive)?;

        let bytes = tokio::fs::read(source)
            .await
            .map_err(|_| OverlayError::SourceUnreadable(source.to_path_buf()))?;
        log::debug!(
            "composing {} ({} bytes, directive {directive:?})",
            source.display(),
            bytes.len()
        );

        let composed = self
            .compositor
            .compose(bytes, directive)
            .await
            .map_err(OverlayError::CompositionFailed)?;

        save_atomic(composed, &output).await?;
        log::info!("framed {} -> {}", source.display(), output.display());
        Ok(output)
    }

    /// In-memory variant: compose the given document bytes without reading
    /// or writing any file. Asset preconditions still apply.
    pub async fn compose_bytes(
        &self,
        source: Vec<u8>,
        directive: &FrameDirective,
    ) -> Result<Vec<u8>> {
        self.assets.check_for(directive)?;
        self.compositor
            .compose(source, directive)
            .await
            .map_err(OverlayError::CompositionFailed)
    }

    /// Full per-request control flow: resolve the directive from the
    /// request's intent and hints, run the pipeline, and fold the outcome
    /// into a structured report. Never surfaces a raw error.
    pub async fn handle(&self, request: &OverlayRequest) -> OverlayReport {
        let directive = resolve(
            &request.intent,
            request.folio_hint,
            request.auto_frame_source,
        );
        log::debug!(
            "resolved directive {directive:?} for {}",
            request.source_path.display()
        );
        let result = self.process(&request.source_path, &directive).await;
        if let Err(err) = &result {
            log::error!("overlay failed for {}: {err}", request.source_path.display());
        }
        OverlayReport::from(result)
    }
}

/// Write `bytes` to `path` with no observable partial state: the content
/// goes to a temporary file in the same directory, then renames into place.
async fn save_atomic(bytes: Vec<u8>, path: &Path) -> Result<()> {
    let path = path.to_path_buf();
    // Relative output names have an empty parent; the temp file goes in cwd.
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };

    tokio::task::spawn_blocking(move || {
        let mut tmp = NamedTempFile::new_in(&dir)?;
        tmp.write_all(&bytes)?;
        tmp.flush()?;
        tmp.persist(&path).map_err(|e| e.error)?;
        Ok::<_, OverlayError>(())
    })
    .await??;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_path_keeps_directory_and_prefixes_name() {
        let out = framed_output_path(Path::new("/tmp/actas/acta_123.pdf")).unwrap();
        assert_eq!(out, Path::new("/tmp/actas/enmarcado_acta_123.pdf"));
    }

    #[test]
    fn output_path_without_file_name_is_an_error() {
        assert!(framed_output_path(Path::new("/")).is_err());
    }
}
