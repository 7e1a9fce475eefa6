use frame_directive::FrameDirective;
use std::future::Future;
use std::path::PathBuf;
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

/// The external compositing collaborator.
///
/// Takes the source document bytes and the directive flags; returns the
/// composed document bytes, or an opaque failure message that the
/// orchestrator relays verbatim without interpreting it.
pub trait Compositor {
    fn compose(
        &self,
        source: Vec<u8>,
        directive: &FrameDirective,
    ) -> impl Future<Output = std::result::Result<Vec<u8>, String>> + Send;
}

impl<C: Compositor + Sync> Compositor for &C {
    fn compose(
        &self,
        source: Vec<u8>,
        directive: &FrameDirective,
    ) -> impl Future<Output = std::result::Result<Vec<u8>, String>> + Send {
        (**self).compose(source, directive)
    }
}

/// Compositor backed by an external program.
///
/// The source document is written to the child's stdin, the directive is
/// passed as flags, and the composed document is read from stdout. A
/// non-zero exit reports the child's stderr as the failure message.
#[derive(Debug, Clone)]
pub struct CommandCompositor {
    program: PathBuf,
}

impl CommandCompositor {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn args_for(directive: &FrameDirective) -> Vec<&'static str> {
        let mut args = Vec::new();
        if directive.apply_front {
            args.push("--front");
        }
        if directive.apply_rear {
            args.push("--rear");
        }
        if directive.apply_folio {
            args.push("--folio");
        }
        if directive.only_first_page {
            args.push("--first-page-only");
        }
        args
    }
}

impl Compositor for CommandCompositor {
    async fn compose(
        &self,
        source: Vec<u8>,
        directive: &FrameDirective,
    ) -> std::result::Result<Vec<u8>, String> {
        let mut child = Command::new(&self.program)
            .args(Self::args_for(directive))
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| format!("failed to start compositor {}: {e}", self.program.display()))?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| "compositor stdin unavailable".to_string())?;

        // Feed stdin while draining stdout. A compositor that streams its
        // output while still consuming input would otherwise fill the
        // stdout pipe and stall both processes once the source outgrows
        // the pipe buffers.
        let feed = async move {
            let result = stdin.write_all(&source).await;
            drop(stdin);
            result
        };
        let (write_result, output) = tokio::join!(feed, child.wait_with_output());

        let output = output.map_err(|e| format!("compositor did not finish: {e}"))?;
        if let Err(e) = write_result {
            // A child that closes stdin early reports through its exit
            // status instead.
            if e.kind() != std::io::ErrorKind::BrokenPipe {
                return Err(format!("failed to send document to compositor: {e}"));
            }
        }

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stderr = stderr.trim();
            return Err(if stderr.is_empty() {
                format!("compositor exited with {}", output.status)
            } else {
                stderr.to_string()
            });
        }

        Ok(output.stdout)
    }
}
