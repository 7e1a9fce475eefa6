use anyhow::Result;
use clap::{Parser, Subcommand};
use frame_overlay::{CommandCompositor, FrameAssets, Overlayer, OverlayRequest};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "framer", about = "PDF frame overlay pipeline", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve an intent into a frame directive (no I/O)
    Resolve {
        /// Free-text intent, e.g. "quiero el marco con folio"
        #[arg(short, long, default_value = "")]
        intent: String,

        /// Explicit folio request alongside the text
        #[arg(long)]
        folio: bool,

        /// Request comes from an auto-frame source (skips text analysis)
        #[arg(long)]
        auto_frame: bool,
    },

    /// Frame a source PDF and write the result next to it
    Process {
        /// Source PDF to frame
        #[arg(short, long)]
        source: PathBuf,

        /// Free-text intent describing the framing
        #[arg(short, long, default_value = "")]
        intent: String,

        /// Explicit folio request alongside the text
        #[arg(long)]
        folio: bool,

        /// Request comes from an auto-frame source (skips text analysis)
        #[arg(long)]
        auto_frame: bool,

        /// Front-background template document
        #[arg(long, default_value = "static/marcoparaactas.pdf")]
        front_template: PathBuf,

        /// Directory of rear-frame templates
        #[arg(long, default_value = "static/marcostraceros")]
        rear_frames: PathBuf,

        /// External compositor program (reads the PDF on stdin, writes the
        /// composed PDF to stdout)
        #[arg(long)]
        compositor: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Resolve {
            intent,
            folio,
            auto_frame,
        } => {
            let directive = frame_directive::resolve(&intent, folio, auto_frame);
            println!("{}", serde_json::to_string_pretty(&directive)?);
        }

        Commands::Process {
            source,
            intent,
            folio,
            auto_frame,
            front_template,
            rear_frames,
            compositor,
        } => {
            let assets = FrameAssets::new(front_template, rear_frames);
            assets.log_inventory();

            let overlayer = Overlayer::new(assets, CommandCompositor::new(compositor));
            let report = overlayer
                .handle(&OverlayRequest {
                    intent,
                    folio_hint: folio,
                    auto_frame_source: auto_frame,
                    source_path: source,
                })
                .await;

            println!("{}", serde_json::to_string_pretty(&report)?);
            if !report.success {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
