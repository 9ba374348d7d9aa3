//! Algouri CLI - Build, render and share Algorand payment URIs.

mod commands;
mod ui;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "algouri")]
#[command(about = "Build, render and share Algorand payment URIs", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Fields of the payment request being built
#[derive(Args, Debug, Clone)]
pub struct RequestArgs {
    /// Receiver address (passed through unvalidated)
    #[arg(short, long)]
    address: String,

    /// Display label for the receiver
    #[arg(short, long)]
    label: Option<String>,

    /// Amount in base units (microAlgos unless --asset is given)
    #[arg(long)]
    amount: Option<u64>,

    /// Numeric id of the asset to request
    #[arg(long, requires = "amount")]
    asset: Option<u64>,

    /// Note the payer may edit
    #[arg(long, conflicts_with = "xnote")]
    note: Option<String>,

    /// Note the payer cannot edit
    #[arg(long)]
    xnote: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the payment URI
    Uri(RequestArgs),
    /// Print the payment URI as a terminal QR code
    Qr(RequestArgs),
    /// Render a styled QR badge as SVG
    Badge {
        #[command(flatten)]
        request: RequestArgs,

        /// Output file (prints a data URL when omitted)
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// QR code colour as #rrggbb
        #[arg(long, default_value = "#000000")]
        color: String,

        /// Frame colour as #rrggbb; unframed when omitted
        #[arg(long)]
        frame: Option<String>,

        /// Draw the Algorand mark over the centre
        #[arg(long)]
        logo: bool,

        /// Side length in pixels
        #[arg(long, default_value_t = algouri_core::uri::constants::DEFAULT_BADGE_SIZE)]
        size: u32,
    },
    /// Parse a payment URI and show its fields
    Parse {
        uri: String,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Copy the payment URI to the clipboard
    Share(RequestArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive(format!("algouri={level}").parse()?)
                .add_directive(format!("algouri_core={level}").parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Uri(args) => commands::print_uri(&args.into()),
        Commands::Qr(args) => commands::print_qr(&args.into()),
        Commands::Badge { request, out, color, frame, logo, size } => {
            let style = commands::badge_style(&color, frame.as_deref(), logo, size)?;
            commands::write_badge(&request.into(), &style, out.as_deref())?
        }
        Commands::Parse { uri, json } => commands::parse_uri(&uri, json)?,
        Commands::Share(args) => commands::share(&args.into())?,
    }

    Ok(())
}
