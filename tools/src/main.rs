use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use bfen_tools::{field_report, format_fields_pretty, parse_fen};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "bfen-tools",
    version,
    about = "Encode and inspect binary-packed chess positions"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Encode a FEN position into BFEN bytes.
    Encode {
        /// FEN text; trailing fields are optional.
        fen: String,
        /// Output format.
        #[arg(long, value_enum, default_value_t = EncodeFormat::Hex)]
        format: EncodeFormat,
        /// Write the output to a file instead of stdout.
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// List the encoded fields of a FEN position.
    Fields {
        /// FEN text; trailing fields are optional.
        fen: String,
        /// Output format.
        #[arg(long, value_enum, default_value_t = FieldsFormat::Json)]
        format: FieldsFormat,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum EncodeFormat {
    Hex,
    Raw,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FieldsFormat {
    Json,
    Pretty,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Encode { fen, format, out } => {
            let position = parse_fen(&fen).context("parse FEN")?;
            debug!(runs = position.squares.len(), "parsed FEN");
            let encoded = codec::encode(&position).context("encode position")?;
            let bytes = match format {
                EncodeFormat::Hex => format!("{encoded:x}\n").into_bytes(),
                EncodeFormat::Raw => encoded.into_bytes(),
            };
            match out {
                Some(path) => fs::write(&path, &bytes)
                    .with_context(|| format!("write {}", path.display()))?,
                None => io::stdout().write_all(&bytes).context("write stdout")?,
            }
        }
        Command::Fields { fen, format } => {
            let position = parse_fen(&fen).context("parse FEN")?;
            let rows = field_report(&position)?;
            match format {
                FieldsFormat::Json => {
                    let json = serde_json::to_string_pretty(&rows).context("serialize json")?;
                    println!("{json}");
                }
                FieldsFormat::Pretty => {
                    print!("{}", format_fields_pretty(&rows));
                }
            }
        }
    }
    Ok(())
}
