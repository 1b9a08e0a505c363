mod store;

use std::fmt::Write as _;
use std::fs;
use std::io::{self, Read};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use gallery::codec::{self, CodecError};
use gallery::{DraftStore, GALLERY_DRAFT_KEY, Gallery, KeyValueStore, StorageError, group_by_room};

use crate::store::FileStore;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),
    #[error("invalid gallery JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("no gallery data in token: {0}")]
    NoGallery(#[from] CodecError),
    #[error("no draft stored in {0}")]
    NoDraft(String),
    #[error("draft storage failed: {0}")]
    Storage(#[from] StorageError),
}

#[derive(Parser, Debug)]
#[command(name = "gallery-cli", about = "Encode, decode, and inspect shareable gallery links")]
struct Cli {
    /// Site origin used when printing viewer links.
    #[arg(long, env = "GALLERY_BASE_URL", default_value = "http://localhost:3000")]
    base_url: String,

    /// Directory holding the local draft.
    #[arg(long, env = "GALLERY_DRAFT_DIR", default_value = ".gallery")]
    draft_dir: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Encode a gallery JSON document into a viewer link.
    Encode {
        #[arg(long, default_value = "-", help = "Input file path, or - for stdin")]
        input: String,
        /// Print only the token instead of the full link.
        #[arg(long, default_value_t = false)]
        token_only: bool,
    },
    /// Decode a token or viewer link and print the gallery JSON.
    Decode { token: String },
    /// List a shared gallery's rooms and artwork titles.
    Rooms { token: String },
    /// Manage the local draft.
    #[command(subcommand)]
    Draft(DraftCommand),
}

#[derive(Subcommand, Debug)]
enum DraftCommand {
    /// Print the stored draft.
    Load,
    /// Replace the stored draft with a gallery JSON document.
    Save {
        #[arg(long, default_value = "-", help = "Input file path, or - for stdin")]
        input: String,
    },
    /// Remove the stored draft.
    Clear,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(output) => {
            if !output.is_empty() {
                println!("{output}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<String, CliError> {
    let store = FileStore::new(&cli.draft_dir);
    match cli.command {
        Command::Encode { input, token_only } => {
            let gallery = read_gallery(&input)?;
            if token_only {
                Ok(codec::encode(&gallery))
            } else {
                Ok(codec::viewer_link(&cli.base_url, &gallery))
            }
        }
        Command::Decode { token } => {
            let gallery = decode_link(&token)?;
            Ok(serde_json::to_string_pretty(&gallery)?)
        }
        Command::Rooms { token } => Ok(render_rooms(&decode_link(&token)?)),
        Command::Draft(DraftCommand::Load) => {
            let draft = DraftStore::new(&store).load().ok_or_else(|| CliError::NoDraft(cli.draft_dir.clone()))?;
            Ok(serde_json::to_string_pretty(&draft)?)
        }
        Command::Draft(DraftCommand::Save { input }) => {
            let gallery = read_gallery(&input)?;
            store.set(GALLERY_DRAFT_KEY, &serde_json::to_string(&gallery)?)?;
            tracing::info!(dir = %cli.draft_dir, artworks = gallery.artworks.len(), "draft saved");
            Ok(String::new())
        }
        Command::Draft(DraftCommand::Clear) => {
            store.remove(GALLERY_DRAFT_KEY)?;
            tracing::info!(dir = %cli.draft_dir, "draft cleared");
            Ok(String::new())
        }
    }
}

fn read_gallery(input: &str) -> Result<Gallery, CliError> {
    let raw = if input == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        fs::read_to_string(input)?
    };
    Ok(serde_json::from_str(&raw)?)
}

/// Decode a bare token, a `#token` fragment, or a full viewer link.
fn decode_link(input: &str) -> Result<Gallery, CliError> {
    let obj = codec::try_decode_object(codec::fragment_of(input.trim()))?;
    Ok(Gallery::from_json_object(&obj))
}

fn render_rooms(gallery: &Gallery) -> String {
    let mut out = format!("{} ({})\n", gallery.display_name(), gallery.effective_theme().as_str());
    let groups = group_by_room(&gallery.artworks);
    if groups.is_empty() {
        out.push_str("  (no artworks)\n");
    }
    for group in groups {
        let _ = writeln!(out, "[{}]", group.room);
        for artwork in group.artworks {
            let _ = writeln!(out, "  - {}  {}", artwork.title, artwork.url);
        }
    }
    out.trim_end().to_owned()
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;
