use std::{path::PathBuf, sync::Arc};

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use showlist::{cli, config, error, types::PkceToken};
use tokio::sync::Mutex;

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Authorize with Spotify API
    Auth,

    /// Build a playlist from artists playing upcoming shows
    Generate(GenerateOptions),

    /// List previously generated playlists
    History(HistoryOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct GenerateOptions {
    /// JSON file with events: [{"artistName", "date", "venueName"}, ...]
    #[clap(long, short = 'e')]
    events: PathBuf,

    /// Playlist name (defaults to "<city> Live Music - Week of <date>")
    #[clap(long)]
    name: Option<String>,

    /// Playlist description
    #[clap(long)]
    description: Option<String>,

    /// City the shows take place in, used for the default name
    #[clap(long)]
    city: Option<String>,

    /// State or region, used for the default description
    #[clap(long)]
    state: Option<String>,

    /// Spotify user owning the playlist (defaults to SPOTIFY_USER_ID or the logged-in user)
    #[clap(long)]
    owner: Option<String>,

    /// Maximum number of tracks in the playlist
    #[clap(long, default_value_t = 50, value_parser = clap::value_parser!(u16).range(1..))]
    max_tracks: u16,

    /// Keep each artist's tracks together instead of interleaving artists
    #[clap(long)]
    no_shuffle: bool,

    /// Skip broadly popular (pop) tracks and keep search relevance order
    #[clap(long)]
    exclude_popular: bool,

    /// Prefer lesser-known tracks; overrides --exclude-popular
    #[clap(long)]
    discovery: bool,

    /// Create a private playlist
    #[clap(long)]
    private: bool,

    /// Seed for the track shuffle, for reproducible playlists
    #[clap(long)]
    seed: Option<u64>,

    /// Print the planned track order without creating a playlist
    #[clap(long)]
    dry_run: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct HistoryOptions {
    /// Show only the most recent N playlists
    #[clap(long)]
    limit: Option<usize>,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Auth => {
            let oauth_result: Arc<Mutex<Option<PkceToken>>> = Arc::new(Mutex::new(None));
            cli::auth(Arc::clone(&oauth_result)).await;
        }
        Command::Generate(opt) => {
            cli::generate(cli::GenerateRequest {
                events_file: opt.events,
                name: opt.name,
                description: opt.description,
                city: opt.city,
                state: opt.state,
                owner: opt.owner,
                max_tracks: usize::from(opt.max_tracks),
                no_shuffle: opt.no_shuffle,
                exclude_popular: opt.exclude_popular,
                discovery: opt.discovery,
                private: opt.private,
                seed: opt.seed,
                dry_run: opt.dry_run,
            })
            .await
        }
        Command::History(opt) => cli::history(opt.limit).await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
