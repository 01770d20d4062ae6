use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use gifreel::{
    AssembleOpts, EncodeConfig, FilterKind, FrameUrl, GifreelResult, HttpFetcher, assemble,
    encode_gif,
};

#[derive(Parser, Debug)]
#[command(name = "gifreel", version)]
struct Cli {
    /// URL of the first frame. Must end in `<digits>.jpg` for the sequence
    /// to advance past it.
    url: String,

    /// Output GIF path.
    output: PathBuf,

    /// Display time per frame in milliseconds. Lower is faster.
    #[arg(short, long, default_value_t = 100)]
    speed: u32,

    /// Reverse the final frame order.
    #[arg(short, long)]
    reverse: bool,

    /// Apply a color filter to every frame.
    #[arg(short, long, value_enum)]
    filter: Option<FilterChoice>,

    /// Print progress and diagnostics.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FilterChoice {
    Grayscale,
    Sepia,
}

impl From<FilterChoice> for FilterKind {
    fn from(choice: FilterChoice) -> Self {
        match choice {
            FilterChoice::Grayscale => FilterKind::Grayscale,
            FilterChoice::Sepia => FilterKind::Sepia,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_target(false)
            .init();
    }

    // A run that loads nothing is still a completed run: every failure mode
    // is diagnostic text, never a nonzero exit.
    if let Err(err) = run(cli) {
        tracing::error!(%err, "gif creation aborted");
    }
}

fn run(cli: Cli) -> GifreelResult<()> {
    tracing::info!(url = %cli.url, "starting frame discovery");

    let mut fetcher = HttpFetcher::new()?;
    let opts = AssembleOpts {
        filter: cli.filter.map(FilterKind::from).unwrap_or_default(),
        reverse: cli.reverse,
    };

    let seq = assemble(&mut fetcher, FrameUrl::new(cli.url), opts)?;
    tracing::info!(frames = seq.len(), "assembling gif");

    encode_gif(seq, &EncodeConfig::new(&cli.output, cli.speed))?;
    tracing::info!(path = %cli.output.display(), "gif written");

    Ok(())
}
