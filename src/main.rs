mod cli;

use anyhow::Context;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{error, info};
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::EnvFilter;

use nodevis::{draw_points, load_or_empty, Bitmap, Viewer, CANVAS_SIZE, WINDOW_TITLE};

use crate::cli::Config;

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_span_events(FmtSpan::CLOSE)
        .init();
}

fn run(config: Config) -> anyhow::Result<()> {
    let viewer = Viewer::open(WINDOW_TITLE, CANVAS_SIZE, CANVAS_SIZE)
        .context("failed to initialize the display")?;

    let raw = load_or_empty(&config.input);
    info!(path = %config.input.display(), count = raw.len(), "read points");

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut frame = Bitmap::square(CANVAS_SIZE);
    draw_points(&mut frame, &raw, &mut rng);

    viewer.run_until_closed(&frame).context("display failed")?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = Config::parse();
    run(config).map_err(|e| {
        error!("{:#}", e);
        e
    })
}
