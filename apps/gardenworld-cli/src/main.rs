use anyhow::Context;
use clap::Parser;
use gardenworld_dice::SeededSource;
use gardenworld_kernel::GardenWorld;
use gardenworld_render::{JsonRenderer, Renderer, TextRenderer};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "gardenworld",
    version,
    about = "Roll the physical statistics of a garden world"
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// RNG seed for a reproducible world (drawn from entropy when omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print the world as JSON instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(
        common = gardenworld_common::crate_info(),
        dice = gardenworld_dice::crate_info(),
        kernel = gardenworld_kernel::crate_info(),
        render = gardenworld_render::crate_info(),
        "crates loaded"
    );

    let mut source = match cli.seed {
        Some(seed) => SeededSource::from_seed(seed),
        None => SeededSource::from_entropy(),
    };
    tracing::info!(seed = source.seed(), "generating garden world");

    let world = GardenWorld::generate(&mut source).context("garden world generation failed")?;
    print!("{}", render(&world, cli.json)?);

    Ok(())
}

fn render(world: &GardenWorld, json: bool) -> anyhow::Result<String> {
    if json {
        let mut out = JsonRenderer::new()
            .render(world)
            .context("failed to serialize world report")?;
        out.push('\n');
        Ok(out)
    } else {
        Ok(TextRenderer::new().render(world))
    }
}
