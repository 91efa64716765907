mod demo;
mod svg;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context};
use clap::Parser;
use tessera_engine::coords::Viewport;
use tessera_engine::logging::{init_logging, LoggingConfig};
use tessera_engine::render::DrawList;
use tessera_engine::time::FixedStep;

use demo::Demo;

/// Runs the Tessera demo scene headlessly and records its frames.
#[derive(Debug, Parser)]
#[command(name = "tessera-studio", version, about)]
struct Cli {
    /// Number of animation updates to run.
    #[arg(long, default_value_t = 36)]
    ticks: u32,

    /// Animation updates per second.
    #[arg(long, default_value_t = 12.0)]
    rate: f32,

    /// Surface width in pixels.
    #[arg(long, default_value_t = 800.0)]
    width: f32,

    /// Surface height in pixels.
    #[arg(long, default_value_t = 600.0)]
    height: f32,

    /// Write the last recorded frame as SVG.
    #[arg(
        long,
        value_name = "FILE",
        value_hint = clap::ValueHint::FilePath
    )]
    svg: Option<PathBuf>,

    /// Log filter, e.g. "debug" or "tessera_engine=trace".
    #[arg(long, value_name = "FILTER")]
    log: Option<String>,
}

/// Presentation rate of the simulated host loop.
const FRAME: Duration = Duration::from_micros(16_667);

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(LoggingConfig {
        env_filter: cli.log.clone(),
        ..LoggingConfig::default()
    });

    let viewport = Viewport::new(cli.width, cli.height);
    if !viewport.is_valid() {
        bail!("invalid surface size {}x{}", cli.width, cli.height);
    }

    let mut demo = Demo::build().context("failed to build demo scene")?;
    let mut step = FixedStep::new(cli.rate);
    let mut list = DrawList::with_transform(viewport.to_device());
    log::info!(
        "running {} updates at {:?} per update",
        cli.ticks,
        step.interval()
    );

    let mut done = 0;
    let mut frames = 0u64;
    while done < cli.ticks {
        let due = step.advance(FRAME).min(cli.ticks - done);
        if due == 0 {
            continue;
        }
        for _ in 0..due {
            demo.update().context("animation update failed")?;
        }
        done += due;
        frames += 1;

        list.clear();
        demo.scene.draw_all(&mut list);
        let count = list.len();
        log::debug!("frame {frames}: {count} commands after update {done}");
    }

    let origin = demo.group_origin()?;
    log::info!(
        "finished after {frames} frames; group origin at ({:.1}, {:.1})",
        origin.x,
        origin.y
    );

    if let Some(path) = &cli.svg {
        if list.is_empty() {
            demo.scene.draw_all(&mut list);
        }
        svg::write(&list, viewport, path)?;
    }

    Ok(())
}
