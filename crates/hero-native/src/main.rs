use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use anyhow::Context;
use clap::Parser;
use hero_core::{Field, FieldParams, FrameStats, Size, ThreadScheduler};
use rand::rngs::StdRng;
use rand::SeedableRng;

mod raster;
use raster::RasterSurface;

#[derive(Parser)]
#[command(name = "hero-native", about = "Run the particle field headless and snapshot it")]
struct Cli {
    /// Surface width in pixels.
    #[arg(short = 'W', long, default_value_t = 1280)]
    width: u32,

    /// Surface height in pixels.
    #[arg(short = 'H', long, default_value_t = 720)]
    height: u32,

    /// Number of frames to run before stopping.
    #[arg(short, long, default_value_t = 300)]
    frames: usize,

    /// Frame cadence of the render thread.
    #[arg(long, default_value_t = 60.0)]
    fps: f32,

    /// PRNG seed; random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Hold the pointer at this surface position, as `X,Y`.
    #[arg(long, value_parser = parse_point)]
    pointer: Option<(f32, f32)>,

    /// Write the last frame to this PNG file.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn parse_point(s: &str) -> Result<(f32, f32), String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got '{s}'"))?;
    let x = x.trim().parse::<f32>().map_err(|e| e.to_string())?;
    let y = y.trim().parse::<f32>().map_err(|e| e.to_string())?;
    Ok((x, y))
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let mut rng = match cli.seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };
    let size = Size::new(cli.width as f32, cli.height as f32);
    let mut field = Field::new(size, FieldParams::default(), &mut rng)?;
    if let Some((x, y)) = cli.pointer {
        field.set_pointer(x, y);
        log::info!("[pointer] held at ({x:.1},{y:.1})");
    }

    let field = Arc::new(Mutex::new(field));
    let surface = Arc::new(Mutex::new(RasterSurface::new(cli.width, cli.height)));
    let frames = Arc::new(AtomicUsize::new(0));
    let (done_tx, done_rx) = mpsc::channel::<FrameStats>();

    let mut scheduler = ThreadScheduler::new(cli.fps);
    let log_every = (cli.fps.round() as usize).max(1);
    let target = cli.frames.max(1);
    let handle = {
        let (field, surface, frames) = (field.clone(), surface.clone(), frames.clone());
        scheduler.start(move || {
            let (Ok(mut f), Ok(mut s)) = (field.lock(), surface.lock()) else {
                log::error!("[frame] shared state poisoned; skipping frame");
                return;
            };
            let stats = f.step(&mut *s);
            let n = frames.fetch_add(1, Ordering::SeqCst) + 1;
            if n % log_every == 0 {
                log::debug!(
                    "[frame] {} particles={} pairs={} pointer={}",
                    n,
                    stats.particles,
                    stats.pair_links,
                    stats.pointer_links
                );
            }
            if n == target {
                _ = done_tx.send(stats);
            }
        })
    };

    let last = done_rx.recv().context("render thread exited early")?;
    scheduler.cancel(handle);
    log::info!(
        "[done] {} frames, last frame: {} particles, {} pair links, {} pointer links",
        frames.load(Ordering::SeqCst),
        last.particles,
        last.pair_links,
        last.pointer_links
    );

    if let Some(path) = &cli.output {
        let surface = surface
            .lock()
            .map_err(|_| anyhow::anyhow!("surface lock poisoned"))?;
        surface
            .image()
            .save(path)
            .with_context(|| format!("writing {}", path.display()))?;
        log::info!("[snapshot] wrote {}", path.display());
    }
    Ok(())
}
