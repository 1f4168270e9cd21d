use anyhow::Context;
use blockgrid_common::{GridCoord, ViewerConfig};
use blockgrid_input::{InputController, KeyEvent};
use blockgrid_kernel::{Camera, Scene};
use blockgrid_render::{FrameStats, RecordingBackend, Viewport, render_frame};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "blockgrid-cli", about = "Headless block grid driver")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Grid cells along X
    #[arg(long, default_value_t = 50, global = true)]
    width: u32,

    /// Grid cells along Z
    #[arg(long, default_value_t = 50, global = true)]
    depth: u32,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the viewer configuration
    Info,
    /// Apply key releases in order and print the resulting state
    Keys {
        /// Key chords such as `right`, `shift+up`, `l`, `shift+k`
        keys: Vec<String>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Render one frame to the command recorder and print its statistics
    Frame {
        /// Key chords applied before rendering
        #[arg(short, long)]
        keys: Vec<String>,
        /// Viewport width in pixels
        #[arg(long, default_value_t = 640)]
        viewport_width: u32,
        /// Viewport height in pixels
        #[arg(long, default_value_t = 480)]
        viewport_height: u32,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[derive(Serialize)]
struct StateReport {
    camera: Camera,
    cursor: GridCoord,
    actions: usize,
}

#[derive(Serialize)]
struct FrameReport {
    viewport: Viewport,
    stats: FrameStats,
    pushes: usize,
    pops: usize,
}

fn parse_keys(keys: &[String]) -> anyhow::Result<Vec<KeyEvent>> {
    keys.iter()
        .map(|k| k.parse::<KeyEvent>().with_context(|| format!("invalid key chord {k:?}")))
        .collect()
}

fn apply_keys(scene: &mut Scene, config: &ViewerConfig, keys: &[String]) -> anyhow::Result<usize> {
    let events = parse_keys(keys)?;
    let mut input = InputController::from_config(config);
    Ok(input.handle_all(scene, events))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();

    let config = ViewerConfig::with_grid(cli.width, cli.depth);

    match cli.command {
        Commands::Info => {
            println!("blockgrid-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        Commands::Keys { keys, json } => {
            let mut scene = Scene::new(config.clone())?;
            let actions = apply_keys(&mut scene, &config, &keys)?;
            let report = StateReport {
                camera: *scene.camera(),
                cursor: scene.cursor().position(),
                actions,
            };
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                let p = report.camera.position;
                let c = report.cursor;
                println!("Applied {} action(s)", report.actions);
                println!("Camera: ({:.1}, {:.1}, {:.1})", p.x, p.y, p.z);
                println!("Cursor: ({}, {}, {})", c.x, c.y, c.z);
            }
        }
        Commands::Frame {
            keys,
            viewport_width,
            viewport_height,
            json,
        } => {
            let mut scene = Scene::new(config.clone())?;
            apply_keys(&mut scene, &config, &keys)?;
            let viewport = Viewport::new(viewport_width, viewport_height);
            let mut backend = RecordingBackend::new(viewport);
            let stats = render_frame(&scene, &mut backend).context("frame failed")?;
            if json {
                let report = FrameReport {
                    viewport,
                    stats,
                    pushes: backend.push_count(),
                    pops: backend.pop_count(),
                };
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", backend.summary());
                println!(
                    "Blocks: {}  Cursors: {}  Quads: {}",
                    stats.blocks, stats.cursors, stats.quads
                );
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_keys_reports_bad_chord() {
        let err = parse_keys(&["right".into(), "shift+q".into()]).unwrap_err();
        assert!(format!("{err:#}").contains("shift+q"));
    }

    #[test]
    fn apply_keys_runs_scenario() {
        let config = ViewerConfig::default();
        let mut scene = Scene::new(config.clone()).unwrap();
        let applied = apply_keys(
            &mut scene,
            &config,
            &["right".into(), "shift+up".into(), "down".into()],
        )
        .unwrap();
        assert_eq!(applied, 3);
        assert_eq!(scene.cursor().position(), GridCoord::new(1, 1, 1));
    }
}
