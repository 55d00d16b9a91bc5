use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use bouncebox_input::PlayerInput;
use bouncebox_render::{DebugTextRenderer, RenderView, Renderer};
use bouncebox_sim::{Game, GameConfig};

#[derive(Parser)]
#[command(name = "bouncebox-cli", about = "Headless bouncebox demo driver")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Optional YAML config for world bounds and player tuning
    #[arg(long)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the initial scene and configuration
    Info,
    /// Run frames with upward thrust held and print the result
    Simulate {
        /// Number of fixed 1/60s frames to run
        #[arg(short, long, default_value = "120")]
        frames: u64,
    },
    /// Drive the player into the right wall and report the bounce
    Bounce,
}

const DT: f32 = 1.0 / 60.0;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    let config = match &cli.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };

    match cli.command {
        Commands::Info => {
            let game = Game::new(config);
            println!("bouncebox-cli v{}", env!("CARGO_PKG_VERSION"));
            println!(
                "bounds: width={} top={} bottom={}",
                config.bounds.width, config.bounds.top, config.bounds.bottom
            );
            println!(
                "tuning: thrust={} rotate={} limit={} min_bounce={}",
                config.tuning.thrust,
                config.tuning.rotate_speed,
                config.tuning.velocity_limit,
                config.tuning.min_bounce_speed
            );
            print!(
                "{}",
                DebugTextRenderer::new().render(game.scene(), &RenderView::default())
            );
        }
        Commands::Simulate { frames } => {
            let mut game = Game::new(config);
            let input = PlayerInput {
                thrust_up: true,
                ..PlayerInput::default()
            };
            for _ in 0..frames {
                game.update(DT, &input);
            }
            let p = game.player_position();
            let v = game.player_velocity();
            println!("after {frames} frames of upward thrust:");
            println!("  pos ({:.3}, {:.3}, {:.3})", p.x, p.y, p.z);
            println!("  vel ({:.3}, {:.3}, {:.3})", v.x, v.y, v.z);
            print!(
                "{}",
                DebugTextRenderer::new().render(game.scene(), &RenderView::default())
            );
        }
        Commands::Bounce => {
            let mut game = Game::new(config);
            // Turn the nose toward +X (about a quarter turn at the default
            // rotate speed), then thrust until the wall reverses the motion.
            let turn = PlayerInput {
                rotate_right: true,
                ..PlayerInput::default()
            };
            for _ in 0..31 {
                game.update(DT, &turn);
            }
            let input = PlayerInput {
                thrust: true,
                ..PlayerInput::default()
            };
            let mut bounced_at = None;
            for frame in 0..3600u64 {
                let vx_before = game.player_velocity().x;
                game.update(DT, &input);
                if vx_before > 0.0 && game.player_velocity().x < 0.0 {
                    bounced_at = Some((frame, vx_before, game.player_velocity().x));
                    break;
                }
            }
            match bounced_at {
                Some((frame, before, after)) => {
                    println!(
                        "wall bounce at frame {frame}: vel.x {before:.3} -> {after:.3} (damped x0.8)"
                    );
                    let p = game.player_position();
                    println!("  pos ({:.3}, {:.3}, {:.3})", p.x, p.y, p.z);
                }
                None => println!("no bounce within 3600 frames"),
            }
        }
    }

    Ok(())
}
