use anyhow::Result;
use clap::Parser;
use log::info;
use timestep_snake::game::config::{DEFAULT_FRAMES_TO_GROW, DEFAULT_SPEED, DEFAULT_STARTING_FRAMES};
use timestep_snake::game::{BoardConfig, Palette, SnakeConfig};
use timestep_snake::modes::HumanMode;

#[derive(Parser)]
#[command(name = "timestep_snake")]
#[command(version, about = "Snake with smooth movement on a fixed-timestep loop")]
struct Cli {
    /// Number of players (player two steers with WASD)
    #[arg(long, default_value = "1", value_parser = clap::value_parser!(u8).range(1..=2))]
    players: u8,

    /// Grid width
    #[arg(long, default_value = "20", value_parser = clap::value_parser!(u16).range(1..))]
    width: u16,

    /// Grid height
    #[arg(long, default_value = "20", value_parser = clap::value_parser!(u16).range(1..))]
    height: u16,

    /// Simulation steps per second
    #[arg(long, default_value = "60")]
    tick_rate: u32,

    /// Maximum frames drawn per second
    #[arg(long, default_value = "60")]
    fps: u32,

    /// Snake speed in cells per second
    #[arg(long, default_value_t = DEFAULT_SPEED)]
    speed: f64,

    /// Palette for player one (black, grey, white, purple, blue, green,
    /// yellow, orange, red, rainbow)
    #[arg(long, default_value = "green")]
    color: String,

    /// Palette for player two
    #[arg(long, default_value = "blue")]
    color2: String,

    /// Steps of growth at the start of each life
    #[arg(long, default_value_t = DEFAULT_STARTING_FRAMES)]
    starting_frames: u32,

    /// Steps of growth per item eaten
    #[arg(long, default_value_t = DEFAULT_FRAMES_TO_GROW)]
    frames_to_grow: u32,

    /// Distance from a cell boundary within which a turn may happen, in cells
    #[arg(long)]
    threshold: Option<f64>,

    /// Draw grid dots on empty cells
    #[arg(long)]
    show_grid: bool,

    /// Show FPS and UPS in the header
    #[arg(long)]
    show_counters: bool,
}

impl Cli {
    fn board(&self) -> BoardConfig {
        BoardConfig {
            show_grid: self.show_grid,
            show_counters: self.show_counters,
            tick_rate: self.tick_rate,
            max_fps: self.fps,
            ..BoardConfig::new(self.width, self.height)
        }
    }

    fn snake(&self, board: &BoardConfig, palette: &str) -> SnakeConfig {
        let defaults = SnakeConfig::for_board(board);
        SnakeConfig {
            colors: Palette::from_name(palette).colors().to_vec(),
            speed: self.speed,
            starting_frames: self.starting_frames,
            frames_to_grow: self.frames_to_grow,
            threshold: self.threshold.unwrap_or(defaults.threshold),
            ..defaults
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    let board = cli.board();
    let palettes = [cli.color.as_str(), cli.color2.as_str()];
    let snakes = palettes[..usize::from(cli.players)]
        .iter()
        .map(|palette| cli.snake(&board, palette))
        .collect();

    info!("starting a {}-player game on a {}x{} board", cli.players, cli.width, cli.height);
    let metrics = HumanMode::new(board, snakes).run().await?;

    println!(
        "Best score: {} | Lives lost: {} | Time: {}",
        metrics.high_score,
        metrics.lives_lost,
        metrics.format_time()
    );

    Ok(())
}
