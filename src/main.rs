use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use macroquad::window::Conf;
use macroquad::Window;

mod playback;
mod trajectory;
mod viewport;

use playback::Player;
use trajectory::Trajectory;

const EXIT_NOT_FOUND: u8 = 1;
const EXIT_NO_DATA: u8 = 2;

/// Replay a recorded 2D particle trajectory in a loop.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Trajectory file: a `<count> <size>` header followed by `x y` position pairs.
    input: PathBuf,
}

fn window_conf(edge: i32) -> Conf {
    Conf {
        window_title: "Visualizer".to_string(),
        window_width: edge,
        window_height: edge,
        window_resizable: true,
        sample_count: 4,
        icon: None,
        high_dpi: true,
        ..Default::default()
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let trajectory = match Trajectory::open(&args.input) {
        Ok(Some(trajectory)) => trajectory,
        Ok(None) => {
            log::error!("{} holds less than one full frame", args.input.display());
            return ExitCode::from(EXIT_NO_DATA);
        }
        Err(err) => {
            log::error!("{err:#}");
            return ExitCode::from(EXIT_NOT_FOUND);
        }
    };

    log::info!(
        "loaded {} frames of {} particles in a domain of size {}",
        trajectory.frame_count(),
        trajectory.count(),
        trajectory.size()
    );

    let edge = viewport::window_edge(trajectory.size());
    Window::from_config(window_conf(edge), Player::new(trajectory).run());

    ExitCode::SUCCESS
}
