use macroquad::color::{Color, BLACK, WHITE};
use macroquad::input::{is_key_pressed, is_quit_requested, prevent_quit, KeyCode};
use macroquad::shapes::{draw_circle, draw_rectangle_lines};
use macroquad::time::get_time;
use macroquad::window::{clear_background, next_frame, screen_height, screen_width};
use ultraviolet::Vec2;

use crate::trajectory::Trajectory;
use crate::viewport::Viewport;

/// Recorded frames advanced per second of wall-clock time.
pub const FPS: f64 = 1000.0;

const POINT_RADIUS: f32 = 4.0;
const BOUNDARY_COLOR: Color = Color::new(0.75, 0.75, 0.75, 1.0);

pub fn frame_index(elapsed: f64, frame_count: usize) -> usize {
    // Negative times saturate to step 0
    let step = (elapsed * FPS).floor() as u64;
    (step % frame_count as u64) as usize
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum State {
    Running,
    Closing,
}

impl State {
    pub fn next(self, escape_pressed: bool, close_requested: bool) -> Self {
        match self {
            State::Running if escape_pressed || close_requested => State::Closing,
            state => state,
        }
    }
}

pub struct Player {
    trajectory: Trajectory,
    state: State,
    window_nudged: bool,
}

impl Player {
    pub fn new(trajectory: Trajectory) -> Self {
        Self {
            trajectory,
            state: State::Running,
            window_nudged: false,
        }
    }

    pub async fn run(mut self) {
        // Close requests go through the state machine instead of ending the loop directly
        prevent_quit();

        while self.state == State::Running {
            self.render(get_time());
            next_frame().await;

            self.nudge_window();
            self.state = self
                .state
                .next(is_key_pressed(KeyCode::Escape), is_quit_requested());
        }

        log::info!("window closed after {:.1}s", get_time());
    }

    pub fn render(&self, elapsed: f64) {
        let viewport = Viewport::new(
            self.trajectory.size(),
            Vec2::new(screen_width(), screen_height()),
        );

        clear_background(WHITE);

        let (corner, extent) = viewport.boundary();
        draw_rectangle_lines(corner.x, corner.y, extent.x, extent.y, 1.0, BOUNDARY_COLOR);

        let index = frame_index(elapsed, self.trajectory.frame_count());

        for &pos in self.trajectory.frame(index) {
            let point = viewport.to_screen(pos);
            draw_circle(point.x, point.y, POINT_RADIUS, BLACK);
        }
    }

    /// macOS leaves the first frames blank until the window moves.
    fn nudge_window(&mut self) {
        if self.window_nudged {
            return;
        }
        self.window_nudged = true;

        #[cfg(target_os = "macos")]
        {
            use macroquad::miniquad::window::{get_window_position, set_window_position};

            let (x, y) = get_window_position();
            set_window_position(x + 1, y);
        }
    }
}
