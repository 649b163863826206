use ultraviolet::Vec2;

/// Margin around the domain, in domain units.
pub const EPS: f32 = 0.1;
/// Window pixels per domain unit.
pub const SCALE: f32 = 800.0;
/// Smallest window edge, in pixels.
pub const MIN_SIZE: i32 = 100;

pub fn window_edge(size: f32) -> i32 {
    // A NaN product casts to 0
    let edge = ((size + 2.0 * EPS) * SCALE).round() as i32;
    edge.max(MIN_SIZE)
}

/// Maps domain coordinates `[-EPS, size + EPS]²` onto a screen of the given pixel size, with y
/// pointing up.
#[derive(Clone, Copy, Debug)]
pub struct Viewport {
    size: f32,
    screen: Vec2,
}

impl Viewport {
    pub fn new(size: f32, screen: Vec2) -> Self {
        Self { size, screen }
    }

    fn span(&self) -> f32 {
        self.size + 2.0 * EPS
    }

    pub fn to_screen(&self, pos: Vec2) -> Vec2 {
        let unit = (pos + Vec2::broadcast(EPS)) / self.span();
        Vec2::new(unit.x * self.screen.x, (1.0 - unit.y) * self.screen.y)
    }

    /// Top-left corner and extent of the domain square `[0, size]²` on screen.
    pub fn boundary(&self) -> (Vec2, Vec2) {
        let top_left = self.to_screen(Vec2::new(0.0, self.size));
        let bottom_right = self.to_screen(Vec2::new(self.size, 0.0));

        (top_left, bottom_right - top_left)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: Vec2, b: Vec2) {
        assert!((a - b).mag() < 1e-3, "{a:?} != {b:?}");
    }

    #[test]
    fn unit_domain_window() {
        assert_eq!(window_edge(1.0), 960);
        assert_eq!(window_edge(0.5), 560);
    }

    #[test]
    fn small_domains_clamp_to_min_size() {
        assert_eq!(window_edge(0.0), 160);
        assert_eq!(window_edge(-0.1), MIN_SIZE);
        assert_eq!(window_edge(-1.0), MIN_SIZE);
        assert_eq!(window_edge(f32::NAN), MIN_SIZE);
    }

    #[test]
    fn window_edge_is_monotonic() {
        let mut last = window_edge(-1.0);

        for step in 0..4000 {
            let edge = window_edge(-1.0 + step as f32 * 0.001);
            assert!(edge >= last);
            assert!(edge >= MIN_SIZE);
            last = edge;
        }
    }

    #[test]
    fn margins_fill_the_screen() {
        for screen in [Vec2::new(960.0, 960.0), Vec2::new(300.0, 700.0)] {
            let viewport = Viewport::new(1.0, screen);

            assert_close(viewport.to_screen(Vec2::broadcast(-EPS)), Vec2::new(0.0, screen.y));
            assert_close(viewport.to_screen(Vec2::broadcast(1.0 + EPS)), Vec2::new(screen.x, 0.0));
        }
    }

    #[test]
    fn boundary_is_inset_by_margin() {
        let viewport = Viewport::new(1.0, Vec2::new(960.0, 960.0));
        let (corner, extent) = viewport.boundary();

        assert_close(corner, Vec2::new(80.0, 80.0));
        assert_close(extent, Vec2::new(800.0, 800.0));
    }
}
