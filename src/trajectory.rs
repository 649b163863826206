use std::fs;
use std::path::Path;

use anyhow::Context;
use itertools::Itertools;
use ultraviolet::Vec2;

/// Recorded particle positions, grouped into frames of `count` positions each.
pub struct Trajectory {
    count: usize,
    size: f32,
    positions: Vec<Vec2>,
}

impl Trajectory {
    /// Read and decode the trajectory file at `path`.
    ///
    /// Returns `Ok(None)` when the file holds less than one full frame.
    pub fn open(path: impl AsRef<Path>) -> anyhow::Result<Option<Self>> {
        let path = path.as_ref();
        let bytes = fs::read(path).with_context(|| format!("failed to find {}", path.display()))?;

        Ok(Self::parse(&String::from_utf8_lossy(&bytes)))
    }

    /// Decode a `<count> <size>` header followed by `x y` pairs.
    ///
    /// Reading stops at the first pair that does not parse as two floats. Positions past the
    /// last full frame are dropped.
    pub fn parse(text: &str) -> Option<Self> {
        let mut tokens = text.split_ascii_whitespace();

        let count: i64 = tokens.next()?.parse().ok()?;
        let size: f32 = tokens.next()?.parse().ok()?;
        let count = usize::try_from(count).ok().filter(|&n| n > 0)?;

        let mut positions: Vec<Vec2> = tokens
            .tuples::<(&str, &str)>()
            .map_while(|(x, y)| Some(Vec2::new(x.parse().ok()?, y.parse().ok()?)))
            .collect();

        let frames = positions.len() / count;
        if frames == 0 {
            return None;
        }

        let trailing = positions.len() - frames * count;
        if trailing > 0 {
            log::debug!("dropping {trailing} positions of an incomplete frame");
        }
        positions.truncate(frames * count);

        Some(Self {
            count,
            size,
            positions,
        })
    }

    /// Number of particles per frame.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Side length of the square domain.
    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn frame_count(&self) -> usize {
        self.positions.len() / self.count
    }

    pub fn frame(&self, index: usize) -> &[Vec2] {
        &self.positions[index * self.count..(index + 1) * self.count]
    }
}
