use std::f32::consts::TAU;
use std::time::{Duration, Instant};

use rand::Rng;
use ratatui::Frame;
use ratatui::layout::Rect;

use crate::tui::Theme;

const GLYPH: &str = "♥";
const COLS: usize = 5;
const ROWS: usize = 2;

/// Decorative field of drifting glyphs behind the form.
///
/// Ten glyphs laid out on a 5x2 grid, each jittered within its cell and
/// bobbing on its own sine path. Purely cosmetic; never rendered over
/// foreground widgets because it is drawn first.
#[derive(Debug)]
pub struct Background {
    glyphs: Vec<FloatingGlyph>,
    started: Instant,
}

#[derive(Debug)]
struct FloatingGlyph {
    base_x: f32, // fraction of the area width
    base_y: f32, // fraction of the area height
    period: f32, // seconds per oscillation
    phase: f32,
    drift: f32, // vertical amplitude as a fraction of the area height
}

impl Default for Background {
    fn default() -> Self {
        Self::new(&mut rand::rng())
    }
}

impl Background {
    pub fn new(rng: &mut impl Rng) -> Self {
        let glyphs = (0..COLS * ROWS)
            .map(|i| {
                let col = (i % COLS) as f32;
                let row = (i / COLS) as f32;
                FloatingGlyph {
                    base_x: col * 0.20 + 0.02 + rng.random_range(0.0..0.10),
                    base_y: row * 0.35 + 0.25 + rng.random_range(0.0..0.20),
                    period: rng.random_range(2.5..4.5),
                    phase: rng.random_range(0.0..TAU),
                    drift: rng.random_range(0.02..0.06),
                }
            })
            .collect();
        Self {
            glyphs,
            started: Instant::now(),
        }
    }

    /// Time since the background started animating; also used as the
    /// clock for other cosmetic animation (the loading spinner).
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let t = self.elapsed().as_secs_f32();
        let buf = frame.buffer_mut();
        for glyph in &self.glyphs {
            let bob = (TAU * t / glyph.period + glyph.phase).sin() * glyph.drift;
            let x = area.x + (glyph.base_x * area.width as f32) as u16;
            let y = area.y + ((glyph.base_y + bob).clamp(0.0, 0.98) * area.height as f32) as u16;
            if x < area.right() && y < area.bottom() {
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_symbol(GLYPH).set_fg(theme.bg_elevated);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyphs_stay_in_unit_bounds() {
        let background = Background::default();
        assert_eq!(background.glyphs.len(), 10);
        for glyph in &background.glyphs {
            assert!(glyph.base_x >= 0.0 && glyph.base_x < 1.0);
            assert!(glyph.base_y + glyph.drift < 1.0);
            assert!(glyph.period >= 2.5 && glyph.period < 4.5);
        }
    }
}
