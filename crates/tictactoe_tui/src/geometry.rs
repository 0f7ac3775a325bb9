//! Board geometry shared by input mapping and drawing.
//!
//! Two coordinate spaces are involved:
//!
//! - **Terminal space**: the rectangle of terminal cells the board occupies,
//!   used to turn a mouse click into a `(row, col)`.
//! - **Canvas space**: a 3x3 square with the origin at the bottom-left and
//!   y growing upwards, used by the canvas renderer.

use std::f64::consts::TAU;
use tictactoe_round::Position;

/// Fraction of a cell's half-width covered by a mark.
const MARK_RADIUS: f64 = 0.3;

/// Points sampled along a full circle.
const ARC_SAMPLES: usize = 96;

/// Terminal-cell rectangle the board was last drawn into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoardExtent {
    /// Left column.
    pub x: u16,
    /// Top row.
    pub y: u16,
    /// Width in columns.
    pub width: u16,
    /// Height in rows.
    pub height: u16,
}

impl BoardExtent {
    /// Creates an extent.
    pub fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Maps a terminal coordinate to the board cell under it.
    ///
    /// Each axis is split into three equal thirds. A point exactly on a
    /// divider belongs to the middle third. Points outside the extent map to
    /// `None`.
    pub fn cell_at(&self, column: u16, row: u16) -> Option<(usize, usize)> {
        if self.width == 0 || self.height == 0 {
            return None;
        }
        let dx = column.checked_sub(self.x).filter(|dx| *dx < self.width)?;
        let dy = row.checked_sub(self.y).filter(|dy| *dy < self.height)?;
        Some((
            third(f64::from(dy), f64::from(self.height)),
            third(f64::from(dx), f64::from(self.width)),
        ))
    }
}

fn third(offset: f64, extent: f64) -> usize {
    if offset < extent / 3.0 {
        0
    } else if offset <= 2.0 * extent / 3.0 {
        1
    } else {
        2
    }
}

/// A straight segment in canvas space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// Start x.
    pub x1: f64,
    /// Start y.
    pub y1: f64,
    /// End x.
    pub x2: f64,
    /// End y.
    pub y2: f64,
}

impl Segment {
    fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Length of the segment.
    pub fn length(&self) -> f64 {
        (self.x2 - self.x1).hypot(self.y2 - self.y1)
    }

    /// The leading `progress` fraction of this segment.
    fn partial(&self, progress: f64) -> Self {
        let t = progress.clamp(0.0, 1.0);
        Self::new(
            self.x1,
            self.y1,
            self.x1 + (self.x2 - self.x1) * t,
            self.y1 + (self.y2 - self.y1) * t,
        )
    }
}

/// The four dividers: two vertical, then two horizontal, at 1/3 and 2/3.
pub fn grid_lines() -> [Segment; 4] {
    [
        Segment::new(1.0, 0.0, 1.0, 3.0),
        Segment::new(2.0, 0.0, 2.0, 3.0),
        Segment::new(0.0, 1.0, 3.0, 1.0),
        Segment::new(0.0, 2.0, 3.0, 2.0),
    ]
}

/// Center of a cell in canvas space. Row 0 is drawn at the top.
pub fn cell_center(pos: Position) -> (f64, f64) {
    (pos.col() as f64 + 0.5, 2.5 - pos.row() as f64)
}

/// The bottom-left corner of a cell in canvas space.
pub fn cell_origin(pos: Position) -> (f64, f64) {
    (pos.col() as f64, 2.0 - pos.row() as f64)
}

/// The two strokes of a cross, each drawn up to `progress` of its length.
///
/// The first runs top-left to bottom-right, the second top-right to
/// bottom-left.
pub fn cross_strokes(pos: Position, progress: f64) -> [Segment; 2] {
    let (cx, cy) = cell_center(pos);
    let r = MARK_RADIUS;
    [
        Segment::new(cx - r, cy + r, cx + r, cy - r).partial(progress),
        Segment::new(cx + r, cy + r, cx - r, cy - r).partial(progress),
    ]
}

/// Points along an open circle starting at angle 0, sweeping `progress`
/// of a full turn. Empty until the sweep has started.
pub fn arc_points(pos: Position, progress: f64) -> Vec<(f64, f64)> {
    let (cx, cy) = cell_center(pos);
    let sweep = progress.clamp(0.0, 1.0);
    if sweep == 0.0 {
        return Vec::new();
    }
    let samples = (ARC_SAMPLES as f64 * sweep).ceil() as usize;
    (0..=samples)
        .map(|i| {
            let angle = TAU * sweep * (i as f64 / samples.max(1) as f64);
            (cx + MARK_RADIUS * angle.cos(), cy + MARK_RADIUS * angle.sin())
        })
        .collect()
}

/// Segment through the centers of three cells, for highlighting a won line.
pub fn line_through(cells: [Position; 3]) -> Segment {
    let (x1, y1) = cell_center(cells[0]);
    let (x2, y2) = cell_center(cells[2]);
    Segment::new(x1, y1, x2, y2)
}
