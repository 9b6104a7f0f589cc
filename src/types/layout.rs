//! Horizontal sprite layout.
//!
//! Flags are laid out left-to-right in a single row, each cell separated by
//! a fixed margin. All measurements are expressed at 1x and derived for
//! higher densities by integer multiplication.

use std::fmt;

/// Pixel density of a sprite sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scale {
    X1,
    X2,
}

impl Scale {
    /// Every scale, in the order sprites are produced.
    pub const ALL: [Scale; 2] = [Scale::X1, Scale::X2];

    /// Integer multiplier applied to 1x measurements.
    pub fn factor(self) -> u32 {
        match self {
            Scale::X1 => 1,
            Scale::X2 => 2,
        }
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x", self.factor())
    }
}

/// Dimensions of a single flag cell at 1x.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellSize {
    pub width: u32,
    pub height: u32,
    pub margin: u32,
}

impl CellSize {
    pub fn new(width: u32, height: u32, margin: u32) -> Self {
        Self {
            width,
            height,
            margin,
        }
    }

    /// Horizontal distance between the left edges of adjacent cells.
    pub fn stride(&self) -> u32 {
        self.width + self.margin
    }

    /// Cell width and height at the given scale.
    pub fn scaled(&self, scale: Scale) -> (u32, u32) {
        (self.width * scale.factor(), self.height * scale.factor())
    }
}

impl Default for CellSize {
    fn default() -> Self {
        Self::new(20, 15, 2)
    }
}

/// Layout of `count` cells in a single horizontal strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteLayout {
    pub cell: CellSize,
    pub count: usize,
}

impl SpriteLayout {
    /// Layout of `count` cells, or `None` when the 2x strip would not fit
    /// in `u32` pixels.
    ///
    /// Every measurement derived from a constructed layout is then free of
    /// overflow, including the scaled cell and stride.
    pub fn new(cell: CellSize, count: usize) -> Option<Self> {
        let cells = u32::try_from(count).ok()?;
        let factor = Scale::X2.factor();

        cell.width
            .checked_add(cell.margin)?
            .checked_mul(cells.max(1))?
            .checked_mul(factor)?;
        cell.height.checked_mul(factor)?;

        Some(Self { cell, count })
    }

    /// Left edge of the cell at `index`, at 1x.
    ///
    /// `index` must be below `count`.
    pub fn offset_of(&self, index: usize) -> u32 {
        index as u32 * self.cell.stride()
    }

    /// Total strip width at 1x.
    ///
    /// There is no trailing margin after the last cell. An empty layout has
    /// width 0.
    pub fn width(&self) -> u32 {
        (self.count as u32 * self.cell.stride()).saturating_sub(self.cell.margin)
    }

    /// Strip height at 1x.
    pub fn height(&self) -> u32 {
        self.cell.height
    }

    /// Strip width and height at the given scale.
    pub fn dimensions(&self, scale: Scale) -> (u32, u32) {
        (self.width() * scale.factor(), self.height() * scale.factor())
    }
}
