//! Brick layouts
//!
//! Two ways to fill a wave:
//! - Fixed figures: a grid of truthy cells, one brick per truthy cell
//! - Automatic: a full grid, as many columns as fit the board width
//!
//! Both place the brick in column `i`, row `j` at
//! `x = i * w + margin * (i + 1)`, `y = TOP_OFFSET + j * h + margin * (j + 1)`.

use glam::Vec2;

/// Bricks start this far below the top of the board
pub const TOP_OFFSET: f32 = 40.0;

/// A figure: rows of cells, nonzero means "brick here"
pub type Figure = &'static [&'static [u8]];

/// Brick size and spacing used to turn grid cells into pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSpec {
    pub brick_width: f32,
    pub brick_height: f32,
    pub margin: f32,
}

/// Spacing the bundled figures are drawn for (15 x 7 on an 800px board)
pub const FIGURE_GRID: GridSpec = GridSpec {
    brick_width: 32.0,
    brick_height: 16.0,
    margin: 17.0,
};

/// Pyramid
pub const FIGURE_1: Figure = &[
    &[0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0],
    &[0, 0, 0, 0, 0, 0, 1, 1, 1, 0, 0, 0, 0, 0, 0],
    &[0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 0, 0, 0, 0, 0],
    &[0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 1, 0, 0, 0, 0],
    &[0, 0, 0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0, 0, 0],
    &[0, 0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0, 0],
    &[0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0],
];

/// Frame with three boxed blocks inside
pub const FIGURE_2: Figure = &[
    &[1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
    &[1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1],
    &[1, 0, 1, 1, 1, 0, 1, 1, 1, 0, 1, 1, 1, 0, 1],
    &[1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1],
    &[1, 0, 1, 1, 1, 0, 1, 1, 1, 0, 1, 1, 1, 0, 1],
    &[1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1],
    &[1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
];

/// Figure used for a level. Levels past the last figure keep reusing it.
pub fn figure_for_level(level: u32) -> Figure {
    if level == 1 { FIGURE_1 } else { FIGURE_2 }
}

/// Top-left corner of the brick in column `i`, row `j`
#[inline]
pub fn slot_position(i: usize, j: usize, grid: &GridSpec) -> Vec2 {
    let (i, j) = (i as f32, j as f32);
    Vec2::new(
        i * grid.brick_width + grid.margin * (i + 1.0),
        TOP_OFFSET + j * grid.brick_height + grid.margin * (j + 1.0),
    )
}

/// Brick positions for a figure, row by row. `None` places nothing.
pub fn figure_slots<R: AsRef<[u8]>>(figure: Option<&[R]>, grid: &GridSpec) -> Vec<Vec2> {
    let Some(figure) = figure else {
        return Vec::new();
    };

    figure
        .iter()
        .enumerate()
        .flat_map(|(j, line)| {
            line.as_ref()
                .iter()
                .enumerate()
                .filter(|(_, cell)| **cell != 0)
                .map(move |(i, _)| slot_position(i, j, grid))
        })
        .collect()
}

/// Columns that fit across the board: `floor(board_width / (brick_width + margin))`
pub fn auto_columns(board_width: f32, brick_width: f32, margin: f32) -> usize {
    let pitch = brick_width + margin;
    if pitch <= 0.0 || board_width <= 0.0 {
        return 0;
    }
    (board_width / pitch).floor() as usize
}

/// Brick positions for a full `auto_columns x lines` grid
pub fn auto_slots(board_width: f32, brick_size: Vec2, margin: f32, lines: u32) -> Vec<Vec2> {
    let grid = GridSpec {
        brick_width: brick_size.x,
        brick_height: brick_size.y,
        margin,
    };
    let columns = auto_columns(board_width, brick_size.x, margin);

    (0..lines as usize)
        .flat_map(|j| (0..columns).map(move |i| slot_position(i, j, &grid)))
        .collect()
}
