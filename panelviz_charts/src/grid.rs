// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Square-cell grid layout for heatmaps.
//!
//! Cells are square and sized from the available width alone. The grid is centered in the
//! plot area and may extend past it vertically when there are many more y categories than x
//! categories.

use kurbo::{Point, Rect};

use crate::layout::Size;

/// Outer margins around the plot area.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Margins {
    /// Top margin.
    pub top: f64,
    /// Right margin.
    pub right: f64,
    /// Bottom margin (room for x labels).
    pub bottom: f64,
    /// Left margin (room for y labels).
    pub left: f64,
}

impl Margins {
    /// Heatmap margins.
    pub const HEATMAP: Self = Self {
        top: 50.0,
        right: 20.0,
        bottom: 80.0,
        left: 100.0,
    };
}

/// Cell size below which crowded x labels are rotated.
pub const ROTATE_BELOW_CELL_SIZE: f64 = 80.0;
/// X category count above which crowded x labels are rotated.
pub const ROTATE_ABOVE_COUNT: usize = 5;
/// Rotation applied to crowded x labels, in degrees.
pub const ROTATED_LABEL_ANGLE: f64 = 45.0;
/// Gap between the grid and its axis labels.
pub const LABEL_GAP: f64 = 10.0;

/// Placement of a heatmap grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLayout {
    margins: Margins,
    origin: Point,
    cell_size: f64,
    columns: usize,
    rows: usize,
}

impl GridLayout {
    /// Lays out `columns × rows` square cells on `size`.
    pub fn new(size: Size, columns: usize, rows: usize) -> Self {
        let margins = Margins::HEATMAP;
        let available_width = size.width - margins.left - margins.right;
        let available_height = size.height - margins.top - margins.bottom;
        let cell_size = if columns == 0 {
            0.0
        } else {
            (available_width / columns as f64).max(0.0)
        };
        let grid_width = cell_size * columns as f64;
        let grid_height = cell_size * rows as f64;
        let origin = Point::new(
            margins.left + (available_width - grid_width) / 2.0,
            margins.top + (available_height - grid_height) / 2.0,
        );
        Self {
            margins,
            origin,
            cell_size,
            columns,
            rows,
        }
    }

    /// Top-left corner of the grid.
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Side length of a cell.
    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    /// Number of x categories.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Number of y categories.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Total grid height.
    pub fn grid_height(&self) -> f64 {
        self.cell_size * self.rows as f64
    }

    /// The rect of the cell in `column` and `row`.
    pub fn cell(&self, column: usize, row: usize) -> Rect {
        let x0 = self.origin.x + column as f64 * self.cell_size;
        let y0 = self.origin.y + row as f64 * self.cell_size;
        Rect::new(x0, y0, x0 + self.cell_size, y0 + self.cell_size)
    }

    /// Anchor of the label for y category `row`, given its font size.
    pub fn y_label_pos(&self, row: usize, font_size: f64) -> Point {
        Point::new(
            self.margins.left - LABEL_GAP,
            self.origin.y + (row as f64 + 0.5) * self.cell_size + font_size / 3.0,
        )
    }

    /// Anchor of the label for x category `column`.
    pub fn x_label_pos(&self, column: usize) -> Point {
        Point::new(
            self.origin.x + (column as f64 + 0.5) * self.cell_size,
            self.origin.y + self.grid_height() + LABEL_GAP,
        )
    }

    /// Whether x labels are crowded enough to rotate.
    pub fn rotate_x_labels(&self) -> bool {
        self.columns > ROTATE_ABOVE_COUNT && self.cell_size < ROTATE_BELOW_CELL_SIZE
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn cells_are_square_and_centered() {
        let grid = GridLayout::new(Size::new(520.0, 530.0), 4, 2);
        assert_eq!(grid.cell_size(), 100.0);
        // available 400 × 400, grid 400 × 200.
        assert_eq!(grid.origin(), Point::new(100.0, 150.0));
        assert_eq!(grid.cell(1, 1), Rect::new(200.0, 250.0, 300.0, 350.0));
    }

    #[test]
    fn tall_grids_overflow_the_plot_area() {
        let grid = GridLayout::new(Size::new(220.0, 230.0), 1, 4);
        assert_eq!(grid.cell_size(), 100.0);
        assert_eq!(grid.grid_height(), 400.0);
        assert!(grid.origin().y < Margins::HEATMAP.top);
    }

    #[test]
    fn label_positions_track_cells() {
        let grid = GridLayout::new(Size::new(520.0, 530.0), 4, 2);
        assert_eq!(grid.y_label_pos(0, 12.0), Point::new(90.0, 150.0 + 50.0 + 4.0));
        assert_eq!(grid.x_label_pos(2), Point::new(350.0, 150.0 + 200.0 + 10.0));
    }

    #[test]
    fn crowded_x_labels_rotate() {
        assert!(!GridLayout::new(Size::new(520.0, 400.0), 5, 1).rotate_x_labels());
        assert!(GridLayout::new(Size::new(520.0, 400.0), 6, 1).rotate_x_labels());
        assert!(!GridLayout::new(Size::new(1120.0, 400.0), 6, 1).rotate_x_labels());
    }
}
