// component.rs - Grid drawing state and pointer handling
//
// Positions handed to the mouse handlers are screen positions; `bounds` is
// the rectangle the widget occupies on screen.

use dense_grid::{DenseGrid, GridResult};
use egui::{Painter, Pos2, Rect, Stroke, Vec2};

use crate::cell::{CellState, DrawingState};
use crate::palette::Palette;

pub const DEFAULT_GRID_WIDTH: usize = 50;
pub const DEFAULT_GRID_HEIGHT: usize = 50;
pub const GRID_LINE_WIDTH_COEFF: f32 = 20.0;

/// Number of cells in each state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellCounts {
    pub inactive: usize,
    pub clicked: usize,
    pub hovered: usize,
}

pub struct DrawGridComponent {
    grid: DenseGrid<CellState>,
    drawing_state: DrawingState,
    hovered: Option<(usize, usize)>, // last cell seen by mouse_move
}

impl DrawGridComponent {
    pub fn new(width: usize, height: usize) -> GridResult<Self> {
        Ok(Self {
            grid: DenseGrid::try_new(width, height)?,
            drawing_state: DrawingState::default(),
            hovered: None,
        })
    }

    pub fn grid(&self) -> &DenseGrid<CellState> {
        &self.grid
    }

    pub fn drawing_state(&self) -> DrawingState {
        self.drawing_state
    }

    pub fn set_drawing_state(&mut self, state: DrawingState) {
        self.drawing_state = state;
    }

    /// Flips between drawing and erasing and returns the new mode.
    pub fn change_drawing_state(&mut self) -> DrawingState {
        self.drawing_state = self.drawing_state.toggled();
        self.drawing_state
    }

    /// Resizes the grid, keeping the cells both sizes have in common.
    pub fn set_grid_size(&mut self, width: usize, height: usize) -> GridResult<()> {
        self.grid.try_resize(width, height)?;
        if let Some((x, y)) = self.hovered {
            if !self.grid.contains(x, y) {
                self.hovered = None;
            }
        }
        tracing::info!(width, height, "grid size changed");
        Ok(())
    }

    pub fn clear(&mut self) {
        self.grid.clear();
        self.hovered = None;
    }

    pub fn grid_line_thickness(&self) -> f32 {
        let longest = self.grid.width().max(self.grid.height());
        if longest == 0 {
            0.0
        } else {
            GRID_LINE_WIDTH_COEFF / longest as f32
        }
    }

    /// Cell size in whole points. Remainder pixels stay unpainted.
    fn cell_size(&self, bounds: Rect) -> Vec2 {
        let (width, height) = self.grid.dimensions();
        if width == 0 || height == 0 {
            return Vec2::ZERO;
        }
        Vec2::new(
            (bounds.width() / width as f32).floor(),
            (bounds.height() / height as f32).floor(),
        )
    }

    /// Screen rectangle of cell `(x, y)`.
    pub fn cell_rect(&self, bounds: Rect, x: usize, y: usize) -> Rect {
        let size = self.cell_size(bounds);
        let min = bounds.min + Vec2::new(x as f32 * size.x, y as f32 * size.y);
        Rect::from_min_size(min, size)
    }

    /// Maps a screen position to the cell under it, or `None` when the
    /// position is outside `bounds` or the grid has no cells.
    pub fn pointer_to_cell(&self, bounds: Rect, pos: Pos2) -> Option<(usize, usize)> {
        let rel = pos - bounds.min;
        let inside = rel.x >= 0.0 && rel.y >= 0.0 && rel.x < bounds.width() && rel.y < bounds.height();
        if !inside || self.grid.is_empty() {
            return None;
        }
        let (width, height) = self.grid.dimensions();
        let x = ((rel.x / bounds.width()) * width as f32) as usize;
        let y = ((rel.y / bounds.height()) * height as f32) as usize;
        // float rounding can land exactly on the far edge
        Some((x.min(width - 1), y.min(height - 1)))
    }

    fn write(&mut self, (x, y): (usize, usize), state: CellState) -> bool {
        let cell = &mut self.grid[(x, y)];
        if *cell == state {
            return false;
        }
        tracing::trace!(x, y, from = ?cell, to = ?state, "cell changed");
        *cell = state;
        true
    }

    /// Press: toggles the cell under the pointer. Returns whether anything
    /// changed.
    pub fn mouse_down(&mut self, bounds: Rect, pos: Pos2) -> bool {
        let Some(cell) = self.pointer_to_cell(bounds, pos) else {
            return false;
        };
        let next = if self.drawing_state == DrawingState::Erasing || self.grid[cell] == CellState::Clicked {
            CellState::MouseOver
        } else {
            CellState::Clicked
        };
        self.write(cell, next)
    }

    /// Hover: highlights the cell under the pointer and un-highlights the one
    /// it came from. Filled cells are left alone.
    pub fn mouse_move(&mut self, bounds: Rect, pos: Pos2) -> bool {
        let Some(current) = self.pointer_to_cell(bounds, pos) else {
            return false;
        };
        let mut changed = false;

        if self.grid[current] == CellState::Inactive {
            changed |= self.write(current, CellState::MouseOver);
        }

        if let Some(prev) = self.hovered.filter(|&prev| prev != current) {
            if self.grid.get(prev.0, prev.1) == Some(&CellState::MouseOver) {
                changed |= self.write(prev, CellState::Inactive);
            }
        }

        self.hovered = Some(current);
        changed
    }

    /// Drag: paints or erases the cell under the pointer depending on the mode.
    pub fn mouse_drag(&mut self, bounds: Rect, pos: Pos2) -> bool {
        let Some(cell) = self.pointer_to_cell(bounds, pos) else {
            return false;
        };
        let next = match self.drawing_state {
            DrawingState::Drawing => CellState::Clicked,
            DrawingState::Erasing => CellState::MouseOver,
        };
        self.write(cell, next)
    }

    /// Pointer left the widget: drops the hover highlight it left behind.
    pub fn mouse_exit(&mut self) -> bool {
        let Some((x, y)) = self.hovered.take() else {
            return false;
        };
        if self.grid.get(x, y) == Some(&CellState::MouseOver) {
            self.write((x, y), CellState::Inactive)
        } else {
            false
        }
    }

    pub fn counts(&self) -> CellCounts {
        self.grid
            .cells()
            .fold(CellCounts::default(), |mut counts, (_, state)| {
                match state {
                    CellState::Inactive => counts.inactive += 1,
                    CellState::Clicked => counts.clicked += 1,
                    CellState::MouseOver => counts.hovered += 1,
                }
                counts
            })
    }

    pub fn paint(&self, painter: &Painter, bounds: Rect, palette: &Palette) {
        let outline = Stroke::new(self.grid_line_thickness(), palette.outline);
        for (y, row) in self.grid.rows().enumerate() {
            for (x, state) in row.iter().enumerate() {
                let rect = self.cell_rect(bounds, x, y);
                painter.rect_filled(rect, 0.0, palette.color(*state));
                painter.rect_stroke(rect, 0.0, outline);
            }
        }
    }
}
