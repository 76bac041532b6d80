// cell.rs - Tags stored in the grid and the pen mode

/// What a single grid cell shows. The grid store only sees the tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum CellState {
    #[default]
    Inactive = 0, // empty
    Clicked,      // filled
    MouseOver,    // hover
}

/// Whether pressing and dragging fills cells or clears them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawingState {
    #[default]
    Drawing,
    Erasing,
}

impl DrawingState {
    pub fn toggled(self) -> Self {
        match self {
            DrawingState::Drawing => DrawingState::Erasing,
            DrawingState::Erasing => DrawingState::Drawing,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DrawingState::Drawing => "✏ Drawing",
            DrawingState::Erasing => "🧽 Erasing",
        }
    }
}
