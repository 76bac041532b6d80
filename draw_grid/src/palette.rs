use egui::Color32;

use crate::cell::CellState;

/// Cell tag -> colour mapping, plus the colour of the cell outlines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub inactive: Color32,
    pub clicked: Color32,
    pub mouse_over: Color32,
    pub outline: Color32,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            inactive: Color32::WHITE,
            clicked: Color32::RED,
            mouse_over: Color32::BLUE,
            outline: Color32::BLACK,
        }
    }
}

impl Palette {
    pub fn color(&self, state: CellState) -> Color32 {
        match state {
            CellState::Inactive => self.inactive,
            CellState::Clicked => self.clicked,
            CellState::MouseOver => self.mouse_over,
        }
    }
}
