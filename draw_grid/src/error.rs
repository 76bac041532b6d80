use dense_grid::GridError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid grid: {0}")]
    Grid(#[from] GridError),
    #[error("Failed to run the UI: {0}")]
    Ui(#[from] eframe::Error),
}
