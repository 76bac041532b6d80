//! Command-line arguments for the draw grid app.

use clap::{Parser, ValueEnum};

use crate::component::{DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH};

pub const MAX_GRID_DIMENSION: u32 = 500;
pub const MIN_WIDGET_SIZE: f32 = 50.0;

#[derive(Clone, Debug, Default, ValueEnum)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Parser, Debug)]
#[command(version, about)]
pub struct DrawGridArgs {
    /// Number of cell columns.
    #[arg(long, env = "DRAW_GRID_WIDTH")]
    #[arg(default_value_t = DEFAULT_GRID_WIDTH as u32)]
    #[arg(value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_GRID_DIMENSION)))]
    pub grid_width: u32,

    /// Number of cell rows.
    #[arg(long, env = "DRAW_GRID_HEIGHT")]
    #[arg(default_value_t = DEFAULT_GRID_HEIGHT as u32)]
    #[arg(value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_GRID_DIMENSION)))]
    pub grid_height: u32,

    /// Side length of the square grid widget, in points.
    #[arg(long, env = "DRAW_GRID_WIDGET_SIZE", default_value_t = 400.0)]
    #[arg(value_parser = parse_widget_size)]
    pub widget_size: f32,

    /// Sets the format used for all logs.
    #[arg(long)]
    #[arg(value_enum)]
    #[clap(default_value_t = LogFormat::default())]
    pub log_format: LogFormat,
}

fn parse_widget_size(s: &str) -> Result<f32, String> {
    let size: f32 = s.parse().map_err(|e| format!("`{s}` is not a number: {e}"))?;
    if size.is_finite() && size >= MIN_WIDGET_SIZE {
        Ok(size)
    } else {
        Err(format!("widget size must be at least {MIN_WIDGET_SIZE}"))
    }
}
