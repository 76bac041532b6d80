// main.rs - Interactive grid drawing app
// The grid lives in `component`, egui wiring in `ui`.

use clap::Parser;
use eframe::egui;

mod cell;
mod cli;
mod component;
mod error;
mod observability;
mod palette;
mod ui;

use cli::DrawGridArgs;
use component::DrawGridComponent;
use error::Error;
use palette::Palette;

fn main() -> Result<(), Error> {
    let args = DrawGridArgs::parse();
    observability::setup_logs(&args.log_format);

    tracing::info!(
        grid_width = args.grid_width,
        grid_height = args.grid_height,
        widget_size = args.widget_size,
        "starting draw grid"
    );

    let app = DrawGridApp::new(&args)?;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([args.widget_size + 40.0, args.widget_size + 160.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Draw Grid",
        options,
        Box::new(|_cc| Box::new(app)),
    )?;
    Ok(())
}

pub struct DrawGridApp {
    component: DrawGridComponent,
    palette: Palette,
    widget_size: f32,
    pending_width: usize,   // edited by the resize controls
    pending_height: usize,
}

impl DrawGridApp {
    pub fn new(args: &DrawGridArgs) -> Result<Self, Error> {
        let width = args.grid_width as usize;
        let height = args.grid_height as usize;
        Ok(Self {
            component: DrawGridComponent::new(width, height)?,
            palette: Palette::default(),
            widget_size: args.widget_size,
            pending_width: width,
            pending_height: height,
        })
    }

    /// Applies the size chosen in the controls.
    pub fn apply_pending_size(&mut self) {
        if let Err(e) = self.component.set_grid_size(self.pending_width, self.pending_height) {
            tracing::warn!("Failed to resize grid: {e}");
        }
    }
}
