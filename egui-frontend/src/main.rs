use eframe::egui;
use log::{error, info};

mod backend;
mod ui;

use ui::ProrataCalculatorApp;

fn main() -> Result<(), eframe::Error> {
    // Initialize logging for debugging
    env_logger::init();
    info!("Starting Prorata Days Off Calculator");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([480.0, 640.0])
            .with_min_inner_size([420.0, 560.0])
            .with_title("Prorata Days Off Calculator")
            .with_resizable(true),
        ..Default::default()
    };

    info!("Launching egui window");
    eframe::run_native(
        "Prorata Days Off Calculator",
        options,
        Box::new(|_cc| {
            // Initialize the app
            match ProrataCalculatorApp::new() {
                Ok(app) => {
                    info!("Successfully initialized calculator app");
                    Ok(Box::new(app))
                }
                Err(e) => {
                    error!("Failed to initialize app: {}", e);
                    // Convert anyhow::Error to eframe::Error
                    Err(format!("Failed to initialize app: {}", e).into())
                }
            }
        }),
    )
}
