//! Application entry point for the Sierpinski triangle viewer.
//!
//! This binary sets up tracing and eframe/egui, and delegates all
//! interactive logic and rendering to [`Viewer`] from the `viewer`
//! module.

mod viewer;

use tracing_subscriber::EnvFilter;
use viewer::Viewer;

/// Starts the native eframe application.
///
/// ### Returns
/// - `Ok(())` if the application runs to completion without errors.
/// - `Err` if eframe fails to create the native window or event loop.
fn main() -> eframe::Result<()> {
    init_tracing();
    tracing::info!("starting Sierpinski triangle viewer");

    let options = eframe::NativeOptions::default();

    eframe::run_native(
        "Sierpinski Triangle",
        options,
        Box::new(|_cc| {
            // Construct the root app state for the viewer.
            Ok(Box::new(Viewer::new()))
        }),
    )
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
