//! CLI logic for the Meridian diagram tool.
//!
//! This module contains the core CLI logic for the Meridian diagram tool.

pub mod error_adapter;

mod args;
mod config;
mod input;

pub use args::Args;

use std::fs;

use log::info;

use meridian::{DiagramRenderer, MeridianError};

/// Run the Meridian CLI application
///
/// This function processes the input file through the Meridian pipeline
/// and writes the resulting SVG to the output file.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `MeridianError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Invalid diagram descriptions
/// - Label measurement errors
pub fn run(args: &Args) -> Result<(), MeridianError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing diagram"
    );

    // Load configuration
    let app_config = config::load_config(args.config.as_ref())?;

    // Read the diagram description
    let diagram = input::load_diagram(&args.input)?;

    // Render using the DiagramRenderer API
    let renderer = DiagramRenderer::new(app_config);
    let svg = renderer.render(&diagram)?;

    // Write output file
    fs::write(&args.output, svg)?;

    info!(output_file = args.output; "SVG exported successfully");

    Ok(())
}
