//! Diagram description loading for the CLI
//!
//! Input files are TOML documents tagged by `kind` (see
//! [`meridian::diagram::Diagram`]).

use std::{fs, path::Path};

use log::debug;

use meridian::{MeridianError, diagram::Diagram};

/// Load a diagram description from a TOML file
///
/// # Errors
///
/// Returns error if the file cannot be read or does not describe a valid
/// diagram.
pub fn load_diagram(path: impl AsRef<Path>) -> Result<Diagram, MeridianError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;

    let diagram: Diagram =
        toml::from_str(&content).map_err(|e| MeridianError::Model(e.to_string()))?;

    debug!(path = path.display().to_string(); "Diagram description loaded");
    Ok(diagram)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_load_spectrum_description() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
            kind = "spectrum"
            id = "left-right"
            width = 900
            height = 150
            margin_x = 40
            margin_y = 10

            [[persons]]
            position = 0.5
            label = "Median voter"
            "#
        )
        .unwrap();

        let diagram = load_diagram(file.path()).unwrap();
        match diagram {
            Diagram::Spectrum(spectrum) => {
                assert_eq!(spectrum.id, "left-right");
                assert_eq!(spectrum.persons.len(), 1);
            }
            Diagram::Plane(_) => panic!("Expected a spectrum"),
        }
    }

    #[test]
    fn test_load_diagram_missing_file() {
        let result = load_diagram("/nonexistent/diagram.toml");
        assert!(matches!(result, Err(MeridianError::Io(_))));
    }

    #[test]
    fn test_load_diagram_invalid_description() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, r#"kind = "scatter""#).unwrap();

        let result = load_diagram(file.path());
        assert!(matches!(result, Err(MeridianError::Model(_))));
    }
}
