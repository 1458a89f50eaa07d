use std::{fs, path::PathBuf};

use tempfile::tempdir;

use meridian_cli::{Args, run};

/// Collects all .toml files from a directory
fn collect_toml_files(dir: PathBuf) -> Vec<PathBuf> {
    let mut files = if let Ok(entries) = fs::read_dir(&dir) {
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("toml")
            })
            .collect()
    } else {
        Vec::new()
    };

    // Sort for consistent test output
    files.sort();
    files
}

fn demos_path() -> PathBuf {
    // Demos are at the workspace root, relative to workspace not the crate
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("demos")
}

#[test]
fn e2e_smoke_test_valid_demos() {
    // Create a temporary directory for test outputs
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let valid_demos = collect_toml_files(demos_path());

    assert!(!valid_demos.is_empty(), "No valid demos found in demos/");

    let mut failed_demos = Vec::new();

    for demo_path in &valid_demos {
        let output_filename =
            format!("{}.svg", demo_path.file_stem().unwrap().to_string_lossy());
        let output_path = temp_dir.path().join(output_filename);

        let args = Args {
            input: demo_path.to_string_lossy().to_string(),
            output: output_path.to_string_lossy().to_string(),
            config: None,
            log_level: "off".to_string(),
        };

        match run(&args) {
            Ok(()) => {
                let svg = fs::read_to_string(&output_path).expect("output file written");
                assert!(svg.contains("<svg"), "{}: output is not SVG", demo_path.display());
                assert!(svg.contains("</svg>"), "{}: output is truncated", demo_path.display());
            }
            Err(e) => failed_demos.push((demo_path.clone(), e)),
        }
    }

    if !failed_demos.is_empty() {
        eprintln!("\nValid demos that failed:");
        for (path, err) in &failed_demos {
            eprintln!("  - {}: {}", path.display(), err);
        }
        panic!("{} valid demo(s) failed unexpectedly", failed_demos.len());
    }

    println!("✅ All {} valid demos passed", valid_demos.len());
}

#[test]
fn e2e_smoke_test_error_demos() {
    // Create a temporary directory for test outputs
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let error_demos = collect_toml_files(demos_path().join("errors"));

    assert!(
        !error_demos.is_empty(),
        "No error demos found in demos/errors/"
    );

    let mut unexpectedly_succeeded = Vec::new();

    for demo_path in &error_demos {
        let output_filename = format!(
            "error_{}.svg",
            demo_path.file_stem().unwrap().to_string_lossy()
        );
        let output_path = temp_dir.path().join(output_filename);

        let args = Args {
            input: demo_path.to_string_lossy().to_string(),
            output: output_path.to_string_lossy().to_string(),
            config: None,
            log_level: "off".to_string(),
        };

        if run(&args).is_ok() {
            unexpectedly_succeeded.push(demo_path.clone());
        }
    }

    if !unexpectedly_succeeded.is_empty() {
        eprintln!("\nError demos that unexpectedly succeeded:");
        for path in &unexpectedly_succeeded {
            eprintln!("  - {}", path.display());
        }
        panic!(
            "{} error demo(s) succeeded unexpectedly",
            unexpectedly_succeeded.len()
        );
    }

    println!(
        "✅ All {} error demos failed as expected",
        error_demos.len()
    );
}
