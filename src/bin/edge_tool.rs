use edge_map::config::load_config;
use edge_map::image::io::{encode, load_grayscale, write_json_file};
use edge_map::EdgeDetector;
use log::debug;
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let gray = load_grayscale(&config.input).map_err(|e| e.to_string())?;
    let detector = EdgeDetector::new(config.edge);
    debug!(
        "edge_tool: {} -> {} with {:?}",
        config.input.display(),
        config.output.image.display(),
        detector.params()
    );
    let report = detector
        .process_with_diagnostics(&gray)
        .map_err(|e| format!("Edge detection failed: {e}"))?;

    encode(&report.edges, config.output.format, &config.output.image)
        .map_err(|e| e.to_string())?;
    println!(
        "Saved {} edge map to {} (max magnitude {})",
        report.operator,
        config.output.image.display(),
        report.max_magnitude
    );

    if let Some(summary_path) = &config.output.summary_json {
        write_json_file(summary_path, &report)?;
        println!("Saved summary to {}", summary_path.display());
    }

    if config.output.print_grid {
        print!("{}", report.edges);
    }

    Ok(())
}

fn usage() -> String {
    "Usage: edge_tool <config.json>".to_string()
}
