use edge_map::{run_edge_map, EdgeParams, Operator, OutputPolicy};
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
    let args: Vec<String> = env::args().skip(1).collect();
    let [input, operator, policy, output] = args.as_slice() else {
        return Err(usage());
    };
    let operator: Operator = operator.parse()?;
    let policy: OutputPolicy = policy.parse()?;

    let report = run_edge_map(
        Path::new(input),
        Path::new(output),
        EdgeParams::new(operator, policy),
    )
    .map_err(|e| e.to_string())?;

    println!(
        "Saved {}x{} {} edge map to {} (max magnitude {}, {} edge pixels, {:.3} ms)",
        report.input.width,
        report.input.height,
        operator,
        output,
        report.max_magnitude,
        report.edge_pixels,
        report.timings.total_ms
    );
    if let Some(ms) = report.timings.stage_ms("convolve") {
        println!("convolve: {ms:.3} ms");
    }
    Ok(())
}

fn usage() -> String {
    "Usage: edge_map <input> <sobel|prewitt> <clamp|normalize> <output>".to_string()
}
