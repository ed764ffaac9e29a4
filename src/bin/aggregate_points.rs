use coalesce::io::{self, Format, DEFAULT_TAG};
use coalesce::OverlapMerge;
use std::env;
use std::path::{Path, PathBuf};

fn usage() -> String {
    "Usage: aggregate-points <points-file> <radius> [tag]".to_string()
}

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let mut args = env::args().skip(1);
    let input = PathBuf::from(args.next().ok_or_else(usage)?);
    let radius: f64 = args
        .next()
        .ok_or_else(usage)?
        .parse()
        .map_err(|e| format!("Invalid radius: {e}"))?;
    let tag = args.next().unwrap_or_else(|| DEFAULT_TAG.to_string());
    if args.next().is_some() {
        return Err(usage());
    }

    aggregate_file(&input, radius, &Format::with_tag(tag))
}

fn aggregate_file(input: &Path, radius: f64, format: &Format<String>) -> Result<(), String> {
    let points = io::load_points(input, format.delimiter)
        .map_err(|e| format!("Failed to read {}: {e}", input.display()))?;

    let aggregation = OverlapMerge::new(radius)
        .aggregate(&points)
        .map_err(|e| e.to_string())?;

    let output = io::aggregated_path(input);
    io::save_points(&output, &aggregation.tagged(format.tag.clone()), format.delimiter)
        .map_err(|e| format!("Failed to write {}: {e}", output.display()))?;

    println!("[DONE] Result written in {}", output.display());
    println!(
        "Reduced from {} to {}",
        aggregation.original_count(),
        aggregation.reduced_count()
    );
    Ok(())
}
