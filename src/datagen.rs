//! Synthetic dataset generator.
//!
//! Writes a CSV in the viewer's input schema so the GUI can be exercised
//! without the real dataset. Usage:
//!
//! ```text
//! nukeline-datagen [output.csv] [seed]
//! ```

use anyhow::{Context, Result};
use nukeline::sample;
use std::env;
use std::fs;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let output = args
        .get(1)
        .map(String::as_str)
        .unwrap_or("dataset-sample.csv");
    let seed: u64 = match args.get(2) {
        Some(s) => s
            .parse()
            .with_context(|| format!("seed '{}' is not a number", s))?,
        None => 42,
    };

    let dataset = sample::generate_dataset(seed);
    let csv = sample::to_csv(&dataset);
    fs::write(output, csv).with_context(|| format!("failed to write {}", output))?;

    log::info!(
        "wrote {} synthetic test events to {} (seed {})",
        dataset.len(),
        output,
        seed
    );
    println!("Generated {} events -> {}", dataset.len(), output);
    Ok(())
}
