// demos/heatmap_demo.rs

//! Parameter-sweep heatmap from a TOML request.
//!
//! Reads a heatmap config (defaults to `demos/heatmap.toml`), prices the
//! baseline, runs the sweep, and writes the SVG heatmap and CSV grid named in
//! the `[output]` section.
//!
//! Usage:
//!     RUST_LOG=debug cargo run --example heatmap_demo -- [config.toml]

use std::env;

use anyhow::{Context, Result};
use heatmap_lib::{format_price, price, render_to_file, write_csv_file, HeatmapConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| "demos/heatmap.toml".to_string());
    let config = HeatmapConfig::from_file(&path)?;
    info!(config = %path, n = config.sample_count, "loaded heatmap config");

    // Single price at the baseline, when the baseline is complete.
    match config.baseline.to_inputs() {
        Ok(inputs) => {
            let prices = price(&inputs)?;
            info!(
                call = %format_price(prices.call),
                put = %format_price(prices.put),
                "baseline prices"
            );
        }
        Err(e) => info!(reason = %e, "baseline incomplete, skipping single price"),
    }

    let output = config.evaluate().context("sweep failed")?;
    let (call_lo, call_hi) = output.call.range();
    let (put_lo, put_hi) = output.put.range();
    info!(
        x = output.x_axis.field.label(),
        y = output.y_axis.field.label(),
        call_lo,
        call_hi,
        put_lo,
        put_hi,
        "sweep evaluated"
    );

    if let Some(svg) = &config.output.svg {
        render_to_file(&output, &config.style()?, svg)?;
        info!(path = %svg.display(), "wrote heatmap");
    }
    if let Some(csv) = &config.output.csv {
        write_csv_file(csv, &output)?;
        info!(path = %csv.display(), "wrote grid");
    }

    println!("Green is undervalued and red is overvalued relative to the purchase price.");
    Ok(())
}
