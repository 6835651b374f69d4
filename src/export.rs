//! CSV export of sweep results.
//!
//! Long format, one record per cell in `(i, j)` order:
//!
//! ```text
//! underlying,volatility,call,put
//! 20.0,0.1,...
//! ```
//!
//! The first two header columns are the [`InputField::key`](crate::InputField::key)
//! of the X and Y axes.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use crate::sweep::SweepOutput;

/// Write `output` as CSV to any writer.
pub fn write_csv<W: Write>(writer: W, output: &SweepOutput) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record([
        output.x_axis.field.key(),
        output.y_axis.field.key(),
        "call",
        "put",
    ])?;

    for (i, x) in output.x_samples.iter().enumerate() {
        for (j, y) in output.y_samples.iter().enumerate() {
            let (call, put) = match (output.call.get(i, j), output.put.get(i, j)) {
                (Some(c), Some(p)) => (c, p),
                _ => anyhow::bail!("grid is missing cell [{}][{}]", i, j),
            };
            wtr.write_record(&[
                x.to_string(),
                y.to_string(),
                call.to_string(),
                put.to_string(),
            ])?;
        }
    }

    wtr.flush()?;
    Ok(())
}

/// Write `output` as CSV to `path`.
pub fn write_csv_file(path: impl AsRef<Path>, output: &SweepOutput) -> Result<()> {
    let path = path.as_ref();
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    write_csv(file, output).with_context(|| format!("failed to write {}", path.display()))?;
    debug!(path = %path.display(), rows = output.sample_count().pow(2), "sweep exported");
    Ok(())
}
