//! Time-series output file.
//!
//! The exported series is persisted as a plain two-column
//! whitespace-separated text file, one line per step, `tau` then
//! `lambda`, both in upper-case scientific notation. The file is written
//! only after the full run completes; any I/O failure is fatal for the
//! run and must be reported with a non-zero exit.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Writes the `(tau, lambda)` pairs to `path`.
///
/// # Errors
///
/// Propagates any I/O error from creating or writing the file; the
/// caller treats this as fatal.
///
/// # Examples
///
/// ```rust,no_run
/// use cosmo_engine::output::write_series;
///
/// let pairs = vec![(1.0e-43, 0.0), (2.0e-43, 3.5e114)];
/// write_series("lambda.txt", &pairs).expect("writable output path");
/// ```
pub fn write_series<P: AsRef<Path>>(path: P, pairs: &[(f64, f64)]) -> io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    for &(tau, lambda) in pairs {
        writeln!(writer, "{:.6E}\t{:.6E}", tau, lambda)?;
    }
    writer.flush()
}

/// Writes a single-column series to `path`, one value per line in
/// upper-case scientific notation. Used for derived curves such as the
/// luminosity distances.
///
/// # Errors
///
/// Propagates any I/O error from creating or writing the file.
pub fn write_column<P: AsRef<Path>>(path: P, values: &[f64]) -> io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    for &value in values {
        writeln!(writer, "{:.6E}", value)?;
    }
    writer.flush()
}
