//! Turns benchmark timing tables into charts.
//!
//! An input file holds one header line followed by rows of five
//! whitespace-separated integers: the input size and the raw timing counters
//! of four algorithm variants (one exact, three approximate). Per input file
//! this crate produces two sibling artifacts: a PNG line chart and a
//! TikZ/pgfplots `.tex` export, both named after the input file.

#![deny(missing_debug_implementations)]
#![deny(rustdoc::all)]

use std::fs;
use std::path::{Path, PathBuf};

pub mod chart;
mod error;
pub mod tikz;
pub mod timing_table;

pub use error::ReportError;
pub use timing_table::TimingTable;

/// Paths of the two artifacts written for one input file.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphOutputs {
    pub png: PathBuf,
    pub tex: PathBuf,
}

/// Reads the timing table at `path` and writes the PNG chart and the TikZ
/// export next to it (`foo.txt` becomes `foo.png` and `foo.tex`).
///
/// The input is fully parsed before the first output byte is written, so a
/// read or parse failure leaves no artifacts behind. Existing artifacts are
/// overwritten.
pub fn generate_time_graph(path: impl AsRef<Path>) -> Result<GraphOutputs, ReportError> {
    let path = path.as_ref();

    let input = fs::read_to_string(path).map_err(|source| ReportError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let table = TimingTable::parse(&input)?;

    let outputs = output_paths(path);
    chart::render_png(&table, &outputs.png)?;
    tikz::export_tex(&table, &outputs.tex)?;
    Ok(outputs)
}

/// Sibling artifact paths for an input file: same base name, `png` and
/// `tex` extensions.
fn output_paths(path: &Path) -> GraphOutputs {
    GraphOutputs {
        png: path.with_extension("png"),
        tex: path.with_extension("tex"),
    }
}
