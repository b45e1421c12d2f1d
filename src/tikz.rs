//! TikZ/pgfplots export of the timing chart, for inclusion in papers.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::chart::{CHART_TITLE, X_LABEL, Y_LABEL};
use crate::error::ReportError;
use crate::timing_table::TimingTable;

/// Writes the chart as a `tikzpicture` with one pgfplots `axis` to `out`.
pub fn export_tex(table: &TimingTable, out: &Path) -> Result<(), ReportError> {
    let map_err = |source| ReportError::Write {
        path: out.to_path_buf(),
        source,
    };

    let file = File::create(out).map_err(map_err)?;
    let mut writer = BufWriter::new(file);
    write_document(&mut writer, table).map_err(map_err)?;
    writer.flush().map_err(map_err)
}

fn write_document(writer: &mut impl Write, table: &TimingTable) -> io::Result<()> {
    writeln!(writer, "\\begin{{tikzpicture}}")?;
    writeln!(writer)?;
    writeln!(writer, "\\begin{{axis}}[")?;
    writeln!(writer, "legend cell align={{left}},")?;
    writeln!(writer, "legend pos=north west,")?;
    writeln!(writer, "title={{{CHART_TITLE}}},")?;
    writeln!(writer, "xlabel={{{X_LABEL}}},")?;
    writeln!(writer, "ylabel={{{Y_LABEL}}}")?;
    writeln!(writer, "]")?;

    for (algorithm, values) in table.series() {
        writeln!(writer, "\\addplot coordinates {{")?;
        for (&size, &value) in table.sizes.iter().zip(values) {
            writeln!(writer, "({size},{value})")?;
        }
        writeln!(writer, "}};")?;
        writeln!(writer, "\\addlegendentry{{{}}}", algorithm.tex_legend())?;
    }

    writeln!(writer, "\\end{{axis}}")?;
    writeln!(writer)?;
    writeln!(writer, "\\end{{tikzpicture}}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_to_string(table: &TimingTable) -> String {
        let mut buf = Vec::new();
        write_document(&mut buf, table).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_document_has_one_plot_per_series() {
        let table = TimingTable::parse("h\n10 50000 60000 70000 80000\n").unwrap();
        let tex = render_to_string(&table);

        assert_eq!(tex.matches("\\addplot coordinates {").count(), 4);
        assert_eq!(tex.matches("\\addlegendentry").count(), 4);
        assert!(tex.starts_with("\\begin{tikzpicture}"));
        assert!(tex.trim_end().ends_with("\\end{tikzpicture}"));
    }

    #[test]
    fn test_document_coordinates_and_legends() {
        let table = TimingTable::parse("h\n10 50000 60000 70000 80000\n").unwrap();
        let tex = render_to_string(&table);

        assert!(tex.contains("(10,1)"));
        assert!(tex.contains("(10,1.2)"));
        assert!(tex.contains("(10,1.4)"));
        assert!(tex.contains("(10,1.6)"));
        assert!(tex.contains("\\addlegendentry{exact}"));
        assert!(tex.contains("\\addlegendentry{approx, $\\varepsilon = 0.5, \\delta = 0.3$}"));
        assert!(tex.contains("title={Execution time of the algorithms (avg over 50 runs)}"));
        assert!(tex.contains("legend pos=north west,"));
    }
}
