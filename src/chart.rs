use std::error::Error;
use std::ops::Range;
use std::path::Path;

use plotters::prelude::*;

use crate::error::ReportError;
use crate::timing_table::TimingTable;

pub const CHART_TITLE: &str = "Execution time of the algorithms (avg over 50 runs)";
pub const X_LABEL: &str = "Size of the input";
pub const Y_LABEL: &str = "Time (ms)";

const CHART_SIZE: (u32, u32) = (1024, 768);
/// One color per plotted series, in plot order.
const SERIES_COLORS: [RGBColor; 4] = [BLUE, RED, GREEN, MAGENTA];

/// Renders the four-series line chart to a PNG file at `out`.
pub fn render_png(table: &TimingTable, out: &Path) -> Result<(), ReportError> {
    draw(table, out).map_err(|source| ReportError::Render {
        path: out.to_path_buf(),
        message: source.to_string(),
    })
}

fn draw(table: &TimingTable, out: &Path) -> Result<(), Box<dyn Error>> {
    let (x_range, y_range) = axis_ranges(table);

    let root = BitMapBackend::new(out, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(CHART_TITLE, ("sans-serif", 24))
        .margin(12)
        .x_label_area_size(42)
        .y_label_area_size(64)
        .build_cartesian_2d(x_range, y_range)?;

    chart
        .configure_mesh()
        .x_desc(X_LABEL)
        .y_desc(Y_LABEL)
        .draw()?;

    for ((algorithm, values), color) in table.series().into_iter().zip(SERIES_COLORS) {
        let points: Vec<(f64, f64)> = table
            .sizes
            .iter()
            .map(|&size| size as f64)
            .zip(values.iter().copied())
            .collect();
        chart
            .draw_series(LineSeries::new(points, &color))?
            .label(algorithm.legend())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 18, y)], color));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(WHITE.mix(0.85))
        .border_style(BLACK.mix(0.25))
        .draw()?;

    root.present()?;
    Ok(())
}

/// Axis ranges spanning the data: x covers the observed sizes, y runs from
/// zero to the largest timing with 10% headroom. Degenerate spans (a single
/// row, or all-equal sizes) are widened so the chart stays drawable.
fn axis_ranges(table: &TimingTable) -> (Range<f64>, Range<f64>) {
    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    for &size in &table.sizes {
        x_min = x_min.min(size as f64);
        x_max = x_max.max(size as f64);
    }
    if !x_min.is_finite() || !x_max.is_finite() {
        x_min = 0.0;
        x_max = 1.0;
    } else if (x_max - x_min).abs() < f64::EPSILON {
        x_min -= 1.0;
        x_max += 1.0;
    }

    let y_max = table
        .series()
        .iter()
        .flat_map(|(_, values)| values.iter().copied())
        .fold(0.0_f64, f64::max)
        .max(1e-6)
        * 1.1;

    (x_min..x_max, 0.0..y_max)
}
