use std::str::FromStr;

use crate::error::ReportError;

/// Number of repeated benchmark runs each raw counter accumulates.
pub const RUN_COUNT: f64 = 50.0;
/// Scale factor from the raw counter unit to the chart's time unit.
pub const UNIT_DIVISOR: f64 = 1000.0;

/// Columns per data row: input size plus four timing counters.
pub const FIELDS_PER_ROW: usize = 5;

/// Tolerance pairs (ε, δ) of the three approximate variants, in column order.
pub const APPROX_TOLERANCES: [(f64, f64); 3] = [(0.5, 0.3), (0.3, 0.3), (0.1, 0.1)];

/// Average a raw timing counter over the run count and convert it to the
/// chart's time unit.
#[must_use]
pub fn normalize(raw: u64) -> f64 {
    raw as f64 / UNIT_DIVISOR / RUN_COUNT
}

/// Identity of one plotted series, used to build legend labels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Algorithm {
    Exact,
    Approx { epsilon: f64, delta: f64 },
}

impl Algorithm {
    /// Legend label for the raster chart.
    #[must_use]
    pub fn legend(&self) -> String {
        match self {
            Self::Exact => "exact".to_string(),
            Self::Approx { epsilon, delta } => format!("approx, ε = {epsilon}, δ = {delta}"),
        }
    }

    /// Legend label for the TikZ export, with the tolerances in math mode.
    #[must_use]
    pub fn tex_legend(&self) -> String {
        match self {
            Self::Exact => "exact".to_string(),
            Self::Approx { epsilon, delta } => {
                format!("approx, $\\varepsilon = {epsilon}, \\delta = {delta}$")
            }
        }
    }
}

/// The parsed and normalized content of one timing file.
///
/// `sizes` holds the first column in file order; the file order defines the
/// x-axis order of the chart. Each value series is aligned index-for-index
/// with `sizes`.
#[derive(Debug, Default, PartialEq)]
pub struct TimingTable {
    pub sizes: Vec<u64>,
    pub exact: Vec<f64>,
    pub approx: [Vec<f64>; 3],
}

impl TimingTable {
    /// Parses the textual timing format: one header line (discarded)
    /// followed by data rows of exactly [`FIELDS_PER_ROW`]
    /// whitespace-separated decimal integers.
    ///
    /// Any malformed row aborts the whole parse; reported line numbers are
    /// 1-based and count the header.
    pub fn parse(input: &str) -> Result<Self, ReportError> {
        let mut lines = input.lines().enumerate();
        if lines.next().is_none() {
            return Err(ReportError::MissingHeader);
        }

        let mut table = Self::default();
        for (index, line) in lines {
            let line_no = index + 1;
            let fields = line.split_whitespace().collect::<Vec<_>>();
            if fields.len() != FIELDS_PER_ROW {
                return Err(ReportError::FieldCount {
                    line: line_no,
                    expected: FIELDS_PER_ROW,
                    found: fields.len(),
                });
            }

            let mut row = [0_u64; FIELDS_PER_ROW];
            for (slot, field) in row.iter_mut().zip(fields.iter().copied()) {
                *slot = u64::from_str(field).map_err(|source| ReportError::InvalidInteger {
                    line: line_no,
                    value: field.to_string(),
                    source,
                })?;
            }

            table.sizes.push(row[0]);
            table.exact.push(normalize(row[1]));
            for (series, &raw) in table.approx.iter_mut().zip(&row[2..]) {
                series.push(normalize(raw));
            }
        }

        if table.is_empty() {
            return Err(ReportError::NoDataRows);
        }
        Ok(table)
    }

    /// Number of data rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// The four plotted series in fixed plot order: exact first, then the
    /// approximate variants in column order.
    #[must_use]
    pub fn series(&self) -> [(Algorithm, &[f64]); 4] {
        let [(e1, d1), (e2, d2), (e3, d3)] = APPROX_TOLERANCES;
        [
            (Algorithm::Exact, self.exact.as_slice()),
            (
                Algorithm::Approx {
                    epsilon: e1,
                    delta: d1,
                },
                self.approx[0].as_slice(),
            ),
            (
                Algorithm::Approx {
                    epsilon: e2,
                    delta: d2,
                },
                self.approx[1].as_slice(),
            ),
            (
                Algorithm::Approx {
                    epsilon: e3,
                    delta: d3,
                },
                self.approx[2].as_slice(),
            ),
        ]
    }
}
