//! The per-round result trace and its CSV export.

use std::io::Write;

use cat_core::ParamTable;
use cat_exposure::ExposureMatrix;
use cat_update::UpdateWarning;

use crate::SimResult;

/// One completed round of the simulation.
///
/// Estimates and biases are full snapshots, not deltas: each row stands on
/// its own for downstream analysis.  Bias is `truth − estimate`, so a
/// pinned side reports identically zero bias.
#[derive(Clone, Debug)]
pub struct IterationRecord {
    /// 1-based round index.
    pub round:           usize,
    pub person_estimate: ParamTable,
    pub person_bias:     ParamTable,
    pub item_estimate:   ParamTable,
    pub item_bias:       ParamTable,
    /// Recoverable degradations reported by this round's update step.
    pub warnings:        Vec<UpdateWarning>,
}

/// Everything a finished run produced.
#[derive(Clone, Debug)]
pub struct SimOutput {
    /// Ordered trace, one record per completed round.
    pub results:           Vec<IterationRecord>,
    /// The co-exposure matrix after each round, parallel to `results`.
    pub exposure_matrices: Vec<ExposureMatrix>,
    pub person_truth:      ParamTable,
    pub item_truth:        ParamTable,
}

impl SimOutput {
    /// Number of completed rounds.
    pub fn rounds(&self) -> usize {
        self.results.len()
    }

    /// The exposure matrix after the final round.
    pub fn final_exposure(&self) -> Option<&ExposureMatrix> {
        self.exposure_matrices.last()
    }
}

/// Write the trace as one CSV row per round.
///
/// Columns: `round`, then estimate/bias pairs for every person parameter
/// and every item parameter.  Headers use the 1-based external ids the
/// input files carry, e.g. `p3_theta_est`, `p3_theta_bias`, `i12_b_est`.
pub fn write_trace_csv<W: Write>(output: &SimOutput, writer: W) -> SimResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    let person_names: Vec<String> =
        output.person_truth.names().map(str::to_owned).collect();
    let item_names: Vec<String> =
        output.item_truth.names().map(str::to_owned).collect();

    // ── Header ────────────────────────────────────────────────────────────
    let mut header = vec!["round".to_owned()];
    for name in &person_names {
        for id in 1..=output.person_truth.len() {
            header.push(format!("p{id}_{name}_est"));
            header.push(format!("p{id}_{name}_bias"));
        }
    }
    for name in &item_names {
        for id in 1..=output.item_truth.len() {
            header.push(format!("i{id}_{name}_est"));
            header.push(format!("i{id}_{name}_bias"));
        }
    }
    csv_writer.write_record(&header)?;

    // ── One row per round ─────────────────────────────────────────────────
    for record in &output.results {
        let mut row = vec![record.round.to_string()];
        for name in &person_names {
            let est = record.person_estimate.column(name)?;
            let bias = record.person_bias.column(name)?;
            for index in 0..est.len() {
                row.push(est[index].to_string());
                row.push(bias[index].to_string());
            }
        }
        for name in &item_names {
            let est = record.item_estimate.column(name)?;
            let bias = record.item_bias.column(name)?;
            for index in 0..est.len() {
                row.push(est[index].to_string());
                row.push(bias[index].to_string());
            }
        }
        csv_writer.write_record(&row)?;
    }

    csv_writer.flush().map_err(cat_core::CatError::from)?;
    Ok(())
}
