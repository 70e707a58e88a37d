//! Reflectance curves over a range of incidence angles.
//!
//! A [`Sweep`] evaluates the optical model at evenly spaced incidence angles
//! for a fixed pair of indices and keeps one row per sample. Columns are, in
//! order: incidence (deg), refraction (deg, NaN under TIR), `R_te`, `R_tm`
//! and the blend factor `r`.

use std::fmt;

use anyhow::Result;
use ndarray::{s, Array1, Array2, ArrayView1};

use crate::{model::OpticalModel, settings::SweepSettings};

/// Column names of a sweep table.
pub const COLUMNS: [&str; 5] = ["theta1_deg", "theta2_deg", "r_te", "r_tm", "r"];


/// Sampled optical model over incidence angles, for one index pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Sweep {
    pub n1: f64,
    pub n2: f64,
    pub critical_deg: f64,
    pub brewster_deg: f64,
    /// One row per incidence angle, see [`COLUMNS`].
    pub table: Array2<f64>,
    tir: usize,
}

impl Sweep {
    /// Samples `num_points` incidence angles from `start` to `end` degrees, inclusive.
    pub fn new(n1: f64, n2: f64, settings: &SweepSettings) -> Result<Self> {
        settings.validate()?;

        let angles = Array1::linspace(settings.start, settings.end, settings.num_points);
        let mut table = Array2::<f64>::zeros((angles.len(), COLUMNS.len()));
        let mut tir = 0;

        for (i, &theta1) in angles.iter().enumerate() {
            let model = OpticalModel::compute(n1, n2, theta1.to_radians());
            if model.is_total_internal_reflection() {
                tir += 1;
            }
            let row = Array1::from(vec![
                theta1,
                model.refraction_angle.to_degrees(),
                model.reflectance_te,
                model.reflectance_tm,
                model.blend_factor(),
            ]);
            table.slice_mut(s![i, ..]).assign(&row);
        }

        Ok(Self {
            n1,
            n2,
            critical_deg: crate::snell::critical_angle(n1, n2).to_degrees(),
            brewster_deg: crate::snell::brewster_angle(n1, n2).to_degrees(),
            table,
            tir,
        })
    }

    /// Incidence angles in degrees.
    pub fn angles(&self) -> ArrayView1<'_, f64> {
        self.table.column(0)
    }

    pub fn len(&self) -> usize {
        self.table.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.table.nrows() == 0
    }

    /// Number of samples past the critical angle.
    pub fn tir_count(&self) -> usize {
        self.tir
    }
}

impl fmt::Display for Sweep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Sweep:")?;
        writeln!(f, "  n1 -> n2:         {} -> {}", self.n1, self.n2)?;
        writeln!(f, "  Samples:          {}", self.len())?;
        writeln!(f, "  Critical angle:   {:.2}", self.critical_deg)?;
        writeln!(f, "  Brewster angle:   {:.2}", self.brewster_deg)?;
        writeln!(f, "  TIR samples:      {}", self.tir)
    }
}
