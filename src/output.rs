//! Files written by the command-line tool: the sweep table and a JSON
//! snapshot of a model with its diagram.

use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use log::info;
use serde::Serialize;

use crate::{diagram::Diagram, model::OpticalModel, sweep::{self, Sweep}};

/// File name of the sweep table inside the output directory.
pub const SWEEP_FILE: &str = "reflectance_sweep";
/// File name of the JSON snapshot inside the output directory.
pub const SNAPSHOT_FILE: &str = "snapshot.json";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{diagram, settings::SweepSettings};

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("refrax-{}-{}", name, std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn sweep_table_layout() {
        let sweep = Sweep::new(
            1.5,
            1.0,
            &SweepSettings {
                start: 0.0,
                end: 60.0,
                num_points: 3,
            },
        )
        .unwrap();
        let dir = scratch_dir("sweep");
        let path = write_sweep(&dir, &sweep).unwrap();
        let text = fs::read_to_string(path).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "# theta1_deg theta2_deg r_te r_tm r");
        let last: Vec<&str> = lines[3].split_whitespace().collect();
        assert_eq!(last, vec!["60", "NaN", "1", "1", "1"]);

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn snapshot_serialises_nan_as_null() {
        let model = OpticalModel::compute(1.0, 1.5, 0.0);
        let diagram = diagram::project(&model);
        let dir = scratch_dir("snapshot");
        let path = write_snapshot(&dir, &model, &diagram).unwrap();
        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();

        assert!(value["model"]["critical_angle"].is_null());
        assert_eq!(value["model"]["n2"], 1.5);
        assert_eq!(value["diagram"]["segments"].as_array().unwrap().len(), 5);
        assert_eq!(value["diagram"]["segments"][0]["kind"], "interface");
        assert_eq!(value["diagram"]["segments"][0]["shape"]["type"], "ray");

        fs::remove_dir_all(dir).unwrap();
    }
}

#[derive(Serialize)]
struct Snapshot<'a> {
    model: &'a OpticalModel,
    total_internal_reflection: bool,
    diagram: &'a Diagram,
}

/// Write the sweep table to `dir`, one row per incidence angle.
pub fn write_sweep(dir: &Path, sweep: &Sweep) -> Result<PathBuf> {
    fs::create_dir_all(dir).with_context(|| format!("Failed to create {:?}", dir))?;
    let path = dir.join(SWEEP_FILE);
    let file = File::create(&path).with_context(|| format!("Failed to create {:?}", path))?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "# {}", sweep::COLUMNS.join(" "))?;
    for row in sweep.table.outer_iter() {
        for value in row.iter() {
            write!(writer, "{} ", value)?;
        }
        writeln!(writer)?;
    }
    writer.flush()?;

    info!("Wrote {} sweep rows to {:?}", sweep.len(), path);
    Ok(path)
}

/// Write the model and its diagram to `dir` as pretty JSON. NaN fields become `null`.
pub fn write_snapshot(dir: &Path, model: &OpticalModel, diagram: &Diagram) -> Result<PathBuf> {
    fs::create_dir_all(dir).with_context(|| format!("Failed to create {:?}", dir))?;
    let path = dir.join(SNAPSHOT_FILE);
    let file = File::create(&path).with_context(|| format!("Failed to create {:?}", path))?;
    let mut writer = BufWriter::new(file);

    let snapshot = Snapshot {
        model,
        total_internal_reflection: model.is_total_internal_reflection(),
        diagram,
    };
    serde_json::to_writer_pretty(&mut writer, &snapshot)?;
    writer.flush()?;

    info!("Wrote snapshot to {:?}", path);
    Ok(path)
}
