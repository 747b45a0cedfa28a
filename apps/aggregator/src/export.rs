//! CSV artifact export. Writes ranked summary files into the output
//! directory after every run, so results are inspectable without a database
//! client.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::models::entities::{SalaryCohortKind, Snapshot};

/// Public entry point: write all summary CSVs into `out_dir`.
pub fn write_all(out_dir: &Path, snapshot: &Snapshot) -> Result<()> {
    fs::create_dir_all(out_dir).with_context(|| format!("create {out_dir:?}"))?;

    write_common_roles(&out_dir.join("most_common_job_roles.csv"), snapshot)?;
    write_common_skills(&out_dir.join("most_common_skills.csv"), snapshot)?;
    write_roles_by_salary(&out_dir.join("job_roles_by_salary.csv"), snapshot)?;
    write_skills_by_salary(&out_dir.join("skills_by_salary.csv"), snapshot)?;

    info!("wrote summary CSVs to {}", out_dir.display());
    Ok(())
}

fn write_common_roles(path: &Path, snapshot: &Snapshot) -> Result<()> {
    let mut rows: Vec<(&str, u64)> = snapshot
        .roles
        .iter()
        .map(|r| (r.role_name.as_str(), r.open_positions_count))
        .collect();
    rows.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    let mut writer = csv::Writer::from_path(path).with_context(|| format!("open {path:?}"))?;
    writer.write_record(["role", "open_positions"])?;
    for (name, count) in rows {
        writer.write_record([name, count.to_string().as_str()])?;
    }
    writer.flush().with_context(|| format!("flush {path:?}"))?;
    Ok(())
}

fn write_common_skills(path: &Path, snapshot: &Snapshot) -> Result<()> {
    let mut rows: Vec<(&str, u64)> = snapshot
        .skills
        .iter()
        .map(|s| (s.skill_name.as_str(), s.job_postings_count))
        .collect();
    rows.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    let mut writer = csv::Writer::from_path(path).with_context(|| format!("open {path:?}"))?;
    writer.write_record(["skill", "job_postings"])?;
    for (name, count) in rows {
        writer.write_record([name, count.to_string().as_str()])?;
    }
    writer.flush().with_context(|| format!("flush {path:?}"))?;
    Ok(())
}

fn write_roles_by_salary(path: &Path, snapshot: &Snapshot) -> Result<()> {
    write_salary_ranking(path, snapshot, SalaryCohortKind::Role, "role")
}

fn write_skills_by_salary(path: &Path, snapshot: &Snapshot) -> Result<()> {
    write_salary_ranking(path, snapshot, SalaryCohortKind::Skill, "skill")
}

fn write_salary_ranking(
    path: &Path,
    snapshot: &Snapshot,
    kind: SalaryCohortKind,
    label: &str,
) -> Result<()> {
    // salary_analysis is already ranked median-descending within each kind.
    let mut writer = csv::Writer::from_path(path).with_context(|| format!("open {path:?}"))?;
    writer.write_record([label, "median_salary", "mean_salary", "sample_count"])?;
    for entry in snapshot.salary_analysis.iter().filter(|e| e.kind == kind) {
        writer.write_record([
            entry.name.as_str(),
            format!("{:.0}", entry.metrics.median).as_str(),
            format!("{:.0}", entry.metrics.mean).as_str(),
            entry.metrics.count.to_string().as_str(),
        ])?;
    }
    writer.flush().with_context(|| format!("flush {path:?}"))?;
    Ok(())
}
