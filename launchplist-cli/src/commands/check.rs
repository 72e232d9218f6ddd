//! `launchplist check <job> [--json]`

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use serde::Serialize;

use launchplist_core::build_job;

/// Validate a job file without writing anything.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Job file (YAML or JSON) to validate.
    pub job: PathBuf,

    /// Emit machine-readable JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct CheckReport {
    job: String,
    label: Option<String>,
    keys: Vec<String>,
    calendar_entries: usize,
}

impl CheckArgs {
    pub fn run(self) -> Result<()> {
        let plist = build_job(&self.job)
            .with_context(|| format!("invalid job file '{}'", self.job.display()))?;

        let report = CheckReport {
            job: self.job.display().to_string(),
            label: plist.label().map(str::to_owned),
            keys: plist.record().keys().cloned().collect(),
            calendar_entries: plist.calendar_intervals().len(),
        };

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&report).context("failed to render check JSON")?
            );
            return Ok(());
        }

        println!("{} {}", "✓".green(), report.job);
        match &report.label {
            Some(label) => println!("  Label: {label}"),
            None => println!("  {}", "no Label set; launchd will refuse to load this job".yellow()),
        }
        println!("  Keys:  {}", report.keys.len());
        if report.calendar_entries > 0 {
            println!("  Calendar entries: {}", report.calendar_entries);
        }
        Ok(())
    }
}
