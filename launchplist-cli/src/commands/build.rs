//! `launchplist build <job> [--base PLIST] [--output PATH | --agent]`

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use launchplist_core::{
    load_job, read_plist, write_launch_agent, write_plist_to, LaunchPlist,
};

/// Render a job file as an XML plist.
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Job file (YAML or JSON) describing the launchd job.
    pub job: PathBuf,

    /// Existing plist to start from; job keys are applied on top of it.
    #[arg(long, value_name = "PLIST")]
    pub base: Option<PathBuf>,

    /// Write to this path instead of stdout.
    #[arg(long, short = 'o', conflicts_with = "agent")]
    pub output: Option<PathBuf>,

    /// Write to ~/Library/LaunchAgents/<Label>.plist.
    #[arg(long)]
    pub agent: bool,
}

impl BuildArgs {
    pub fn run(self) -> Result<()> {
        let job = load_job(&self.job)
            .with_context(|| format!("failed to load job file '{}'", self.job.display()))?;

        let mut plist = match &self.base {
            Some(base) => {
                let plist = read_plist(base)
                    .with_context(|| format!("failed to read base plist '{}'", base.display()))?;
                tracing::debug!(
                    base = %base.display(),
                    keys = plist.record().len(),
                    "applying job on top of base plist"
                );
                plist
            }
            None => LaunchPlist::new(),
        };
        job.apply(&mut plist)
            .with_context(|| format!("invalid job file '{}'", self.job.display()))?;

        if let Some(output) = &self.output {
            write_plist_to(output, &plist)
                .with_context(|| format!("failed to write '{}'", output.display()))?;
            println!("✓ Wrote {}", output.display());
        } else if self.agent {
            let path = write_launch_agent(&plist).context("failed to install launch agent plist")?;
            println!("✓ Wrote {}", path.display());
        } else {
            print!("{}", plist.build().context("failed to serialize plist")?);
        }
        Ok(())
    }
}
