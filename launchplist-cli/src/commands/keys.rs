//! `launchplist keys` — supported job-file keys.

use anyhow::Result;
use clap::Args;
use tabled::{settings::Style, Table, Tabled};

use launchplist_core::job::JOB_KEYS;

/// List the keys a job file may contain.
#[derive(Args, Debug)]
pub struct KeysArgs {
    /// Print key names only, one per line.
    #[arg(long)]
    pub plain: bool,
}

#[derive(Tabled)]
struct KeyRow {
    #[tabled(rename = "key")]
    key: &'static str,
    #[tabled(rename = "value")]
    value: String,
}

impl KeysArgs {
    pub fn run(self) -> Result<()> {
        if self.plain {
            for (key, _) in JOB_KEYS {
                println!("{key}");
            }
            return Ok(());
        }

        let rows = JOB_KEYS.iter().map(|(key, kind)| KeyRow {
            key: *key,
            value: kind.to_string(),
        });
        let mut table = Table::new(rows);
        table.with(Style::rounded());
        println!("{table}");
        Ok(())
    }
}
