//! Job files: a YAML (or JSON) description of one launchd job.
//!
//! Keys are the launchd key names themselves, so a job file reads like the
//! plist it produces:
//!
//! ```yaml
//! Label: com.example.backup
//! ProgramArguments: [/usr/local/bin/backup, --quiet]
//! StartCalendarInterval:
//!   - { Hour: 3, Minute: 30 }
//!   - { Weekday: Sunday, Hour: 12 }
//! KeepAlive: { SuccessfulExit: false }
//! ```
//!
//! Values stay loosely typed until [`JobSpec::apply`] pushes them through the
//! builder's setters, so `Nice: "5"` is accepted exactly like `Nice: 5`.

use std::fmt;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use crate::builder::LaunchPlist;
use crate::error::{io_err, LaunchError, ValidationError};
use crate::keys::{PROCESS_TYPES, SESSION_TYPES};
use crate::value::KeepAlive;

/// What a job-file key holds, as shown by `launchplist keys`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Boolean,
    String,
    Enumerated(&'static [&'static str]),
    Number,
    Array,
    Dictionary,
    KeepAlive,
    Calendar,
    Inetd,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Boolean => write!(f, "boolean"),
            FieldKind::String => write!(f, "string"),
            FieldKind::Enumerated(allowed) => write!(f, "one of {}", allowed.join(", ")),
            FieldKind::Number => write!(f, "number"),
            FieldKind::Array => write!(f, "array"),
            FieldKind::Dictionary => write!(f, "dictionary"),
            FieldKind::KeepAlive => write!(f, "boolean, string, number, or dictionary"),
            FieldKind::Calendar => write!(f, "calendar entry or list of entries"),
            FieldKind::Inetd => write!(f, "{{ Wait: boolean }}"),
        }
    }
}

/// Every key a job file may carry, in the order [`JobSpec::apply`] sets them.
pub const JOB_KEYS: [(&str, FieldKind); 40] = [
    ("Label", FieldKind::String),
    ("Disabled", FieldKind::Boolean),
    ("UserName", FieldKind::String),
    ("GroupName", FieldKind::String),
    ("InitGroups", FieldKind::Boolean),
    ("Program", FieldKind::String),
    ("ProgramArguments", FieldKind::Array),
    ("EnableGlobbing", FieldKind::Boolean),
    ("EnableTransactions", FieldKind::Boolean),
    ("OnDemand", FieldKind::Boolean),
    ("KeepAlive", FieldKind::KeepAlive),
    ("RunAtLoad", FieldKind::Boolean),
    ("RootDirectory", FieldKind::String),
    ("WorkingDirectory", FieldKind::String),
    ("EnvironmentVariables", FieldKind::Dictionary),
    ("Umask", FieldKind::Number),
    ("TimeOut", FieldKind::Number),
    ("ExitTimeOut", FieldKind::Number),
    ("ThrottleInterval", FieldKind::Number),
    ("LimitLoadToHosts", FieldKind::Array),
    ("LimitLoadFromHosts", FieldKind::Array),
    ("LimitLoadToSessionType", FieldKind::Enumerated(&SESSION_TYPES)),
    ("ProcessType", FieldKind::Enumerated(&PROCESS_TYPES)),
    ("inetdCompatibility", FieldKind::Inetd),
    ("StartInterval", FieldKind::Number),
    ("StartCalendarInterval", FieldKind::Calendar),
    ("StandardInPath", FieldKind::String),
    ("StandardOutPath", FieldKind::String),
    ("StandardErrorPath", FieldKind::String),
    ("Debug", FieldKind::Boolean),
    ("WaitForDebugger", FieldKind::Boolean),
    ("SoftResourceLimits", FieldKind::Dictionary),
    ("HardResourceLimits", FieldKind::Dictionary),
    ("Nice", FieldKind::Number),
    ("AbandonProcessGroup", FieldKind::Boolean),
    ("LowPriorityIO", FieldKind::Boolean),
    ("LaunchOnlyOnce", FieldKind::Boolean),
    ("WatchPaths", FieldKind::Array),
    ("QueueDirectories", FieldKind::Array),
    ("StartOnMount", FieldKind::Boolean),
];

/// `inetdCompatibility` as written in a job file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InetdCompatibility {
    #[serde(rename = "Wait")]
    pub wait: Value,
}

/// `StartCalendarInterval` as written in a job file: one entry or a list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum CalendarSpec {
    Many(Vec<Value>),
    One(Value),
}

impl CalendarSpec {
    pub fn entries(&self) -> &[Value] {
        match self {
            CalendarSpec::Many(entries) => entries,
            CalendarSpec::One(entry) => std::slice::from_ref(entry),
        }
    }
}

/// A parsed job file. Absent keys are `None` and leave the record alone.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct JobSpec {
    pub label: Option<Value>,
    pub disabled: Option<Value>,
    pub user_name: Option<Value>,
    pub group_name: Option<Value>,
    pub init_groups: Option<Value>,
    pub program: Option<Value>,
    pub program_arguments: Option<Value>,
    pub enable_globbing: Option<Value>,
    pub enable_transactions: Option<Value>,
    pub on_demand: Option<Value>,
    pub keep_alive: Option<Value>,
    pub run_at_load: Option<Value>,
    pub root_directory: Option<Value>,
    pub working_directory: Option<Value>,
    pub environment_variables: Option<Value>,
    pub umask: Option<Value>,
    pub time_out: Option<Value>,
    pub exit_time_out: Option<Value>,
    pub throttle_interval: Option<Value>,
    pub limit_load_to_hosts: Option<Value>,
    pub limit_load_from_hosts: Option<Value>,
    pub limit_load_to_session_type: Option<Value>,
    pub process_type: Option<Value>,
    #[serde(rename = "inetdCompatibility")]
    pub inetd_compatibility: Option<InetdCompatibility>,
    pub start_interval: Option<Value>,
    pub start_calendar_interval: Option<CalendarSpec>,
    pub standard_in_path: Option<Value>,
    pub standard_out_path: Option<Value>,
    pub standard_error_path: Option<Value>,
    pub debug: Option<Value>,
    pub wait_for_debugger: Option<Value>,
    pub soft_resource_limits: Option<Value>,
    pub hard_resource_limits: Option<Value>,
    pub nice: Option<Value>,
    pub abandon_process_group: Option<Value>,
    #[serde(rename = "LowPriorityIO")]
    pub low_priority_io: Option<Value>,
    pub launch_only_once: Option<Value>,
    pub watch_paths: Option<Value>,
    pub queue_directories: Option<Value>,
    pub start_on_mount: Option<Value>,
}

macro_rules! apply_fields {
    ($spec:ident, $plist:ident; $($field:ident => $setter:ident),* $(,)?) => {
        $(
            if let Some(v) = &$spec.$field {
                $plist.$setter(v.clone())?;
            }
        )*
    };
}

impl JobSpec {
    /// Push every present field through its named setter.
    ///
    /// Stops at the first invalid field; fields applied before it stay set.
    pub fn apply(&self, plist: &mut LaunchPlist) -> Result<(), ValidationError> {
        let spec = self;
        apply_fields!(spec, plist;
            label => set_label,
            disabled => set_disabled,
            user_name => set_user_name,
            group_name => set_group_name,
            init_groups => set_init_groups,
            program => set_program,
            program_arguments => set_program_args,
            enable_globbing => set_enable_globbing,
            enable_transactions => set_enable_transactions,
            on_demand => set_on_demand,
        );

        if let Some(v) = &spec.keep_alive {
            plist.set_keep_alive(KeepAlive::try_from(v)?);
        }

        apply_fields!(spec, plist;
            run_at_load => set_run_at_load,
            root_directory => set_root_dir,
            working_directory => set_working_dir,
            environment_variables => set_env_var,
            umask => set_umask,
            time_out => set_time_out,
            exit_time_out => set_exit_time_out,
            throttle_interval => set_throttle_interval,
            limit_load_to_hosts => set_limit_load_to_hosts,
            limit_load_from_hosts => set_limit_load_from_hosts,
            limit_load_to_session_type => set_limit_load_to_session_type,
            process_type => set_process_type,
        );

        if let Some(inetd) = &spec.inetd_compatibility {
            plist.set_inetd_compatibility_wait(inetd.wait.clone())?;
        }

        apply_fields!(spec, plist; start_interval => set_start_interval);

        if let Some(calendar) = &spec.start_calendar_interval {
            for entry in calendar.entries() {
                plist.add_calendar_interval(entry.clone())?;
            }
        }

        apply_fields!(spec, plist;
            standard_in_path => set_std_in_path,
            standard_out_path => set_std_out_path,
            standard_error_path => set_std_err_path,
            debug => set_debug,
            wait_for_debugger => set_wait_for_debugger,
            soft_resource_limits => set_soft_resource_limits,
            hard_resource_limits => set_hard_resource_limits,
            nice => set_nice,
            abandon_process_group => set_abandon_process_group,
            low_priority_io => set_low_priority_io,
            launch_only_once => set_launch_only_once,
            watch_paths => set_watch_paths,
            queue_directories => set_queue_directories,
            start_on_mount => set_start_on_mount,
        );
        Ok(())
    }

    /// Build a fresh record from this job.
    pub fn to_plist(&self) -> Result<LaunchPlist, ValidationError> {
        let mut plist = LaunchPlist::new();
        self.apply(&mut plist)?;
        Ok(plist)
    }
}

/// Parse job-file text. `path` is only used for error context.
pub fn parse_job(contents: &str, path: &Path) -> Result<JobSpec, LaunchError> {
    serde_yaml::from_str(contents).map_err(|e| LaunchError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Read and parse a job file.
pub fn load_job(path: &Path) -> Result<JobSpec, LaunchError> {
    let contents = std::fs::read_to_string(path).map_err(|e| io_err(path, e))?;
    let job = parse_job(&contents, path)?;
    tracing::debug!(path = %path.display(), "loaded job file");
    Ok(job)
}

/// Load a job file and build a fresh record from it.
pub fn build_job(path: &Path) -> Result<LaunchPlist, LaunchError> {
    let plist = load_job(path)?.to_plist()?;
    tracing::debug!(path = %path.display(), keys = plist.record().len(), "built job");
    Ok(plist)
}
