//! Named setters for the launchd keys, each bound to one generic setter.

use plist::{Dictionary, Value as PlistValue};
use serde_json::Value;

use crate::builder::LaunchPlist;
use crate::error::ValidationError;
use crate::keys::*;
use crate::value::KeepAlive;

type Chain<'a> = Result<&'a mut LaunchPlist, ValidationError>;

impl LaunchPlist {
    // -----------------------------------------------------------------------
    // Booleans
    // -----------------------------------------------------------------------

    /// `Disabled` — launchd will not load the job.
    pub fn set_disabled(&mut self, v: impl Into<Value>) -> Chain<'_> {
        self.add_boolean(DISABLED, v)
    }

    pub fn set_enable_globbing(&mut self, v: impl Into<Value>) -> Chain<'_> {
        self.add_boolean(ENABLE_GLOBBING, v)
    }

    pub fn set_enable_transactions(&mut self, v: impl Into<Value>) -> Chain<'_> {
        self.add_boolean(ENABLE_TRANSACTIONS, v)
    }

    /// `OnDemand` — superseded by `KeepAlive` in launchd, still accepted.
    pub fn set_on_demand(&mut self, v: impl Into<Value>) -> Chain<'_> {
        self.add_boolean(ON_DEMAND, v)
    }

    /// `RunAtLoad` — start as soon as the job is loaded.
    pub fn set_run_at_load(&mut self, v: impl Into<Value>) -> Chain<'_> {
        self.add_boolean(RUN_AT_LOAD, v)
    }

    pub fn set_init_groups(&mut self, v: impl Into<Value>) -> Chain<'_> {
        self.add_boolean(INIT_GROUPS, v)
    }

    /// `inetdCompatibility` → `{ Wait: v }`.
    pub fn set_inetd_compatibility_wait(&mut self, v: impl Into<Value>) -> Chain<'_> {
        let value: Value = v.into();
        let wait = value
            .as_bool()
            .ok_or_else(|| ValidationError::new(INETD_WAIT, "flag must be a boolean"))?;
        let mut dict = Dictionary::new();
        dict.insert(INETD_WAIT.to_owned(), PlistValue::Boolean(wait));
        Ok(self.insert(INETD_COMPATIBILITY, PlistValue::Dictionary(dict)))
    }

    pub fn set_start_on_mount(&mut self, v: impl Into<Value>) -> Chain<'_> {
        self.add_boolean(START_ON_MOUNT, v)
    }

    /// `Debug` — launchd adjusts the log mask to `LOG_DEBUG` for this job.
    pub fn set_debug(&mut self, v: impl Into<Value>) -> Chain<'_> {
        self.add_boolean(DEBUG, v)
    }

    pub fn set_wait_for_debugger(&mut self, v: impl Into<Value>) -> Chain<'_> {
        self.add_boolean(WAIT_FOR_DEBUGGER, v)
    }

    /// `AbandonProcessGroup` — don't kill the job's process group when it exits.
    pub fn set_abandon_process_group(&mut self, v: impl Into<Value>) -> Chain<'_> {
        self.add_boolean(ABANDON_PROCESS_GROUP, v)
    }

    pub fn set_low_priority_io(&mut self, v: impl Into<Value>) -> Chain<'_> {
        self.add_boolean(LOW_PRIORITY_IO, v)
    }

    pub fn set_launch_only_once(&mut self, v: impl Into<Value>) -> Chain<'_> {
        self.add_boolean(LAUNCH_ONLY_ONCE, v)
    }

    // -----------------------------------------------------------------------
    // Strings
    // -----------------------------------------------------------------------

    /// `Label` — the unique job identifier, e.g. `com.example.backup`.
    pub fn set_label(&mut self, v: impl Into<Value>) -> Chain<'_> {
        self.add_string(LABEL, v, &[])
    }

    pub fn set_program(&mut self, v: impl Into<Value>) -> Chain<'_> {
        self.add_string(PROGRAM, v, &[])
    }

    pub fn set_user_name(&mut self, v: impl Into<Value>) -> Chain<'_> {
        self.add_string(USER_NAME, v, &[])
    }

    pub fn set_group_name(&mut self, v: impl Into<Value>) -> Chain<'_> {
        self.add_string(GROUP_NAME, v, &[])
    }

    /// `LimitLoadToSessionType` — one of [`SESSION_TYPES`].
    pub fn set_limit_load_to_session_type(&mut self, v: impl Into<Value>) -> Chain<'_> {
        self.add_string(LIMIT_LOAD_TO_SESSION_TYPE, v, &SESSION_TYPES)
    }

    pub fn set_std_err_path(&mut self, v: impl Into<Value>) -> Chain<'_> {
        self.add_string(STANDARD_ERROR_PATH, v, &[])
    }

    pub fn set_std_out_path(&mut self, v: impl Into<Value>) -> Chain<'_> {
        self.add_string(STANDARD_OUT_PATH, v, &[])
    }

    pub fn set_std_in_path(&mut self, v: impl Into<Value>) -> Chain<'_> {
        self.add_string(STANDARD_IN_PATH, v, &[])
    }

    /// `RootDirectory` — launchd `chroot`s here before running the job.
    pub fn set_root_dir(&mut self, v: impl Into<Value>) -> Chain<'_> {
        self.add_string(ROOT_DIRECTORY, v, &[])
    }

    pub fn set_working_dir(&mut self, v: impl Into<Value>) -> Chain<'_> {
        self.add_string(WORKING_DIRECTORY, v, &[])
    }

    /// `ProcessType` — one of [`PROCESS_TYPES`].
    pub fn set_process_type(&mut self, v: impl Into<Value>) -> Chain<'_> {
        self.add_string(PROCESS_TYPE, v, &PROCESS_TYPES)
    }

    // -----------------------------------------------------------------------
    // Numbers
    // -----------------------------------------------------------------------

    pub fn set_umask(&mut self, v: impl Into<Value>) -> Chain<'_> {
        self.add_number(UMASK, v)
    }

    pub fn set_time_out(&mut self, v: impl Into<Value>) -> Chain<'_> {
        self.add_number(TIME_OUT, v)
    }

    pub fn set_exit_time_out(&mut self, v: impl Into<Value>) -> Chain<'_> {
        self.add_number(EXIT_TIME_OUT, v)
    }

    /// `ThrottleInterval` — minimum seconds between spawns.
    pub fn set_throttle_interval(&mut self, v: impl Into<Value>) -> Chain<'_> {
        self.add_number(THROTTLE_INTERVAL, v)
    }

    /// `StartInterval` — run every N seconds.
    pub fn set_start_interval(&mut self, v: impl Into<Value>) -> Chain<'_> {
        self.add_number(START_INTERVAL, v)
    }

    pub fn set_nice(&mut self, v: impl Into<Value>) -> Chain<'_> {
        self.add_number(NICE, v)
    }

    // -----------------------------------------------------------------------
    // Arrays
    // -----------------------------------------------------------------------

    /// `ProgramArguments` — `argv` for the job; a bare string becomes `[s]`.
    pub fn set_program_args(&mut self, v: impl Into<Value>) -> Chain<'_> {
        self.add_array(PROGRAM_ARGUMENTS, v)
    }

    pub fn set_limit_load_to_hosts(&mut self, v: impl Into<Value>) -> Chain<'_> {
        self.add_array(LIMIT_LOAD_TO_HOSTS, v)
    }

    pub fn set_limit_load_from_hosts(&mut self, v: impl Into<Value>) -> Chain<'_> {
        self.add_array(LIMIT_LOAD_FROM_HOSTS, v)
    }

    pub fn set_watch_paths(&mut self, v: impl Into<Value>) -> Chain<'_> {
        self.add_array(WATCH_PATHS, v)
    }

    pub fn set_queue_directories(&mut self, v: impl Into<Value>) -> Chain<'_> {
        self.add_array(QUEUE_DIRECTORIES, v)
    }

    // -----------------------------------------------------------------------
    // Dictionaries
    // -----------------------------------------------------------------------

    pub fn set_env_var(&mut self, v: impl Into<Value>) -> Chain<'_> {
        self.add_object(ENVIRONMENT_VARIABLES, v)
    }

    /// `SoftResourceLimits`, plural like `HardResourceLimits`. Some older
    /// generators write the singular `SoftResourceLimit`, which launchd ignores.
    pub fn set_soft_resource_limits(&mut self, v: impl Into<Value>) -> Chain<'_> {
        self.add_object(SOFT_RESOURCE_LIMITS, v)
    }

    pub fn set_hard_resource_limits(&mut self, v: impl Into<Value>) -> Chain<'_> {
        self.add_object(HARD_RESOURCE_LIMITS, v)
    }

    // -----------------------------------------------------------------------
    // KeepAlive
    // -----------------------------------------------------------------------

    /// `KeepAlive` — stored as given, no validation.
    pub fn set_keep_alive(&mut self, v: impl Into<KeepAlive>) -> &mut Self {
        self.insert(KEEP_ALIVE, v.into().into_plist())
    }
}
