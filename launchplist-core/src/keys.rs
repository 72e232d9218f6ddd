//! launchd property-list key names and enumerated value sets.
//!
//! See `launchd.plist(5)` for what each key means to launchd.

// Booleans
pub const DISABLED: &str = "Disabled";
pub const ENABLE_GLOBBING: &str = "EnableGlobbing";
pub const ENABLE_TRANSACTIONS: &str = "EnableTransactions";
pub const ON_DEMAND: &str = "OnDemand";
pub const RUN_AT_LOAD: &str = "RunAtLoad";
pub const INIT_GROUPS: &str = "InitGroups";
pub const START_ON_MOUNT: &str = "StartOnMount";
pub const DEBUG: &str = "Debug";
pub const WAIT_FOR_DEBUGGER: &str = "WaitForDebugger";
pub const ABANDON_PROCESS_GROUP: &str = "AbandonProcessGroup";
pub const LOW_PRIORITY_IO: &str = "LowPriorityIO";
pub const LAUNCH_ONLY_ONCE: &str = "LaunchOnlyOnce";

// Strings
pub const LABEL: &str = "Label";
pub const PROGRAM: &str = "Program";
pub const USER_NAME: &str = "UserName";
pub const GROUP_NAME: &str = "GroupName";
pub const LIMIT_LOAD_TO_SESSION_TYPE: &str = "LimitLoadToSessionType";
pub const STANDARD_ERROR_PATH: &str = "StandardErrorPath";
pub const STANDARD_OUT_PATH: &str = "StandardOutPath";
pub const STANDARD_IN_PATH: &str = "StandardInPath";
pub const ROOT_DIRECTORY: &str = "RootDirectory";
pub const WORKING_DIRECTORY: &str = "WorkingDirectory";
pub const PROCESS_TYPE: &str = "ProcessType";

// Numbers
pub const UMASK: &str = "Umask";
pub const TIME_OUT: &str = "TimeOut";
pub const EXIT_TIME_OUT: &str = "ExitTimeOut";
pub const THROTTLE_INTERVAL: &str = "ThrottleInterval";
pub const START_INTERVAL: &str = "StartInterval";
pub const NICE: &str = "Nice";

// Arrays
pub const PROGRAM_ARGUMENTS: &str = "ProgramArguments";
pub const LIMIT_LOAD_TO_HOSTS: &str = "LimitLoadToHosts";
pub const LIMIT_LOAD_FROM_HOSTS: &str = "LimitLoadFromHosts";
pub const WATCH_PATHS: &str = "WatchPaths";
pub const QUEUE_DIRECTORIES: &str = "QueueDirectories";

// Dictionaries
pub const ENVIRONMENT_VARIABLES: &str = "EnvironmentVariables";
pub const SOFT_RESOURCE_LIMITS: &str = "SoftResourceLimits";
pub const HARD_RESOURCE_LIMITS: &str = "HardResourceLimits";

// Composite
pub const INETD_COMPATIBILITY: &str = "inetdCompatibility";
pub const INETD_WAIT: &str = "Wait";
pub const KEEP_ALIVE: &str = "KeepAlive";
pub const START_CALENDAR_INTERVAL: &str = "StartCalendarInterval";

// Calendar interval fields
pub const MINUTE: &str = "Minute";
pub const HOUR: &str = "Hour";
pub const DAY: &str = "Day";
pub const WEEKDAY: &str = "Weekday";
pub const MONTH: &str = "Month";

/// Accepted values for `LimitLoadToSessionType`.
pub const SESSION_TYPES: [&str; 5] = ["Aqua", "LoginWindow", "Background", "StandardIO", "System"];

/// Accepted values for `ProcessType`.
pub const PROCESS_TYPES: [&str; 4] = ["Background", "Standard", "Adaptive", "Interactive"];
