//! Client configuration read from the process environment.
use std::env;
use std::path::PathBuf;

/// Everything the `aim` binary needs to assemble a session.
///
/// Unset paths fall back to the content embedded in `aim-content`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Roster RON file.
    pub roster: Option<PathBuf>,
    /// Action catalog: a RON file or a directory of RON files.
    pub actions: Option<PathBuf>,
    /// Game config TOML file.
    pub config: Option<PathBuf>,
    pub max_steps: u64,
    /// When set, logs are also written to `aim.log` in this directory.
    pub log_dir: Option<PathBuf>,
    /// Emit one JSON object per step instead of text.
    pub snapshot_json: bool,
}

impl ClientConfig {
    pub const DEFAULT_MAX_STEPS: u64 = 40;

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `AIM_ROSTER` - Roster file (default: embedded crew)
    /// - `AIM_ACTIONS` - Action catalog file or directory (default: embedded)
    /// - `AIM_CONFIG` - Game config TOML (default: embedded)
    /// - `AIM_MAX_STEPS` - Steps to auto-play (default: 40)
    /// - `AIM_LOG_DIR` - Directory for the log file (default: stderr only)
    /// - `AIM_SNAPSHOT_JSON` - Print JSON lines instead of text (default: false)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        config.roster = read_path("AIM_ROSTER");
        config.actions = read_path("AIM_ACTIONS");
        config.config = read_path("AIM_CONFIG");
        config.log_dir = read_path("AIM_LOG_DIR");

        if let Some(steps) = read_env::<u64>("AIM_MAX_STEPS") {
            config.max_steps = steps;
        }

        if let Some(enable) = read_env::<bool>("AIM_SNAPSHOT_JSON") {
            config.snapshot_json = enable;
        } else if env::var("AIM_SNAPSHOT_JSON").is_ok_and(|v| v == "1") {
            config.snapshot_json = true;
        }

        config
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            roster: None,
            actions: None,
            config: None,
            max_steps: Self::DEFAULT_MAX_STEPS,
            log_dir: None,
            snapshot_json: false,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

fn read_path(key: &str) -> Option<PathBuf> {
    env::var_os(key)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}
