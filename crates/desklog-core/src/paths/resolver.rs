//! Platform-specific log directory resolution
//!
//! Each platform has an ordered list of candidate directories built from
//! environment variables and the user's home directory:
//! - Linux: `$XDG_CONFIG_HOME/<app>`, `~/.config/<app>`, `$XDG_DATA_HOME/<app>`, `~/.local/share/<app>`
//! - macOS: `~/Library/Logs/<app>`, `~/Library/Application Support/<app>`
//! - Windows: `%APPDATA%\<app>`, `~\AppData\Roaming\<app>`

use std::convert::Infallible;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use super::probe::{first_writable, CandidatePath, FsProbe, Probe};
use crate::error::{LogError, LogResult};

/// Operating system family
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Platform {
    Linux,
    MacOs,
    Windows,
    /// Anything without a known log directory layout
    Other(String),
}

impl Platform {
    /// Platform of the running process
    pub fn current() -> Self {
        Self::from_os(env::consts::OS)
    }

    /// Parse an OS identifier (`linux`, `darwin`/`macos`, `win32`/`windows`)
    pub fn from_os(os: &str) -> Self {
        match os.to_lowercase().as_str() {
            "linux" => Platform::Linux,
            "darwin" | "macos" => Platform::MacOs,
            "win32" | "windows" => Platform::Windows,
            other => Platform::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Platform::Linux => "linux",
            Platform::MacOs => "darwin",
            Platform::Windows => "win32",
            Platform::Other(name) => name.as_str(),
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_os(s))
    }
}

/// Startup inputs used to build candidate paths
///
/// Empty environment values are treated as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    pub xdg_config_home: Option<PathBuf>,
    pub xdg_data_home: Option<PathBuf>,
    pub appdata: Option<PathBuf>,
    pub home: Option<PathBuf>,
}

impl Environment {
    /// Read the environment of the current process
    pub fn from_process() -> Self {
        Self {
            xdg_config_home: env_path("XDG_CONFIG_HOME"),
            xdg_data_home: env_path("XDG_DATA_HOME"),
            appdata: env_path("APPDATA"),
            home: dirs::home_dir().or_else(|| env_path("HOME")),
        }
    }

    /// Create an environment with only a home directory
    pub fn with_home(home: impl Into<PathBuf>) -> Self {
        Self {
            home: Some(home.into()),
            ..Default::default()
        }
    }

    pub fn xdg_config_home(mut self, path: impl Into<PathBuf>) -> Self {
        self.xdg_config_home = Some(path.into());
        self
    }

    pub fn xdg_data_home(mut self, path: impl Into<PathBuf>) -> Self {
        self.xdg_data_home = Some(path.into());
        self
    }

    pub fn appdata(mut self, path: impl Into<PathBuf>) -> Self {
        self.appdata = Some(path.into());
        self
    }
}

fn env_path(key: &str) -> Option<PathBuf> {
    env::var_os(key)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Picks the directory log files are written to
///
/// # Example
///
/// ```
/// use desklog_core::paths::{DirectoryResolver, Environment, Platform};
///
/// let resolver = DirectoryResolver::new(
///     Platform::Linux,
///     Environment::with_home("/home/u"),
///     "App",
/// );
/// let config = resolver.candidates()[1].join().unwrap();
/// assert_eq!(config, std::path::PathBuf::from("/home/u/.config/App"));
/// ```
#[derive(Debug, Clone)]
pub struct DirectoryResolver {
    platform: Platform,
    env: Environment,
    product_name: String,
}

impl DirectoryResolver {
    pub fn new(platform: Platform, env: Environment, product_name: impl Into<String>) -> Self {
        Self {
            platform,
            env,
            product_name: product_name.into(),
        }
    }

    /// Resolver for the running process
    pub fn for_current_process(product_name: impl Into<String>) -> Self {
        Self::new(Platform::current(), Environment::from_process(), product_name)
    }

    pub fn platform(&self) -> &Platform {
        &self.platform
    }

    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    /// Ordered candidate list for the configured platform
    pub fn candidates(&self) -> Vec<CandidatePath> {
        let env = &self.env;
        let home = env.home.as_deref();
        let app = self.product_name.as_str();

        match self.platform {
            Platform::Linux => vec![
                CandidatePath::rooted(env.xdg_config_home.as_deref(), &[app]),
                CandidatePath::rooted(home, &[".config", app]),
                CandidatePath::rooted(env.xdg_data_home.as_deref(), &[app]),
                CandidatePath::rooted(home, &[".local", "share", app]),
            ],
            Platform::MacOs => vec![
                CandidatePath::rooted(home, &["Library", "Logs", app]),
                CandidatePath::rooted(home, &["Library", "Application Support", app]),
            ],
            Platform::Windows => vec![
                CandidatePath::rooted(env.appdata.as_deref(), &[app]),
                CandidatePath::rooted(home, &["AppData", "Roaming", app]),
            ],
            Platform::Other(_) => Vec::new(),
        }
    }

    /// Resolve using a custom probe
    pub fn resolve_with<P: Probe + ?Sized>(&self, probe: &P) -> Option<PathBuf> {
        first_writable(probe, &self.candidates())
    }

    /// Resolve against the real filesystem
    pub fn resolve(&self) -> Option<PathBuf> {
        self.resolve_with(&FsProbe::new())
    }

    /// Resolve against the real filesystem, reporting why nothing was found
    pub fn try_resolve(&self) -> LogResult<PathBuf> {
        if let Platform::Other(name) = &self.platform {
            return Err(LogError::UnsupportedPlatform(name.clone()));
        }
        self.resolve()
            .ok_or_else(|| LogError::directory_unavailable(self.platform.as_str()))
    }
}
