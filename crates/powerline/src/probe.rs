use std::fs::{
    self,
    OpenOptions,
};
use std::path::{
    Path,
    PathBuf,
};
use std::time::{
    SystemTime,
    UNIX_EPOCH,
};

use tracing::debug;

use crate::env::Env;
use crate::error::PromptError;

pub const HOME_MARKER: &str = "~";

/// The current directory and its display components
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkingDir {
    pub path: PathBuf,
    /// `~` replaces the home prefix; an empty first part means the path is
    /// absolute from the root.
    pub parts: Vec<String>,
}

impl WorkingDir {
    pub fn current(env: &Env) -> Result<Self, PromptError> {
        let path = std::env::current_dir().map_err(PromptError::CurrentDir)?;
        Ok(Self::from_path(path, env))
    }

    pub fn from_path(path: PathBuf, env: &Env) -> Self {
        let parts = split_path(&path, env.home.as_deref());
        Self { path, parts }
    }
}

/// Split an absolute path into display parts, substituting the home directory
pub fn split_path(path: &Path, home: Option<&Path>) -> Vec<String> {
    let display = match home.filter(|home| home.parent().is_some()) {
        Some(home) => match path.strip_prefix(home) {
            Ok(rest) if rest.as_os_str().is_empty() => HOME_MARKER.to_string(),
            Ok(rest) => format!("{}/{}", HOME_MARKER, rest.to_string_lossy()),
            Err(_) => path.to_string_lossy().into_owned(),
        },
        None => path.to_string_lossy().into_owned(),
    };

    let display = display.strip_suffix('/').unwrap_or(&display);
    display.split('/').map(str::to_string).collect()
}

/// Best-effort check that files can be created in `dir`.
///
/// A marker file is created and removed right away. Two renders probing the same
/// directory at the same moment use different names, but the answer can still
/// change between the probe and the next command.
pub fn is_writable(dir: &Path) -> bool {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.subsec_nanos())
        .unwrap_or_default();
    let marker = dir.join(format!(".powerline-write-test-{}-{}", std::process::id(), nanos));

    match OpenOptions::new().write(true).create_new(true).open(&marker) {
        Ok(file) => {
            drop(file);
            if let Err(err) = fs::remove_file(&marker) {
                debug!("Failed to remove write marker {}: {}", marker.display(), err);
            }
            true
        },
        Err(err) => {
            debug!("{} is not writable: {}", dir.display(), err);
            false
        },
    }
}
