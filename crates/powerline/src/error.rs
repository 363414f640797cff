use std::path::PathBuf;

/// Errors that stop a prompt from being rendered at all
#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    #[error("Unable to resolve the current directory: {0}")]
    CurrentDir(#[source] std::io::Error),

    #[error("Failed to read config file {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {}: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Theme '{0}' not found")]
    UnknownTheme(String),
}

/// Failures of the version-control probe. These never reach the composer; they
/// only decide that the git segment is omitted.
#[derive(Debug, thiserror::Error)]
pub enum GitError {
    #[error("Failed to run git: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("git exited with {0}")]
    ExitStatus(std::process::ExitStatus),

    #[error("git did not finish within {0}ms")]
    Timeout(u64),

    #[error("git produced non UTF-8 output")]
    InvalidOutput(#[from] std::string::FromUtf8Error),
}
