use std::path::{
    Path,
    PathBuf,
};
use std::io::Read;
use std::process::{
    Child,
    Command,
    Stdio,
};
use std::sync::mpsc;
use std::thread;
use std::time::{
    Duration,
    Instant,
};

use regex::Regex;
use tracing::debug;

use crate::error::GitError;
use crate::theme::Symbols;

pub const DEFAULT_GIT_TIMEOUT_MS: u64 = 500;

lazy_static::lazy_static! {
    static ref BRANCH_RE: Regex =
        Regex::new(r"(?m)^(HEAD detached at|HEAD detached from|On branch) (\S+)").unwrap();
    static ref AHEAD_BEHIND_RE: Regex = Regex::new(r"Your branch is (ahead|behind) .*?by ([0-9]+) comm").unwrap();
    static ref DIVERGED_RE: Regex = Regex::new(r"have (\d+) and (\d+) different commits").unwrap();
}

const CLEAN_MARKER: &str = "nothing to commit";
const UNTRACKED_MARKER: &str = "Untracked files";

/// Source of raw `git status` text
pub trait GitRunner {
    fn run_status(&self) -> Result<String, GitError>;
}

/// Interval between checks on a running `git`
const POLL_INTERVAL: Duration = Duration::from_millis(5);

/// Runs the real `git` binary in a directory. A `git` still running at the
/// deadline is killed so it cannot hold repository locks after the prompt is
/// drawn.
#[derive(Debug, Clone)]
pub struct SystemGit {
    program: PathBuf,
    dir: PathBuf,
    timeout: Duration,
}

impl SystemGit {
    pub fn new(dir: &Path, timeout_ms: u64) -> Self {
        Self {
            program: PathBuf::from("git"),
            dir: dir.to_path_buf(),
            timeout: Duration::from_millis(timeout_ms),
        }
    }

    /// Use another executable in place of `git` from `PATH`
    pub fn with_program(mut self, program: impl Into<PathBuf>) -> Self {
        self.program = program.into();
        self
    }

    fn spawn(&self) -> std::io::Result<Child> {
        Command::new(&self.program)
            .args(["status", "--ignore-submodules"])
            .current_dir(&self.dir)
            // The parser matches git's English phrasing
            .env("LC_ALL", "C")
            // A status refresh must never take index.lock
            .env("GIT_OPTIONAL_LOCKS", "0")
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
    }
}

impl GitRunner for SystemGit {
    fn run_status(&self) -> Result<String, GitError> {
        let mut child = self.spawn()?;
        let deadline = Instant::now() + self.timeout;

        // Drain stdout on the side so a large status cannot fill the pipe and stall git
        let (tx, rx) = mpsc::channel();
        if let Some(mut stdout) = child.stdout.take() {
            thread::spawn(move || {
                let mut buf = Vec::new();
                let _ = tx.send(stdout.read_to_end(&mut buf).map(|_| buf));
            });
        }

        let status = loop {
            if let Some(status) = child.try_wait()? {
                break status;
            }
            if Instant::now() >= deadline {
                if let Err(err) = child.kill() {
                    debug!("Failed to kill git: {}", err);
                }
                let _ = child.wait();
                return Err(GitError::Timeout(self.timeout.as_millis() as u64));
            }
            thread::sleep(POLL_INTERVAL);
        };

        if !status.success() {
            return Err(GitError::ExitStatus(status));
        }

        let remaining = deadline.saturating_duration_since(Instant::now());
        match rx.recv_timeout(remaining.max(POLL_INTERVAL)) {
            Ok(output) => Ok(String::from_utf8(output?)?),
            Err(_) => Err(GitError::Timeout(self.timeout.as_millis() as u64)),
        }
    }
}

/// Summary of a repository as shown in the prompt
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GitStatus {
    /// Branch (or detached commit) plus ahead/behind/untracked markers. Empty
    /// when the directory is not a repository or git is unavailable.
    pub text: String,
    /// Whether the working tree has anything to commit
    pub dirty: bool,
}

impl GitStatus {
    pub fn probe(runner: &dyn GitRunner, symbols: &Symbols) -> Self {
        match runner.run_status() {
            Ok(output) => Self::parse(&output, symbols),
            Err(err) => {
                debug!("git status unavailable: {}", err);
                Self::default()
            },
        }
    }

    /// Parse human readable `git status` output.
    ///
    /// Output without a recognizable branch line yields the empty status, so a
    /// change in git's wording hides the segment instead of failing.
    pub fn parse(output: &str, symbols: &Symbols) -> Self {
        let Some(branch) = BRANCH_RE.captures(output) else {
            debug!("Unrecognized git status output");
            return Self::default();
        };
        let mut text = branch[2].to_string();

        if let Some(caps) = AHEAD_BEHIND_RE.captures(output) {
            let arrow = if &caps[1] == "ahead" { symbols.ahead } else { symbols.behind };
            text.push_str(&format!(" {}{}", &caps[2], arrow));
        }

        // Diverged: local commits first, then upstream commits
        if let Some(caps) = DIVERGED_RE.captures(output) {
            text.push_str(&format!(
                " {}{} {}{}",
                &caps[1], symbols.ahead, &caps[2], symbols.behind
            ));
        }

        if output.contains(UNTRACKED_MARKER) {
            text.push_str(&format!(" {}", symbols.untracked));
        }

        Self {
            text,
            dirty: !output.contains(CLEAN_MARKER),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
