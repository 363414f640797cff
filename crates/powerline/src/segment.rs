//! Segment builders.
//!
//! Every builder is a plain function of already-probed state, so calling one
//! twice with the same input gives the same segment. An inactive facet is
//! `None` rather than a segment without values.

use std::path::Path;

use chrono::NaiveTime;

use crate::env::Env;
use crate::git::GitStatus;
use crate::probe;
use crate::theme::{
    Color,
    ColorPair,
    Symbols,
    Theme,
};

/// Path depth above which the middle components are collapsed
const MAX_PATH_PARTS: usize = 3;

const ROOT: &str = "/";

/// One colored chunk of the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub bg: Color,
    pub fg: Color,
    /// Color of the thin separator drawn between values
    pub sep_fg: Option<Color>,
    pub values: Vec<String>,
}

impl Segment {
    pub fn new(colors: ColorPair, value: impl Into<String>) -> Self {
        Self {
            bg: colors.bg,
            fg: colors.fg,
            sep_fg: None,
            values: vec![value.into()],
        }
    }
}

/// Shown only when the directory rejects new files
pub fn lock(dir: &Path, theme: &Theme, symbols: &Symbols) -> Option<Segment> {
    if probe::is_writable(dir) {
        None
    } else {
        Some(Segment::new(theme.lock, symbols.lock))
    }
}

/// The first path component: `~` under the home directory, `/` from the root
pub fn home(parts: &[String], theme: &Theme) -> Option<Segment> {
    let first = parts.first()?;
    let value = if first.is_empty() { ROOT } else { first.as_str() };
    Some(Segment::new(theme.home, value))
}

/// Components after the first one, collapsed to an ellipsis and the last two
/// when there are more than three
pub fn path(parts: &[String], theme: &Theme, symbols: &Symbols) -> Option<Segment> {
    let rest = parts.get(1..).filter(|rest| !rest.is_empty())?;

    let values = if rest.len() > MAX_PATH_PARTS {
        let mut values = vec![symbols.ellipsis.to_string()];
        values.extend(rest[rest.len() - 2..].iter().cloned());
        values
    } else {
        rest.to_vec()
    };

    Some(Segment {
        bg: theme.path.bg,
        fg: theme.path.fg,
        sep_fg: Some(theme.path.sep_fg),
        values,
    })
}

pub fn git(status: &GitStatus, theme: &Theme) -> Option<Segment> {
    if status.is_empty() {
        return None;
    }
    let colors = if status.dirty { theme.git.dirty } else { theme.git.clean };
    Some(Segment::new(colors, status.text.clone()))
}

/// Clock glyph and 24-hour `HH:MM:SS`, highlighted during SSH sessions
pub fn time(now: NaiveTime, env: &Env, theme: &Theme, symbols: &Symbols) -> Segment {
    let colors = if env.is_remote() { theme.remote } else { theme.time };
    Segment::new(colors, format!("{} {}", symbols.clock, now.format("%H:%M:%S")))
}

pub fn auth(env: &Env, theme: &Theme) -> Option<Segment> {
    let account = env.auth_account.as_deref()?;
    Some(Segment::new(theme.auth, format!("#{}", account)))
}

pub fn kitchen(env: &Env, theme: &Theme) -> Option<Segment> {
    let focus = env.kitchen_focus.as_deref()?;
    Some(Segment::new(theme.kitchen, format!("@{}", focus)))
}

/// Shown for nonzero numeric codes. Anything that does not parse is treated
/// like a successful command.
pub fn exit_code(code: Option<&str>, theme: &Theme) -> Option<Segment> {
    let code = code?;
    match code.parse::<i64>() {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(Segment::new(theme.error, code)),
    }
}

/// Forces the prompt onto a new line; drawn in the shell background so only the
/// break is visible
pub fn linefeed(theme: &Theme) -> Segment {
    Segment::new(
        ColorPair {
            bg: theme.shell_bg,
            fg: theme.shell_bg,
        },
        "\n",
    )
}
