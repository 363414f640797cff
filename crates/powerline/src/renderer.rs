use clap::ValueEnum;
use serde::{
    Deserialize,
    Serialize,
};

use crate::segment::Segment;
use crate::theme::{
    Color,
    Symbols,
};

const ESC: &str = "\x1b[";
const RESET: &str = "\x1b[0m";

/// Shell the prompt is written for; decides how non-printing sequences are
/// marked so line editing still measures the prompt correctly
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum, strum::Display, strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Shell {
    #[default]
    Bash,
    Zsh,
    Bare,
}

impl Shell {
    fn wrap(self, code: &str) -> String {
        match self {
            Self::Bash => format!("\\[{}\\]", code),
            Self::Zsh => format!("%{{{}%}}", code),
            Self::Bare => code.to_string(),
        }
    }

    /// Make segment text literal for the shell's prompt expansion. Directory
    /// and branch names may contain `$(...)` or backticks, which bash
    /// (`promptvars`) and zsh (`PROMPT_SUBST`) would otherwise execute.
    fn escape(self, text: &str) -> String {
        let mut escaped = String::with_capacity(text.len());
        for ch in text.chars() {
            match (self, ch) {
                (Self::Bash | Self::Zsh, '\\' | '$' | '`') => {
                    escaped.push('\\');
                    escaped.push(ch);
                },
                (Self::Zsh, '%') => escaped.push_str("%%"),
                _ => escaped.push(ch),
            }
        }
        escaped
    }
}

/// Joins segments left to right with powerline separators
pub struct PromptRenderer {
    shell: Shell,
    symbols: Symbols,
}

impl PromptRenderer {
    pub fn new(shell: Shell, symbols: Symbols) -> Self {
        Self { shell, symbols }
    }

    pub fn render(&self, segments: &[Segment]) -> String {
        if segments.is_empty() {
            return String::new();
        }

        let mut result = String::new();
        for (index, segment) in segments.iter().enumerate() {
            result.push_str(&self.colors(segment.fg, segment.bg));
            result.push(' ');
            result.push_str(&self.body(segment));
            result.push(' ');

            match segments.get(index + 1) {
                Some(next) => {
                    result.push_str(&self.colors(segment.bg, next.bg));
                    result.push_str(self.symbols.separator);
                },
                None => {
                    result.push_str(&self.reset());
                    result.push_str(&self.fg(segment.bg));
                    result.push_str(self.symbols.separator);
                },
            }
        }

        result.push_str(&self.reset());
        result.push(' ');
        result
    }

    fn body(&self, segment: &Segment) -> String {
        let joiner = match segment.sep_fg {
            Some(sep_fg) => format!(
                " {}{}{} ",
                self.fg(sep_fg),
                self.symbols.separator_thin,
                self.fg(segment.fg)
            ),
            None => format!(" {} ", self.symbols.separator_thin),
        };

        segment
            .values
            .iter()
            .map(|value| self.shell.escape(value))
            .collect::<Vec<_>>()
            .join(joiner.as_str())
    }

    fn fg(&self, color: Color) -> String {
        self.shell.wrap(&format!("{}38;5;{}m", ESC, color))
    }

    fn colors(&self, fg: Color, bg: Color) -> String {
        self.shell.wrap(&format!("{}38;5;{}m{}48;5;{}m", ESC, fg, ESC, bg))
    }

    fn reset(&self) -> String {
        self.shell.wrap(RESET)
    }
}
