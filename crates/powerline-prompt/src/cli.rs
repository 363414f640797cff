use std::path::PathBuf;

use clap::{
    Args,
    Parser,
    Subcommand,
};
use eyre::Result;
use powerline::{
    PromptConfig,
    Shell,
    ThemePreset,
    render_current,
};
use tracing::debug;

/// Render a powerline-style shell prompt
#[derive(Debug, Parser, PartialEq)]
#[command(version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<ThemeSubcommand>,

    #[command(flatten)]
    pub render: RenderArgs,
}

#[derive(Debug, Args, PartialEq, Default)]
pub struct RenderArgs {
    /// Exit code of the previous command
    #[arg(allow_negative_numbers = true)]
    pub exit_code: Option<String>,

    /// Theme preset to draw with
    #[arg(short, long, value_enum)]
    pub theme: Option<ThemePreset>,

    /// Shell the prompt is embedded in
    #[arg(short, long, value_enum)]
    pub shell: Option<Shell>,

    /// Config file (defaults to the user config directory)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Give up on git status after this many milliseconds
    #[arg(long)]
    pub git_timeout_ms: Option<u64>,

    /// Show the KITCHEN_FOCUS segment
    #[arg(long)]
    pub kitchen: bool,

    /// End the prompt with a line break
    #[arg(long)]
    pub linefeed: bool,
}

#[derive(Debug, Subcommand, PartialEq)]
pub enum ThemeSubcommand {
    /// Theme presets
    #[command(subcommand)]
    Themes(ThemesCommand),
}

#[derive(Debug, Subcommand, PartialEq)]
pub enum ThemesCommand {
    /// List available themes
    List,
    /// Render the current prompt with a theme
    Preview {
        /// Theme name to preview
        name: String,
    },
}

impl RenderArgs {
    /// Config file values overridden by whatever was given on the command line
    pub fn config(&self) -> Result<PromptConfig> {
        let mut config = PromptConfig::load(self.config.as_deref())?;

        if let Some(theme) = self.theme {
            config.theme = theme;
        }
        if let Some(shell) = self.shell {
            config.shell = shell;
        }
        if let Some(timeout) = self.git_timeout_ms {
            config.git_timeout_ms = timeout;
        }
        config.show_kitchen |= self.kitchen;
        config.show_linefeed |= self.linefeed;

        debug!(?config, "Resolved config");
        Ok(config)
    }
}

impl Cli {
    pub fn execute(self) -> Result<()> {
        match self.command {
            None => {
                let config = self.render.config()?;
                print!("{}", render_current(&config, self.render.exit_code)?);
            },
            Some(ThemeSubcommand::Themes(ThemesCommand::List)) => {
                for theme in ThemePreset::list_themes() {
                    println!("{}", theme);
                }
            },
            Some(ThemeSubcommand::Themes(ThemesCommand::Preview { name })) => {
                let mut config = self.render.config()?;
                config.theme = ThemePreset::from_name(&name)?;
                println!("Preview of theme '{}':", name);
                println!("{}", render_current(&config, self.render.exit_code)?);
            },
        }

        Ok(())
    }
}
