use chrono::{
    Local,
    NaiveTime,
};
use tracing::debug;

use crate::config::PromptConfig;
use crate::env::Env;
use crate::error::PromptError;
use crate::git::{
    GitRunner,
    GitStatus,
    SystemGit,
};
use crate::probe::WorkingDir;
use crate::renderer::PromptRenderer;
use crate::segment::{
    self,
    Segment,
};
use crate::theme::{
    Symbols,
    Theme,
};

/// Everything probed from the outside world for a single render
#[derive(Debug, Clone)]
pub struct RenderContext {
    pub cwd: WorkingDir,
    pub env: Env,
    pub now: NaiveTime,
    pub git: GitStatus,
    pub exit_code: Option<String>,
}

impl RenderContext {
    pub fn probe(
        cwd: WorkingDir,
        env: Env,
        git: &dyn GitRunner,
        symbols: &Symbols,
        exit_code: Option<String>,
    ) -> Self {
        let git = GitStatus::probe(git, symbols);
        debug!(cwd = %cwd.path.display(), git = %git.text, dirty = git.dirty, "Probed prompt state");

        Self {
            cwd,
            env,
            now: Local::now().time(),
            git,
            exit_code,
        }
    }
}

/// The fixed segment layout and its styling
#[derive(Debug, Clone)]
pub struct Prompt {
    pub theme: Theme,
    pub symbols: Symbols,
    pub show_kitchen: bool,
    pub show_linefeed: bool,
}

impl Prompt {
    pub fn from_config(config: &PromptConfig) -> Self {
        Self {
            theme: config.theme.theme(),
            symbols: Symbols::POWERLINE,
            show_kitchen: config.show_kitchen,
            show_linefeed: config.show_linefeed,
        }
    }

    /// Segments in display order: time, auth, kitchen, home, path, lock, git,
    /// exit code, linefeed. Inactive facets are left out.
    pub fn segments(&self, ctx: &RenderContext) -> Vec<Segment> {
        let theme = &self.theme;
        let symbols = &self.symbols;

        [
            Some(segment::time(ctx.now, &ctx.env, theme, symbols)),
            segment::auth(&ctx.env, theme),
            self.show_kitchen.then(|| segment::kitchen(&ctx.env, theme)).flatten(),
            segment::home(&ctx.cwd.parts, theme),
            segment::path(&ctx.cwd.parts, theme, symbols),
            segment::lock(&ctx.cwd.path, theme, symbols),
            segment::git(&ctx.git, theme),
            segment::exit_code(ctx.exit_code.as_deref(), theme),
            self.show_linefeed.then(|| segment::linefeed(theme)),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

/// Probe the current process and render the prompt text for `config`.
///
/// Fails only when the current directory cannot be resolved.
pub fn render_current(config: &PromptConfig, exit_code: Option<String>) -> Result<String, PromptError> {
    let env = Env::from_process();
    let cwd = WorkingDir::current(&env)?;
    let git = SystemGit::new(&cwd.path, config.git_timeout_ms);

    let prompt = Prompt::from_config(config);
    let ctx = RenderContext::probe(cwd, env, &git, &prompt.symbols, exit_code);
    let renderer = PromptRenderer::new(config.shell, prompt.symbols);
    Ok(renderer.render(&prompt.segments(&ctx)))
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use tempfile::TempDir;

    use super::*;
    use crate::error::GitError;
    use crate::theme::ThemePreset;

    struct CannedGit(&'static str);

    impl GitRunner for CannedGit {
        fn run_status(&self) -> Result<String, GitError> {
            Ok(self.0.to_string())
        }
    }

    fn context(dir: PathBuf, env: Env, git: GitStatus, exit_code: Option<&str>) -> RenderContext {
        RenderContext {
            cwd: WorkingDir::from_path(dir, &env),
            env,
            now: NaiveTime::from_hms_opt(8, 4, 2).unwrap(),
            git,
            exit_code: exit_code.map(str::to_string),
        }
    }

    fn prompt(show_optional: bool) -> Prompt {
        Prompt {
            theme: ThemePreset::SolarizedDarkFull.theme(),
            symbols: Symbols::POWERLINE,
            show_kitchen: show_optional,
            show_linefeed: show_optional,
        }
    }

    fn values(segments: &[Segment]) -> Vec<String> {
        segments.iter().map(|segment| segment.values.join("|")).collect()
    }

    #[test]
    fn test_minimal_prompt() {
        let temp_dir = TempDir::new().unwrap();
        let home = temp_dir.path().to_path_buf();
        let ctx = context(home.clone(), Env::default().with_home(&home), GitStatus::default(), None);

        let segments = prompt(false).segments(&ctx);
        assert_eq!(values(&segments), vec!["\u{262f} 08:04:02", "~"]);
    }

    #[test]
    fn test_full_prompt_order() {
        let temp_dir = TempDir::new().unwrap();
        let home = temp_dir.path().to_path_buf();
        let dir = home.join("a").join("b").join("c").join("d");
        std::fs::create_dir_all(&dir).unwrap();

        let env = Env::default()
            .with_home(&home)
            .with_auth_account("ops")
            .with_kitchen_focus("release");
        let git = GitStatus {
            text: "main".to_string(),
            dirty: true,
        };
        let ctx = context(dir, env, git, Some("1"));

        let segments = prompt(true).segments(&ctx);
        assert_eq!(
            values(&segments),
            vec![
                "\u{262f} 08:04:02",
                "#ops",
                "@release",
                "~",
                "\u{2026}|c|d",
                "main",
                "1",
                "\n"
            ]
        );
        assert_eq!(segments[5].bg, prompt(true).theme.git.dirty.bg);
    }

    #[test]
    fn test_optional_segments_disabled() {
        let temp_dir = TempDir::new().unwrap();
        let env = Env::default().with_kitchen_focus("release");
        let ctx = context(temp_dir.path().to_path_buf(), env, GitStatus::default(), Some("0"));

        let segments = prompt(false).segments(&ctx);
        assert!(!values(&segments).iter().any(|value| value == "@release" || value == "\n"));
    }

    #[test]
    fn test_lock_segment_for_missing_dir() {
        let temp_dir = TempDir::new().unwrap();
        let gone = temp_dir.path().join("gone");
        let ctx = context(gone, Env::default(), GitStatus::default(), None);

        let segments = prompt(false).segments(&ctx);
        assert!(values(&segments).contains(&Symbols::POWERLINE.lock.to_string()));
    }

    #[test]
    fn test_probe_uses_runner() {
        let env = Env::default().with_home("/home/user");
        let cwd = WorkingDir::from_path(PathBuf::from("/home/user/src"), &env);
        let ctx = RenderContext::probe(
            cwd,
            env,
            &CannedGit("On branch main\nnothing to commit, working tree clean\n"),
            &Symbols::POWERLINE,
            Some("3".to_string()),
        );
        assert_eq!(ctx.git.text, "main");
        assert!(!ctx.git.dirty);
        assert_eq!(ctx.exit_code.as_deref(), Some("3"));
        assert_eq!(ctx.cwd.parts, vec!["~", "src"]);
    }

    #[test]
    fn test_render_current_in_process_dir() {
        let config = PromptConfig {
            shell: crate::renderer::Shell::Bare,
            ..PromptConfig::default()
        };
        let rendered = render_current(&config, Some("2".to_string())).unwrap();
        assert!(rendered.contains(" 2 "));
        assert!(rendered.ends_with("\x1b[0m "));
    }

    #[test]
    fn test_from_config() {
        let config = PromptConfig {
            theme: ThemePreset::SolarizedDarkFull,
            show_linefeed: true,
            ..PromptConfig::default()
        };
        let prompt = Prompt::from_config(&config);
        assert_eq!(prompt.theme, Theme::SOLARIZED_DARK_FULL);
        assert!(prompt.show_linefeed);
        assert!(!prompt.show_kitchen);
    }
}
