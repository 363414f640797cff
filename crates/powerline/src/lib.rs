//! Powerline-style shell prompt: probes, segment builders, themes and the
//! composer that turns segments into shell prompt text.

pub mod config;
pub mod env;
pub mod error;
pub mod git;
pub mod probe;
pub mod prompt;
pub mod renderer;
pub mod segment;
pub mod theme;

pub use config::PromptConfig;
pub use env::Env;
pub use error::{
    GitError,
    PromptError,
};
pub use git::{
    GitRunner,
    GitStatus,
    SystemGit,
};
pub use prompt::{
    Prompt,
    RenderContext,
    render_current,
};
pub use renderer::{
    PromptRenderer,
    Shell,
};
pub use segment::Segment;
pub use theme::{
    Color,
    ColorPair,
    ColorTriplet,
    Symbols,
    Theme,
    ThemePreset,
};
