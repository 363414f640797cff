use std::path::PathBuf;

pub const SSH_CLIENT: &str = "SSH_CLIENT";
pub const AUTH_ACCOUNT: &str = "AUTH_ACCOUNT";
pub const KITCHEN_FOCUS: &str = "KITCHEN_FOCUS";

/// The environment variables a prompt depends on, captured once per render.
///
/// Empty values are normalized to `None` so builders only have one "unset" case.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Env {
    pub home: Option<PathBuf>,
    pub ssh_client: Option<String>,
    pub auth_account: Option<String>,
    pub kitchen_focus: Option<String>,
}

impl Env {
    pub fn from_process() -> Self {
        Self {
            home: dirs::home_dir().filter(|home| !home.as_os_str().is_empty()),
            ssh_client: var(SSH_CLIENT),
            auth_account: var(AUTH_ACCOUNT),
            kitchen_focus: var(KITCHEN_FOCUS),
        }
    }

    pub fn with_home(mut self, home: impl Into<PathBuf>) -> Self {
        self.home = Some(home.into());
        self
    }

    pub fn with_ssh_client(mut self, value: impl Into<String>) -> Self {
        self.ssh_client = non_empty(value.into());
        self
    }

    pub fn with_auth_account(mut self, value: impl Into<String>) -> Self {
        self.auth_account = non_empty(value.into());
        self
    }

    pub fn with_kitchen_focus(mut self, value: impl Into<String>) -> Self {
        self.kitchen_focus = non_empty(value.into());
        self
    }

    pub fn is_remote(&self) -> bool {
        self.ssh_client.is_some()
    }
}

fn var(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(non_empty)
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_values_are_unset() {
        let env = Env::default().with_auth_account("").with_ssh_client("");
        assert!(env.auth_account.is_none());
        assert!(!env.is_remote());
    }

    #[test]
    fn test_builder_sets_values() {
        let env = Env::default()
            .with_home("/home/user")
            .with_ssh_client("10.0.0.1 52000 22")
            .with_kitchen_focus("release");
        assert_eq!(env.home, Some(PathBuf::from("/home/user")));
        assert!(env.is_remote());
        assert_eq!(env.kitchen_focus.as_deref(), Some("release"));
    }
}
