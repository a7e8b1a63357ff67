//! GitHub identity and project addressing

pub mod project;

pub use project::{git_url, Project, Transport};

/// Host used when no other host is configured.
pub const DEFAULT_HOST: &str = "github.com";

/// Source of the active GitHub account name.
pub trait CurrentLogin {
    fn current_login(&self) -> String;

    /// Host clone URLs are built against.
    fn host(&self) -> String {
        DEFAULT_HOST.to_string()
    }
}

impl CurrentLogin for str {
    fn current_login(&self) -> String {
        self.to_string()
    }
}

impl CurrentLogin for String {
    fn current_login(&self) -> String {
        self.clone()
    }
}
