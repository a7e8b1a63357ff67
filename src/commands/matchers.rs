//! Token classification for clone arguments
//!
//! ORDER MATTERS: matchers are consulted top to bottom and the first hit wins.
//! Value-consuming flags come before URLs, URLs before shorthand, so that a
//! token like `git@github.com:o/r` is never mistaken for a repository name.

use once_cell::sync::Lazy;
use regex::Regex;

/// What a single clone argument looks like.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A git flag whose value is the next argument (`--depth`, `-b`, ...).
    ValueFlag,
    /// A complete clone target (`https://...`, `git://...`, `user@host:path`).
    Url,
    /// `name` or `owner/name`.
    Shorthand,
    Other,
}

pub struct TokenMatcher {
    pub name: &'static str,
    pub kind: TokenKind,
    pub pattern: Regex,
}

pub static MATCHERS: Lazy<Vec<TokenMatcher>> = Lazy::new(|| {
    vec![
        TokenMatcher {
            name: "value_flag",
            kind: TokenKind::ValueFlag,
            pattern: Regex::new(
                r"^(?:--(?:upload-pack|template|depth|origin|branch|reference|name)|-[ubo])$",
            )
            .expect("valid regex"),
        },
        TokenMatcher {
            name: "scheme_url",
            kind: TokenKind::Url,
            pattern: Regex::new(r"^(?:https?|git)://.+/.+$").expect("valid regex"),
        },
        TokenMatcher {
            name: "scp_url",
            kind: TokenKind::Url,
            pattern: Regex::new(r"^.+@.+:.+$").expect("valid regex"),
        },
        TokenMatcher {
            name: "name_with_owner",
            kind: TokenKind::Shorthand,
            // Owners are ASCII alphanumerics and `-`; names may also hold `_` and
            // `.` but are never all dots.
            pattern: Regex::new(r"^(?:[A-Za-z0-9][A-Za-z0-9-]*/)?\.*[A-Za-z0-9_][A-Za-z0-9_.-]*$")
                .expect("valid regex"),
        },
    ]
});

/// Classify `token` using the first matcher that accepts it.
pub fn classify(token: &str) -> TokenKind {
    MATCHERS
        .iter()
        .find(|m| m.pattern.is_match(token))
        .map(|m| {
            tracing::trace!(token, matcher = m.name, "classified clone argument");
            m.kind
        })
        .unwrap_or(TokenKind::Other)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matches_kind(token: &str, kind: TokenKind) -> bool {
        MATCHERS.iter().filter(|m| m.kind == kind).any(|m| m.pattern.is_match(token))
    }

    fn is_value_flag(token: &str) -> bool {
        matches_kind(token, TokenKind::ValueFlag)
    }

    fn is_url(token: &str) -> bool {
        matches_kind(token, TokenKind::Url)
    }

    fn is_shorthand(token: &str) -> bool {
        matches_kind(token, TokenKind::Shorthand)
    }

    #[test]
    fn test_value_flags() {
        for flag in [
            "--upload-pack",
            "--template",
            "--depth",
            "--origin",
            "--branch",
            "--reference",
            "--name",
            "-u",
            "-b",
            "-o",
        ] {
            assert!(is_value_flag(flag), "{flag} should consume a value");
        }
        assert!(!is_value_flag("--bare"));
        assert!(!is_value_flag("--depth=1"));
        assert!(!is_value_flag("-p"));
    }

    #[test]
    fn test_urls() {
        assert!(is_url("https://github.com/jingweno/gh"));
        assert!(is_url("http://example.com/repo.git"));
        assert!(is_url("git://github.com/jingweno/gh.git"));
        assert!(is_url("git@github.com:jingweno/gh.git"));
        assert!(!is_url("jingweno/gh"));
        assert!(!is_url("ftp://example.com/repo"));
    }

    #[test]
    fn test_shorthand() {
        assert!(is_shorthand("jingweno/gh"));
        assert!(is_shorthand("jekyll_and_hyde"));
        assert!(is_shorthand("my-org/my.repo"));
        assert!(!is_shorthand("a/b/c"));
        assert!(!is_shorthand("--bare"));
        assert!(!is_shorthand("-q"));
        assert!(!is_shorthand("owner/-repo"));
        assert!(!is_shorthand(""));
    }

    #[test]
    fn test_relative_paths_are_not_shorthand() {
        for path in ["./x", "../x", ".", "..", "./newdir", "my.org/repo"] {
            assert!(!is_shorthand(path), "{path} should not be a repository");
        }
        assert_eq!(classify("../x"), TokenKind::Other);
        assert!(is_shorthand(".dotfiles"));
        assert!(is_shorthand("foo/.github"));
    }

    #[test]
    fn test_shorthand_is_ascii_only() {
        assert!(!is_shorthand("ünï/repo"));
        assert!(!is_shorthand("owner/répo"));
        assert!(!is_shorthand("日本"));
        assert!(is_shorthand("owner-ok/repo_1"));
        assert!(!is_shorthand("owner_ok/repo"));
    }

    #[test]
    fn test_classify_precedence() {
        assert_eq!(classify("--depth"), TokenKind::ValueFlag);
        assert_eq!(classify("git@github.com:o/r.git"), TokenKind::Url);
        assert_eq!(classify("https://github.com/x/y"), TokenKind::Url);
        assert_eq!(classify("x/y"), TokenKind::Shorthand);
        assert_eq!(classify("--bare"), TokenKind::Other);
    }
}
