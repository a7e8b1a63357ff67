//! Argument vector for a git subcommand

/// A git subcommand and the parameters that follow it.
///
/// `params` is everything after the subcommand name, in order. Rewriters
/// mutate it in place before the host renders the final command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    pub command: String,
    pub params: Vec<String>,
    /// Print the resulting command instead of running it.
    pub noop: bool,
}

impl Args {
    pub fn new<I, S>(command: impl Into<String>, params: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            command: command.into(),
            params: params.into_iter().map(Into::into).collect(),
            noop: false,
        }
    }

    pub fn with_noop(mut self, noop: bool) -> Self {
        self.noop = noop;
        self
    }

    pub fn params(&self) -> &[String] {
        &self.params
    }

    pub fn is_params_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn index_of_param(&self, param: &str) -> Option<usize> {
        self.params.iter().position(|p| p == param)
    }

    /// Remove and return the parameter at `index`, or `None` when out of range.
    pub fn remove_param(&mut self, index: usize) -> Option<String> {
        (index < self.params.len()).then(|| self.params.remove(index))
    }

    /// Replace the parameter at `index`, returning the previous value.
    pub fn replace_param(&mut self, index: usize, value: impl Into<String>) -> Option<String> {
        let slot = self.params.get_mut(index)?;
        Some(std::mem::replace(slot, value.into()))
    }

    /// Render `git <command> <params...>` joined by single spaces.
    pub fn to_command_line(&self) -> String {
        let mut parts = Vec::with_capacity(self.params.len() + 2);
        parts.push("git");
        parts.push(self.command.as_str());
        parts.extend(self.params.iter().map(String::as_str));
        parts.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::Args;

    #[test]
    fn test_index_and_remove_param() {
        let mut args = Args::new("clone", ["-p", "jingweno/gh", "-p"]);
        assert_eq!(args.index_of_param("-p"), Some(0));
        assert_eq!(args.remove_param(0).as_deref(), Some("-p"));
        assert_eq!(args.params(), ["jingweno/gh", "-p"]);
        assert_eq!(args.index_of_param("-p"), Some(1));
        assert!(args.remove_param(5).is_none());
    }

    #[test]
    fn test_replace_param_out_of_range_is_noop() {
        let mut args = Args::new("clone", ["a"]);
        assert!(args.replace_param(3, "b").is_none());
        assert_eq!(args.replace_param(0, "b").as_deref(), Some("a"));
        assert_eq!(args.params(), ["b"]);
    }

    #[test]
    fn test_command_line_rendering() {
        let args = Args::new("clone", ["git://github.com/a/b.git", "dest"]);
        assert_eq!(args.to_command_line(), "git clone git://github.com/a/b.git dest");

        let empty = Args::new("clone", Vec::<String>::new());
        assert!(empty.is_params_empty());
        assert_eq!(empty.to_command_line(), "git clone");
    }
}
