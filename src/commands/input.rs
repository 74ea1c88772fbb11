//! Tokenization of raw command lines.
use std::collections::HashMap;

/// A parsed command invocation: name, positional arguments and
/// `--key=value` options. Built once per invocation, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandInput {
    pub name: String,
    pub args: Vec<String>,
    pub options: HashMap<String, String>,
}

impl CommandInput {
    /// Splits `line` on whitespace. The first token is the command name;
    /// tokens of the form `--key=value` become named options, everything
    /// else is a positional argument. Returns `None` for a blank line.
    pub fn parse(line: &str) -> Option<Self> {
        let mut parts = line.split_whitespace();
        let name = parts.next()?.to_string();

        let mut args = Vec::new();
        let mut options = HashMap::new();
        for token in parts {
            if let Some(option) = token.strip_prefix("--") {
                let (key, value) = option.split_once('=').unwrap_or((option, ""));
                if !key.is_empty() {
                    options.insert(key.to_string(), value.to_string());
                }
            } else {
                args.push(token.to_string());
            }
        }

        Some(Self { name, args, options })
    }

    /// The free-text query: all positional arguments joined by spaces.
    pub fn query(&self) -> String {
        self.args.join(" ")
    }

    /// Lenient integer option lookup: a missing key or an unparseable
    /// value both degrade to `None`, never to an error.
    pub fn option_int(&self, key: &str) -> Option<i64> {
        self.options.get(key)?.parse().ok()
    }
}
