//! Route pattern compilation.
//!
//! A pattern such as `/authorities/:id` is split on `/`. Literal segments are
//! escaped and matched verbatim; every `:name` segment becomes a capture that
//! matches exactly one non-empty, `/`-free path segment. The compiled regex is
//! anchored at both ends, so a pattern with N segments only ever matches paths
//! with N segments.
//!
//! Captured values are percent-decoded, except for an encoded slash (`%2F`),
//! which is left as is. A parameter value therefore never contains `/`.

use percent_encoding::percent_decode_str;
use regex::Regex;

/// Compiled recognizer for one route pattern.
#[derive(Debug, Clone)]
pub struct Matcher {
    regex: Regex,
    param_names: Vec<String>,
}

impl Matcher {
    /// Compile `pattern`. Any string is accepted; one that can never match a
    /// real path (no leading `/`, say) just produces a matcher that never fires.
    pub fn compile(pattern: &str) -> Self {
        let mut source = String::from("^");
        let mut param_names = Vec::new();

        for (i, segment) in pattern.split('/').enumerate() {
            if i > 0 {
                source.push('/');
            }
            match segment.strip_prefix(':') {
                Some(name) => {
                    param_names.push(name.to_string());
                    source.push_str("([^/]+)");
                }
                None => source.push_str(&regex::escape(segment)),
            }
        }
        source.push('$');

        // Every literal went through regex::escape and the only other pieces
        // are fixed groups, so the source is always a valid regex.
        let regex = Regex::new(&source).unwrap_or_else(|err| {
            unreachable!("escaped route pattern {pattern:?} failed to compile: {err}")
        });

        Self { regex, param_names }
    }

    /// Parameter names, in the order they appear in the pattern.
    pub fn param_names(&self) -> &[String] {
        &self.param_names
    }

    /// Try to match `path`. On success returns the decoded parameter values,
    /// paired with their names in declaration order.
    pub fn matches(&self, path: &str) -> Option<Vec<(String, String)>> {
        let captures = self.regex.captures(path)?;
        let values = self
            .param_names
            .iter()
            .zip(captures.iter().skip(1))
            .map(|(name, capture)| {
                let raw = capture.map(|m| m.as_str()).unwrap_or_default();
                (name.clone(), decode(raw))
            })
            .collect();
        Some(values)
    }
}

const ENCODED_SLASH: &str = "%2F";

fn decode(raw: &str) -> String {
    raw.replace("%2f", ENCODED_SLASH)
        .split(ENCODED_SLASH)
        .map(|part| percent_decode_str(part).decode_utf8_lossy().into_owned())
        .collect::<Vec<_>>()
        .join(ENCODED_SLASH)
}
