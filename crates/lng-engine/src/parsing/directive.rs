//! # Directives
//!
//! A directive line declares the five delimiter tokens used by every line
//! after it, up to the next directive:
//!
//! ```text
//! !!! === $ $ ; free commentary
//! ^   ^   ^ ^ ^
//! |   |   | | comment marker
//! |   |   | variable end
//! |   |   variable start
//! |   block prefix
//! config prefix (fixed by the opening directive)
//! ```

use crate::error::{ConfigError, TokenError};

pub const DEFAULT_CONFIG_PREFIX: &str = "!!!";
pub const DEFAULT_BLOCK_PREFIX: &str = "===";
pub const DEFAULT_VAR_START: &str = "$";
pub const DEFAULT_VAR_END: &str = "$";
pub const DEFAULT_COMMENT_MARKER: &str = ";";

/// The delimiter tokens active for a stretch of the resource.
///
/// Never mutated: every directive yields a fresh value with the next
/// `version`, so blocks captured earlier keep the tokens they were written
/// with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelimiterConfig {
    config_prefix: String,
    block_prefix: String,
    var_start: String,
    var_end: String,
    comment_marker: String,
    version: u32,
}

impl Default for DelimiterConfig {
    fn default() -> Self {
        Self {
            config_prefix: DEFAULT_CONFIG_PREFIX.to_string(),
            block_prefix: DEFAULT_BLOCK_PREFIX.to_string(),
            var_start: DEFAULT_VAR_START.to_string(),
            var_end: DEFAULT_VAR_END.to_string(),
            comment_marker: DEFAULT_COMMENT_MARKER.to_string(),
            version: 0,
        }
    }
}

impl DelimiterConfig {
    /// Builds a validated token set.
    ///
    /// Rules:
    /// - every token is non-empty and free of whitespace
    /// - no two tokens are equal, except that `var_start` and `var_end` may
    ///   be the same (`$name$`)
    /// - neither line prefix is a prefix of the other
    pub fn new(
        config_prefix: impl Into<String>,
        block_prefix: impl Into<String>,
        var_start: impl Into<String>,
        var_end: impl Into<String>,
        comment_marker: impl Into<String>,
    ) -> Result<Self, TokenError> {
        let config = Self {
            config_prefix: config_prefix.into(),
            block_prefix: block_prefix.into(),
            var_start: var_start.into(),
            var_end: var_end.into(),
            comment_marker: comment_marker.into(),
            version: 0,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn config_prefix(&self) -> &str {
        &self.config_prefix
    }

    pub fn block_prefix(&self) -> &str {
        &self.block_prefix
    }

    pub fn var_start(&self) -> &str {
        &self.var_start
    }

    pub fn var_end(&self) -> &str {
        &self.var_end
    }

    pub fn comment_marker(&self) -> &str {
        &self.comment_marker
    }

    /// 0 for the opening directive, +1 for every directive after it.
    pub fn version(&self) -> u32 {
        self.version
    }

    /// Whether `line` is a directive under this configuration.
    pub fn is_directive(&self, line: &str) -> bool {
        strip_word(line, &self.config_prefix).is_some()
    }

    /// Text after the block prefix when `line` is a block marker line.
    pub fn strip_block_prefix<'a>(&self, line: &'a str) -> Option<&'a str> {
        strip_word(line, &self.block_prefix)
    }

    /// The tokens as they would be written after the config prefix.
    pub fn describe(&self) -> String {
        format!(
            "{} {} {} {}",
            self.block_prefix, self.var_start, self.var_end, self.comment_marker
        )
    }

    fn roles(&self) -> [(&'static str, &str); 5] {
        [
            ("config prefix", self.config_prefix.as_str()),
            ("block prefix", self.block_prefix.as_str()),
            ("variable start", self.var_start.as_str()),
            ("variable end", self.var_end.as_str()),
            ("comment marker", self.comment_marker.as_str()),
        ]
    }

    fn validate(&self) -> Result<(), TokenError> {
        let roles = self.roles();

        for (role, token) in roles {
            if token.is_empty() || token.chars().any(char::is_whitespace) {
                return Err(TokenError::Invalid {
                    role,
                    token: token.to_string(),
                });
            }
        }

        for (i, (first, a)) in roles.iter().enumerate() {
            for (second, b) in &roles[i + 1..] {
                let var_pair = *first == "variable start" && *second == "variable end";
                if a == b && !var_pair {
                    return Err(conflict(*first, a, *second, b));
                }
            }
        }

        let (cp, bp) = (&self.config_prefix, &self.block_prefix);
        if cp.starts_with(bp.as_str()) || bp.starts_with(cp.as_str()) {
            return Err(conflict("config prefix", cp, "block prefix", bp));
        }

        Ok(())
    }
}

fn conflict(first: &'static str, a: &str, second: &'static str, b: &str) -> TokenError {
    TokenError::Conflict {
        first,
        first_token: a.to_string(),
        second,
        second_token: b.to_string(),
    }
}

/// Returns the rest of `line` when it starts with `word` followed by
/// whitespace or the end of the line.
pub(crate) fn strip_word<'a>(line: &'a str, word: &str) -> Option<&'a str> {
    let rest = line.strip_prefix(word)?;
    match rest.chars().next() {
        None => Some(rest),
        Some(c) if c.is_whitespace() => Some(rest),
        Some(_) => None,
    }
}

/// Parses the opening directive of a resource.
///
/// Its first word becomes the config prefix for the rest of the file.
pub fn parse_opening_directive(line: &str, line_no: usize) -> Result<DelimiterConfig, ConfigError> {
    let mut words = line.split_whitespace();
    let Some(prefix) = words.next() else {
        return Err(ConfigError::MissingDirective { line: line_no });
    };
    let tokens: Vec<&str> = words.take(4).collect();

    if tokens.len() < 4 {
        // Only blame the token count when the line clearly tried to be a directive.
        if prefix == DEFAULT_CONFIG_PREFIX {
            return Err(ConfigError::TooFewTokens {
                line: line_no,
                prefix: prefix.to_string(),
                found: tokens.len(),
            });
        }
        return Err(ConfigError::MissingDirective { line: line_no });
    }

    let config = DelimiterConfig::new(prefix, tokens[0], tokens[1], tokens[2], tokens[3])
        .map_err(|source| ConfigError::InvalidTokens {
            line: line_no,
            source,
        })?;
    log::debug!(
        "line {line_no}: opening directive `{}` {}",
        config.config_prefix,
        config.describe()
    );
    Ok(config)
}

/// Parses a directive that appears after the opening one.
///
/// The config prefix stays the one the file opened with; words after the
/// fourth token are commentary and ignored.
pub fn parse_directive(
    line: &str,
    line_no: usize,
    current: &DelimiterConfig,
) -> Result<DelimiterConfig, ConfigError> {
    let rest = strip_word(line, &current.config_prefix)
        .ok_or(ConfigError::MissingDirective { line: line_no })?;
    let tokens: Vec<&str> = rest.split_whitespace().take(4).collect();

    if tokens.len() < 4 {
        return Err(ConfigError::TooFewTokens {
            line: line_no,
            prefix: current.config_prefix.clone(),
            found: tokens.len(),
        });
    }

    let mut config = DelimiterConfig::new(
        current.config_prefix.as_str(),
        tokens[0],
        tokens[1],
        tokens[2],
        tokens[3],
    )
    .map_err(|source| ConfigError::InvalidTokens {
        line: line_no,
        source,
    })?;
    config.version = current.version + 1;

    log::debug!(
        "line {line_no}: delimiters v{} `{}` -> `{}`",
        config.version,
        current.describe(),
        config.describe()
    );
    Ok(config)
}
