use crate::parsing::{
    directive::DelimiterConfig,
    rope::{lines::LineRef, span::Span},
};

/// What a single line is under the active delimiters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// Empty or whitespace only.
    Blank,
    /// Starts with the config prefix.
    Directive,
    /// Block prefix followed by one or more names.
    BlockStart {
        names: Vec<String>,
        comment: Option<String>,
    },
    /// Block prefix with no name: closes the open block.
    BlockEnd { comment: Option<String> },
    /// Anything else.
    Text,
}

/// Classification of a single line containing only local facts.
#[derive(Debug, Clone)]
pub struct LineClass {
    /// 1-based line number.
    pub number: usize,
    /// Full byte span of this line in the rope.
    pub line: Span,
    /// Line content without its terminator.
    pub text: String,
    pub kind: LineKind,
}

/// Classifies individual lines for the block splitter.
pub struct LngLineClassifier;

impl LngLineClassifier {
    /// Classifies a line against `config`.
    ///
    /// Before the opening directive has been read there is no config; every
    /// non-blank line then comes back as [`LineKind::Text`] and the splitter
    /// decides whether it is the opening directive.
    pub fn classify(&self, lr: &LineRef, config: Option<&DelimiterConfig>) -> LineClass {
        let text = lr.content();
        let kind = match config {
            _ if text.trim().is_empty() => LineKind::Blank,
            None => LineKind::Text,
            Some(config) => Self::kind_under(text, config),
        };

        LineClass {
            number: lr.number,
            line: lr.span,
            text: text.to_string(),
            kind,
        }
    }

    fn kind_under(text: &str, config: &DelimiterConfig) -> LineKind {
        if config.is_directive(text) {
            return LineKind::Directive;
        }
        let Some(rest) = config.strip_block_prefix(text) else {
            return LineKind::Text;
        };

        let (names_part, comment) = match rest.split_once(config.comment_marker()) {
            Some((names, comment)) => {
                let comment = comment.trim();
                (names, (!comment.is_empty()).then(|| comment.to_string()))
            }
            None => (rest, None),
        };
        let names: Vec<String> = names_part.split_whitespace().map(str::to_string).collect();

        if names.is_empty() {
            LineKind::BlockEnd { comment }
        } else {
            LineKind::BlockStart { names, comment }
        }
    }
}
