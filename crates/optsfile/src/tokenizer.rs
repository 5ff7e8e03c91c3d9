//! Line tokenizer: raw `.of` text → ordered [`Record`]s.
//!
//! Each non-blank line becomes one record holding its nesting depth and its
//! space-separated tokens. Depth is the number of indentation units (one tab,
//! or a run of `indent_width` spaces) repeated at the start of the line.
//!
//! ```text
//! "\t\tfoo: bar"   →  Record { depth: 2, tokens: ["foo:", "bar"] }
//! "\t\tspam:"      →  Record { depth: 2, tokens: ["spam"] }
//! ```
//!
//! The tokenizer only checks what can be seen on a single line (plus the
//! file-wide indentation style). Depth transitions and token counts are
//! checked by [`TreeBuilder`](crate::TreeBuilder).

use tracing::{debug, trace};

use crate::config::TokenizerConfig;
use crate::error::ParseError;

/// One tokenized, non-blank source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// 1-based line number in the source text.
    pub line: usize,
    /// Number of leading indentation units.
    pub depth: usize,
    /// Space-separated content. A subcategory header has a single token with
    /// its trailing colon removed; an option line keeps its raw `name:` token
    /// followed by the value.
    pub tokens: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum IndentStyle {
    Tabs,
    Spaces,
}

impl IndentStyle {
    fn describe(self) -> &'static str {
        match self {
            Self::Tabs => "tabs",
            Self::Spaces => "spaces",
        }
    }
}

/// Converts lines of `.of` text into [`Record`]s.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    space_unit: String,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(&TokenizerConfig::default())
    }
}

impl Tokenizer {
    /// Create a tokenizer. An `indent_width` of zero is treated as one.
    pub fn new(config: &TokenizerConfig) -> Self {
        Self {
            space_unit: " ".repeat(config.indent_width.max(1)),
        }
    }

    /// Tokenize a whole document held in memory.
    pub fn tokenize_str(&self, text: &str) -> Result<Vec<Record>, ParseError> {
        self.tokenize(text.lines())
    }

    /// Tokenize an ordered sequence of raw lines. Line terminators may be
    /// present or already stripped. Blank lines are skipped but still counted
    /// for line numbers.
    pub fn tokenize<I, S>(&self, lines: I) -> Result<Vec<Record>, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut style = None;
        let mut records = Vec::new();

        for (idx, raw) in lines.into_iter().enumerate() {
            if let Some(record) = self.tokenize_line(idx + 1, raw.as_ref(), &mut style)? {
                trace!(
                    line = record.line,
                    depth = record.depth,
                    tokens = ?record.tokens,
                    "tokenized line"
                );
                records.push(record);
            }
        }

        debug!(records = records.len(), "tokenized options text");
        Ok(records)
    }

    fn tokenize_line(
        &self,
        line: usize,
        raw: &str,
        style: &mut Option<IndentStyle>,
    ) -> Result<Option<Record>, ParseError> {
        let text = raw.trim_end();
        if text.is_empty() {
            return Ok(None);
        }

        let (depth, rest) = match self.classify(line, text)? {
            None => (0, text),
            Some((line_style, unit)) => {
                let (depth, rest) = strip_units(text, unit);
                match *style {
                    None => *style = Some(line_style),
                    Some(file_style) if file_style != line_style => {
                        return Err(ParseError::format(
                            line,
                            format!(
                                "indented with {} but the file is indented with {}",
                                line_style.describe(),
                                file_style.describe()
                            ),
                        ));
                    }
                    Some(_) => {}
                }
                (depth, rest)
            }
        };

        if rest.starts_with([' ', '\t']) {
            return Err(ParseError::format(line, "partial indentation"));
        }

        let mut tokens: Vec<String> = rest.split(' ').map(str::to_string).collect();
        match tokens.as_mut_slice() {
            [header] if header.ends_with(':') => {
                header.pop();
            }
            [header] => {
                return Err(ParseError::format(
                    line,
                    format!("subcategory {header:?} must end with ':'"),
                ));
            }
            [name, _value] if !name.ends_with(':') => {
                return Err(ParseError::format(
                    line,
                    format!("option name {name:?} must end with ':'"),
                ));
            }
            _ => {}
        }

        Ok(Some(Record {
            line,
            depth,
            tokens,
        }))
    }

    /// Pick the indentation unit from the leading whitespace of `text`.
    /// Returns `None` for an unindented line.
    fn classify<'a>(
        &'a self,
        line: usize,
        text: &str,
    ) -> Result<Option<(IndentStyle, &'a str)>, ParseError> {
        if text.starts_with('\t') {
            Ok(Some((IndentStyle::Tabs, "\t")))
        } else if text.starts_with(self.space_unit.as_str()) {
            Ok(Some((IndentStyle::Spaces, self.space_unit.as_str())))
        } else if text.starts_with(' ') {
            Err(ParseError::format(
                line,
                format!(
                    "leading spaces are not a multiple of {}",
                    self.space_unit.len()
                ),
            ))
        } else {
            Ok(None)
        }
    }
}

/// Count how many times `unit` repeats at the start of `text` and return the
/// remainder after it.
fn strip_units<'a>(text: &'a str, unit: &str) -> (usize, &'a str) {
    let mut depth = 0;
    let mut rest = text;
    while let Some(stripped) = rest.strip_prefix(unit) {
        rest = stripped;
        depth += 1;
    }
    (depth, rest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record(line: usize, depth: usize, tokens: &[&str]) -> Record {
        Record {
            line,
            depth,
            tokens: tokens.iter().map(|t| t.to_string()).collect(),
        }
    }

    fn sample_text() -> Vec<&'static str> {
        vec![
            "Car:\n",
            "\tMake: Honda\n",
            "\tModel: Accord",
            "\n",
            "Bike:\n",
            "\tType: Mountain\n",
        ]
    }

    #[test]
    fn test_tokenize_sample() {
        let records = Tokenizer::default().tokenize(sample_text()).unwrap();
        assert_eq!(
            records,
            vec![
                record(1, 0, &["Car"]),
                record(2, 1, &["Make:", "Honda"]),
                record(3, 1, &["Model:", "Accord"]),
                record(5, 0, &["Bike"]),
                record(6, 1, &["Type:", "Mountain"]),
            ]
        );
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let records = Tokenizer::default()
            .tokenize(["\n", "   \n", "\t\n", "A: b\n", ""])
            .unwrap();
        assert_eq!(records, vec![record(4, 0, &["A:", "b"])]);
    }

    #[test]
    fn test_depth_counts_tabs() {
        let records = Tokenizer::default()
            .tokenize(["\t\tfoo: bar", "\t\tspam:", "\t\t\tturtle: duck"])
            .unwrap();
        let depths: Vec<usize> = records.iter().map(|r| r.depth).collect();
        assert_eq!(depths, vec![2, 2, 3]);
        assert_eq!(records[1].tokens, vec!["spam"]);
    }

    #[test]
    fn test_depth_counts_space_runs() {
        let records = Tokenizer::default()
            .tokenize(["Blah:", "    Foo:", "        Bar: baz"])
            .unwrap();
        assert_eq!(
            records,
            vec![
                record(1, 0, &["Blah"]),
                record(2, 1, &["Foo"]),
                record(3, 2, &["Bar:", "baz"]),
            ]
        );
    }

    #[test]
    fn test_custom_indent_width() {
        let tokenizer = Tokenizer::new(&TokenizerConfig::default().with_indent_width(2));
        let records = tokenizer.tokenize(["A:", "  B:", "    c: d"]).unwrap();
        let depths: Vec<usize> = records.iter().map(|r| r.depth).collect();
        assert_eq!(depths, vec![0, 1, 2]);
    }

    #[test]
    fn test_tab_inside_value_does_not_indent() {
        let records = Tokenizer::default().tokenize(["Key: a\tb"]).unwrap();
        assert_eq!(records, vec![record(1, 0, &["Key:", "a\tb"])]);
    }

    #[test]
    fn test_single_leading_space_is_format_error() {
        let err = Tokenizer::default().tokenize([" Blah:"]).unwrap_err();
        assert!(matches!(err, ParseError::Format { line: 1, .. }));
    }

    #[test]
    fn test_partial_space_unit_is_format_error() {
        let err = Tokenizer::default()
            .tokenize(["A:", "      b: c"])
            .unwrap_err();
        assert!(matches!(err, ParseError::Format { line: 2, .. }));
    }

    #[test]
    fn test_tab_after_spaces_is_format_error() {
        let err = Tokenizer::default()
            .tokenize(["A:", "    \tb: c"])
            .unwrap_err();
        assert!(matches!(err, ParseError::Format { line: 2, .. }));
    }

    #[test]
    fn test_mixed_indentation_across_lines_is_format_error() {
        let err = Tokenizer::default()
            .tokenize(["A:", "\tb: c", "D:", "    e: f"])
            .unwrap_err();
        match err {
            ParseError::Format { line, reason } => {
                assert_eq!(line, 4);
                assert!(reason.contains("tabs"), "{reason}");
            }
            other => panic!("expected format error, got {other:?}"),
        }
    }

    #[test]
    fn test_header_without_colon_is_format_error() {
        let err = Tokenizer::default().tokenize(["Line"]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "line 1: malformed line: subcategory \"Line\" must end with ':'"
        );
    }

    #[test]
    fn test_header_colon_is_removed() {
        let records = Tokenizer::default().tokenize(["Line:"]).unwrap();
        assert_eq!(records[0].tokens, vec!["Line"]);
    }

    #[test]
    fn test_option_name_without_colon_is_format_error() {
        let err = Tokenizer::default().tokenize(["Make Honda"]).unwrap_err();
        assert!(matches!(err, ParseError::Format { line: 1, .. }));
    }

    #[test]
    fn test_extra_tokens_are_passed_through() {
        let records = Tokenizer::default().tokenize(["Name: John Smith"]).unwrap();
        assert_eq!(records[0].tokens, vec!["Name:", "John", "Smith"]);
    }

    #[test]
    fn test_zero_indent_width_acts_as_one() {
        let tokenizer = Tokenizer::new(&TokenizerConfig::default().with_indent_width(0));
        let records = tokenizer.tokenize(["A:", " b: c"]).unwrap();
        assert_eq!(records[1].depth, 1);
    }

    #[test]
    fn test_crlf_line_endings() {
        let records = Tokenizer::default()
            .tokenize_str("Car:\r\n\tMake: Honda\r\n")
            .unwrap();
        assert_eq!(
            records,
            vec![record(1, 0, &["Car"]), record(2, 1, &["Make:", "Honda"])]
        );
    }
}
