//! Pattern compilation and match collection

use regex::{Captures, Regex, RegexBuilder};
use serde::Serialize;
use tracing::debug;

use super::flags::Flags;

/// One successful match
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct Match {
    pub(crate) text: String,
    /// Offset of the match start, in characters
    pub(crate) index: usize,
    /// Capture groups 1..n; a group that did not participate is ""
    pub(crate) groups: Vec<String>,
    /// Byte offset of the match start
    #[serde(skip)]
    pub(crate) start: usize,
}

impl Match {
    /// Byte offset one past the match end
    pub(crate) fn end(&self) -> usize {
        self.start + self.text.len()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub(crate) struct Evaluation {
    pub(crate) compiled_ok: bool,
    pub(crate) error_message: Option<String>,
    pub(crate) matches: Vec<Match>,
}

impl Evaluation {
    fn failed(message: String) -> Self {
        Evaluation {
            compiled_ok: false,
            error_message: Some(message),
            matches: Vec::new(),
        }
    }
}

/// Compile `pattern` with `flags` and collect its matches in `text`.
///
/// An empty pattern yields no matches and no error. Syntax errors and bad
/// flags come back as `error_message`; this never fails or panics.
pub(crate) fn evaluate(pattern: &str, flags: &str, text: &str) -> Evaluation {
    if pattern.is_empty() {
        return Evaluation::default();
    }

    let parsed = match Flags::parse(flags) {
        Ok(f) => f,
        Err(message) => return Evaluation::failed(message),
    };

    let re = match compile(pattern, parsed) {
        Ok(re) => re,
        Err(e) => {
            debug!(pattern, flags, "pattern failed to compile");
            return Evaluation::failed(e.to_string());
        }
    };

    let matches = if parsed.global {
        scan_all(&re, text)
    } else {
        re.captures(text)
            .map(|caps| to_match(&caps, &mut CharIndex::default(), text))
            .into_iter()
            .collect()
    };
    debug!(pattern, flags, matches = matches.len(), "pattern evaluated");

    Evaluation {
        compiled_ok: true,
        error_message: None,
        matches,
    }
}

fn compile(pattern: &str, flags: Flags) -> Result<Regex, regex::Error> {
    RegexBuilder::new(pattern)
        .case_insensitive(flags.ignore_case)
        .multi_line(flags.multi_line)
        .dot_matches_new_line(flags.dot_all)
        .build()
}

/// Collect every match, resuming each search at the previous match end.
/// After a zero-length match the cursor steps over one character so the
/// scan always makes progress.
fn scan_all(re: &Regex, text: &str) -> Vec<Match> {
    let mut out = Vec::new();
    let mut chars = CharIndex::default();
    let mut cursor = 0;

    while cursor <= text.len() {
        let Some(caps) = re.captures_at(text, cursor) else {
            break;
        };
        let Some(whole) = caps.get(0) else {
            break;
        };
        out.push(to_match(&caps, &mut chars, text));

        cursor = if whole.is_empty() {
            match text[whole.end()..].chars().next() {
                Some(c) => whole.end() + c.len_utf8(),
                None => break,
            }
        } else {
            whole.end()
        };
    }

    out
}

fn to_match(caps: &Captures<'_>, chars: &mut CharIndex, text: &str) -> Match {
    let (start, matched) = caps
        .get(0)
        .map(|m| (m.start(), m.as_str()))
        .unwrap_or((0, ""));
    let groups = caps
        .iter()
        .skip(1)
        .map(|g| g.map(|m| m.as_str().to_string()).unwrap_or_default())
        .collect();
    Match {
        text: matched.to_string(),
        index: chars.char_offset(text, start),
        groups,
        start,
    }
}

/// Converts ascending byte offsets to character offsets without rescanning
/// the prefix for every match.
#[derive(Default)]
struct CharIndex {
    byte: usize,
    chars: usize,
}

impl CharIndex {
    fn char_offset(&mut self, text: &str, byte: usize) -> usize {
        if byte < self.byte {
            self.byte = 0;
            self.chars = 0;
        }
        self.chars += text[self.byte..byte].chars().count();
        self.byte = byte;
        self.chars
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_pattern_is_not_compiled() {
        let eval = evaluate("", "g", "anything");
        assert!(!eval.compiled_ok);
        assert!(eval.error_message.is_none());
        assert!(eval.matches.is_empty());
    }

    #[test]
    fn phone_number_scenario() {
        let eval = evaluate(r"\d{3}-\d{3}-\d{4}", "g", "call 123-456-7890 now");
        assert!(eval.compiled_ok);
        assert_eq!(eval.matches.len(), 1);
        let m = &eval.matches[0];
        assert_eq!(m.text, "123-456-7890");
        assert_eq!(m.index, 5);
        assert!(m.groups.is_empty());
    }

    #[test]
    fn syntax_error_surfaces_message() {
        let eval = evaluate("(unclosed", "g", "text");
        assert!(!eval.compiled_ok);
        assert!(eval.error_message.is_some());
        assert!(eval.matches.is_empty());
    }

    #[test]
    fn bad_flags_surface_message() {
        let eval = evaluate("a", "gq", "aaa");
        assert!(!eval.compiled_ok);
        assert_eq!(
            eval.error_message.as_deref(),
            Some("Invalid flags supplied to RegExp constructor 'gq'")
        );
        assert!(eval.matches.is_empty());
    }

    #[test]
    fn without_global_at_most_one_match() {
        for (pattern, text) in [("o", "foo boo"), ("x", "foo"), ("a*", "aaa"), ("", "x")] {
            assert!(evaluate(pattern, "", text).matches.len() <= 1);
            assert!(evaluate(pattern, "im", text).matches.len() <= 1);
        }
        let eval = evaluate("o", "", "foo boo");
        assert_eq!(eval.matches[0].index, 1);
    }

    #[test]
    fn global_collects_all() {
        let eval = evaluate("o+", "g", "foo boo o");
        let texts: Vec<_> = eval.matches.iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, ["oo", "oo", "o"]);
        let indexes: Vec<_> = eval.matches.iter().map(|m| m.index).collect();
        assert_eq!(indexes, [1, 5, 8]);
    }

    #[test]
    fn zero_width_matches_terminate_and_advance() {
        let eval = evaluate("a*", "g", "baac");
        let found: Vec<_> = eval
            .matches
            .iter()
            .map(|m| (m.text.as_str(), m.index))
            .collect();
        assert_eq!(found, [("", 0), ("aa", 1), ("", 3), ("", 4)]);
        for pair in eval.matches.windows(2) {
            assert!(pair[1].index > pair[0].index);
        }
    }

    #[test]
    fn zero_width_on_empty_text() {
        let eval = evaluate("a*", "g", "");
        assert_eq!(eval.matches.len(), 1);
        assert_eq!(eval.matches[0].index, 0);
    }

    #[test]
    fn zero_width_never_splits_multibyte_characters() {
        let eval = evaluate("x*", "g", "héé");
        let indexes: Vec<_> = eval.matches.iter().map(|m| m.index).collect();
        assert_eq!(indexes, [0, 1, 2, 3]);
    }

    #[test]
    fn index_counts_characters_not_bytes() {
        let eval = evaluate("b", "g", "ééb");
        assert_eq!(eval.matches[0].index, 2);
        assert_eq!(eval.matches[0].start, 4);
    }

    #[test]
    fn unmatched_groups_are_empty_strings() {
        let eval = evaluate(r"(a)|(b)", "g", "ab");
        assert_eq!(eval.matches[0].groups, ["a", ""]);
        assert_eq!(eval.matches[1].groups, ["", "b"]);
    }

    #[test]
    fn case_insensitive_flag() {
        assert!(evaluate("HELLO", "g", "hello").matches.is_empty());
        assert_eq!(evaluate("HELLO", "gi", "hello").matches.len(), 1);
    }

    #[test]
    fn multiline_flag_anchors_lines() {
        assert_eq!(evaluate("^x", "g", "x\nx").matches.len(), 1);
        assert_eq!(evaluate("^x", "gm", "x\nx").matches.len(), 2);
    }

    #[test]
    fn dot_all_flag_crosses_newlines() {
        assert!(evaluate("a.b", "g", "a\nb").matches.is_empty());
        assert_eq!(evaluate("a.b", "gs", "a\nb").matches.len(), 1);
    }

    #[test]
    fn word_boundary_respects_context_when_resuming() {
        let eval = evaluate(r"\bcat\b", "g", "cat concat cat");
        let indexes: Vec<_> = eval.matches.iter().map(|m| m.index).collect();
        assert_eq!(indexes, [0, 11]);
    }

    #[test]
    fn evaluation_is_deterministic() {
        let a = evaluate(r"(\w)(\d)?", "gi", "a1 b c3");
        let b = evaluate(r"(\w)(\d)?", "gi", "a1 b c3");
        assert_eq!(a, b);
    }
}
