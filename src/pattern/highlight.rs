use serde::Serialize;

use super::eval::Match;

/// A span of the source text, either outside any match or inside one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "lowercase")]
pub(crate) enum Segment<'a> {
    Literal(&'a str),
    Marked(&'a str),
}

impl<'a> Segment<'a> {
    pub(crate) fn as_str(&self) -> &'a str {
        match self {
            Segment::Literal(s) | Segment::Marked(s) => s,
        }
    }
}

/// Split `text` into literal and marked segments.
///
/// `matches` must come from evaluating against this same `text`, in
/// ascending order and without overlap.
pub(crate) fn highlight<'a>(text: &'a str, matches: &[Match]) -> Vec<Segment<'a>> {
    let mut parts = Vec::with_capacity(matches.len() * 2 + 1);
    let mut last = 0;

    for m in matches {
        if m.start > last {
            parts.push(Segment::Literal(&text[last..m.start]));
        }
        parts.push(Segment::Marked(&text[m.start..m.end()]));
        last = m.end();
    }

    if last < text.len() {
        parts.push(Segment::Literal(&text[last..]));
    }

    parts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::evaluate;

    fn rebuild(segments: &[Segment<'_>]) -> String {
        segments.iter().map(Segment::as_str).collect()
    }

    #[test]
    fn no_matches_is_single_literal() {
        let segments = highlight("plain text", &[]);
        assert_eq!(segments, [Segment::Literal("plain text")]);
    }

    #[test]
    fn empty_text_has_no_segments() {
        assert!(highlight("", &[]).is_empty());
    }

    #[test]
    fn alternates_literal_and_marked() {
        let text = "call 123-456-7890 now";
        let eval = evaluate(r"\d{3}-\d{3}-\d{4}", "g", text);
        let segments = highlight(text, &eval.matches);
        assert_eq!(
            segments,
            [
                Segment::Literal("call "),
                Segment::Marked("123-456-7890"),
                Segment::Literal(" now"),
            ]
        );
    }

    #[test]
    fn adjacent_matches_have_no_literal_between() {
        let text = "aab";
        let eval = evaluate("a", "g", text);
        let segments = highlight(text, &eval.matches);
        assert_eq!(
            segments,
            [
                Segment::Marked("a"),
                Segment::Marked("a"),
                Segment::Literal("b"),
            ]
        );
    }

    #[test]
    fn round_trip_reconstructs_text() {
        let cases = [
            (r"\w+", "g", "The quick brown fox."),
            ("a*", "g", "baac"),
            ("o", "", "foo"),
            (r"(\d+)", "g", "12 ab 345 ü 6"),
            ("x*", "g", "héé"),
            ("nomatch", "g", "some text"),
        ];
        for (pattern, flags, text) in cases {
            let eval = evaluate(pattern, flags, text);
            let segments = highlight(text, &eval.matches);
            assert_eq!(rebuild(&segments), text, "pattern {pattern:?}");
        }
    }
}
