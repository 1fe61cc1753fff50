use once_cell::sync::Lazy;
use regex::Regex;

/// `[`, one or more word characters, `]`, anywhere on the line.
static SECTION_HEADER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[(\w+)\]").unwrap());

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine<'a> {
    /// 1-based physical line number.
    pub number: usize,
    pub kind: LineKind<'a>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Blank, comment-only, or matching neither pattern.
    Ignored,
    Section {
        name: &'a str,
    },
    KeyValue {
        key: &'a str,
        value: &'a str,
    },
    /// A header and a `=` on the same line, e.g. `[A] x=1`. The header is
    /// applied first, then the whole line (bracket text included) is the key.
    SectionAndKeyValue {
        name: &'a str,
        key: &'a str,
        value: &'a str,
    },
}

/// Cut the line at the first `;`. There is no escape for a literal `;`.
#[inline]
#[cfg(feature = "perf_memchr")]
pub fn strip_comment(line: &str) -> &str {
    match memchr::memchr(b';', line.as_bytes()) {
        Some(idx) => &line[..idx],
        None => line,
    }
}

/// Cut the line at the first `;`. There is no escape for a literal `;`.
#[inline]
#[cfg(not(feature = "perf_memchr"))]
pub fn strip_comment(line: &str) -> &str {
    match line.find(';') {
        Some(idx) => &line[..idx],
        None => line,
    }
}

pub fn section_name(line: &str) -> Option<&str> {
    SECTION_HEADER
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Split at the first `=`; requires at least one character before it.
pub fn key_value(line: &str) -> Option<(&str, &str)> {
    match line.find('=') {
        Some(idx) if idx > 0 => Some((&line[..idx], &line[idx + 1..])),
        _ => None,
    }
}

pub fn scan<'a>(input: &'a str) -> Vec<ParsedLine<'a>> {
    iter(input).collect()
}

pub struct LineIter<'a> {
    rest: &'a str,
    number: usize,
}

pub fn iter<'a>(input: &'a str) -> LineIter<'a> {
    LineIter {
        rest: input,
        number: 0,
    }
}

impl<'a> Iterator for LineIter<'a> {
    type Item = ParsedLine<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }
        self.number += 1;
        let raw = match self.rest.find('\n') {
            Some(pos) => {
                let (line, remaining) = self.rest.split_at(pos + 1);
                self.rest = remaining;
                &line[..pos]
            }
            None => core::mem::take(&mut self.rest),
        };
        Some(parse_line(self.number, raw))
    }
}

fn parse_line(number: usize, raw: &str) -> ParsedLine<'_> {
    // Carriage returns are line-ending noise wherever they trail the content,
    // including just before a comment: `v\r\r\n` and `v\r;c` both end at `v`.
    let line = strip_comment(raw).trim_end_matches('\r');
    let kind = match (section_name(line), key_value(line)) {
        (None, None) => LineKind::Ignored,
        (Some(name), None) => LineKind::Section { name },
        (None, Some((key, value))) => LineKind::KeyValue { key, value },
        (Some(name), Some((key, value))) => LineKind::SectionAndKeyValue { name, key, value },
    };
    ParsedLine { number, kind }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comment_starts_at_first_semicolon() {
        assert_eq!(strip_comment("a=1 ; note"), "a=1 ");
        assert_eq!(strip_comment("a=\"x;y\""), "a=\"x");
        assert_eq!(strip_comment("; whole line"), "");
        assert_eq!(strip_comment("no comment"), "no comment");
    }

    #[test]
    fn header_needs_word_characters() {
        assert_eq!(section_name("[Section1]"), Some("Section1"));
        assert_eq!(section_name("  [snake_case]  "), Some("snake_case"));
        assert_eq!(section_name("[]"), None);
        assert_eq!(section_name("[two words]"), None);
        assert_eq!(section_name("[a.b]"), None);
    }

    #[test]
    fn key_needs_a_character_before_equals() {
        assert_eq!(key_value("a=1"), Some(("a", "1")));
        assert_eq!(key_value("a=b=c"), Some(("a", "b=c")));
        assert_eq!(key_value(" k = v "), Some((" k ", " v ")));
        assert_eq!(key_value("k="), Some(("k", "")));
        assert_eq!(key_value("=v"), None);
        assert_eq!(key_value("plain"), None);
    }

    #[test]
    fn lines_are_numbered_and_crlf_is_dropped() {
        let lines = scan("[S]\r\n\r\nx=1\r\n; c\nbad line");
        let kinds: Vec<_> = lines.iter().map(|l| (l.number, l.kind.clone())).collect();
        assert_eq!(
            kinds,
            vec![
                (1, LineKind::Section { name: "S" }),
                (2, LineKind::Ignored),
                (3, LineKind::KeyValue { key: "x", value: "1" }),
                (4, LineKind::Ignored),
                (5, LineKind::Ignored),
            ]
        );
    }

    #[test]
    fn every_trailing_carriage_return_is_dropped() {
        let lines = scan("[S]\r\r\nk=v\r\r\nc=w\r ; note\nm=a\rb\r\n");
        assert_eq!(lines[1].kind, LineKind::KeyValue { key: "k", value: "v" });
        assert_eq!(lines[2].kind, LineKind::KeyValue { key: "c", value: "w\r " });
        assert_eq!(lines[3].kind, LineKind::KeyValue { key: "m", value: "a\rb" });
    }

    #[test]
    fn header_and_key_on_one_line() {
        let lines = scan("[A] x=1");
        assert_eq!(
            lines[0].kind,
            LineKind::SectionAndKeyValue {
                name: "A",
                key: "[A] x",
                value: "1"
            }
        );
    }

    #[test]
    fn comment_hides_equals_and_headers() {
        let lines = scan("; [S]\nnote ; a=b\n");
        assert!(lines.iter().all(|l| l.kind == LineKind::Ignored));
        assert_eq!(lines.len(), 2);
    }
}
