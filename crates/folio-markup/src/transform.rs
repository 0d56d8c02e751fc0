//! Markup to HTML transformer.
//!
//! The dialect knows four constructs: `#` headers at line starts, `` `code` ``
//! spans, `~~strikethrough~~` spans and `[text](href)` links. Everything else
//! is copied through unchanged. Header text, strikethrough text and link text
//! are transformed recursively, so `` [`x`](h) `` renders the code span inside
//! the anchor.

use std::fmt;

/// Kind of span that was opened but never closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    /// `` ` `` without a closing backtick
    Code,
    /// `~~` without a closing `~~`
    Strikethrough,
    /// `[` without a closing `]`
    LinkText,
    /// `](` without a closing `)`
    LinkHref,
}

impl fmt::Display for SpanKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Code => "code span",
            Self::Strikethrough => "strikethrough",
            Self::LinkText => "link text",
            Self::LinkHref => "link href",
        };
        f.write_str(name)
    }
}

/// Errors that can occur when transforming markup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MarkupError {
    #[error("Unterminated {kind} opened at character {offset}")]
    UnterminatedSpan { kind: SpanKind, offset: usize },
}

/// Transform a document body into an HTML fragment.
pub fn transform(body: &str) -> Result<String, MarkupError> {
    let chars: Vec<char> = body.chars().collect();
    transform_range(&chars, 0, chars.len())
}

/// Transform the characters in `chars[start..end]`.
///
/// Offsets reported in errors are indices into `chars`, not into the range.
pub fn transform_range(chars: &[char], start: usize, end: usize) -> Result<String, MarkupError> {
    Scanner::new(chars, start, end).run()
}

/// Derive a header id by keeping only the letters and digits of `text`.
pub fn header_id(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_alphabetic() || c.is_ascii_digit())
        .collect()
}

/// A cursor over one bounded range of the character stream.
struct Scanner<'a> {
    chars: &'a [char],
    start: usize,
    end: usize,
    out: String,
}

impl<'a> Scanner<'a> {
    fn new(chars: &'a [char], start: usize, end: usize) -> Self {
        let end = end.min(chars.len());
        Self {
            chars,
            start: start.min(end),
            end,
            out: String::new(),
        }
    }

    fn run(mut self) -> Result<String, MarkupError> {
        let mut i = self.start;

        while i < self.end {
            let c = self.chars[i];

            if c == '#' && self.at_line_start(i) {
                i = self.header(i)?;
                continue;
            }

            if c == '~' && i + 1 < self.end && self.chars[i + 1] == '~' {
                i = self.strikethrough(i)?;
                continue;
            }

            if c == '`' {
                i = self.code(i)?;
                continue;
            }

            if c == '[' {
                if let Some(next) = self.link(i)? {
                    i = next;
                    continue;
                }
            }

            self.out.push(c);
            i += 1;
        }

        Ok(self.out)
    }

    fn at_line_start(&self, i: usize) -> bool {
        i == self.start || self.chars[i - 1] == '\n'
    }

    /// Position of the first `target` in `from..end`.
    fn find(&self, from: usize, target: char) -> Option<usize> {
        (from..self.end).find(|&j| self.chars[j] == target)
    }

    fn nested(&self, start: usize, end: usize) -> Result<String, MarkupError> {
        transform_range(self.chars, start, end)
    }

    /// Emit `<hN id="...">...</hN>`; the line terminator is left for the caller.
    fn header(&mut self, mut i: usize) -> Result<usize, MarkupError> {
        let mut level = 0;
        while i < self.end && self.chars[i] == '#' {
            level += 1;
            i += 1;
        }

        let text_start = i;
        while i < self.end && !matches!(self.chars[i], '\r' | '\n') {
            i += 1;
        }

        let text = self.nested(text_start, i)?;
        let text = text.trim();
        let id = header_id(text);

        self.out.push_str(&format!("<h{level} id=\"{id}\">{text}</h{level}>"));

        Ok(i)
    }

    fn strikethrough(&mut self, open: usize) -> Result<usize, MarkupError> {
        let inner_start = open + 2;
        let close = (inner_start..self.end.saturating_sub(1))
            .find(|&j| self.chars[j] == '~' && self.chars[j + 1] == '~')
            .ok_or(MarkupError::UnterminatedSpan {
                kind: SpanKind::Strikethrough,
                offset: open,
            })?;

        let text = self.nested(inner_start, close)?;
        self.out.push_str("<s>");
        self.out.push_str(text.trim());
        self.out.push_str("</s>");

        Ok(close + 2)
    }

    /// Code spans are literal: the inner text is not transformed.
    fn code(&mut self, open: usize) -> Result<usize, MarkupError> {
        let close = self
            .find(open + 1, '`')
            .ok_or(MarkupError::UnterminatedSpan {
                kind: SpanKind::Code,
                offset: open,
            })?;

        self.out.push_str("<code>");
        self.out.extend(&self.chars[open + 1..close]);
        self.out.push_str("</code>");

        Ok(close + 1)
    }

    /// Returns `None` when `[...]` is not followed by `(`, leaving the bracket
    /// to be copied literally.
    fn link(&mut self, open: usize) -> Result<Option<usize>, MarkupError> {
        let text_end = self
            .find(open + 1, ']')
            .ok_or(MarkupError::UnterminatedSpan {
                kind: SpanKind::LinkText,
                offset: open,
            })?;

        let href_open = text_end + 1;
        if href_open >= self.end || self.chars[href_open] != '(' {
            return Ok(None);
        }

        let href_end = self
            .find(href_open + 1, ')')
            .ok_or(MarkupError::UnterminatedSpan {
                kind: SpanKind::LinkHref,
                offset: href_open,
            })?;

        let text = self.nested(open + 1, text_end)?;
        let href: String = self.chars[href_open + 1..href_end].iter().collect();

        self.out.push_str(&format!("<a href=\"{href}\">{text}</a>"));

        Ok(Some(href_end + 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn html(source: &str) -> String {
        transform(source).unwrap()
    }

    #[test]
    fn renders_header_with_id() {
        assert_eq!(html("# Hey\n"), "<h1 id=\"Hey\">Hey</h1>\n");
    }

    #[test]
    fn counts_header_level() {
        assert_eq!(html("### Deep dive\nbody"), "<h3 id=\"Deepdive\">Deep dive</h3>\nbody");
        assert_eq!(html("####### Seven\n"), "<h7 id=\"Seven\">Seven</h7>\n");
    }

    #[test]
    fn header_only_at_line_start() {
        assert_eq!(html("issue #4\n"), "issue #4\n");
        assert_eq!(html("intro\n## Next\n"), "intro\n<h2 id=\"Next\">Next</h2>\n");
    }

    #[test]
    fn header_stops_at_carriage_return() {
        assert_eq!(html("# Windows\r\n"), "<h1 id=\"Windows\">Windows</h1>\r\n");
    }

    #[test]
    fn header_at_end_of_body() {
        assert_eq!(html("text\n# Last"), "text\n<h1 id=\"Last\">Last</h1>");
    }

    #[test]
    fn header_id_drops_punctuation_and_spaces() {
        assert_eq!(header_id("Hello, World! 2"), "HelloWorld2");
        assert_eq!(html("# Hello, World! 2\n"), "<h1 id=\"HelloWorld2\">Hello, World! 2</h1>\n");
    }

    #[test]
    fn header_id_keeps_non_ascii_letters() {
        assert_eq!(html("# Café au lait\n"), "<h1 id=\"Caféaulait\">Café au lait</h1>\n");
    }

    #[test]
    fn header_id_drops_numeric_symbols() {
        assert_eq!(header_id("x² ½ cup 3"), "xcup3");
        assert_eq!(html("# x²\n"), "<h1 id=\"x\">x²</h1>\n");
    }

    #[test]
    fn header_recognised_at_start_of_nested_range() {
        assert_eq!(html("[# a](h)"), "<a href=\"h\"><h1 id=\"a\">a</h1></a>");
        assert_eq!(html("~~# a~~"), "<s><h1 id=\"a\">a</h1></s>");
    }

    #[test]
    fn header_id_may_be_empty() {
        assert_eq!(html("# !!!\n"), "<h1 id=\"\">!!!</h1>\n");
        assert_eq!(html("#\n"), "<h1 id=\"\"></h1>\n");
    }

    #[test]
    fn header_id_includes_letters_of_nested_tags() {
        assert_eq!(
            html("# Using `git`\n"),
            "<h1 id=\"Usingcodegitcode\">Using <code>git</code></h1>\n"
        );
    }

    #[test]
    fn renders_strikethrough_and_trims() {
        assert_eq!(html("~~ a~~"), "<s>a</s>");
        assert_eq!(html("was ~~wrong~~ right"), "was <s>wrong</s> right");
    }

    #[test]
    fn strikethrough_transforms_inner_markup() {
        assert_eq!(html("~~`old`~~"), "<s><code>old</code></s>");
    }

    #[test]
    fn single_tilde_is_literal() {
        assert_eq!(html("~5 minutes"), "~5 minutes");
        assert_eq!(html("end~"), "end~");
    }

    #[test]
    fn renders_code_span_verbatim() {
        assert_eq!(html("run `ls ~~ -la`"), "run <code>ls ~~ -la</code>");
        assert_eq!(html("`[a](b)`"), "<code>[a](b)</code>");
    }

    #[test]
    fn renders_link() {
        assert_eq!(
            html("see [the docs](https://example.com/a_b)."),
            "see <a href=\"https://example.com/a_b\">the docs</a>."
        );
    }

    #[test]
    fn link_text_containing_code() {
        assert_eq!(html("[`hello`](google.com)"), "<a href=\"google.com\"><code>hello</code></a>");
        assert_eq!(html("[`x`](h)"), "<a href=\"h\"><code>x</code></a>");
    }

    #[test]
    fn link_href_is_not_transformed() {
        assert_eq!(html("[x](a~~b~~`c`)"), "<a href=\"a~~b~~`c`\">x</a>");
    }

    #[test]
    fn bracket_without_href_is_literal() {
        assert_eq!(html("[foo] bar"), "[foo] bar");
        assert_eq!(html("[foo]"), "[foo]");
    }

    #[test]
    fn multibyte_characters_are_single_units() {
        assert_eq!(html("`é`~~ü~~"), "<code>é</code><s>ü</s>");
        assert_eq!(html("[日本](語)"), "<a href=\"語\">日本</a>");
    }

    #[test]
    fn fragment_without_markup_is_unchanged() {
        let fragment = "<h1 id=\"Hey\">Hey</h1>\n<p>plain text, (parens) and ~tilde</p>";
        assert_eq!(html(fragment), fragment);
        assert_eq!(html(&html(fragment)), fragment);
    }

    #[test]
    fn unterminated_code_span_fails() {
        let err = transform("a `b").unwrap_err();
        assert_eq!(
            err,
            MarkupError::UnterminatedSpan {
                kind: SpanKind::Code,
                offset: 2
            }
        );
    }

    #[test]
    fn unterminated_strikethrough_fails() {
        assert!(matches!(
            transform("~~gone~"),
            Err(MarkupError::UnterminatedSpan {
                kind: SpanKind::Strikethrough,
                offset: 0
            })
        ));
    }

    #[test]
    fn unterminated_link_fails() {
        assert!(matches!(
            transform("[text"),
            Err(MarkupError::UnterminatedSpan {
                kind: SpanKind::LinkText,
                ..
            })
        ));
        assert!(matches!(
            transform("[text](href"),
            Err(MarkupError::UnterminatedSpan {
                kind: SpanKind::LinkHref,
                offset: 6
            })
        ));
    }

    #[test]
    fn nested_error_reports_absolute_offset() {
        let err = transform("ok [`x](h)").unwrap_err();
        assert_eq!(
            err,
            MarkupError::UnterminatedSpan {
                kind: SpanKind::Code,
                offset: 4
            }
        );
    }

    #[test]
    fn transforms_a_bounded_range() {
        let chars: Vec<char> = "xx# Title\nyy".chars().collect();
        assert_eq!(transform_range(&chars, 2, 9).unwrap(), "<h1 id=\"Title\">Title</h1>");
    }
}
