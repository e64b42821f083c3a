#![forbid(unsafe_code)]

//! Line wrapping over character offsets.
//!
//! Wrapping produces [`LineSpan`]s rather than new strings: each line is a
//! half-open interval of `char` offsets into the original text, which is the
//! same coordinate space style ranges use. A renderer can intersect lines
//! with [`StyledRun`](crate::StyledRun)s without re-measuring.
//!
//! Breaks always fall on grapheme cluster boundaries. Existing `\n` always
//! start a new line. Whitespace at a break is dropped. Indentation at the
//! start of a paragraph is kept as long as the first word still fits beside
//! it; otherwise it is dropped.
//!
//! # Example
//! ```
//! use styled_label_text::{CellMetrics, WrapMode, wrap_lines};
//!
//! let text = "Hello world foo bar";
//! let lines = wrap_lines(text, Some(10), WrapMode::Word, &CellMetrics::TERMINAL);
//! let rendered: Vec<&str> = lines.iter().map(|l| l.slice(text)).collect();
//! assert_eq!(rendered, vec!["Hello", "world foo", "bar"]);
//! ```

use crate::metrics::TextMetrics;
use unicode_segmentation::UnicodeSegmentation;

/// Text wrapping mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum WrapMode {
    /// Wrap at word boundaries; a word wider than the line gets its own line.
    Word,
    /// Wrap at any grapheme boundary.
    Char,
    /// Word wrap with grapheme fallback for words wider than the line.
    #[default]
    WordChar,
}

impl WrapMode {
    /// Parse the names used in configuration (`word`, `char`, `word-char`).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "word" => Some(Self::Word),
            "char" => Some(Self::Char),
            "word-char" | "wordchar" | "word_char" => Some(Self::WordChar),
            _ => None,
        }
    }
}

/// One laid-out line: `chars [start, end)` of the text, `width` pixels wide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LineSpan {
    pub start: usize,
    pub end: usize,
    pub width: u32,
}

impl LineSpan {
    /// Number of characters on the line.
    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The text of this line within `text`.
    ///
    /// Offsets past the end of `text` are clipped.
    pub fn slice<'a>(&self, text: &'a str) -> &'a str {
        let byte_at = |offset: usize| {
            text.char_indices()
                .nth(offset)
                .map_or(text.len(), |(byte, _)| byte)
        };
        let start = byte_at(self.start);
        let end = byte_at(self.end).max(start);
        &text[start..end]
    }
}

/// Split `text` into lines no wider than `max_width`.
///
/// With `max_width == None` only existing newlines break lines and
/// whitespace is kept as-is. A single grapheme wider than the limit still
/// occupies a line of its own, so the result can exceed the limit but the
/// wrap always makes progress. The result is never empty.
pub fn wrap_lines<M>(
    text: &str,
    max_width: Option<u32>,
    mode: WrapMode,
    metrics: &M,
) -> Vec<LineSpan>
where
    M: TextMetrics + ?Sized,
{
    let mut lines = Vec::new();
    let mut char_base = 0;

    for paragraph in text.split('\n') {
        let para = Paragraph::new(paragraph, char_base, metrics);
        let before = lines.len();

        match max_width {
            None => para.emit(0, para.clusters.len(), false, &mut lines),
            Some(limit) => match mode {
                WrapMode::Char => para.wrap_chars(limit, &mut lines),
                WrapMode::Word => para.wrap_words(limit, false, &mut lines),
                WrapMode::WordChar => para.wrap_words(limit, true, &mut lines),
            },
        }

        if lines.len() == before {
            lines.push(LineSpan {
                start: char_base,
                end: char_base,
                width: 0,
            });
        }

        char_base += paragraph.chars().count() + 1;
    }

    lines
}

/// A grapheme cluster with its offsets and measured width.
#[derive(Debug, Clone, Copy)]
struct Cluster<'a> {
    text: &'a str,
    /// Byte offset within the paragraph.
    byte: usize,
    /// Absolute char offset within the whole text.
    char_start: usize,
    chars: usize,
    width: u32,
    blank: bool,
}

/// A maximal run of clusters that are all blank or all non-blank.
#[derive(Debug, Clone, Copy)]
struct Token {
    from: usize,
    to: usize,
    width: u32,
    blank: bool,
}

/// The line currently being filled, as a cluster index range.
#[derive(Debug, Default)]
struct Pending {
    from: Option<usize>,
    to: usize,
    width: u32,
    /// Whether anything besides indentation has been pushed.
    has_text: bool,
}

impl Pending {
    fn is_empty(&self) -> bool {
        self.from.is_none()
    }

    fn push(&mut self, from: usize, to: usize, width: u32) {
        self.from.get_or_insert(from);
        self.to = to;
        self.width = self.width.saturating_add(width);
    }

    fn push_text(&mut self, from: usize, to: usize, width: u32) {
        self.push(from, to, width);
        self.has_text = true;
    }

    fn fits(&self, width: u32, limit: u32) -> bool {
        self.width.saturating_add(width) <= limit
    }
}

struct Paragraph<'a, 'm, M: ?Sized> {
    text: &'a str,
    clusters: Vec<Cluster<'a>>,
    metrics: &'m M,
}

impl<'a, 'm, M: TextMetrics + ?Sized> Paragraph<'a, 'm, M> {
    fn new(text: &'a str, char_base: usize, metrics: &'m M) -> Self {
        let mut clusters = Vec::new();
        let mut char_start = char_base;
        for (byte, g) in text.grapheme_indices(true) {
            let chars = g.chars().count();
            clusters.push(Cluster {
                text: g,
                byte,
                char_start,
                chars,
                width: metrics.text_width(g),
                blank: g.chars().all(char::is_whitespace),
            });
            char_start += chars;
        }
        Self {
            text,
            clusters,
            metrics,
        }
    }

    fn tokens(&self) -> Vec<Token> {
        let mut tokens: Vec<Token> = Vec::new();
        for (i, c) in self.clusters.iter().enumerate() {
            match tokens.last_mut() {
                Some(t) if t.blank == c.blank => {
                    t.to = i + 1;
                    t.width = t.width.saturating_add(c.width);
                }
                _ => tokens.push(Token {
                    from: i,
                    to: i + 1,
                    width: c.width,
                    blank: c.blank,
                }),
            }
        }
        tokens
    }

    /// Push clusters `[from, to)` as a line, optionally dropping trailing blanks.
    fn emit(&self, from: usize, to: usize, trim: bool, out: &mut Vec<LineSpan>) {
        let mut end = to;
        if trim {
            while end > from && self.clusters[end - 1].blank {
                end -= 1;
            }
        }
        if from == end {
            // An all-blank line collapses to an empty span at its first blank.
            if let Some(c) = self.clusters.get(from) {
                out.push(LineSpan {
                    start: c.char_start,
                    end: c.char_start,
                    width: 0,
                });
            }
            return;
        }

        let first = &self.clusters[from];
        let last = &self.clusters[end - 1];
        let bytes = first.byte..last.byte + last.text.len();
        out.push(LineSpan {
            start: first.char_start,
            end: last.char_start + last.chars,
            width: self.metrics.text_width(&self.text[bytes]),
        });
    }

    fn flush(&self, line: &mut Pending, out: &mut Vec<LineSpan>) {
        if let Some(from) = line.from {
            self.emit(from, line.to, true, out);
        }
        *line = Pending::default();
    }

    fn wrap_chars(&self, limit: u32, out: &mut Vec<LineSpan>) {
        let mut line = Pending::default();
        for (i, c) in self.clusters.iter().enumerate() {
            if !line.is_empty() && !line.fits(c.width, limit) {
                self.flush(&mut line, out);
            }
            line.push(i, i + 1, c.width);
        }
        self.flush(&mut line, out);
    }

    fn wrap_words(&self, limit: u32, char_fallback: bool, out: &mut Vec<LineSpan>) {
        let mut line = Pending::default();
        let mut first_line = true;

        for token in self.tokens() {
            if token.blank {
                if line.is_empty() {
                    // Indentation survives only on the paragraph's first line.
                    if first_line && token.width <= limit {
                        line.push(token.from, token.to, token.width);
                    }
                    continue;
                }
                if line.fits(token.width, limit) {
                    line.push(token.from, token.to, token.width);
                } else {
                    self.flush(&mut line, out);
                    first_line = false;
                }
                continue;
            }

            if line.fits(token.width, limit) {
                line.push_text(token.from, token.to, token.width);
                continue;
            }

            if line.has_text {
                self.flush(&mut line, out);
                first_line = false;
            } else {
                // Indentation that cannot share a line with the first word is dropped.
                line = Pending::default();
            }

            if token.width <= limit {
                line.push_text(token.from, token.to, token.width);
            } else if char_fallback {
                for i in token.from..token.to {
                    let width = self.clusters[i].width;
                    if !line.is_empty() && !line.fits(width, limit) {
                        self.flush(&mut line, out);
                        first_line = false;
                    }
                    line.push_text(i, i + 1, width);
                }
            } else {
                self.emit(token.from, token.to, false, out);
                first_line = false;
            }
        }

        self.flush(&mut line, out);
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::metrics::CellMetrics;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn wrapped_lines_never_exceed_width(s in "[a-zA-Z ]{1,100}", width in 5u32..50) {
            let lines = wrap_lines(&s, Some(width), WrapMode::WordChar, &CellMetrics::TERMINAL);
            for line in &lines {
                prop_assert!(line.width <= width, "line {:?} exceeds width {}", line, width);
            }
        }

        #[test]
        fn lines_are_ordered_and_disjoint(s in "[a-z \n]{0,80}", width in 1u32..20) {
            let lines = wrap_lines(&s, Some(width), WrapMode::Word, &CellMetrics::TERMINAL);
            prop_assert!(!lines.is_empty());
            for pair in lines.windows(2) {
                prop_assert!(pair[0].end <= pair[1].start);
            }
            let total = s.chars().count();
            prop_assert!(lines.iter().all(|l| l.end <= total));
        }

        #[test]
        fn char_wrap_preserves_content(s in "[a-zA-Z]{1,50}", width in 1u32..20) {
            let lines = wrap_lines(&s, Some(width), WrapMode::Char, &CellMetrics::TERMINAL);
            let rejoined: String = lines.iter().map(|l| l.slice(&s)).collect();
            prop_assert_eq!(rejoined, s);
        }

        #[test]
        fn wider_limit_never_adds_lines(s in "[a-z]{1,6}( [a-z]{1,6}){0,12}", width in 1u32..30) {
            let narrow = wrap_lines(&s, Some(width), WrapMode::Word, &CellMetrics::TERMINAL);
            let wide = wrap_lines(&s, Some(width + 1), WrapMode::Word, &CellMetrics::TERMINAL);
            prop_assert!(wide.len() <= narrow.len(), "{} lines at {}, {} at {}", narrow.len(), width, wide.len(), width + 1);
        }

        #[test]
        fn indentation_never_yields_an_empty_line(indent in 1usize..8, word in "[a-z]{1,8}", width in 1u32..16) {
            let text = format!("{}{}", " ".repeat(indent), word);
            let lines = wrap_lines(&text, Some(width), WrapMode::WordChar, &CellMetrics::TERMINAL);
            prop_assert!(lines.iter().all(|l| !l.is_empty()), "{:?}", lines);
        }
    }
}
