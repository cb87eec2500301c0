//! Markdown → HTML → visible text.
//!
//! The model often answers in Markdown even when told not to. Flattening
//! renders it to HTML and keeps only text nodes, so emphasis markers, link
//! syntax and code fences disappear while the words survive. Block-level
//! elements stay separated by a blank line so paragraph structure is still
//! visible to the section splitter.
//!
//! Only the classic Markdown escape set (`` \` * _ { } [ ] ( ) > # + - . ! ``)
//! is treated as an escape. Any other backslash outside code is kept as
//! written, so JSON string escapes such as `\"` or `\\` survive flattening.

use pulldown_cmark::{html, Options, Parser};
use scraper::{ElementRef, Html, Node};
use std::borrow::Cow;

/// Blank line between block elements.
const BLOCK_BREAK: usize = 2;
/// Single newline between list items, table rows and after `<br>`.
const LINE_BREAK: usize = 1;

pub fn flatten(markdown: &str) -> String {
    html_to_text(&markdown_to_html(markdown))
}

pub fn markdown_to_html(markdown: &str) -> String {
    let source = keep_literal_backslashes(markdown);
    let parser = Parser::new_ext(&source, Options::empty());
    let mut out = String::with_capacity(markdown.len() + markdown.len() / 2);
    html::push_html(&mut out, parser);
    out
}

/// Strip every tag from an HTML fragment, keeping text content only.
/// Entities are decoded by the HTML parser.
pub fn html_to_text(html: &str) -> String {
    let fragment = Html::parse_fragment(html);
    let mut writer = TextWriter::default();
    writer.walk(fragment.root_element());
    writer.finish()
}

// ---------------------------------------------------------------------------
// Backslash escapes
// ---------------------------------------------------------------------------

/// Characters a backslash may escape. CommonMark accepts any ASCII
/// punctuation here; everything outside this set keeps its backslash.
const MARKDOWN_ESCAPES: &[u8] = b"`*_{}[]()>#+-.!";

/// Double every backslash outside code that does not precede a character in
/// [`MARKDOWN_ESCAPES`], so the renderer prints it literally. Fenced and
/// indented code blocks and inline code spans are left alone; backslashes
/// are already literal there.
fn keep_literal_backslashes(markdown: &str) -> Cow<'_, str> {
    if !markdown.contains('\\') {
        return Cow::Borrowed(markdown);
    }

    let mut out = String::with_capacity(markdown.len() + 16);
    let mut paragraph = String::new();
    let mut fence: Option<(u8, usize)> = None;

    for line in markdown.split_inclusive('\n') {
        if let Some((marker, len)) = fence {
            out.push_str(line);
            if closes_fence(line, marker, len) {
                fence = None;
            }
            continue;
        }

        if line.trim().is_empty() {
            escape_inline(&paragraph, &mut out);
            paragraph.clear();
            out.push_str(line);
        } else if paragraph.is_empty() && indent_width(line) >= 4 {
            out.push_str(line);
        } else if let Some(open) = opens_fence(line) {
            escape_inline(&paragraph, &mut out);
            paragraph.clear();
            fence = Some(open);
            out.push_str(line);
        } else {
            paragraph.push_str(line);
        }
    }
    escape_inline(&paragraph, &mut out);

    Cow::Owned(out)
}

fn indent_width(line: &str) -> usize {
    let mut width = 0;
    for b in line.bytes() {
        match b {
            b' ' => width += 1,
            b'\t' => width += 4 - width % 4,
            _ => break,
        }
    }
    width
}

fn opens_fence(line: &str) -> Option<(u8, usize)> {
    if indent_width(line) > 3 {
        return None;
    }
    let body = line.trim_start();
    let marker = *body.as_bytes().first()?;
    if marker != b'`' && marker != b'~' {
        return None;
    }
    let len = body.bytes().take_while(|&b| b == marker).count();
    let info = &body[len..];
    if len < 3 || (marker == b'`' && info.contains('`')) {
        return None;
    }
    Some((marker, len))
}

fn closes_fence(line: &str, marker: u8, len: usize) -> bool {
    if indent_width(line) > 3 {
        return false;
    }
    let body = line.trim();
    let run = body.bytes().take_while(|&b| b == marker).count();
    run >= len && run == body.len()
}

/// Rewrite backslashes in one paragraph, copying code spans verbatim.
fn escape_inline(text: &str, out: &mut String) {
    let bytes = text.as_bytes();
    let mut copied = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\\' => {
                out.push_str(&text[copied..i]);
                match bytes.get(i + 1).copied() {
                    Some(next) if MARKDOWN_ESCAPES.contains(&next) => {
                        out.push_str(&text[i..i + 2]);
                        i += 2;
                    }
                    Some(b'\\') => {
                        out.push_str("\\\\\\\\");
                        i += 2;
                    }
                    _ => {
                        out.push_str("\\\\");
                        i += 1;
                    }
                }
                copied = i;
            }
            b'`' => {
                let run = backtick_run(bytes, i);
                i = match closing_backticks(bytes, i + run, run) {
                    Some(end) => end,
                    None => i + run,
                };
            }
            _ => i += 1,
        }
    }
    out.push_str(&text[copied..]);
}

fn backtick_run(bytes: &[u8], start: usize) -> usize {
    bytes[start..].iter().take_while(|&&b| b == b'`').count()
}

/// End index of the first run of exactly `len` backticks at or after `from`.
fn closing_backticks(bytes: &[u8], from: usize, len: usize) -> Option<usize> {
    let mut j = from;
    while j < bytes.len() {
        if bytes[j] == b'`' {
            let run = backtick_run(bytes, j);
            if run == len {
                return Some(j + run);
            }
            j += run;
        } else {
            j += 1;
        }
    }
    None
}

// ---------------------------------------------------------------------------
// TextWriter
// ---------------------------------------------------------------------------

#[derive(Default)]
struct TextWriter {
    out: String,
    pending: usize,
}

impl TextWriter {
    fn walk(&mut self, element: ElementRef<'_>) {
        let breaks = break_weight(element.value().name());
        self.request_break(breaks);

        for child in element.children() {
            match child.value() {
                Node::Text(text) => {
                    let text: &str = text;
                    self.push_text(text);
                }
                Node::Element(_) => {
                    if let Some(el) = ElementRef::wrap(child) {
                        self.walk(el);
                    }
                }
                _ => {}
            }
        }

        self.request_break(breaks);
    }

    fn request_break(&mut self, newlines: usize) {
        self.pending = self.pending.max(newlines);
    }

    fn push_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        // Whitespace the renderer puts between tags counts as a break, not content.
        if text.trim().is_empty() && text.contains('\n') {
            self.request_break(text.matches('\n').count());
            return;
        }
        if !self.out.is_empty() && self.pending > 0 {
            let trailing = self.out.len() - self.out.trim_end_matches('\n').len();
            let leading = text.len() - text.trim_start_matches('\n').len();
            for _ in (trailing + leading)..self.pending {
                self.out.push('\n');
            }
        }
        self.pending = 0;
        self.out.push_str(text);
    }

    fn finish(mut self) -> String {
        let end = self.out.trim_end_matches('\n').len();
        self.out.truncate(end);
        self.out
    }
}

fn break_weight(tag: &str) -> usize {
    match tag {
        "p" | "h1" | "h2" | "h3" | "h4" | "h5" | "h6" | "pre" | "blockquote" | "ul" | "ol"
        | "dl" | "table" | "hr" | "div" => BLOCK_BREAK,
        "li" | "tr" | "dt" | "dd" | "br" => LINE_BREAK,
        _ => 0,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_unchanged() {
        assert_eq!(flatten("hello world"), "hello world");
    }

    #[test]
    fn empty_input_gives_empty_output() {
        assert_eq!(flatten(""), "");
    }

    #[test]
    fn emphasis_markers_are_removed() {
        assert_eq!(
            flatten("This is **bold** and *italic* and `code`."),
            "This is bold and italic and code."
        );
    }

    #[test]
    fn links_keep_text_only() {
        assert_eq!(
            flatten("See [the docs](https://example.com/docs) now"),
            "See the docs now"
        );
    }

    #[test]
    fn paragraphs_stay_separated_by_blank_line() {
        assert_eq!(
            flatten("Overview:\n\nThis is the summary."),
            "Overview:\n\nThis is the summary."
        );
    }

    #[test]
    fn soft_breaks_are_kept_as_newlines() {
        assert_eq!(flatten("line one\nline two"), "line one\nline two");
    }

    #[test]
    fn headings_are_flattened() {
        assert_eq!(
            flatten("# Project Overview\nA robot.\n\n## Timeline\n4 weeks"),
            "Project Overview\n\nA robot.\n\nTimeline\n\n4 weeks"
        );
    }

    #[test]
    fn tight_list_items_are_one_per_line() {
        assert_eq!(
            flatten("Parts:\n\n- Motor\n- Battery\n- Frame"),
            "Parts:\n\nMotor\nBattery\nFrame"
        );
    }

    #[test]
    fn code_fence_content_survives() {
        let md = "```json\n{\"a\": 1}\n```";
        assert_eq!(flatten(md), "{\"a\": 1}");
    }

    #[test]
    fn markdown_escapes_still_apply() {
        assert_eq!(flatten(r"\*not emphasis\* \# and 1\."), "*not emphasis* # and 1.");
    }

    #[test]
    fn backslash_before_quote_is_kept() {
        assert_eq!(
            flatten(r#"Use the \"Flask\" framework"#),
            r#"Use the \"Flask\" framework"#
        );
    }

    #[test]
    fn escaped_backslash_and_control_escapes_are_kept() {
        assert_eq!(flatten(r"C:\\tools and a\nb and \/x"), r"C:\\tools and a\nb and \/x");
    }

    #[test]
    fn code_keeps_backslashes_unchanged() {
        assert_eq!(flatten(r#"Run `echo \"hi\"` now"#), r#"Run echo \"hi\" now"#);
        assert_eq!(flatten("```\nsay(\\\"hi\\\")\n```"), "say(\\\"hi\\\")");
    }

    #[test]
    fn unmatched_backtick_does_not_hide_escapes() {
        assert_eq!(flatten(r#"a ` b \"c\""#), r#"a ` b \"c\""#);
    }

    #[test]
    fn entities_are_decoded() {
        assert_eq!(flatten("Tom & Jerry <3"), "Tom & Jerry <3");
    }

    #[test]
    fn raw_html_tags_are_stripped() {
        assert_eq!(
            flatten("<div class=\"x\">inside</div>\n\nafter"),
            "inside\n\nafter"
        );
    }

    #[test]
    fn malformed_markdown_does_not_panic() {
        let inputs = [
            "**unterminated bold",
            "[broken link(",
            "```\nunterminated fence",
            "> > > nested\n>",
            "* * *\n- \n1.\n",
            "<div><span>unclosed",
            "\u{0}\u{feff}\t\r\n",
        ];
        for input in inputs {
            let _ = flatten(input);
        }
        assert_eq!(flatten("**unterminated bold"), "**unterminated bold");
    }

    #[test]
    fn html_to_text_handles_bare_fragments() {
        assert_eq!(html_to_text("<p>a</p>\n<p>b</p>\n"), "a\n\nb");
        assert_eq!(html_to_text("no tags"), "no tags");
    }
}
