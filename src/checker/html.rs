// src/checker/html.rs
// =============================================================================
// This module extracts link references from HTML documents.
//
// We use the `html5ever` tokenizer (the same one `scraper` is built on) but
// skip the tree builder: we only care about start tags and their attributes,
// and the tokenizer hands us line numbers as it goes.
//
// Every href="..." or src="..." on any start tag becomes a Reference, in
// document order. Broken markup is fine - the tokenizer recovers from errors
// and keeps going instead of giving up on the whole file.
//
// Rust concepts:
// - Traits: We implement html5ever's TokenSink trait to receive tokens
// - Ownership: The tokenizer owns the sink; we take it back when done
// =============================================================================

use html5ever::tendril::StrTendril;
use html5ever::tokenizer::states::RawKind;
use html5ever::tokenizer::{
    BufferQueue, Tag, TagKind, Token, TokenSink, TokenSinkResult, Tokenizer, TokenizerOpts,
};

/// Attributes that carry a link we should check.
pub const LINK_ATTRIBUTES: [&str; 2] = ["href", "src"];

/// A raw link value found in a document, plus the line it was found on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    /// Attribute value with surrounding whitespace removed
    pub url: String,
    /// 1-based line number of the tag
    pub line: u64,
}

// Receives tokens from the tokenizer and keeps the references we care about
struct ReferenceSink {
    refs: Vec<Reference>,
    // Line of the most recent token that ends before the next tag can start
    last_line: u64,
}

impl ReferenceSink {
    fn new() -> Self {
        Self {
            refs: Vec::new(),
            last_line: 1,
        }
    }

    fn collect_from_tag(&mut self, tag: &Tag, line: u64) {
        for attr in &tag.attrs {
            let name: &str = &attr.name.local;
            if !is_link_attribute(name) {
                continue;
            }

            // Skip href="" and href="   " entirely
            let value = attr.value.trim();
            if value.is_empty() {
                continue;
            }

            self.refs.push(Reference {
                url: value.to_string(),
                line,
            });
        }
    }
}

impl TokenSink for ReferenceSink {
    type Handle = ();

    // html5ever passes the line the tokenizer is on when a token is emitted,
    // which for a tag is the line of its closing '>'. We want the line of the
    // opening '<'. Text is emitted as soon as it is read (newlines one at a
    // time), so the token emitted just before a tag ends right where the tag
    // starts, and its line is the tag's first line. Parse errors are skipped
    // because they can be raised from inside a tag.
    //
    // Lone '\r' and "\r\n" both count as one line break, same as reading
    // the file with universal newlines.
    fn process_token(&mut self, token: Token, line_number: u64) -> TokenSinkResult<()> {
        let start_line = self.last_line;
        if !matches!(token, Token::ParseError(_)) {
            self.last_line = line_number;
        }

        if let Token::TagToken(tag) = token {
            if tag.kind == TagKind::StartTag {
                self.collect_from_tag(&tag, start_line);

                // Without a tree builder nobody tells the tokenizer that
                // <script> and <style> hold raw text, so we do it here.
                // Otherwise "<a href=...>" inside a JS string would count.
                match &*tag.name {
                    "script" => return TokenSinkResult::RawData(RawKind::ScriptData),
                    "style" => return TokenSinkResult::RawData(RawKind::Rawtext),
                    _ => {}
                }
            }
        }
        TokenSinkResult::Continue
    }
}

// Extracts all link references from an HTML document
//
// Parameters:
//   html: the full document text
//
// Returns: every non-empty href/src value on a start tag, in document order
//
// Example:
//   html = "<p>\n<a href=' /docs/ '>Docs</a>"
//   result = [Reference { url: "/docs/", line: 2 }]
pub fn extract_references(html: &str) -> Vec<Reference> {
    let mut tokenizer = Tokenizer::new(ReferenceSink::new(), TokenizerOpts::default());

    let mut input = BufferQueue::new();
    input.push_back(StrTendril::from_slice(html));

    // feed() only stops early when the sink asks to run a script, which ours
    // never does, so a single call consumes the whole buffer.
    let _ = tokenizer.feed(&mut input);
    tokenizer.end();

    tokenizer.sink.refs
}

// Attribute names are compared case-insensitively, like HTML itself does
fn is_link_attribute(name: &str) -> bool {
    LINK_ATTRIBUTES
        .iter()
        .any(|attr| attr.eq_ignore_ascii_case(name))
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why not use scraper like a normal HTML parser?
//    - scraper builds a full DOM tree and throws away source positions
//    - We need line numbers for the report, and only the tokenizer has them
//
// 2. What is a TokenSink?
//    - A trait (interface) the tokenizer calls once per token
//    - Tokens are things like "start tag", "end tag", "text", "comment"
//    - The return value can switch the tokenizer into another state,
//      which is how we treat <script> contents as plain text
//
// 3. What is a StrTendril?
//    - html5ever's string type: a reference-counted, sliceable UTF-8 buffer
//    - from_slice() copies our &str into one
//
// 4. What does &*tag.name mean?
//    - tag.name is an interned string (an Atom)
//    - * dereferences it to str, & borrows that as &str so we can match on it
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn urls(html: &str) -> Vec<String> {
        extract_references(html).into_iter().map(|r| r.url).collect()
    }

    #[test]
    fn test_extract_href_and_src() {
        let html = r#"<a href="about.html">About</a><img src="logo.png">"#;
        assert_eq!(urls(html), vec!["about.html", "logo.png"]);
    }

    #[test]
    fn test_line_numbers_are_one_based() {
        let html = "<!doctype html>\n<html>\n<body>\n<a href=\"a.html\">A</a>\n\n<script src=\"app.js\"></script>\n";
        let refs = extract_references(html);
        assert_eq!(
            refs,
            vec![
                Reference { url: "a.html".to_string(), line: 4 },
                Reference { url: "app.js".to_string(), line: 6 },
            ]
        );
    }

    #[test]
    fn test_multi_line_tag_reports_its_first_line() {
        let html = "<p>x</p>\n<a\n  class=\"btn\"\n  href=\"gone.html\">x</a>\n<img\nsrc=\"pic.png\">";
        let refs = extract_references(html);
        assert_eq!(
            refs,
            vec![
                Reference { url: "gone.html".to_string(), line: 2 },
                Reference { url: "pic.png".to_string(), line: 5 },
            ]
        );
    }

    #[test]
    fn test_tag_after_comment_and_doctype() {
        let html = "<!doctype html><!-- <a href=\"no.html\">\n -->\n\n<link\n href=\"x.css\">";
        let refs = extract_references(html);
        assert_eq!(refs, vec![Reference { url: "x.css".to_string(), line: 4 }]);
    }

    #[test]
    fn test_adjacent_tags_share_a_line() {
        let html = "<ul>\n<li><a href=\"one.html\">1</a></li><li><a\nhref=\"two.html\">2</a></li>";
        let lines: Vec<u64> = extract_references(html).iter().map(|r| r.line).collect();
        assert_eq!(lines, vec![2, 2]);
    }

    #[test]
    fn test_carriage_returns_count_as_line_breaks() {
        let crlf = "<p>\r\n<a href=\"a.html\">a</a>";
        let cr = "<p>\r<a href=\"a.html\">a</a>";
        assert_eq!(extract_references(crlf)[0].line, 2);
        assert_eq!(extract_references(cr)[0].line, 2);
    }

    #[test]
    fn test_attribute_names_are_case_insensitive() {
        let html = r#"<A HREF="one.html">1</A><IMG Src="two.png">"#;
        assert_eq!(urls(html), vec!["one.html", "two.png"]);
    }

    #[test]
    fn test_values_are_trimmed_and_blank_values_skipped() {
        let html = r#"<a href="  spaced.html  ">x</a><a href="">y</a><a href="   ">z</a><img src>"#;
        assert_eq!(urls(html), vec!["spaced.html"]);
    }

    #[test]
    fn test_ignores_other_attributes_and_end_tags() {
        let html = r#"<div data-href="nope.html" action="form.html"></div href="end.html">"#;
        assert!(urls(html).is_empty());
    }

    #[test]
    fn test_self_closing_tags_count() {
        let html = r#"<link rel="stylesheet" href="site.css" />"#;
        assert_eq!(urls(html), vec!["site.css"]);
    }

    #[test]
    fn test_character_references_are_decoded() {
        let html = r#"<a href="page.html?a=1&amp;b=2">x</a>"#;
        assert_eq!(urls(html), vec!["page.html?a=1&b=2"]);
    }

    #[test]
    fn test_script_and_style_bodies_are_raw_text() {
        let html = r#"<script>var s = '<a href="inside.html">';</script>
<style>/* <img src="nope.png"> */</style>
<a href="outside.html">ok</a>"#;
        assert_eq!(urls(html), vec!["outside.html"]);
    }

    #[test]
    fn test_malformed_markup_keeps_going() {
        let html = "<a href=\"first.html\"<<<>\n<p =broken>\n<img src=second.png>";
        let found = urls(html);
        assert!(found.contains(&"second.png".to_string()));
    }

    #[test]
    fn test_document_order_is_preserved() {
        let html = r#"<a href="c.html"></a><a href="a.html"></a><a href="b.html"></a>"#;
        assert_eq!(urls(html), vec!["c.html", "a.html", "b.html"]);
    }
}
