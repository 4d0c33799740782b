// src/validator/rules.rs
// =============================================================================
// The structural checklist.
//
// Each check looks at the whole document text and either passes or produces
// one finding. Checks are independent: a document missing everything gets
// all seven findings, in the order of Check::ALL.
//
// Some findings say "recommended", but they are all errors. Any finding
// fails the file.
// =============================================================================

use regex::Regex;
use std::sync::LazyLock;

// The patterns below are constants, so a failure to compile is a programmer
// error and panicking on first use is fine.
static DOCTYPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\s*<!doctype\s+html\s*>").expect("valid doctype regex"));

static LANG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<html\b[^>]*\blang\s*=\s*['"][^'"]+['"]"#).expect("valid lang regex")
});

static CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta\b[^>]*\bcharset\s*=\s*['"][^'"]+['"]"#).expect("valid charset regex")
});

static TITLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<title\b[^>]*>.*?</title>").expect("valid title regex"));

/// One structural marker a document should have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    Doctype,
    HtmlTag,
    HeadTag,
    BodyTag,
    Charset,
    Title,
    Lang,
}

impl Check {
    /// Every check, in reporting order.
    pub const ALL: [Check; 7] = [
        Check::Doctype,
        Check::HtmlTag,
        Check::HeadTag,
        Check::BodyTag,
        Check::Charset,
        Check::Title,
        Check::Lang,
    ];

    /// Text reported when the marker is missing.
    pub fn message(self) -> &'static str {
        match self {
            Check::Doctype => "Missing <!doctype html> (recommended; helps consistent rendering)",
            Check::HtmlTag => "Missing <html> tag",
            Check::HeadTag => "Missing <head> tag",
            Check::BodyTag => "Missing <body> tag",
            Check::Charset => "Missing <meta charset=\"utf-8\"> (recommended)",
            Check::Title => {
                "Missing <title>\u{2026}</title> (recommended; helps SEO + browser tab label)"
            }
            Check::Lang => "Missing lang attribute on <html> (recommended; accessibility/SEO)",
        }
    }

    /// Does `text` contain this marker?
    ///
    /// `lowered` is `text` in ASCII lowercase, shared between the substring
    /// checks so the document is only lowercased once.
    fn passes(self, text: &str, lowered: &str) -> bool {
        match self {
            Check::Doctype => DOCTYPE.is_match(text),
            Check::HtmlTag => lowered.contains("<html"),
            Check::HeadTag => lowered.contains("<head"),
            Check::BodyTag => lowered.contains("<body"),
            Check::Charset => CHARSET.is_match(text),
            Check::Title => TITLE.is_match(text),
            Check::Lang => LANG.is_match(text),
        }
    }
}

/// Runs every check against a document and returns the failures in order.
pub fn failed_checks(text: &str) -> Vec<Check> {
    let lowered = text.to_ascii_lowercase();

    Check::ALL
        .into_iter()
        .filter(|check| !check.passes(text, &lowered))
        .collect()
}

/// Like [`failed_checks`], but as the messages that get printed.
pub fn validate_text(text: &str) -> Vec<String> {
    failed_checks(text)
        .into_iter()
        .map(|check| check.message().to_string())
        .collect()
}
