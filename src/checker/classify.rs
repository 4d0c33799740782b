// src/checker/classify.rs
// =============================================================================
// Decides whether a raw link value is something we check on disk.
//
// Skipped:
// - In-page fragments ("#top")
// - Anything with a scheme from SKIP_SCHEMES ("https://...", "mailto:...")
//
// Everything else is "local" and goes on to the resolver.
// =============================================================================

use url::Url;

/// URL schemes that never point at a file in the repository.
pub const SKIP_SCHEMES: [&str; 7] = ["http", "https", "mailto", "tel", "sms", "data", "javascript"];

/// Returns true if the link should not be checked against the filesystem.
pub fn is_external_or_special(raw: &str) -> bool {
    if raw.starts_with('#') {
        return true;
    }

    match scheme_of(raw) {
        Some(scheme) => SKIP_SCHEMES
            .iter()
            .any(|skip| skip.eq_ignore_ascii_case(&scheme)),
        None => false,
    }
}

// Finds the explicit scheme of a link, if it has one
//
// Url::parse handles well-formed absolute URLs. It rejects relative links
// (which is what we want) but also absolute URLs with a bad host, such as
// "https://exa mple.com". Those still have a scheme, so fall back to reading
// the scheme prefix by hand.
fn scheme_of(raw: &str) -> Option<String> {
    match Url::parse(raw) {
        Ok(url) => Some(url.scheme().to_string()),
        Err(_) => lexical_scheme(raw).map(str::to_string),
    }
}

// scheme = ALPHA *( ALPHA / DIGIT / "+" / "-" / "." ) followed by ":"
fn lexical_scheme(raw: &str) -> Option<&str> {
    let (scheme, _) = raw.split_once(':')?;

    let mut chars = scheme.chars();
    let first = chars.next()?;
    if !first.is_ascii_alphabetic() {
        return None;
    }
    if chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.')) {
        Some(scheme)
    } else {
        None
    }
}
