//! Display labels derived from page urls.

use percent_encoding::percent_decode_str;
use url::{Position, Url};

/// Returns the display label for a page url.
///
/// The label is the url's decoded path, or its authority (user info, host and
/// port) when the path is empty or `/`. Default ports are normalized away by
/// the url parser. Strings that do not parse as absolute urls are returned
/// unchanged.
///
/// # Examples
///
/// ```
/// # use linkmap_core::label::label_for_url;
/// assert_eq!(label_for_url("https://qubric.in/"), "qubric.in");
/// assert_eq!(label_for_url("http://localhost:8000/"), "localhost:8000");
/// assert_eq!(label_for_url("https://qubric.in/blog"), "/blog");
/// ```
pub fn label_for_url(url: &str) -> String {
    let Ok(parsed) = Url::parse(url) else {
        return url.to_string();
    };

    match parsed.path() {
        "" | "/" => parsed[Position::BeforeUsername..Position::AfterPort].to_string(),
        path => percent_decode_str(path).decode_utf8_lossy().into_owned(),
    }
}
