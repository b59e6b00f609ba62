// file: src/extractor/patterns.rs
// description: compiled regex patterns and escape decoding for result markup
// reference: https://docs.rs/regex

use lazy_static::lazy_static;
use regex::Regex;

/// Marker whose presence means the video document carries result metadata.
pub const VIDEO_ID_MARKER: &str = r#""videoId":""#;

lazy_static! {
    // Media URL field inside an image result's metadata attribute
    pub static ref MEDIA_URL: Regex = Regex::new(
        r#""murl":"(.*?)""#
    ).expect("MEDIA_URL regex is valid");

    // One (id, title) pair from the inline video result JSON
    pub static ref VIDEO_ENTRY: Regex = Regex::new(
        r#""videoId":"(.*?)".*?"title":\{"runs":\[\{"text":"(.*?)"\}\]"#
    ).expect("VIDEO_ENTRY regex is valid");
}

/// Decodes `\u002f` (either case) to `/` and drops remaining backslashes.
pub fn decode_escaped_url(raw: &str) -> String {
    raw.replace("\\u002f", "/")
        .replace("\\u002F", "/")
        .replace('\\', "")
}

/// Decodes JSON string escapes in a matched text run, keeping the raw text
/// when it is not a valid JSON string body.
pub fn decode_json_text(raw: &str) -> String {
    serde_json::from_str::<String>(&format!("\"{}\"", raw)).unwrap_or_else(|_| raw.to_string())
}
