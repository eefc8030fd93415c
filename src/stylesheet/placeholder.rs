//! Placeholder text drawn as an inline SVG background
//!
//! The widget's input placeholder cannot be changed through CSS, so the real
//! placeholder is hidden and the text is painted as a background image. The
//! text sits inside a data URI and is percent-encoded.

use std::string::FromUtf8Error;

/// Percent-encode placeholder text for use inside a data URI
pub fn encode_placeholder(text: &str) -> String {
    urlencoding::encode(text).into_owned()
}

/// Reverse [`encode_placeholder`]
pub fn decode_placeholder(encoded: &str) -> Result<String, FromUtf8Error> {
    urlencoding::decode(encoded).map(|s| s.into_owned())
}

/// `url(...)` value of an SVG drawing `text` where the placeholder would be
pub fn placeholder_svg_url(text: &str) -> String {
    format!(
        "url(\"data:image/svg+xml;utf8,<svg xmlns='http://www.w3.org/2000/svg' version='1.1' \
         height='50px' width='250px'><text x='15' y='25' fill='silver' font-family='verdana' \
         font-size='15'>{}</text></svg>\")",
        encode_placeholder(text)
    )
}
