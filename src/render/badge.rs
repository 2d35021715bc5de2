//! shields.io badge helpers.

use crate::dsl::fields::When;

const BADGE_BASE: &str = "https://img.shields.io/badge";

/// Escape text for a badge URL segment: shields.io separators are doubled,
/// then path and query delimiters are percent-encoded.
pub fn escape_badge(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '-' => out.push_str("--"),
            '_' => out.push_str("__"),
            ' ' => out.push('_'),
            '%' => out.push_str("%25"),
            '/' => out.push_str("%2F"),
            '?' => out.push_str("%3F"),
            '#' => out.push_str("%23"),
            other => out.push(other),
        }
    }
    out
}

/// `![alt](https://img.shields.io/badge/{label}-{message}-{color})`
pub fn badge(alt: &str, label: &str, message: &str, color: &str) -> String {
    format!(
        "![{}]({}/{}-{}-{})",
        alt,
        BADGE_BASE,
        escape_badge(label),
        escape_badge(message),
        color
    )
}

/// A label-less badge showing a single word.
pub fn flag_badge(text: &str, color: &str) -> String {
    badge(text, "", text, color)
}

pub fn when_color(when: When) -> &'static str {
    match when {
        When::OnSuccess => "green",
        When::Manual => "purple",
        When::Always => "blue",
        When::OnFailure => "red",
        When::Delayed => "orange",
        When::Never => "red",
    }
}

pub fn when_badge(when: When) -> String {
    flag_badge(when.as_str(), when_color(when))
}
