//! Compiled regex patterns used across the pipeline.
//!
//! All patterns are compiled once at first use using `LazyLock`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

/// Matches any run of whitespace, for collapsing text content.
pub static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("WHITESPACE regex"));

/// Matches section headings that introduce a "more news" tray.
pub static MORE_NEWS_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(view|more)\s+(more\s+)?news\b").expect("MORE_NEWS_HEADING regex")
});

/// Matches section headings for video carousels.
pub static VIDEOS_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^videos?\b").expect("VIDEOS_HEADING regex"));
