//! Helper functions and utilities
//!
//! This module contains common helper functions used throughout the application.

use regex::Regex;
use std::sync::OnceLock;

const EARTH_RADIUS_KM: f64 = 6371.0;

/// First `max_chars` characters of `text`, counted in Unicode scalar values
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}

/// Number of characters in `text`, counted in Unicode scalar values
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Whether `value` matches a pattern compiled once into `cell`
///
/// An uncompilable pattern matches nothing.
pub fn matches_pattern(cell: &'static OnceLock<Option<Regex>>, pattern: &str, value: &str) -> bool {
    cell.get_or_init(|| Regex::new(pattern).ok())
        .as_ref()
        .is_some_and(|re| re.is_match(value))
}

/// Validate email format
pub fn is_valid_email(email: &str) -> bool {
    static EMAIL: OnceLock<Option<Regex>> = OnceLock::new();
    matches_pattern(&EMAIL, r"^[^@\s]+@[^@\s]+\.[^@\s]+$", email)
}

/// Validate an absolute http(s) URL
pub fn is_valid_url(value: &str) -> bool {
    match url::Url::parse(value) {
        Ok(parsed) => matches!(parsed.scheme(), "http" | "https") && parsed.host().is_some(),
        Err(_) => false,
    }
}

/// Validate a username: letters, digits, underscores, dots and hyphens
pub fn is_valid_username(username: &str) -> bool {
    static USERNAME: OnceLock<Option<Regex>> = OnceLock::new();
    matches_pattern(&USERNAME, r"^[\w.-]+$", username)
}

/// Great-circle distance between two coordinates in kilometres
pub fn great_circle_distance_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let (phi1, phi2) = (lat1.to_radians(), lat2.to_radians());
    let d_phi = (lat2 - lat1).to_radians();
    let d_lambda = (lon2 - lon1).to_radians();

    let a = (d_phi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * a.sqrt().asin()
}

/// Escape `%`, `_` and `\` so user input can be used inside an ILIKE pattern
pub fn like_pattern(term: &str) -> String {
    let escaped = term
        .replace('\\', r"\\")
        .replace('%', r"\%")
        .replace('_', r"\_");
    format!("%{}%", escaped)
}
