//! `settings.conf` parsing.

use std::fs;
use std::path::Path;

use super::types::Settings;

/// Commented skeleton written on first run.
pub const SETTINGS_SKELETON: &str = "\
# CardioQA settings
#
# Lines are `key = value`; `#` starts a comment.

# Root of the inference service. Overridden by CARDIOQA_API_URL and --api-url.
# api_url = https://novoo5-cardioqa-ai-system.hf.space

# Whole-request timeout in seconds (0 = no explicit timeout).
request_timeout_secs = 0
";

/// What: Strip a trailing ` # comment` from a value.
///
/// Details:
/// - Only a `#` preceded by whitespace starts a comment, so URL fragments survive.
pub(crate) fn strip_inline_comment(s: &str) -> &str {
    let bytes = s.as_bytes();
    for (i, b) in bytes.iter().enumerate() {
        if *b == b'#' && i > 0 && bytes[i - 1].is_ascii_whitespace() {
            return s[..i].trim();
        }
    }
    s.trim()
}

/// What: Parse settings file contents.
///
/// Inputs:
/// - `content`: Full text of a `settings.conf`.
///
/// Output:
/// - Parsed [`Settings`]; unknown keys and unparsable values keep their defaults.
///
/// Details:
/// - Keys are case-insensitive; `.`, `-` and spaces in keys are treated as `_`.
#[must_use]
pub fn parse_settings(content: &str) -> Settings {
    let mut out = Settings::default();
    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let Some((raw_key, raw_val)) = trimmed.split_once('=') else {
            continue;
        };
        let key = raw_key.trim().to_lowercase().replace(['.', '-', ' '], "_");
        let val = strip_inline_comment(raw_val);
        match key.as_str() {
            "api_url" | "base_url" => {
                if !val.is_empty() {
                    out.api_url = Some(val.to_string());
                }
            }
            "request_timeout_secs" | "timeout_secs" => {
                if let Ok(v) = val.parse::<u64>() {
                    out.request_timeout_secs = v;
                }
            }
            _ => {
                tracing::debug!(key = %key, "ignoring unknown settings key");
            }
        }
    }
    out
}

/// What: Load settings from `path`, writing the skeleton when the file is missing.
///
/// Inputs:
/// - `path`: Location of `settings.conf`.
///
/// Output:
/// - Parsed settings, or defaults when the file cannot be read.
#[must_use]
pub fn load_settings_from(path: &Path) -> Settings {
    if !path.exists() {
        if let Some(dir) = path.parent() {
            let _ = fs::create_dir_all(dir);
        }
        if let Err(e) = fs::write(path, SETTINGS_SKELETON) {
            tracing::warn!(path = %path.display(), error = %e, "failed to write settings skeleton");
        } else {
            tracing::info!(path = %path.display(), "wrote default settings skeleton");
        }
    }
    match fs::read_to_string(path) {
        Ok(content) => parse_settings(&content),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "failed to read settings; using defaults");
            Settings::default()
        }
    }
}

/// Load settings from the user's config directory.
#[must_use]
pub fn settings() -> Settings {
    load_settings_from(&super::paths::settings_path())
}
