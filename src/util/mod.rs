//! Small shared helpers.

use chrono::Utc;

/// Log line timestamp for the current instant, `YYYY-MM-DDTHH:MM:SS` in UTC.
#[must_use]
pub fn log_timestamp() -> String {
    Utc::now().format("%Y-%m-%dT%H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_timestamp_shape() {
        let ts = log_timestamp();
        assert_eq!(ts.len(), 19);
        assert_eq!(&ts[10..11], "T");
    }
}
