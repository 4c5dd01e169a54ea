// Utility functions
use chrono::{DateTime, Utc};

/// Minimum password length accepted client-side. The backend may apply a
/// stricter composition rule on top of this.
pub const MIN_PASSWORD_LEN: usize = 8;

pub fn format_date(dt: &DateTime<Utc>) -> String {
    dt.format("%Y-%m-%d").to_string()
}

pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}

/// Turns a category tag like `hostel_issues` into a display label.
pub fn humanize_category(tag: &str) -> String {
    tag.replace('_', " ")
}

pub fn validate_email(email: &str) -> bool {
    // Basic email validation
    email.contains('@')
        && email.len() > 3
        && email.len() < 255
        && !email.starts_with('@')
        && !email.ends_with('@')
}

pub fn validate_password(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LEN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_email() {
        assert!(validate_email("user@example.com"));
        assert!(validate_email("test.user+tag@college.edu"));

        assert!(!validate_email(""));
        assert!(!validate_email("invalid"));
        assert!(!validate_email("@example.com"));
        assert!(!validate_email("user@"));
    }

    #[test]
    fn test_validate_password() {
        assert!(validate_password("Abc12345!"));
        assert!(validate_password("12345678"));

        assert!(!validate_password(""));
        assert!(!validate_password("short"));
        assert!(!validate_password("1234567"));
    }

    #[test]
    fn test_truncate_string() {
        assert_eq!(truncate_string("short", 50), "short");
        assert_eq!(truncate_string("abcdefghij", 8), "abcde...");
    }

    #[test]
    fn test_humanize_category() {
        assert_eq!(humanize_category("hostel_issues"), "hostel issues");
        assert_eq!(humanize_category("it_support"), "it support");
        assert_eq!(humanize_category("plumbing"), "plumbing");
    }

    #[test]
    fn test_format_date() {
        let dt = DateTime::parse_from_rfc3339("2024-03-05T10:30:00Z")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(format_date(&dt), "2024-03-05");
        assert_eq!(format_datetime(&dt), "2024-03-05 10:30:00 UTC");
    }
}
