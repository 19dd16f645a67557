// Mon Feb 2 2026 - Alex

pub struct StringUtils;

impl StringUtils {
    /// Split at the last occurrence of `pattern`, returning (before, after).
    /// When the pattern is absent the whole input lands in `after`, so scope
    /// splitting on "::" yields an empty scope for unqualified names.
    pub fn break_at_last(s: &str, pattern: &str) -> (String, String) {
        match s.rfind(pattern) {
            Some(pos) => (s[..pos].to_string(), s[pos + pattern.len()..].to_string()),
            None => (String::new(), s.to_string()),
        }
    }

    /// Parse an unsigned number, accepting a 0x prefix for hex.
    /// Empty or malformed input yields 0.
    pub fn parse_number(s: &str) -> u64 {
        let s = s.trim();
        if s.is_empty() {
            return 0;
        }
        if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
            u64::from_str_radix(hex, 16).unwrap_or(0)
        } else {
            s.parse().unwrap_or(0)
        }
    }

    /// Parse a signed number, falling back to `default` on empty or
    /// malformed input.
    pub fn parse_int_or(s: &str, default: i64) -> i64 {
        let s = s.trim();
        if s.is_empty() {
            return default;
        }
        if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
            i64::from_str_radix(hex, 16).unwrap_or(default)
        } else {
            s.parse().unwrap_or(default)
        }
    }

    pub fn parse_flag(s: &str) -> bool {
        Self::parse_number(s) != 0
    }
}

pub fn break_at_last(s: &str, pattern: &str) -> (String, String) {
    StringUtils::break_at_last(s, pattern)
}

pub fn parse_number(s: &str) -> u64 {
    StringUtils::parse_number(s)
}

pub fn parse_int_or(s: &str, default: i64) -> i64 {
    StringUtils::parse_int_or(s, default)
}

pub fn parse_flag(s: &str) -> bool {
    StringUtils::parse_flag(s)
}
