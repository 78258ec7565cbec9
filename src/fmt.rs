/// Format a quantity or price with a fixed number of decimal places: 150.00
pub fn number(val: f64, decimals: usize) -> String {
    format!("{val:.decimals$}")
}

/// Coerce raw user input to a numeric value. An empty field means zero;
/// anything unparseable returns `None` and the field is left unchanged.
pub fn parse_input(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    trimmed.parse().ok()
}

/// Human-readable byte count for the status display.
pub fn format_bytes(bytes: u64) -> String {
    if bytes >= 1_048_576 {
        format!("{:.1} MB", bytes as f64 / 1_048_576.0)
    } else if bytes >= 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{bytes} B")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_formatting() {
        assert_eq!(number(150.0, 2), "150.00");
        assert_eq!(number(25.5, 2), "25.50");
        assert_eq!(number(-3.125, 2), "-3.13");
        assert_eq!(number(0.0, 2), "0.00");
        assert_eq!(number(1.5, 0), "2");
    }

    #[test]
    fn test_parse_input() {
        assert_eq!(parse_input("42.5"), Some(42.5));
        assert_eq!(parse_input("  -7 "), Some(-7.0));
        assert_eq!(parse_input(""), Some(0.0));
        assert_eq!(parse_input("   "), Some(0.0));
        assert_eq!(parse_input("abc"), None);
    }

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(2048), "2.0 KB");
        assert_eq!(format_bytes(3_145_728), "3.0 MB");
    }
}
