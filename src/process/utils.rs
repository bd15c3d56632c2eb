/// Clean raw `AGYSUBT` text into a display name: drop everything up to and
/// including the first `-`, remove every `"`, then trim.
/// Text without a dash keeps its full content.
pub fn normalize_agency_name(raw: &str) -> String {
    let tail = match raw.find('-') {
        Some(pos) => &raw[pos + 1..],
        None => raw,
    };
    tail.replace('"', "").trim().to_string()
}

/// Strip one trailing `.0` left behind when a code column was read as floats
/// (`"13.0"` → `"13"`). Suffix only; nothing else in the text changes.
pub fn strip_float_suffix(code: &str) -> &str {
    code.strip_suffix(".0").unwrap_or(code)
}

/// Parse an integer category code, accepting float text for whole numbers
/// (`"1"` and `"1.0"` both give `1`).
pub fn parse_integer_code(raw: &str) -> Option<i64> {
    let s = raw.trim();
    if let Ok(v) = s.parse::<i64>() {
        return Some(v);
    }
    let f = s.parse::<f64>().ok()?;
    if f.is_finite() && f.fract() == 0.0 && f.abs() < i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}
