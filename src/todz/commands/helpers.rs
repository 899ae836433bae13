/// Coerce user-supplied id text to a numeric id, leniently.
///
/// The id arrives as raw text and the lookup tolerates loose input:
/// surrounding whitespace, a leading `+`, leading zeros, and trailing
/// non-digit characters are all accepted (`" 3 "`, `"03"`, `"3."` target
/// todo 3). Input with no leading digits coerces to nothing, which the
/// caller reports as not-found. Stored ids stay strictly numeric; the
/// coercion lives only at this boundary.
pub fn coerce_id(raw: &str) -> Option<u64> {
    let s = raw.trim();
    let s = s.strip_prefix('+').unwrap_or(s);
    let end = s
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(s.len());
    if end == 0 {
        return None;
    }
    s[..end].parse().ok()
}

/// How to name the target in user messages: the coerced number when the
/// input parses, the raw trimmed text otherwise.
pub fn id_label(raw: &str) -> String {
    match coerce_id(raw) {
        Some(id) => id.to_string(),
        None => raw.trim().to_string(),
    }
}
