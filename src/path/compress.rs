//! Middle truncation of strings measured in Unicode scalar values

/// Shortens `s` to `max_len` chars by replacing a run around its midpoint
/// with a single `truncator`.
///
/// Strings already within `max_len` are returned unchanged. Otherwise the
/// result is exactly `max_len` chars long, except for `max_len == 0` where the
/// truncator alone remains.
pub fn compress_with_truncator(s: &str, truncator: char, max_len: usize) -> String {
    let chars: Vec<char> = s.chars().collect();
    let len = chars.len();

    if len <= max_len {
        return s.to_string();
    }

    let reduction = len - max_len;

    // start = floor(len/2 - reduction/2), which is floor(max_len/2)
    let start = (max_len / 2).min(len);
    let end = (start + reduction).min(len);

    let mut out = String::with_capacity(s.len());
    out.extend(&chars[..start]);
    out.push(truncator);
    if end + 1 < len {
        out.extend(&chars[end + 1..]);
    }
    out
}
