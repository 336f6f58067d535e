/// Substring of `s` up to (excluding) the first occurrence of `delimiter`,
/// or the whole string when the delimiter is absent.
///
/// Schedule sheets pack alternative course codes and names into one cell,
/// separated by `;`. Only the first segment is the semantic value.
pub fn first_segment(s: &str, delimiter: char) -> &str {
    match s.find(delimiter) {
        Some(idx) => &s[..idx],
        None => s,
    }
}
