/// Derives the stable identifier for a path plus leaf title.
///
/// The leaf is appended, segments are joined with `:`, the whole string is
/// lowercased, whitespace runs collapse to a single `-`, and anything
/// outside `[a-z0-9:.-]` is stripped. The derivation is lossy, so distinct
/// inputs may collide; callers must not rely on global uniqueness.
pub fn derive_id<S: AsRef<str>>(segments: &[S], leaf: &str) -> String {
    let joined = segments
        .iter()
        .map(AsRef::as_ref)
        .chain(std::iter::once(leaf))
        .collect::<Vec<_>>()
        .join(":");
    let lowered = joined.to_lowercase();

    let mut out = String::with_capacity(lowered.len());
    let mut in_whitespace = false;
    for ch in lowered.chars() {
        if ch.is_whitespace() {
            if !in_whitespace {
                out.push('-');
            }
            in_whitespace = true;
            continue;
        }
        in_whitespace = false;
        if matches!(ch, 'a'..='z' | '0'..='9' | ':' | '.' | '-') {
            out.push(ch);
        }
    }
    out
}
