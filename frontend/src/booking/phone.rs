/// Rewrites a phone value so it starts with the canonical country prefix,
/// e.g. `+92 `. Only values already typed as `+92...` or `92...` are touched;
/// local formats are left for the user to finish.
pub fn apply_country_prefix(value: &str, prefix: &str) -> String {
    if value.is_empty() || value.starts_with(prefix) {
        return value.to_string();
    }
    let bare = prefix.trim_end();
    let digits = bare.trim_start_matches('+');
    if let Some(rest) = value.strip_prefix(bare) {
        format!("{}{}", prefix, rest)
    } else if let Some(rest) = value.strip_prefix(digits) {
        format!("{}{}", prefix, rest)
    } else {
        value.to_string()
    }
}
