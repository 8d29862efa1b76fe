/// Sanitize a file name for use as a storage object key.
///
/// Brackets, parentheses and braces become `_`, as does every other
/// character outside ASCII alphanumerics, `_`, `-` and `.`.
pub fn sanitize_file_name(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.') { c } else { '_' })
        .collect()
}
