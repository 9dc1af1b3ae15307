/// Shorten a filename for display next to the file picker.
///
/// Keeps the first 25 characters and appends an ellipsis. The ellipsis is
/// appended unconditionally, even when the name is short enough to fit —
/// unusual, but it is the established look of this form.
pub fn truncate_file_name(name: &str) -> String {
    let head: String = name.chars().take(25).collect();
    format!("{}...", head)
}
