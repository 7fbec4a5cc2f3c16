//! Template previews for the prompt picker

/// Characters of template text shown before truncating
pub const PREVIEW_CHARS: usize = 100;

/// Appended to truncated previews
pub const PREVIEW_MARKER: &str = "...";

/// The template itself if short enough, else its first 100 characters plus `...`
pub fn preview(template: &str) -> String {
    match template.char_indices().nth(PREVIEW_CHARS) {
        Some((idx, _)) => format!("{}{}", &template[..idx], PREVIEW_MARKER),
        None => template.to_string(),
    }
}
