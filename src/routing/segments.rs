//! Path segment helpers.
//!
//! Paths are handled as `/`-separated segment lists. Leading and trailing
//! slashes are trimmed before splitting and a single leading `/` is put back
//! when a path is rebuilt.

/// Trim leading and trailing slashes.
pub fn trim_slashes(path: &str) -> &str {
    path.trim_matches('/')
}

/// Split a path into its segments, ignoring leading/trailing slashes.
///
/// The root path (`/` or empty) has no segments.
pub fn split(path: &str) -> Vec<&str> {
    let trimmed = trim_slashes(path);
    if trimmed.is_empty() {
        return Vec::new();
    }
    trimmed.split('/').collect()
}

/// Join segments back into a path with a single leading slash.
pub fn join<S: AsRef<str>>(segments: &[S]) -> String {
    let mut out = String::from("/");
    for (i, segment) in segments.iter().enumerate() {
        if i > 0 {
            out.push('/');
        }
        out.push_str(segment.as_ref());
    }
    out
}

/// Normalize a path to `/a/b` form.
pub fn normalize(path: &str) -> String {
    format!("/{}", trim_slashes(path))
}

/// True if the path has at least one empty segment between slashes
/// (e.g. `/a//b`).
pub fn has_empty_segment(path: &str) -> bool {
    let trimmed = trim_slashes(path);
    !trimmed.is_empty() && trimmed.split('/').any(str::is_empty)
}
