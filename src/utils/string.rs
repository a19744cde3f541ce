//! String helpers for status lines and reports

/// Pluralize a word based on count
pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}

/// Join vertex ids as `a → b → c`
pub fn vertex_path(vertices: &[usize]) -> String {
    vertices
        .iter()
        .map(usize::to_string)
        .collect::<Vec<_>>()
        .join(" → ")
}
