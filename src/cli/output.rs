//! Output formatting
//!
//! Renders layered orderings as flat per-service lines, comma-joined
//! per-layer lines, or JSON, and formats fatal errors.

/// One service name per line, layer order preserved
pub fn render_flat(layers: &[Vec<String>]) -> String {
    layers
        .iter()
        .flatten()
        .cloned()
        .collect::<Vec<_>>()
        .join("\n")
}

/// One comma-joined line per layer
pub fn render_grouped(layers: &[Vec<String>]) -> String {
    layers
        .iter()
        .map(|layer| layer.join(","))
        .collect::<Vec<_>>()
        .join("\n")
}

/// JSON array of layers
pub fn render_json(layers: &[Vec<String>]) -> String {
    serde_json::to_string(layers).unwrap_or_else(|_| "[]".to_string())
}

/// Print an error chain to stderr
pub fn display_error(error: &anyhow::Error) {
    eprintln!("error: {error}");
    for cause in error.chain().skip(1) {
        eprintln!("  caused by: {cause}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layers() -> Vec<Vec<String>> {
        vec![
            vec!["db".to_string(), "cache".to_string()],
            vec!["api".to_string()],
        ]
    }

    #[test]
    fn test_render_flat() {
        assert_eq!(render_flat(&layers()), "db\ncache\napi");
    }

    #[test]
    fn test_render_grouped() {
        assert_eq!(render_grouped(&layers()), "db,cache\napi");
    }

    #[test]
    fn test_render_json() {
        assert_eq!(render_json(&layers()), r#"[["db","cache"],["api"]]"#);
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render_flat(&[]), "");
        assert_eq!(render_grouped(&[]), "");
        assert_eq!(render_json(&[]), "[]");
    }
}
