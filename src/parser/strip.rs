//! Comment delimiter stripping.
//!
//! Turns a raw documentation comment into physical lines with the
//! delimiter syntax removed. Everything after the marker is kept
//! byte-for-byte — `/// \brief Aaa.` strips to ` \brief Aaa.` — because
//! the renderers round-trip that whitespace.

/// Strip comment delimiters, one output line per physical source line.
pub fn strip(raw: &str) -> Vec<String> {
    let trimmed = raw.trim_start();
    for opener in ["/**", "/*!", "/*"] {
        if let Some(rest) = trimmed.strip_prefix(opener) {
            let body = rest.trim_end();
            let body = body.strip_suffix("*/").unwrap_or(body);
            return body.split('\n').map(strip_decoration).collect();
        }
    }
    raw.lines().map(strip_line_marker).collect()
}

/// Remove the leading whitespace-then-`*` decoration of block comment
/// interior lines; lines without one pass through unchanged.
fn strip_decoration(line: &str) -> String {
    let stripped = line.trim_start();
    if let Some(rest) = stripped.strip_prefix('*') {
        return rest.to_string();
    }
    line.to_string()
}

/// Remove a `///`, `//!` or `//` marker; content lines pass through.
fn strip_line_marker(line: &str) -> String {
    let stripped = line.trim_start();
    for marker in ["///", "//!", "//"] {
        if let Some(rest) = stripped.strip_prefix(marker) {
            return rest.to_string();
        }
    }
    line.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_line_block() {
        assert_eq!(
            strip("/** @brief Function 1. */"),
            vec![" @brief Function 1. "]
        );
    }

    #[test]
    fn multiline_block_with_decoration() {
        let raw = "/**\n * @brief Do the mambo.\n *        (Not to be confused with the samba.)\n */";
        assert_eq!(
            strip(raw),
            vec![
                "",
                " @brief Do the mambo.",
                "        (Not to be confused with the samba.)",
                " ",
            ]
        );
    }

    #[test]
    fn triple_slash_lines_keep_leading_space() {
        let raw = "/// \\brief Aaa.\n///\n/// Bbb.";
        assert_eq!(strip(raw), vec![" \\brief Aaa.", "", " Bbb."]);
    }

    #[test]
    fn qt_style_opener() {
        assert_eq!(strip("/*! \\brief Hi. */"), vec![" \\brief Hi. "]);
    }

    #[test]
    fn bare_text_passes_through() {
        assert_eq!(strip("just text\nmore"), vec!["just text", "more"]);
    }

    #[test]
    fn lone_star_line_becomes_blank() {
        let raw = "/**\n * One.\n *\n * Two.\n */";
        assert_eq!(strip(raw), vec!["", " One.", "", " Two.", " "]);
    }
}
