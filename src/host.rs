//! Terminal capability probe.
//!
//! Features the hosting terminal may or may not support are detected once at
//! startup. Presentation code branches on this fixed set instead of probing
//! per draw; a missing capability downgrades an element to a plain fallback
//! or an informational caption, never an error.

use std::env;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Capabilities {
    /// 24-bit RGB color (gradients, particle tints).
    pub true_color: bool,
    /// UTF-8 locale: decorative glyphs, braille chart marks.
    pub unicode: bool,
    /// Terminal is interactive enough for mouse capture.
    pub mouse: bool,
    /// Initial size is at least 80x24; below that the sidebar is dropped.
    pub roomy: bool,
}

impl Capabilities {
    /// Probe the environment. `size` is the initial terminal (cols, rows).
    pub fn detect(size: (u16, u16)) -> Self {
        Self::from_env(
            env::var("COLORTERM").ok().as_deref(),
            env::var("TERM").ok().as_deref(),
            env::var("LC_ALL")
                .or_else(|_| env::var("LC_CTYPE"))
                .or_else(|_| env::var("LANG"))
                .ok()
                .as_deref(),
            size,
        )
    }

    fn from_env(
        colorterm: Option<&str>,
        term: Option<&str>,
        locale: Option<&str>,
        size: (u16, u16),
    ) -> Self {
        let true_color = colorterm
            .map(|v| {
                let v = v.to_lowercase();
                v.contains("truecolor") || v.contains("24bit")
            })
            .unwrap_or(false);

        let unicode = locale
            .map(|v| {
                let v = v.to_lowercase();
                v.contains("utf-8") || v.contains("utf8")
            })
            .unwrap_or(false);

        let mouse = term.map(|t| !t.is_empty() && t != "dumb").unwrap_or(false);

        let roomy = size.0 >= 80 && size.1 >= 24;

        Self {
            true_color,
            unicode,
            mouse,
            roomy,
        }
    }

    /// Pick a glyph: the decorated form under a UTF-8 locale, ASCII otherwise.
    pub fn glyph<'a>(&self, fancy: &'a str, ascii: &'a str) -> &'a str {
        if self.unicode {
            fancy
        } else {
            ascii
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_true_color_detection() {
        let caps = Capabilities::from_env(Some("truecolor"), Some("xterm"), None, (100, 40));
        assert!(caps.true_color);
        let caps = Capabilities::from_env(Some("24bit"), Some("xterm"), None, (100, 40));
        assert!(caps.true_color);
        let caps = Capabilities::from_env(Some("yes"), Some("xterm"), None, (100, 40));
        assert!(!caps.true_color);
        let caps = Capabilities::from_env(None, Some("xterm"), None, (100, 40));
        assert!(!caps.true_color);
    }

    #[test]
    fn test_unicode_detection() {
        let caps =
            Capabilities::from_env(None, Some("xterm"), Some("en_US.UTF-8"), (100, 40));
        assert!(caps.unicode);
        let caps = Capabilities::from_env(None, Some("xterm"), Some("C"), (100, 40));
        assert!(!caps.unicode);
        let caps = Capabilities::from_env(None, Some("xterm"), None, (100, 40));
        assert!(!caps.unicode);
    }

    #[test]
    fn test_mouse_detection() {
        assert!(Capabilities::from_env(None, Some("xterm-256color"), None, (100, 40)).mouse);
        assert!(!Capabilities::from_env(None, Some("dumb"), None, (100, 40)).mouse);
        assert!(!Capabilities::from_env(None, Some(""), None, (100, 40)).mouse);
        assert!(!Capabilities::from_env(None, None, None, (100, 40)).mouse);
    }

    #[test]
    fn test_roomy_threshold() {
        assert!(Capabilities::from_env(None, None, None, (80, 24)).roomy);
        assert!(!Capabilities::from_env(None, None, None, (79, 24)).roomy);
        assert!(!Capabilities::from_env(None, None, None, (80, 23)).roomy);
    }

    #[test]
    fn test_glyph_fallback() {
        let mut caps = Capabilities::from_env(None, None, Some("en_US.UTF-8"), (100, 40));
        assert_eq!(caps.glyph("❯", ">"), "❯");
        caps.unicode = false;
        assert_eq!(caps.glyph("❯", ">"), ">");
    }
}
