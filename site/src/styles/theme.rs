//! Light and dark colour variable sets.
//!
//! Light applies to `:root`; dark overrides it under `.dark-mode`, which
//! [`crate::util::dark_mode`] toggles on the document root.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt::Write as _;

/// A named set of CSS custom properties bound to one selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeVariables {
    pub selector: &'static str,
    pub vars: &'static [(&'static str, &'static str)],
}

pub const LIGHT: ThemeVariables = ThemeVariables {
    selector: ":root",
    vars: &[
        ("--bg-color", "#fff"),
        ("--header-color", "#fcfcfc"),
        ("--logo-color", "#000"),
        ("--primary-color", "#e4570e"),
        ("--primary-color-light", "#e4570e"),
        ("--text-color", "#2d3748"),
        ("--text-color-secondary", "#4a5568"),
        ("--text-color-tertiary", "#4a5568"),
    ],
};

pub const DARK: ThemeVariables = ThemeVariables {
    selector: ".dark-mode",
    vars: &[
        ("--bg-color", "#171717"),
        ("--header-color", "#1A1A1A"),
        ("--logo-color", "#e4570e"),
        ("--primary-color", "#e4570e"),
        ("--primary-color-light", "#e4570e"),
        ("--text-color", "#E0E0E0"),
        ("--text-color-secondary", "#F2F2F2"),
        ("--text-color-tertiary", "#4a5568"),
    ],
};

impl ThemeVariables {
    /// Render as a single CSS rule.
    #[must_use]
    pub fn to_css(&self) -> String {
        let mut out = format!("{}{{", self.selector);
        for (name, value) in self.vars {
            let _ = write!(out, "{name}:{value};");
        }
        out.push('}');
        out
    }
}
