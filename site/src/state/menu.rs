//! Main navigation table.
//!
//! The table is compiled in and handed to the header through context. Slug
//! `"/"` is the site root; every other slug is a generic content page.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

/// One entry of the navigation table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuItem {
    pub label: &'static str,
    pub slug: &'static str,
}

const MAIN: &[MenuItem] = &[
    MenuItem { label: "Case", slug: "/" },
    MenuItem { label: "Om oss", slug: "om-oss" },
    MenuItem { label: "Jobba hos oss", slug: "jobba-hos-oss" },
    MenuItem { label: "Kontakt", slug: "kontakt" },
];

/// Read-only view over an ordered menu table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Menu {
    items: &'static [MenuItem],
}

impl Menu {
    /// The site's main navigation.
    #[must_use]
    pub fn main() -> Self {
        Self { items: MAIN }
    }

    #[must_use]
    pub fn items(&self) -> &'static [MenuItem] {
        self.items
    }
}

/// Resolved link for a menu item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuLink {
    pub label: &'static str,
    /// Logical route, e.g. `/page?slug=kontakt`.
    pub href: String,
    /// Pretty path shown in the address bar, e.g. `/kontakt`.
    pub as_path: String,
}

impl MenuItem {
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.slug == "/"
    }

    /// Resolve the logical and pretty paths for this item.
    #[must_use]
    pub fn link(&self) -> MenuLink {
        if self.is_root() {
            return MenuLink { label: self.label, href: "/".to_owned(), as_path: "/".to_owned() };
        }
        MenuLink {
            label: self.label,
            href: crate::util::links::page_href(self.slug),
            as_path: crate::util::links::page_path(self.slug),
        }
    }
}
