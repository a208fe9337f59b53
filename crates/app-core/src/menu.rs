//! Sectioned user menu
//!
//! Static, read-only menu shown on the gated edition's user screen.

use serde::{Deserialize, Serialize};

/// A titled group of menu rows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuSection {
    /// Section heading
    pub title: String,
    /// Row labels, in display order
    pub items: Vec<String>,
}

impl MenuSection {
    /// Create a section from borrowed labels
    pub fn new(title: &str, items: &[&str]) -> Self {
        Self {
            title: title.to_string(),
            items: items.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Ordered list of menu sections
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionedMenu {
    /// Sections in display order
    pub sections: Vec<MenuSection>,
}

impl SectionedMenu {
    /// The user screen menu
    pub fn user_menu() -> Self {
        Self {
            sections: vec![
                MenuSection::new("Compte", &["Modifier le profil", "Paramètres"]),
                MenuSection::new("Autres", &["Aide", "Déconnexion"]),
            ],
        }
    }

    /// Row label at (section, row)
    pub fn row(&self, section: usize, row: usize) -> Option<&str> {
        self.sections
            .get(section)
            .and_then(|s| s.items.get(row))
            .map(String::as_str)
    }

    /// Total number of rows across all sections
    pub fn row_count(&self) -> usize {
        self.sections.iter().map(|s| s.items.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_menu_sections() {
        let menu = SectionedMenu::user_menu();
        let titles: Vec<&str> = menu.sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["Compte", "Autres"]);
        assert_eq!(menu.sections[0].items.len(), 2);
        assert_eq!(menu.sections[1].items.len(), 2);
        assert_eq!(menu.row_count(), 4);
    }

    #[test]
    fn test_row_lookup() {
        let menu = SectionedMenu::user_menu();
        assert_eq!(menu.row(1, 1), Some("Déconnexion"));
        assert_eq!(menu.row(0, 2), None);
        assert_eq!(menu.row(2, 0), None);
    }
}
