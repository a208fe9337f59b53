//! Details screen

use crate::components::{Container, Text, View};
use crate::strings;
use crate::styles::StyleClass;

/// Title to display for the `title` param
pub fn display_title(title: Option<&str>) -> &str {
    match title {
        Some(title) if !title.is_empty() => title,
        _ => strings::DETAILS_FALLBACK,
    }
}

/// Render the details body
pub fn render(title: Option<&str>) -> View {
    Container::new()
        .with_class(StyleClass::DetailsContainer)
        .child(Text::new(display_title(title)).with_class(StyleClass::DetailsTitle))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shows_title() {
        assert_eq!(render(Some("Item 3")).texts(), vec!["Item 3"]);
    }

    #[test]
    fn test_fallback() {
        assert_eq!(render(None).texts(), vec!["Détail"]);
        assert_eq!(display_title(Some("")), "Détail");
    }
}
