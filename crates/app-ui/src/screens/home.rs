//! Home list screen

use crate::action::Action;
use crate::components::{ImageBackground, List, Pressable, Text, View};
use crate::styles::StyleClass;
use app_core::Catalog;

/// Render the catalog as a tappable list
///
/// Row `i` dispatches [`Action::SelectItem`] with `index: i`; rows are keyed
/// by item id.
pub fn render(catalog: &Catalog) -> View {
    catalog
        .iter()
        .enumerate()
        .fold(List::new().with_class(StyleClass::Container), |list, (index, item)| {
            let card = ImageBackground::new(&item.image)
                .with_class(StyleClass::Item)
                .child(Text::new(&item.title).with_class(StyleClass::ItemTitle));
            list.row(&item.id, Pressable::new(Action::SelectItem { index }, card))
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_row_per_item() {
        let catalog = Catalog::builtin();
        let view = render(&catalog);
        let View::List(list) = &view else {
            panic!("home body should be a list");
        };
        assert_eq!(list.rows.len(), catalog.len());
        let keys: Vec<&str> = list.rows.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_rows_show_titles_and_images() {
        let catalog = Catalog::builtin();
        let view = render(&catalog);
        assert_eq!(view.texts(), vec!["Item 1", "Item 2", "Item 3"]);
        let images: Vec<&str> = catalog.iter().map(|i| i.image.as_str()).collect();
        assert_eq!(view.image_uris(), images);
    }

    #[test]
    fn test_row_actions() {
        let view = render(&Catalog::builtin());
        assert_eq!(
            view.actions(),
            vec![
                &Action::SelectItem { index: 0 },
                &Action::SelectItem { index: 1 },
                &Action::SelectItem { index: 2 },
            ]
        );
    }
}
