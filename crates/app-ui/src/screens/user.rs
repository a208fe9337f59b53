//! User screen

use crate::action::Action;
use crate::components::{Container, Icon, Image, Pressable, SectionList, Text, View};
use crate::strings;
use crate::styles::StyleClass;
use app_core::{Edition, SectionedMenu};

/// Render the user screen for an edition
pub fn render(edition: Edition, menu: &SectionedMenu) -> View {
    if edition.has_user_menu() {
        render_with_menu(menu)
    } else {
        Container::new()
            .with_class(StyleClass::Center)
            .child(Text::new(strings::USER_LABEL))
            .into()
    }
}

/// Header and sectioned menu
///
/// Rows dispatch [`Action::PressMenuRow`], which has no destination yet.
fn render_with_menu(menu: &SectionedMenu) -> View {
    let header = Container::new()
        .with_class(StyleClass::UserHeader)
        .child(Image::new(strings::USER_AVATAR).with_class(StyleClass::Avatar))
        .child(Text::new(strings::USER_LABEL).with_class(StyleClass::UserName));

    let mut list = SectionList::new().with_header_class(StyleClass::SectionHeader);
    for (section, entry) in menu.sections.iter().enumerate() {
        let rows: Vec<View> = entry
            .items
            .iter()
            .enumerate()
            .map(|(row, label)| {
                let content = Container::new()
                    .with_class(StyleClass::MenuRow)
                    .child(Text::new(label))
                    .child(Icon::new(strings::CHEVRON_ICON));
                Pressable::new(Action::PressMenuRow { section, row }, content).into()
            })
            .collect();
        list = list.section(&entry.title, rows);
    }

    Container::new().child(header).child(list).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_is_label_only() {
        let view = render(Edition::Classic, &SectionedMenu::user_menu());
        assert_eq!(view.texts(), vec!["Utilisateur"]);
        assert!(view.actions().is_empty());
    }

    #[test]
    fn test_gated_sections_in_order() {
        let view = render(Edition::Gated, &SectionedMenu::user_menu());
        let mut sections = Vec::new();
        view.walk(&mut |v| {
            if let View::SectionList(list) = v {
                assert_eq!(list.header_class, Some(StyleClass::SectionHeader));
                for s in &list.sections {
                    sections.push((s.title.clone(), s.rows.len()));
                }
            }
        });
        assert_eq!(
            sections,
            vec![("Compte".to_string(), 2), ("Autres".to_string(), 2)]
        );
    }

    #[test]
    fn test_gated_rows_have_chevrons_and_actions() {
        let view = render(Edition::Gated, &SectionedMenu::user_menu());
        let mut chevrons = 0;
        view.walk(&mut |v| {
            if let View::Icon(icon) = v {
                assert_eq!(icon.name, "chevron-right");
                chevrons += 1;
            }
        });
        assert_eq!(chevrons, 4);
        assert_eq!(view.actions()[3], &Action::PressMenuRow { section: 1, row: 1 });
        assert_eq!(view.texts()[0], "Utilisateur");
    }
}
