//! Navigation Flow Tests
//!
//! End-to-end tests driving the root controller through the navigation
//! graph and inspecting the rendered view trees.

use app_core::{AppConfig, Catalog, Edition};
use app_state::TextField;
use app_ui::{Action, App, NavigationTab, Route, Transition, View};
use std::collections::HashSet;

fn logged_in() -> App {
    let mut app = App::new(AppConfig::for_edition(Edition::Gated));
    app.dispatch(Action::SubmitLogin).unwrap();
    app
}

fn select_tab(app: &mut App, tab: NavigationTab) {
    app.dispatch(Action::SelectTab { tab }).unwrap();
}

/// Tapping any item shows its title on the details screen
#[test]
fn test_every_item_opens_its_details() {
    let catalog = Catalog::builtin();
    for (index, item) in catalog.iter().enumerate() {
        let mut app = logged_in();

        // Tap through the action bound in the rendered list, not a hand-built one
        let list = app.render();
        let action = list.body.actions()[index].clone();
        app.dispatch(action).unwrap();

        let details = app.render();
        assert_eq!(details.route, Route::details(item.title.clone()));
        assert_eq!(details.body.texts(), vec![item.title.as_str()]);
        assert_eq!(
            details.header.as_ref().map(|h| h.title.as_str()),
            Some("Details")
        );
    }
}

/// Switching away from Home and back restores the details screen
#[test]
fn test_tab_stack_persistence() {
    let mut app = logged_in();
    app.dispatch(Action::SelectItem { index: 2 }).unwrap();

    select_tab(&mut app, NavigationTab::Search);
    assert_eq!(app.current_route(), &Route::Search);

    select_tab(&mut app, NavigationTab::Home);
    assert_eq!(app.current_route(), &Route::details("Item 3"));
    assert_eq!(app.render().body.texts(), vec!["Item 3"]);

    app.dispatch(Action::Back).unwrap();
    assert_eq!(app.current_route(), &Route::Home);
}

/// Every tab keeps its own stack through a tour of all tabs
#[test]
fn test_tab_tour_preserves_all_tabs() {
    let mut app = logged_in();
    app.dispatch(Action::SelectItem { index: 0 }).unwrap();
    select_tab(&mut app, NavigationTab::Search);
    app.dispatch(Action::change_text(TextField::SearchQuery, "plage"))
        .unwrap();
    select_tab(&mut app, NavigationTab::User);
    select_tab(&mut app, NavigationTab::Home);
    assert_eq!(app.current_route(), &Route::details("Item 1"));
    select_tab(&mut app, NavigationTab::Search);
    assert_eq!(app.search_query(), Some("plage"));
}

/// Submitting the login form with empty fields enters the main app
#[test]
fn test_login_with_empty_fields_enters_main_app() {
    let mut app = App::new(AppConfig::for_edition(Edition::Gated));
    let login = app.render();
    assert!(login.body.inputs().iter().all(|i| i.value.is_empty()));

    let submit = login.body.actions()[0].clone();
    assert_eq!(submit, Action::SubmitLogin);
    let transition = app.dispatch(submit).unwrap();

    assert!(matches!(
        transition,
        Transition::Navigated {
            from: Route::Login,
            to: Route::Home,
            ..
        }
    ));
    assert!(app.render().tab_bar.is_some());
}

/// Login with filled fields behaves the same way
#[test]
fn test_login_with_filled_fields() {
    let mut app = App::new(AppConfig::for_edition(Edition::Gated));
    app.dispatch(Action::change_text(TextField::Email, "alice@example.com"))
        .unwrap();
    app.dispatch(Action::change_text(TextField::Password, "secret"))
        .unwrap();
    app.dispatch(Action::SubmitLogin).unwrap();
    assert_eq!(app.current_route(), &Route::Home);
}

/// Typing updates the query on each keystroke and never touches the grid
#[test]
fn test_search_typing_leaves_grid_alone() {
    let mut app = logged_in();
    select_tab(&mut app, NavigationTab::Search);
    let before = app.render().body.image_uris().len();
    assert_eq!(before, 21);

    let mut typed = String::new();
    for c in "Item 2".chars() {
        typed.push(c);
        let transition = app
            .dispatch(Action::change_text(TextField::SearchQuery, typed.clone()))
            .unwrap();
        assert_eq!(
            transition,
            Transition::LocalStateChanged {
                field: TextField::SearchQuery
            }
        );

        let screen = app.render();
        assert_eq!(screen.body.inputs()[0].value, typed);
        assert_eq!(screen.body.image_uris().len(), 21);
    }
}

/// The user menu shows "Compte" then "Autres", two rows each
#[test]
fn test_user_menu_sections() {
    let mut app = logged_in();
    select_tab(&mut app, NavigationTab::User);

    let screen = app.render();
    let mut sections = Vec::new();
    screen.body.walk(&mut |view| {
        if let View::SectionList(list) = view {
            sections.extend(list.sections.iter().map(|s| (s.title.as_str(), s.rows.len())));
        }
    });
    assert_eq!(sections, vec![("Compte", 2), ("Autres", 2)]);

    // Rows are tappable but lead nowhere
    for action in screen.body.actions() {
        assert_eq!(app.dispatch(action.clone()).unwrap(), Transition::Unchanged);
    }
    assert_eq!(app.current_route(), &Route::User);
}

/// Catalog ids are pairwise distinct
#[test]
fn test_catalog_ids_unique() {
    let catalog = Catalog::builtin();
    let ids: HashSet<&str> = catalog.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids.len(), catalog.len());
}

/// The rendered tab bar drives tab switching
#[test]
fn test_tab_bar_actions() {
    let mut app = logged_in();
    let tab_bar = app.render().tab_bar.unwrap();
    let search = tab_bar
        .items
        .iter()
        .find(|item| item.id == "search")
        .unwrap()
        .on_press
        .clone();

    assert_eq!(
        app.dispatch(search).unwrap(),
        Transition::TabSwitched {
            from: NavigationTab::Home,
            to: NavigationTab::Search
        }
    );
    assert_eq!(app.render().tab_bar.unwrap().active_tab(), Some("search"));
}

/// Rendered screens serialize to JSON for the rendering runtime
#[test]
fn test_screen_json() {
    let mut app = logged_in();
    app.dispatch(Action::SelectItem { index: 1 }).unwrap();
    let json = serde_json::to_value(app.render()).unwrap();
    assert_eq!(json["route"]["route"], "Details");
    assert_eq!(json["route"]["params"]["title"], "Item 2");
    assert_eq!(json["body"]["type"], "container");
    assert_eq!(json["tab_bar"]["items"][0]["is_active"], true);
}
