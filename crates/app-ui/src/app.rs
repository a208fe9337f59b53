//! Root controller
//!
//! [`App`] owns all mutable state of a running front-end: the session
//! switch, the tabbed navigation state, and the login form while the login
//! screen is up. Input arrives as [`Action`]s through [`App::dispatch`];
//! [`App::render`] is a pure function of the current state.
//!
//! # Example
//!
//! ```rust
//! use app_core::{AppConfig, Edition};
//! use app_ui::{Action, App, Route};
//!
//! let mut app = App::new(AppConfig::for_edition(Edition::Gated));
//! assert_eq!(app.current_route(), &Route::Login);
//!
//! app.dispatch(Action::SubmitLogin).unwrap();
//! app.dispatch(Action::SelectItem { index: 2 }).unwrap();
//! assert_eq!(app.current_route(), &Route::details("Item 3"));
//! ```

use crate::action::Action;
use crate::components::TabBar;
use crate::navigation::{
    NavigationAnimation, NavigationError, NavigationState, NavigationTab, Route, Router,
};
use crate::screens::{self, ScreenView};
use app_core::{
    AcceptAnyCredentials, AppConfig, AuthError, Catalog, LoginPolicy, SearchGrid, SectionedMenu,
};
use app_state::{LoginForm, SessionError, SessionState, TextField};
use serde::Serialize;
use thiserror::Error;

/// Errors returned by [`App::dispatch`]
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AppError {
    /// Navigation error
    #[error("Navigation error: {0}")]
    Navigation(#[from] NavigationError),

    /// Session error
    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    /// The login policy refused the submission
    #[error("Login rejected: {0}")]
    LoginRejected(#[from] AuthError),
}

/// Result type for app operations
pub type Result<T> = std::result::Result<T, AppError>;

/// Outcome of a successful dispatch
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "transition", rename_all = "snake_case")]
pub enum Transition {
    /// The visible route changed within or into the main app
    Navigated {
        /// Previously visible route
        from: Route,
        /// Newly visible route
        to: Route,
        /// Suggested animation
        animation: NavigationAnimation,
    },
    /// Another tab became active
    TabSwitched {
        /// Previous tab
        from: NavigationTab,
        /// New tab
        to: NavigationTab,
    },
    /// Screen-local input changed
    LocalStateChanged {
        /// Changed field
        field: TextField,
    },
    /// Nothing visible changed
    Unchanged,
}

/// Root controller of the front-end
#[derive(Debug)]
pub struct App<P = AcceptAnyCredentials> {
    config: AppConfig,
    catalog: Catalog,
    menu: SectionedMenu,
    grid: SearchGrid,
    router: Router,
    session: SessionState,
    navigation: NavigationState,
    /// Present only while the login screen is shown
    login_form: Option<LoginForm>,
    policy: P,
}

impl App<AcceptAnyCredentials> {
    /// App with the built-in catalog and the default login policy
    pub fn new(config: AppConfig) -> Self {
        Self::with_parts(config, Catalog::builtin(), AcceptAnyCredentials)
    }
}

impl<P: LoginPolicy> App<P> {
    /// App with an explicit catalog and login policy
    pub fn with_parts(config: AppConfig, catalog: Catalog, policy: P) -> Self {
        let session = SessionState::new(config.edition);
        let login_form = (!session.in_main_app()).then(LoginForm::new);
        let grid = SearchGrid::placeholder(config.search_grid_len());
        tracing::debug!(edition = ?config.edition, items = catalog.len(), "App created");
        Self {
            config,
            catalog,
            menu: SectionedMenu::user_menu(),
            grid,
            router: Router::new(),
            session,
            navigation: NavigationState::new(),
            login_form,
            policy,
        }
    }

    /// Active configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Item catalog
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Session switch
    pub fn session(&self) -> &SessionState {
        &self.session
    }

    /// Main app navigation state (meaningful once in the main app)
    pub fn navigation(&self) -> &NavigationState {
        &self.navigation
    }

    /// Visible route
    pub fn current_route(&self) -> &Route {
        if self.session.in_main_app() {
            self.navigation.current_route()
        } else {
            &Route::Login
        }
    }

    /// Query typed into the search tab's bar
    pub fn search_query(&self) -> Option<&str> {
        self.navigation
            .stack(NavigationTab::Search)
            .current_entry()
            .local
            .search_query()
    }

    /// Apply an input event
    pub fn dispatch(&mut self, action: Action) -> Result<Transition> {
        let name = action.name();
        let result = if self.session.in_main_app() {
            self.dispatch_main(action)
        } else {
            self.dispatch_login(action)
        };

        match &result {
            Ok(Transition::Navigated { from, to, .. }) => {
                tracing::info!(action = name, from = %from.to_path(), to = %to.to_path(), "Navigated");
            }
            Ok(Transition::TabSwitched { from, to }) => {
                tracing::info!(action = name, from = from.id(), to = to.id(), "Switched tab");
            }
            Ok(_) => {}
            Err(e) => tracing::warn!(action = name, error = %e, "Action rejected"),
        }
        result
    }

    /// Actions accepted while the login screen is shown
    fn dispatch_login(&mut self, action: Action) -> Result<Transition> {
        match action {
            Action::SubmitLogin => self.submit_login(),
            Action::ChangeText { field, value } => {
                let form = self.login_form.get_or_insert_with(LoginForm::new);
                if form.apply_text(field, &value) {
                    Ok(Transition::LocalStateChanged { field })
                } else {
                    Err(self.unavailable(&Action::ChangeText { field, value }))
                }
            }
            Action::Open { path } => match self.router.match_path(&path) {
                route if route.requires_session() => {
                    Err(NavigationError::RequiresSession(route.to_path()).into())
                }
                Route::Login => Ok(Transition::Unchanged),
                _ => Err(NavigationError::NotFound(path).into()),
            },
            other => Err(self.unavailable(&other)),
        }
    }

    /// Hand the form to the login policy and enter the main app on success
    fn submit_login(&mut self) -> Result<Transition> {
        let credentials = self
            .login_form
            .clone()
            .unwrap_or_default()
            .into_credentials();
        self.policy.check(&credentials)?;
        self.session.enter_main_app()?;
        self.login_form = None;
        self.navigation.reset();

        Ok(Transition::Navigated {
            from: Route::Login,
            to: self.navigation.current_route().clone(),
            animation: NavigationAnimation::Fade,
        })
    }

    /// Actions accepted inside the main app
    fn dispatch_main(&mut self, action: Action) -> Result<Transition> {
        let from = self.navigation.current_route().clone();
        match action {
            Action::SubmitLogin => Err(SessionError::AlreadyInMainApp.into()),
            Action::SelectItem { index } => {
                if from != Route::Home {
                    return Err(self.unavailable(&action));
                }
                let item = self.catalog.get(index).ok_or(NavigationError::UnknownItem {
                    index,
                    len: self.catalog.len(),
                })?;
                let to = Route::details(item.title.clone());
                self.navigation.navigate(to.clone());
                Ok(Transition::Navigated {
                    from,
                    to,
                    animation: NavigationAnimation::Push,
                })
            }
            Action::Back => {
                if !self.navigation.go_back() {
                    return Ok(Transition::Unchanged);
                }
                Ok(Transition::Navigated {
                    from,
                    to: self.navigation.current_route().clone(),
                    animation: NavigationAnimation::Pop,
                })
            }
            Action::SelectTab { tab } => {
                let previous = self.navigation.active_tab;
                if self.navigation.switch_tab(tab) {
                    Ok(Transition::TabSwitched {
                        from: previous,
                        to: tab,
                    })
                } else {
                    Ok(Transition::Unchanged)
                }
            }
            Action::ChangeText { field, value } => {
                if self
                    .navigation
                    .current_entry_mut()
                    .local
                    .apply_text(field, &value)
                {
                    Ok(Transition::LocalStateChanged { field })
                } else {
                    Err(self.unavailable(&Action::ChangeText { field, value }))
                }
            }
            Action::PressMenuRow { section, row } => {
                let label = (from == Route::User && self.config.edition.has_user_menu())
                    .then(|| self.menu.row(section, row))
                    .flatten();
                match label {
                    Some(label) => {
                        tracing::debug!(section, row, label, "Menu row has no bound action");
                        Ok(Transition::Unchanged)
                    }
                    None => Err(self.unavailable(&action)),
                }
            }
            Action::Open { path } => self.open(from, path),
        }
    }

    /// Follow a deep link inside the main app
    fn open(&mut self, from: Route, path: String) -> Result<Transition> {
        let route = self.router.match_path(&path);
        let Some(tab) = route.tab() else {
            return match route {
                Route::NotFound => Err(NavigationError::NotFound(path).into()),
                _ => Err(self.unavailable(&Action::Open { path })),
            };
        };

        if route == tab.root_route() {
            self.navigation.reset_to_tab(tab);
        } else {
            self.navigation.switch_tab(tab);
            if self.navigation.current_route() != &route {
                self.navigation.navigate(route);
            }
        }

        let to = self.navigation.current_route().clone();
        if to == from {
            return Ok(Transition::Unchanged);
        }
        Ok(Transition::Navigated {
            from,
            to,
            animation: NavigationAnimation::None,
        })
    }

    fn unavailable(&self, action: &Action) -> AppError {
        NavigationError::ActionUnavailable {
            action: action.name().to_string(),
            route: self.current_route().to_path(),
        }
        .into()
    }

    /// Render the visible screen with its navigator chrome
    pub fn render(&self) -> ScreenView {
        if !self.session.in_main_app() {
            let form = self.login_form.clone().unwrap_or_default();
            return ScreenView::new(Route::Login, screens::login::render(&form));
        }

        let entry = self.navigation.current_entry();
        let route = entry.route.clone();
        let tab_bar = TabBar::new(self.navigation.active_tab);
        let view = match &route {
            Route::Home => {
                ScreenView::new(route.clone(), screens::home::render(&self.catalog))
                    .with_header(false)
            }
            Route::Details { title } => {
                let body = screens::details::render(title.as_deref());
                ScreenView::new(route.clone(), body).with_header(true)
            }
            Route::Search => {
                let query = entry.local.search_query().unwrap_or_default();
                ScreenView::new(route.clone(), screens::search::render(query, &self.grid))
            }
            Route::User => ScreenView::new(
                route.clone(),
                screens::user::render(self.config.edition, &self.menu),
            ),
            Route::Login | Route::NotFound => {
                ScreenView::new(route.clone(), screens::not_found())
            }
        };
        view.with_tab_bar(tab_bar)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use app_core::{Credentials, Edition};

    fn gated() -> App {
        App::new(AppConfig::for_edition(Edition::Gated))
    }

    fn classic() -> App {
        App::new(AppConfig::for_edition(Edition::Classic))
    }

    #[derive(Debug)]
    struct RequireEmail;

    impl LoginPolicy for RequireEmail {
        fn check(&self, credentials: &Credentials) -> app_core::auth::Result<()> {
            if credentials.email.contains('@') {
                Ok(())
            } else {
                Err(AuthError::InvalidCredentials)
            }
        }
    }

    #[test]
    fn test_initial_routes() {
        assert_eq!(gated().current_route(), &Route::Login);
        assert_eq!(classic().current_route(), &Route::Home);
    }

    #[test]
    fn test_login_with_empty_fields() {
        let mut app = gated();
        let transition = app.dispatch(Action::SubmitLogin).unwrap();
        assert_eq!(
            transition,
            Transition::Navigated {
                from: Route::Login,
                to: Route::Home,
                animation: NavigationAnimation::Fade,
            }
        );
        assert!(app.session().in_main_app());
        assert_eq!(app.session().logins(), 1);
    }

    #[test]
    fn test_login_twice_rejected() {
        let mut app = gated();
        app.dispatch(Action::SubmitLogin).unwrap();
        assert_eq!(
            app.dispatch(Action::SubmitLogin),
            Err(AppError::Session(SessionError::AlreadyInMainApp))
        );
    }

    #[test]
    fn test_policy_rejection_keeps_form() {
        let mut app = App::with_parts(
            AppConfig::for_edition(Edition::Gated),
            Catalog::builtin(),
            RequireEmail,
        );
        app.dispatch(Action::change_text(TextField::Email, "alice"))
            .unwrap();
        assert_eq!(
            app.dispatch(Action::SubmitLogin),
            Err(AppError::LoginRejected(AuthError::InvalidCredentials))
        );
        assert_eq!(app.current_route(), &Route::Login);
        assert_eq!(app.render().body.inputs()[0].value, "alice");

        app.dispatch(Action::change_text(TextField::Email, "alice@example.com"))
            .unwrap();
        app.dispatch(Action::SubmitLogin).unwrap();
        assert_eq!(app.current_route(), &Route::Home);
    }

    #[test]
    fn test_login_screen_rejects_main_actions() {
        let mut app = gated();
        let err = app.dispatch(Action::SelectItem { index: 0 }).unwrap_err();
        assert_eq!(
            err,
            AppError::Navigation(NavigationError::ActionUnavailable {
                action: "select_item".to_string(),
                route: "/login".to_string(),
            })
        );
        assert!(app
            .dispatch(Action::SelectTab {
                tab: NavigationTab::Search
            })
            .is_err());
        assert!(app
            .dispatch(Action::change_text(TextField::SearchQuery, "x"))
            .is_err());
    }

    #[test]
    fn test_login_screen_deep_links() {
        let mut app = gated();
        assert_eq!(
            app.dispatch(Action::Open {
                path: "/search".to_string()
            }),
            Err(AppError::Navigation(NavigationError::RequiresSession(
                "/search".to_string()
            )))
        );
        assert_eq!(
            app.dispatch(Action::Open {
                path: "/login".to_string()
            }),
            Ok(Transition::Unchanged)
        );
        assert_eq!(
            app.dispatch(Action::Open {
                path: "/nowhere".to_string()
            }),
            Err(AppError::Navigation(NavigationError::NotFound(
                "/nowhere".to_string()
            )))
        );
    }

    #[test]
    fn test_select_item_and_back() {
        let mut app = classic();
        app.dispatch(Action::SelectItem { index: 1 }).unwrap();
        assert_eq!(app.current_route(), &Route::details("Item 2"));
        assert!(app.render().header.unwrap().can_go_back);

        let transition = app.dispatch(Action::Back).unwrap();
        assert!(matches!(
            transition,
            Transition::Navigated {
                animation: NavigationAnimation::Pop,
                ..
            }
        ));
        assert_eq!(app.current_route(), &Route::Home);
        assert_eq!(app.dispatch(Action::Back).unwrap(), Transition::Unchanged);
    }

    #[test]
    fn test_select_unknown_item() {
        let mut app = classic();
        assert_eq!(
            app.dispatch(Action::SelectItem { index: 3 }),
            Err(AppError::Navigation(NavigationError::UnknownItem {
                index: 3,
                len: 3
            }))
        );
        assert_eq!(app.current_route(), &Route::Home);
    }

    #[test]
    fn test_select_item_only_on_list() {
        let mut app = classic();
        app.dispatch(Action::SelectItem { index: 0 }).unwrap();
        assert!(app.dispatch(Action::SelectItem { index: 1 }).is_err());
        assert_eq!(app.current_route(), &Route::details("Item 1"));
    }

    #[test]
    fn test_reselecting_tab_is_noop() {
        let mut app = classic();
        app.dispatch(Action::SelectItem { index: 0 }).unwrap();
        assert_eq!(
            app.dispatch(Action::SelectTab {
                tab: NavigationTab::Home
            })
            .unwrap(),
            Transition::Unchanged
        );
        assert_eq!(app.current_route(), &Route::details("Item 1"));
    }

    #[test]
    fn test_search_query_survives_tab_switch() {
        let mut app = classic();
        app.dispatch(Action::SelectTab {
            tab: NavigationTab::Search,
        })
        .unwrap();
        app.dispatch(Action::change_text(TextField::SearchQuery, "ch"))
            .unwrap();
        app.dispatch(Action::SelectTab {
            tab: NavigationTab::User,
        })
        .unwrap();
        assert_eq!(app.search_query(), Some("ch"));
        app.dispatch(Action::SelectTab {
            tab: NavigationTab::Search,
        })
        .unwrap();
        assert_eq!(app.render().body.inputs()[0].value, "ch");
    }

    #[test]
    fn test_text_change_needs_matching_input() {
        let mut app = classic();
        assert!(app
            .dispatch(Action::change_text(TextField::SearchQuery, "x"))
            .is_err());
        app.dispatch(Action::SelectTab {
            tab: NavigationTab::Search,
        })
        .unwrap();
        assert!(app
            .dispatch(Action::change_text(TextField::Email, "x"))
            .is_err());
    }

    #[test]
    fn test_menu_rows() {
        let mut app = gated();
        app.dispatch(Action::SubmitLogin).unwrap();
        app.dispatch(Action::SelectTab {
            tab: NavigationTab::User,
        })
        .unwrap();
        assert_eq!(
            app.dispatch(Action::PressMenuRow { section: 0, row: 1 }),
            Ok(Transition::Unchanged)
        );
        assert!(app
            .dispatch(Action::PressMenuRow { section: 2, row: 0 })
            .is_err());
    }

    #[test]
    fn test_menu_rows_absent_in_classic() {
        let mut app = classic();
        app.dispatch(Action::SelectTab {
            tab: NavigationTab::User,
        })
        .unwrap();
        assert!(app
            .dispatch(Action::PressMenuRow { section: 0, row: 0 })
            .is_err());
    }

    #[test]
    fn test_open_details_from_other_tab() {
        let mut app = classic();
        app.dispatch(Action::SelectTab {
            tab: NavigationTab::User,
        })
        .unwrap();
        let transition = app
            .dispatch(Action::Open {
                path: "/details/Item%202".to_string(),
            })
            .unwrap();
        assert_eq!(
            transition,
            Transition::Navigated {
                from: Route::User,
                to: Route::details("Item 2"),
                animation: NavigationAnimation::None,
            }
        );
        assert_eq!(app.navigation().active_tab, NavigationTab::Home);
        assert!(app.navigation().can_go_back());
    }

    #[test]
    fn test_open_visible_details_keeps_stack() {
        let mut app = classic();
        app.dispatch(Action::SelectItem { index: 0 }).unwrap();
        let depth = app.navigation().current_stack().depth();

        assert_eq!(
            app.dispatch(Action::Open {
                path: "/details/Item%201".to_string(),
            }),
            Ok(Transition::Unchanged)
        );
        assert_eq!(app.navigation().current_stack().depth(), depth);

        app.dispatch(Action::Back).unwrap();
        assert_eq!(app.current_route(), &Route::Home);
    }

    #[test]
    fn test_open_tab_root_pops_stack() {
        let mut app = classic();
        app.dispatch(Action::SelectItem { index: 0 }).unwrap();
        app.dispatch(Action::Open {
            path: "/".to_string(),
        })
        .unwrap();
        assert_eq!(app.current_route(), &Route::Home);
        assert_eq!(
            app.dispatch(Action::Open {
                path: "/".to_string()
            }),
            Ok(Transition::Unchanged)
        );
    }

    #[test]
    fn test_open_errors_in_main_app() {
        let mut app = classic();
        assert_eq!(
            app.dispatch(Action::Open {
                path: "/nowhere".to_string()
            }),
            Err(AppError::Navigation(NavigationError::NotFound(
                "/nowhere".to_string()
            )))
        );
        assert!(app
            .dispatch(Action::Open {
                path: "/login".to_string()
            })
            .is_err());
    }

    #[test]
    fn test_render_chrome() {
        let mut app = gated();
        let login = app.render();
        assert!(login.tab_bar.is_none());
        assert!(login.header.is_none());

        app.dispatch(Action::SubmitLogin).unwrap();
        let home = app.render();
        assert_eq!(home.header.as_ref().map(|h| h.title.as_str()), Some("Accueil"));
        assert_eq!(home.tab_bar.as_ref().and_then(|t| t.active_tab()), Some("home"));

        app.dispatch(Action::SelectTab {
            tab: NavigationTab::Search,
        })
        .unwrap();
        let search = app.render();
        assert!(search.header.is_none());
        assert_eq!(search.path, "/search");
    }
}
