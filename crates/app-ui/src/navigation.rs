//! Navigation system for Vitrine
//!
//! This module provides the navigation graph below the session switch:
//! - Route definitions with deep linking support
//! - Per-tab navigation stacks
//! - Tab switching that preserves each tab's stack
//! - A path router for deep links

use app_state::LocalState;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use thiserror::Error;

// =============================================================================
// Errors
// =============================================================================

/// Navigation errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NavigationError {
    /// No catalog item at the selected position
    #[error("No item at index {index} (catalog has {len} items)")]
    UnknownItem {
        /// Requested position
        index: usize,
        /// Catalog size
        len: usize,
    },

    /// Deep link did not match any route
    #[error("No route for path: {0}")]
    NotFound(String),

    /// Route is only reachable from the main app
    #[error("Route {0} requires a session")]
    RequiresSession(String),

    /// Action has no meaning on the current screen
    #[error("Action {action} is not available on {route}")]
    ActionUnavailable {
        /// Action name
        action: String,
        /// Path of the current route
        route: String,
    },
}

// =============================================================================
// Route Parameters
// =============================================================================

/// Parameters for a route
pub type RouteParams = HashMap<String, String>;

// =============================================================================
// Route Definitions
// =============================================================================

/// All possible routes in the application
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(tag = "route", content = "params")]
pub enum Route {
    /// Login screen (outside the tabs)
    Login,
    /// Home item list
    #[default]
    Home,
    /// Item details
    Details {
        /// Title of the selected item
        #[serde(skip_serializing_if = "Option::is_none")]
        title: Option<String>,
    },
    /// Search grid
    Search,
    /// User screen
    User,
    /// Unknown deep link
    NotFound,
}

impl Route {
    /// Details route for a title
    pub fn details(title: impl Into<String>) -> Self {
        Route::Details {
            title: Some(title.into()),
        }
    }

    /// Convert to a URL path
    pub fn to_path(&self) -> String {
        match self {
            Route::Login => "/login".to_string(),
            Route::Home => "/".to_string(),
            Route::Details { title: Some(title) } => {
                format!("/details/{}", urlencoding::encode(title))
            }
            Route::Details { title: None } => "/details".to_string(),
            Route::Search => "/search".to_string(),
            Route::User => "/user".to_string(),
            Route::NotFound => "/not-found".to_string(),
        }
    }

    /// Whether the route belongs to the main app
    pub fn requires_session(&self) -> bool {
        !matches!(self, Route::Login | Route::NotFound)
    }

    /// Tab owning this route
    pub fn tab(&self) -> Option<NavigationTab> {
        match self {
            Route::Home | Route::Details { .. } => Some(NavigationTab::Home),
            Route::Search => Some(NavigationTab::Search),
            Route::User => Some(NavigationTab::User),
            Route::Login | Route::NotFound => None,
        }
    }

    /// Screen name shown in the navigator header
    pub fn title(&self) -> &'static str {
        match self {
            Route::Login => "Connexion",
            Route::Home => "Accueil",
            Route::Details { .. } => "Details",
            Route::Search => "Recherche",
            Route::User => "Utilisateur",
            Route::NotFound => "Introuvable",
        }
    }
}

// =============================================================================
// Navigation Tabs
// =============================================================================

/// Main navigation tabs
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum NavigationTab {
    /// Home stack (list and details)
    #[default]
    Home,
    /// Search grid
    Search,
    /// User screen
    User,
}

impl NavigationTab {
    /// Get the root route for this tab
    pub fn root_route(&self) -> Route {
        match self {
            NavigationTab::Home => Route::Home,
            NavigationTab::Search => Route::Search,
            NavigationTab::User => Route::User,
        }
    }

    /// All tabs in tab bar order
    pub fn all() -> [NavigationTab; 3] {
        [NavigationTab::Home, NavigationTab::Search, NavigationTab::User]
    }

    /// Stable identifier
    pub fn id(&self) -> &'static str {
        match self {
            NavigationTab::Home => "home",
            NavigationTab::Search => "search",
            NavigationTab::User => "user",
        }
    }

    /// Tab bar label
    pub fn label(&self) -> &'static str {
        match self {
            NavigationTab::Home => "Home",
            NavigationTab::Search => "Recherche",
            NavigationTab::User => "Utilisateur",
        }
    }

    /// Glyph name for the tab bar icon
    pub fn icon(&self) -> &'static str {
        match self {
            NavigationTab::Home => "location",
            NavigationTab::Search => "search",
            NavigationTab::User => "user",
        }
    }

    /// Parse a tab from its identifier
    pub fn from_id(id: &str) -> Option<Self> {
        Self::all().into_iter().find(|tab| tab.id() == id)
    }
}

// =============================================================================
// Navigation Stack
// =============================================================================

/// Animation type for navigation transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NavigationAnimation {
    /// Push animation (slide in from right)
    #[default]
    Push,
    /// Pop animation (slide out to right)
    Pop,
    /// Fade animation
    Fade,
    /// None (instant)
    None,
}

/// A navigation stack entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackEntry {
    /// The route
    pub route: Route,
    /// Unique key for this entry
    pub key: String,
    /// Screen-local state, dropped with the entry
    #[serde(default)]
    pub local: LocalState,
}

impl StackEntry {
    /// Create a new stack entry with the route's initial local state
    pub fn new(route: Route) -> Self {
        let local = match route {
            Route::Search => LocalState::search(),
            _ => LocalState::Empty,
        };
        Self {
            route,
            key: uuid::Uuid::new_v4().to_string(),
            local,
        }
    }
}

/// Navigation stack for a tab
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationStack {
    /// Stack entries (bottom to top)
    entries: Vec<StackEntry>,
    /// Root route for this stack
    root: Route,
}

impl NavigationStack {
    /// Create a new navigation stack with a root route
    pub fn new(root: Route) -> Self {
        Self {
            entries: vec![StackEntry::new(root.clone())],
            root,
        }
    }

    /// Push a route onto the stack
    pub fn push(&mut self, route: Route) {
        self.entries.push(StackEntry::new(route));
    }

    /// Pop the top route (returns true if popped, false if at root)
    pub fn pop(&mut self) -> bool {
        if self.entries.len() > 1 {
            self.entries.pop();
            true
        } else {
            false
        }
    }

    /// Pop to root
    pub fn pop_to_root(&mut self) {
        self.entries.truncate(1);
    }

    /// Get the current (top) route
    pub fn current(&self) -> &Route {
        &self.current_entry().route
    }

    /// Get the current stack entry
    pub fn current_entry(&self) -> &StackEntry {
        self.entries.last().expect("Stack should never be empty")
    }

    /// Get mutable reference to current entry
    pub fn current_entry_mut(&mut self) -> &mut StackEntry {
        self.entries.last_mut().expect("Stack should never be empty")
    }

    /// Root route of this stack
    pub fn root(&self) -> &Route {
        &self.root
    }

    /// Check if we can go back
    pub fn can_go_back(&self) -> bool {
        self.entries.len() > 1
    }

    /// Get stack depth
    pub fn depth(&self) -> usize {
        self.entries.len()
    }
}

// =============================================================================
// Navigation State
// =============================================================================

/// Tabbed navigation state of the main app
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationState {
    /// Current active tab
    pub active_tab: NavigationTab,
    /// Stacks for each tab
    tab_stacks: BTreeMap<NavigationTab, NavigationStack>,
}

impl Default for NavigationState {
    fn default() -> Self {
        let tab_stacks = NavigationTab::all()
            .into_iter()
            .map(|tab| (tab, NavigationStack::new(tab.root_route())))
            .collect();

        Self {
            active_tab: NavigationTab::Home,
            tab_stacks,
        }
    }
}

impl NavigationState {
    /// Create a new navigation state
    pub fn new() -> Self {
        Self::default()
    }

    /// Stack of a given tab
    pub fn stack(&self, tab: NavigationTab) -> &NavigationStack {
        self.tab_stacks
            .get(&tab)
            .expect("All tabs should have stacks")
    }

    /// Get the current stack for the active tab
    pub fn current_stack(&self) -> &NavigationStack {
        self.stack(self.active_tab)
    }

    /// Get mutable current stack
    pub fn current_stack_mut(&mut self) -> &mut NavigationStack {
        self.tab_stacks
            .get_mut(&self.active_tab)
            .expect("All tabs should have stacks")
    }

    /// Get the current route
    pub fn current_route(&self) -> &Route {
        self.current_stack().current()
    }

    /// Get the visible stack entry
    pub fn current_entry(&self) -> &StackEntry {
        self.current_stack().current_entry()
    }

    /// Get the visible stack entry mutably
    pub fn current_entry_mut(&mut self) -> &mut StackEntry {
        self.current_stack_mut().current_entry_mut()
    }

    /// Push a route on the active tab's stack
    pub fn navigate(&mut self, route: Route) {
        self.current_stack_mut().push(route);
    }

    /// Go back (returns false at the root of the active tab)
    pub fn go_back(&mut self) -> bool {
        self.current_stack_mut().pop()
    }

    /// Switch to a tab, keeping every tab's stack (returns false if already active)
    pub fn switch_tab(&mut self, tab: NavigationTab) -> bool {
        if self.active_tab == tab {
            return false;
        }
        self.active_tab = tab;
        true
    }

    /// Reset to tab root
    pub fn reset_to_tab(&mut self, tab: NavigationTab) {
        if let Some(stack) = self.tab_stacks.get_mut(&tab) {
            stack.pop_to_root();
        }
        self.active_tab = tab;
    }

    /// Check if we can go back
    pub fn can_go_back(&self) -> bool {
        self.current_stack().can_go_back()
    }

    /// Reset entire navigation state
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

// =============================================================================
// Router
// =============================================================================

/// Route pattern for matching
struct RoutePattern {
    /// Pattern segments
    segments: Vec<PatternSegment>,
    /// Route builder
    builder: fn(RouteParams) -> Option<Route>,
}

/// Segment type in a pattern
#[derive(Debug, Clone)]
enum PatternSegment {
    /// Literal segment
    Literal(String),
    /// Parameter segment
    Param(String),
}

/// URL Router for parsing paths to routes
pub struct Router {
    /// Route patterns
    patterns: Vec<RoutePattern>,
}

impl std::fmt::Debug for Router {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Router")
            .field("patterns", &self.patterns.len())
            .finish()
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl Router {
    /// Create a new router with all routes
    pub fn new() -> Self {
        let mut router = Self {
            patterns: Vec::new(),
        };

        router.add_route("/", |_| Some(Route::Home));
        router.add_route("/details", |params| {
            Some(Route::Details {
                title: params.get("title").cloned(),
            })
        });
        router.add_route("/details/:title", |params| {
            Some(Route::details(params.get("title")?.clone()))
        });
        router.add_route("/search", |_| Some(Route::Search));
        router.add_route("/user", |_| Some(Route::User));
        router.add_route("/login", |_| Some(Route::Login));

        router
    }

    /// Add a route pattern
    fn add_route(&mut self, pattern: &str, builder: fn(RouteParams) -> Option<Route>) {
        let segments = pattern
            .split('/')
            .filter(|s| !s.is_empty())
            .map(|s| {
                if let Some(param) = s.strip_prefix(':') {
                    PatternSegment::Param(param.to_string())
                } else {
                    PatternSegment::Literal(s.to_string())
                }
            })
            .collect();

        self.patterns.push(RoutePattern { segments, builder });
    }

    /// Match a path to a route
    pub fn match_path(&self, path: &str) -> Route {
        let (pathname, query) = match path.split_once('?') {
            Some((pathname, query)) => (pathname, Some(query)),
            None => (path, None),
        };

        let path_segments: Vec<&str> = pathname.split('/').filter(|s| !s.is_empty()).collect();

        for pattern in &self.patterns {
            if let Some(params) = self.match_pattern(&pattern.segments, &path_segments, query) {
                if let Some(route) = (pattern.builder)(params) {
                    return route;
                }
            }
        }

        Route::NotFound
    }

    /// Match a pattern against path segments
    fn match_pattern(
        &self,
        pattern: &[PatternSegment],
        path: &[&str],
        query: Option<&str>,
    ) -> Option<RouteParams> {
        if pattern.len() != path.len() {
            return None;
        }

        let mut params = RouteParams::new();

        for (segment, actual) in pattern.iter().zip(path.iter()) {
            match segment {
                PatternSegment::Literal(expected) => {
                    if expected != *actual {
                        return None;
                    }
                }
                PatternSegment::Param(name) => {
                    params.insert(
                        name.clone(),
                        urlencoding::decode(actual).ok()?.into_owned(),
                    );
                }
            }
        }

        self.parse_query(query, &mut params);

        Some(params)
    }

    /// Parse query string into params (path params win on conflict)
    fn parse_query(&self, query: Option<&str>, params: &mut RouteParams) {
        if let Some(query) = query {
            for pair in query.split('&') {
                if let Some((key, value)) = pair.split_once('=') {
                    if let Ok(decoded) = urlencoding::decode(value) {
                        params
                            .entry(key.to_string())
                            .or_insert_with(|| decoded.into_owned());
                    }
                }
            }
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
