//! UI component library for Vitrine
//!
//! Components are plain Rust structs with serializable properties. A
//! screen is a tree of [`View`] nodes that a rendering runtime draws;
//! the tree carries image URIs, not image data, and every interactive
//! node carries the [`Action`] it dispatches.
//!
//! # Available Components
//!
//! - [`Container`] - Layout container with children
//! - [`Text`] - Static or bound text
//! - [`Image`] / [`ImageBackground`] - Remote images
//! - [`Input`] - Text input bound to a [`TextField`]
//! - [`Icon`] - Named glyph
//! - [`Pressable`] / [`Button`] - Tap targets
//! - [`List`] / [`SectionList`] - Keyed rows
//! - [`TabBar`] - Bottom tab bar

use crate::action::Action;
use crate::navigation::NavigationTab;
use crate::styles::StyleClass;
use app_state::TextField;
use serde::{Deserialize, Serialize};

// =============================================================================
// Common Types
// =============================================================================

/// Color value (hex or rgba string)
pub type Color = String;

/// Style properties that can be applied to any component
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StyleProps {
    /// Flex grow factor
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex: Option<f32>,
    /// Margin around the component
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<Spacing>,
    /// Padding inside the component
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<Spacing>,
    /// Width constraint
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<Dimension>,
    /// Height constraint
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<Dimension>,
    /// Background color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Color>,
    /// Border radius
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<f32>,
    /// Text color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    /// Font size
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
    /// Font weight
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<FontWeight>,
    /// Main axis direction
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex_direction: Option<FlexDirection>,
    /// Whether children wrap
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex_wrap: Option<bool>,
    /// Main axis distribution
    #[serde(skip_serializing_if = "Option::is_none")]
    pub justify_content: Option<JustifyContent>,
    /// Cross axis alignment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align_items: Option<Alignment>,
}

/// Spacing values (margin, padding)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Spacing {
    /// Uniform spacing on all sides
    Uniform(f32),
    /// Vertical and horizontal spacing
    Symmetric {
        /// Vertical spacing
        vertical: f32,
        /// Horizontal spacing
        horizontal: f32,
    },
    /// Individual spacing per side
    Individual {
        /// Top spacing
        top: f32,
        /// Right spacing
        right: f32,
        /// Bottom spacing
        bottom: f32,
        /// Left spacing
        left: f32,
    },
}

impl Default for Spacing {
    fn default() -> Self {
        Spacing::Uniform(0.0)
    }
}

impl Spacing {
    /// Create uniform spacing
    pub fn uniform(value: f32) -> Self {
        Spacing::Uniform(value)
    }

    /// Create symmetric spacing
    pub fn symmetric(vertical: f32, horizontal: f32) -> Self {
        Spacing::Symmetric {
            vertical,
            horizontal,
        }
    }

    /// Spacing on the bottom edge only
    pub fn bottom(value: f32) -> Self {
        Spacing::Individual {
            top: 0.0,
            right: 0.0,
            bottom: value,
            left: 0.0,
        }
    }
}

/// Dimension value (pixels, percentage, auto)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum Dimension {
    /// Fixed pixel value
    Pixels(f32),
    /// Percentage of parent
    Percent(String),
    /// Auto-size
    #[default]
    Auto,
}

impl Dimension {
    /// Create a pixel dimension
    pub fn px(value: f32) -> Self {
        Dimension::Pixels(value)
    }

    /// Create a percentage dimension
    pub fn percent(value: f32) -> Self {
        Dimension::Percent(format!("{}%", value))
    }
}

/// Alignment options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Stretch to fill
    #[default]
    Stretch,
    /// Align to start
    Start,
    /// Align to center
    Center,
    /// Align to end
    End,
}

/// Justify content options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JustifyContent {
    /// Start (default)
    #[default]
    Start,
    /// Center
    Center,
    /// End
    End,
    /// Space between
    SpaceBetween,
}

/// Flex direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlexDirection {
    /// Row (horizontal)
    Row,
    /// Column (vertical, platform default)
    #[default]
    Column,
}

/// Font weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    /// Regular weight
    #[default]
    Normal,
    /// Bold weight
    Bold,
}

// =============================================================================
// View Tree
// =============================================================================

/// A node in a screen's view tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum View {
    /// Layout container
    Container(Container),
    /// Text
    Text(Text),
    /// Remote image
    Image(Image),
    /// Remote image with content drawn over it
    ImageBackground(ImageBackground),
    /// Text input
    Input(Input),
    /// Glyph icon
    Icon(Icon),
    /// Tap target wrapping a child
    Pressable(Pressable),
    /// Labelled button
    Button(Button),
    /// Flat keyed list
    List(List),
    /// Sectioned list
    SectionList(SectionList),
}

impl View {
    /// Direct children of this node
    pub fn children(&self) -> Vec<&View> {
        match self {
            View::Container(c) => c.children.iter().collect(),
            View::ImageBackground(i) => i.children.iter().collect(),
            View::Pressable(p) => vec![p.child.as_ref()],
            View::List(l) => l.rows.iter().map(|r| &r.view).collect(),
            View::SectionList(s) => s
                .sections
                .iter()
                .flat_map(|section| section.rows.iter())
                .collect(),
            View::Text(_) | View::Image(_) | View::Input(_) | View::Icon(_) | View::Button(_) => {
                Vec::new()
            }
        }
    }

    /// Visit this node and all descendants depth-first
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a View)) {
        visit(self);
        for child in self.children() {
            child.walk(visit);
        }
    }

    /// All text content in the tree, in document order
    pub fn texts(&self) -> Vec<&str> {
        let mut texts = Vec::new();
        self.walk(&mut |view| match view {
            View::Text(t) => texts.push(t.content.as_str()),
            View::Button(b) => texts.push(b.label.as_str()),
            _ => {}
        });
        texts
    }

    /// All actions bound to tap targets, in document order
    pub fn actions(&self) -> Vec<&Action> {
        let mut actions = Vec::new();
        self.walk(&mut |view| match view {
            View::Pressable(p) => actions.push(&p.on_press),
            View::Button(b) => actions.push(&b.on_press),
            _ => {}
        });
        actions
    }

    /// All images (plain and background) in the tree
    pub fn image_uris(&self) -> Vec<&str> {
        let mut uris = Vec::new();
        self.walk(&mut |view| match view {
            View::Image(i) => uris.push(i.uri.as_str()),
            View::ImageBackground(i) => uris.push(i.uri.as_str()),
            _ => {}
        });
        uris
    }

    /// All inputs in the tree
    pub fn inputs(&self) -> Vec<&Input> {
        let mut inputs = Vec::new();
        self.walk(&mut |view| {
            if let View::Input(input) = view {
                inputs.push(input);
            }
        });
        inputs
    }
}

macro_rules! impl_into_view {
    ($($component:ident),* $(,)?) => {
        $(
            impl From<$component> for View {
                fn from(component: $component) -> Self {
                    View::$component(component)
                }
            }
        )*
    };
}

impl_into_view!(
    Container,
    Text,
    Image,
    ImageBackground,
    Input,
    Icon,
    Pressable,
    Button,
    List,
    SectionList,
);

// =============================================================================
// Container Component
// =============================================================================

/// Layout container
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Container {
    /// Style class from the style table
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<StyleClass>,
    /// Resolved style
    pub style: StyleProps,
    /// Whether content scrolls
    #[serde(default)]
    pub scrollable: bool,
    /// Child views
    pub children: Vec<View>,
}

impl Container {
    /// Create an empty container
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a style class
    pub fn with_class(mut self, class: StyleClass) -> Self {
        self.class = Some(class);
        self.style = class.style();
        self
    }

    /// Make the container scroll its content
    pub fn scrollable(mut self) -> Self {
        self.scrollable = true;
        self
    }

    /// Append a child
    pub fn child(mut self, view: impl Into<View>) -> Self {
        self.children.push(view.into());
        self
    }

    /// Append several children
    pub fn children(mut self, views: impl IntoIterator<Item = View>) -> Self {
        self.children.extend(views);
        self
    }
}

// =============================================================================
// Text Component
// =============================================================================

/// Text component properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Text {
    /// Text content
    pub content: String,
    /// Style class from the style table
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<StyleClass>,
    /// Resolved style
    pub style: StyleProps,
}

impl Text {
    /// Create new text component
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            class: None,
            style: StyleProps::default(),
        }
    }

    /// Apply a style class
    pub fn with_class(mut self, class: StyleClass) -> Self {
        self.class = Some(class);
        self.style = class.style();
        self
    }
}

// =============================================================================
// Image Components
// =============================================================================

/// Remote image
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    /// Image URI, loaded by the rendering runtime
    pub uri: String,
    /// Style class from the style table
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<StyleClass>,
    /// Resolved style
    pub style: StyleProps,
}

impl Image {
    /// Create an image
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            class: None,
            style: StyleProps::default(),
        }
    }

    /// Apply a style class
    pub fn with_class(mut self, class: StyleClass) -> Self {
        self.class = Some(class);
        self.style = class.style();
        self
    }
}

/// Remote image drawn behind child views
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageBackground {
    /// Image URI
    pub uri: String,
    /// Style class from the style table
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<StyleClass>,
    /// Resolved style
    pub style: StyleProps,
    /// Overlaid views
    pub children: Vec<View>,
}

impl ImageBackground {
    /// Create a background image
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            class: None,
            style: StyleProps::default(),
            children: Vec::new(),
        }
    }

    /// Apply a style class
    pub fn with_class(mut self, class: StyleClass) -> Self {
        self.class = Some(class);
        self.style = class.style();
        self
    }

    /// Append an overlaid child
    pub fn child(mut self, view: impl Into<View>) -> Self {
        self.children.push(view.into());
        self
    }
}

// =============================================================================
// Input Component
// =============================================================================

/// Input types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    /// Plain text
    #[default]
    Text,
    /// Email address
    Email,
    /// Masked password
    Password,
    /// Search query
    Search,
}

/// Text input bound to a field of screen-local state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Input {
    /// Field the input writes to
    pub field: TextField,
    /// Input type
    pub input_type: InputType,
    /// Placeholder text
    pub placeholder: String,
    /// Current value (masked for passwords)
    pub value: String,
    /// Style class from the style table
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<StyleClass>,
    /// Resolved style
    pub style: StyleProps,
}

impl Input {
    /// Create an input for a field
    pub fn new(field: TextField, input_type: InputType) -> Self {
        Self {
            field,
            input_type,
            placeholder: String::new(),
            value: String::new(),
            class: None,
            style: StyleProps::default(),
        }
    }

    /// Set placeholder
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set value
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Apply a style class
    pub fn with_class(mut self, class: StyleClass) -> Self {
        self.class = Some(class);
        self.style = class.style();
        self
    }

    /// Whether the value is masked
    pub fn is_secure(&self) -> bool {
        self.input_type == InputType::Password
    }
}

// =============================================================================
// Icon Component
// =============================================================================

/// Default glyph size
pub const ICON_SIZE: f32 = 26.0;

/// Glyph from the icon provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Icon {
    /// Glyph name (e.g. "location", "chevron-right")
    pub name: String,
    /// Glyph size in pixels
    pub size: f32,
}

impl Icon {
    /// Create an icon at the default size
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size: ICON_SIZE,
        }
    }

}

// =============================================================================
// Tap Targets
// =============================================================================

/// Tap target wrapping a child view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pressable {
    /// Dispatched on tap
    pub on_press: Action,
    /// Wrapped view
    pub child: Box<View>,
}

impl Pressable {
    /// Wrap a view
    pub fn new(on_press: Action, child: impl Into<View>) -> Self {
        Self {
            on_press,
            child: Box::new(child.into()),
        }
    }
}

/// Labelled button
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Button {
    /// Button label
    pub label: String,
    /// Dispatched on tap
    pub on_press: Action,
    /// Style class from the style table
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<StyleClass>,
    /// Resolved style
    pub style: StyleProps,
    /// Style class of the label text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_class: Option<StyleClass>,
    /// Resolved label style
    pub label_style: StyleProps,
}

impl Button {
    /// Create a button
    pub fn new(label: impl Into<String>, on_press: Action) -> Self {
        Self {
            label: label.into(),
            on_press,
            class: None,
            style: StyleProps::default(),
            label_class: None,
            label_style: StyleProps::default(),
        }
    }

    /// Apply a style class
    pub fn with_class(mut self, class: StyleClass) -> Self {
        self.class = Some(class);
        self.style = class.style();
        self
    }

    /// Apply a style class to the label
    pub fn with_label_class(mut self, class: StyleClass) -> Self {
        self.label_class = Some(class);
        self.label_style = class.style();
        self
    }
}

// =============================================================================
// Lists
// =============================================================================

/// A keyed list row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListRow {
    /// Stable row key
    pub key: String,
    /// Row content
    pub view: View,
}

/// Flat keyed list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct List {
    /// Style class from the style table
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<StyleClass>,
    /// Resolved style
    pub style: StyleProps,
    /// Rows in order
    pub rows: Vec<ListRow>,
}

impl List {
    /// Create an empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a style class
    pub fn with_class(mut self, class: StyleClass) -> Self {
        self.class = Some(class);
        self.style = class.style();
        self
    }

    /// Append a row
    pub fn row(mut self, key: impl Into<String>, view: impl Into<View>) -> Self {
        self.rows.push(ListRow {
            key: key.into(),
            view: view.into(),
        });
        self
    }
}

/// A titled group of rows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListSection {
    /// Section heading
    pub title: String,
    /// Rows in order
    pub rows: Vec<View>,
}

/// Sectioned list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SectionList {
    /// Style class of section headings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_class: Option<StyleClass>,
    /// Resolved heading style
    pub header_style: StyleProps,
    /// Sections in order
    pub sections: Vec<ListSection>,
}

impl SectionList {
    /// Create an empty section list
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a style class to every section heading
    pub fn with_header_class(mut self, class: StyleClass) -> Self {
        self.header_class = Some(class);
        self.header_style = class.style();
        self
    }

    /// Append a section
    pub fn section(mut self, title: impl Into<String>, rows: Vec<View>) -> Self {
        self.sections.push(ListSection {
            title: title.into(),
            rows,
        });
        self
    }
}

// =============================================================================
// Tab Bar Component
// =============================================================================

/// Tab bar item representing a navigation tab
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabBarItem {
    /// Tab identifier matching NavigationTab
    pub id: String,
    /// Glyph name
    pub icon: Icon,
    /// Label text
    pub label: String,
    /// Whether this tab is currently active
    pub is_active: bool,
    /// Dispatched on tap
    pub on_press: Action,
}

impl TabBarItem {
    /// Item for a navigation tab
    pub fn for_tab(tab: NavigationTab) -> Self {
        Self {
            id: tab.id().to_string(),
            icon: Icon::new(tab.icon()),
            label: tab.label().to_string(),
            is_active: false,
            on_press: Action::SelectTab { tab },
        }
    }

    /// Set active state
    pub fn with_active(mut self, active: bool) -> Self {
        self.is_active = active;
        self
    }
}

/// Bottom tab bar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabBar {
    /// Tab items
    pub items: Vec<TabBarItem>,
}

impl TabBar {
    /// Tab bar with every tab, marking `active`
    pub fn new(active: NavigationTab) -> Self {
        Self {
            items: NavigationTab::all()
                .into_iter()
                .map(|tab| TabBarItem::for_tab(tab).with_active(tab == active))
                .collect(),
        }
    }

    /// Identifier of the active tab
    pub fn active_tab(&self) -> Option<&str> {
        self.items
            .iter()
            .find(|item| item.is_active)
            .map(|item| item.id.as_str())
    }
}
