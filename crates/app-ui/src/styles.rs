//! Style table
//!
//! Static mapping from style class to visual attributes. Screens refer to
//! classes by [`StyleClass`]; a runtime that only has the stylesheet name
//! can resolve it with [`StyleClass::from_name`].

use crate::components::{
    Alignment, Dimension, FlexDirection, FontWeight, JustifyContent, Spacing, StyleProps,
};
use serde::{Deserialize, Serialize};

/// Named style classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StyleClass {
    /// Home list container
    Container,
    /// Home list row
    Item,
    /// Title overlaid on a home row
    ItemTitle,
    /// Details screen body
    DetailsContainer,
    /// Details title
    DetailsTitle,
    /// Centred full-screen body
    Center,
    /// Search screen body
    SearchContainer,
    /// Search bar
    SearchBar,
    /// Wrapping image grid
    GridContainer,
    /// Grid cell
    GridItem,
    /// Login screen body
    LoginContainer,
    /// Login heading
    LoginTitle,
    /// Login text input
    Input,
    /// Submit button
    Button,
    /// Submit button label
    ButtonText,
    /// User screen header row
    UserHeader,
    /// User avatar
    Avatar,
    /// User name next to the avatar
    UserName,
    /// Menu section heading
    SectionHeader,
    /// Menu row
    MenuRow,
}

impl StyleClass {
    /// Every class, in stylesheet order
    pub const ALL: [StyleClass; 20] = [
        StyleClass::Container,
        StyleClass::Item,
        StyleClass::ItemTitle,
        StyleClass::DetailsContainer,
        StyleClass::DetailsTitle,
        StyleClass::Center,
        StyleClass::SearchContainer,
        StyleClass::SearchBar,
        StyleClass::GridContainer,
        StyleClass::GridItem,
        StyleClass::LoginContainer,
        StyleClass::LoginTitle,
        StyleClass::Input,
        StyleClass::Button,
        StyleClass::ButtonText,
        StyleClass::UserHeader,
        StyleClass::Avatar,
        StyleClass::UserName,
        StyleClass::SectionHeader,
        StyleClass::MenuRow,
    ];

    /// Stylesheet name
    pub fn name(&self) -> &'static str {
        match self {
            StyleClass::Container => "container",
            StyleClass::Item => "item",
            StyleClass::ItemTitle => "itemTitle",
            StyleClass::DetailsContainer => "detailsContainer",
            StyleClass::DetailsTitle => "detailsTitle",
            StyleClass::Center => "center",
            StyleClass::SearchContainer => "searchContainer",
            StyleClass::SearchBar => "searchBar",
            StyleClass::GridContainer => "gridContainer",
            StyleClass::GridItem => "gridItem",
            StyleClass::LoginContainer => "loginContainer",
            StyleClass::LoginTitle => "loginTitle",
            StyleClass::Input => "input",
            StyleClass::Button => "button",
            StyleClass::ButtonText => "buttonText",
            StyleClass::UserHeader => "userHeader",
            StyleClass::Avatar => "avatar",
            StyleClass::UserName => "userName",
            StyleClass::SectionHeader => "sectionHeader",
            StyleClass::MenuRow => "menuRow",
        }
    }

    /// Look a class up by stylesheet name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|class| class.name() == name)
    }

    /// Visual attributes of this class
    pub fn style(&self) -> StyleProps {
        match self {
            StyleClass::Container | StyleClass::SearchContainer => StyleProps {
                flex: Some(1.0),
                padding: Some(Spacing::uniform(10.0)),
                ..Default::default()
            },
            StyleClass::Item => StyleProps {
                height: Some(Dimension::px(150.0)),
                justify_content: Some(JustifyContent::Center),
                align_items: Some(Alignment::Center),
                margin: Some(Spacing::bottom(10.0)),
                ..Default::default()
            },
            StyleClass::ItemTitle => StyleProps {
                color: Some("white".to_string()),
                font_size: Some(20.0),
                font_weight: Some(FontWeight::Bold),
                background_color: Some("rgba(0, 0, 0, 0.5)".to_string()),
                padding: Some(Spacing::uniform(5.0)),
                ..Default::default()
            },
            StyleClass::DetailsContainer | StyleClass::Center => centered(),
            StyleClass::DetailsTitle | StyleClass::LoginTitle => StyleProps {
                font_size: Some(24.0),
                font_weight: Some(FontWeight::Bold),
                margin: matches!(self, StyleClass::LoginTitle).then(|| Spacing::bottom(20.0)),
                ..Default::default()
            },
            StyleClass::SearchBar | StyleClass::Input => StyleProps {
                height: Some(Dimension::px(40.0)),
                border_radius: Some(if *self == StyleClass::SearchBar { 20.0 } else { 8.0 }),
                background_color: Some("#eee".to_string()),
                padding: Some(Spacing::symmetric(0.0, 15.0)),
                margin: Some(Spacing::bottom(10.0)),
                ..Default::default()
            },
            StyleClass::GridContainer => StyleProps {
                flex_direction: Some(FlexDirection::Row),
                flex_wrap: Some(true),
                justify_content: Some(JustifyContent::SpaceBetween),
                ..Default::default()
            },
            StyleClass::GridItem => StyleProps {
                width: Some(Dimension::percent(30.0)),
                height: Some(Dimension::px(100.0)),
                margin: Some(Spacing::bottom(10.0)),
                ..Default::default()
            },
            StyleClass::LoginContainer => StyleProps {
                flex: Some(1.0),
                justify_content: Some(JustifyContent::Center),
                padding: Some(Spacing::uniform(20.0)),
                ..Default::default()
            },
            StyleClass::Button => StyleProps {
                background_color: Some("#007AFF".to_string()),
                border_radius: Some(8.0),
                padding: Some(Spacing::uniform(12.0)),
                align_items: Some(Alignment::Center),
                ..Default::default()
            },
            StyleClass::ButtonText => StyleProps {
                color: Some("white".to_string()),
                font_size: Some(16.0),
                font_weight: Some(FontWeight::Bold),
                ..Default::default()
            },
            StyleClass::UserHeader => StyleProps {
                flex_direction: Some(FlexDirection::Row),
                align_items: Some(Alignment::Center),
                padding: Some(Spacing::uniform(20.0)),
                ..Default::default()
            },
            StyleClass::Avatar => StyleProps {
                width: Some(Dimension::px(60.0)),
                height: Some(Dimension::px(60.0)),
                border_radius: Some(30.0),
                margin: Some(Spacing::Individual {
                    top: 0.0,
                    right: 15.0,
                    bottom: 0.0,
                    left: 0.0,
                }),
                ..Default::default()
            },
            StyleClass::UserName => StyleProps {
                font_size: Some(20.0),
                font_weight: Some(FontWeight::Bold),
                ..Default::default()
            },
            StyleClass::SectionHeader => StyleProps {
                font_size: Some(14.0),
                font_weight: Some(FontWeight::Bold),
                color: Some("#888".to_string()),
                padding: Some(Spacing::symmetric(10.0, 15.0)),
                ..Default::default()
            },
            StyleClass::MenuRow => StyleProps {
                flex_direction: Some(FlexDirection::Row),
                justify_content: Some(JustifyContent::SpaceBetween),
                align_items: Some(Alignment::Center),
                padding: Some(Spacing::uniform(15.0)),
                background_color: Some("white".to_string()),
                ..Default::default()
            },
        }
    }
}

fn centered() -> StyleProps {
    StyleProps {
        flex: Some(1.0),
        justify_content: Some(JustifyContent::Center),
        align_items: Some(Alignment::Center),
        ..Default::default()
    }
}
