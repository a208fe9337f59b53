//! Search screen
//!
//! The bar is bound to the entry's query; the grid below it is built from
//! the configured placeholder grid alone.

use crate::components::{Container, Image, Input, InputType, View};
use crate::strings;
use crate::styles::StyleClass;
use app_core::SearchGrid;
use app_state::TextField;

/// Render the search bar over the image grid
pub fn render(query: &str, grid: &SearchGrid) -> View {
    let bar = Input::new(TextField::SearchQuery, InputType::Search)
        .with_placeholder(strings::SEARCH_PLACEHOLDER)
        .with_value(query)
        .with_class(StyleClass::SearchBar);

    let cells = grid
        .cells()
        .iter()
        .map(|cell| Image::new(&cell.image).with_class(StyleClass::GridItem).into());

    Container::new()
        .with_class(StyleClass::SearchContainer)
        .child(bar)
        .child(
            Container::new()
                .with_class(StyleClass::GridContainer)
                .scrollable()
                .children(cells),
        )
        .into()
}
