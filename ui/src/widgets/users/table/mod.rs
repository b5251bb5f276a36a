//! Table components for the users panel.
//!
//! - `columns`: Column widths and sizes
//! - `header`: Header row rendering
//! - `row`: One user row, returning the action the user clicked
//! - `cells`: Cell rendering for each kind of content

mod cells;
pub mod columns;
pub mod header;
pub mod row;

use egui::{Color32, Frame, InnerResponse, Margin, Ui};

/// Border color for the table frame (subtle gray)
pub(crate) const TABLE_BORDER_COLOR: Color32 = Color32::from_rgb(200, 200, 200);

/// Header background color (light gray)
const HEADER_BG_COLOR: Color32 = Color32::from_rgb(245, 245, 245);

/// Header cell with background.
pub(crate) fn header_cell<R>(
    ui: &mut Ui,
    add_contents: impl FnOnce(&mut Ui) -> R,
) -> InnerResponse<R> {
    Frame::NONE
        .fill(HEADER_BG_COLOR)
        .inner_margin(Margin::symmetric(8, 8))
        .show(ui, add_contents)
}

/// Data cell with padding.
pub(crate) fn data_cell<R>(ui: &mut Ui, add_contents: impl FnOnce(&mut Ui) -> R) -> InnerResponse<R> {
    Frame::NONE
        .inner_margin(Margin::symmetric(8, 6))
        .show(ui, add_contents)
}
