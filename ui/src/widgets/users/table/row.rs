//! Row rendering for the users table.

use egui::Ui;
use roster_business::{CellContent, RowActionState, User, render_row};

use super::cells::{
    render_action_buttons, render_avatar_cell, render_empty_avatar_cell, render_text_cell,
};
use super::data_cell;

pub use super::cells::ActionClick;

/// Renders one user and ends the grid row.
///
/// Returns the button clicked in the actions cell, if any.
#[inline]
pub fn render_user_row(
    ui: &mut Ui,
    user: &User,
    action: RowActionState,
    read_only: bool,
) -> Option<ActionClick> {
    let mut clicked = None;

    for cell in render_row(user) {
        data_cell(ui, |ui| match cell {
            CellContent::Avatar { url, alt } => render_avatar_cell(ui, url, alt),
            CellContent::Text(text) => render_text_cell(ui, text),
            CellContent::Actions => {
                ui.push_id(user.id.as_str(), |ui| {
                    clicked = render_action_buttons(ui, action, read_only);
                });
            }
            CellContent::Empty => render_empty_avatar_cell(ui),
        });
    }
    ui.end_row();

    clicked
}

/// Renders the "No results." row spanning the table.
#[inline]
pub fn render_empty_row(ui: &mut Ui) {
    data_cell(ui, |ui| {
        ui.label(roster_business::EMPTY_MESSAGE);
    });
    ui.end_row();
}
