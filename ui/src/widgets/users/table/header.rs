//! Header row for the users table.

use egui::Ui;
use roster_business::UserColumn;

use super::columns::min_width;
use super::header_cell;

/// Renders one bold label per column, then ends the grid row.
#[inline]
pub fn render_table_header(ui: &mut Ui) {
    for column in UserColumn::ALL {
        header_cell(ui, |ui| {
            ui.set_min_width(min_width(column));
            ui.strong(column.header());
        });
    }
    ui.end_row();
}
