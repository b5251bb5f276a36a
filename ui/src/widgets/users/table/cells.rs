//! Cell rendering for the users table.

use egui::{CornerRadius, Image, Ui, Vec2};
use roster_business::RowActionState;

use super::columns::AVATAR_SIZE;

/// Renders the round profile picture; hovering shows the email.
#[inline]
pub fn render_avatar_cell(ui: &mut Ui, url: &str, alt: &str) {
    let radius = (AVATAR_SIZE / 2.0) as u8;
    ui.add(
        Image::new(url)
            .fit_to_exact_size(Vec2::splat(AVATAR_SIZE))
            .corner_radius(CornerRadius::same(radius)),
    )
    .on_hover_text(alt);
}

/// Placeholder keeping rows aligned when a user has no picture.
#[inline]
pub fn render_empty_avatar_cell(ui: &mut Ui) {
    ui.allocate_space(Vec2::splat(AVATAR_SIZE));
}

#[inline]
pub fn render_text_cell(ui: &mut Ui, text: &str) {
    ui.label(text);
}

/// Button clicked in the actions cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionClick {
    Edit,
    Delete,
}

/// Renders Edit and Delete. Delete is greyed out in read-only mode.
#[inline]
pub fn render_action_buttons(
    ui: &mut Ui,
    action: RowActionState,
    read_only: bool,
) -> Option<ActionClick> {
    let mut clicked = None;

    ui.horizontal(|ui| {
        if ui
            .add_enabled(action.is_edit_enabled(), egui::Button::new("Edit"))
            .clicked()
        {
            clicked = Some(ActionClick::Edit);
        }
        let delete = ui
            .add_enabled(action.is_delete_enabled(read_only), egui::Button::new("Delete"))
            .on_disabled_hover_text(if read_only {
                "Deleting is disabled in read-only mode"
            } else {
                "Request in progress"
            });
        if delete.clicked() {
            clicked = Some(ActionClick::Delete);
        }
        if action.is_loading() {
            ui.spinner();
        }
    });

    clicked
}
