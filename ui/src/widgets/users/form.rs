//! Edit form window opened from a row's Edit button.

use egui::{Color32, Grid, TextEdit, Ui, Window};
use roster_business::{ActionKind, BusinessConfig};

use super::api::send_row_action;
use super::state::UsersPanelState;

/// Shows the edit window when a form is open.
///
/// Save submits one PUT for the row and keeps the window open until the
/// response arrives; Cancel or closing the window discards the edits.
pub fn show_edit_form(state: &mut UsersPanelState, config: &BusinessConfig, ui: &mut Ui) {
    let Some(form) = state.edit_form.as_ref() else {
        return;
    };
    let id = form.id.clone();
    let busy = state.row_action(&id).is_loading();

    let mut open = true;
    let mut save = false;
    let mut cancel = false;

    Window::new(format!("Edit user {id}"))
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .show(ui.ctx(), |ui| {
            let Some(form) = state.edit_form.as_mut() else {
                return;
            };

            Grid::new("edit_user_form")
                .num_columns(2)
                .spacing([8.0, 6.0])
                .show(ui, |ui| {
                    let values = &mut form.values;
                    for (label, value) in [
                        ("First Name", &mut values.first_name),
                        ("Last Name", &mut values.last_name),
                        ("Email", &mut values.email),
                        ("Company", &mut values.company),
                        ("Avatar URL", &mut values.avatar),
                    ] {
                        let label = ui.label(label);
                        ui.add_enabled(!busy, TextEdit::singleline(value))
                            .labelled_by(label.id);
                        ui.end_row();
                    }
                });

            if let Some(error) = &form.error {
                ui.colored_label(Color32::RED, format!("Error: {error}"));
            }

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                save = ui.add_enabled(!busy, egui::Button::new("Save")).clicked();
                cancel = ui.button("Cancel").clicked();
                if busy {
                    ui.spinner();
                }
            });
        });

    if !open || cancel {
        state.close_edit_form();
        return;
    }
    if save {
        submit(state, config, ui.ctx());
    }
}

fn submit(state: &mut UsersPanelState, config: &BusinessConfig, ctx: &egui::Context) {
    let Some(form) = state.edit_form.as_mut() else {
        return;
    };
    form.error = None;
    let id = form.id.clone();
    let values = form.values.clone();

    match state.row_action_mut(&id).begin_edit(config, &id, &values) {
        Ok(Some(request)) => {
            send_row_action(&request, id, ActionKind::Edit, ctx.clone(), state.sender());
        }
        Ok(None) => {}
        Err(e) => {
            log::error!("Could not build update for user {id}: {e}");
            if let Some(form) = state.edit_form.as_mut() {
                form.error = Some(e.to_string());
            }
        }
    }
}
