//! Main panel for the users table.

use egui::{Color32, Frame, Margin, Response, ScrollArea, Stroke, Ui};
use roster_business::{ActionKind, BusinessConfig, TableBody, User, UserColumn};

use super::api::{fetch_initial_page, fetch_page, send_row_action};
use super::form::show_edit_form;
use super::state::UsersPanelState;
use super::table::columns::COLUMN_SPACING;
use super::table::header::render_table_header;
use super::table::row::{ActionClick, render_empty_row, render_user_row};
use super::table::TABLE_BORDER_COLOR;

/// Room kept below the table so "Load more" stays on screen.
const LOAD_MORE_HEIGHT: f32 = 48.0;
const MIN_TABLE_HEIGHT: f32 = 120.0;

/// Folds finished requests into the panel and starts any reload they require.
///
/// Call once per frame before rendering.
pub fn poll_users_responses(state: &mut UsersPanelState, config: &BusinessConfig, ctx: &egui::Context) {
    let invalidated = state.apply_pending();
    if invalidated || state.needs_initial_load() {
        reload(state, config, ctx);
    }
}

/// Refetches the first page; the answer replaces the whole table.
fn reload(state: &mut UsersPanelState, config: &BusinessConfig, ctx: &egui::Context) {
    state.set_reloading();
    fetch_initial_page(config, ctx.clone(), state.sender());
}

/// Displays the users table with its load-more control and edit form.
pub fn users_panel(state: &mut UsersPanelState, config: &BusinessConfig, ui: &mut Ui) -> Response {
    poll_users_responses(state, config, ui.ctx());

    let response = ui.vertical(|ui| {
        if let Some(error) = state.load_error().map(str::to_owned) {
            ui.horizontal(|ui| {
                ui.colored_label(Color32::RED, format!("Error: {error}"));
                if ui.button("Retry").clicked() {
                    reload(state, config, ui.ctx());
                }
            });
        }

        if state.table().is_none() {
            if state.is_reloading() {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label("Loading...");
                });
            }
            return;
        }

        if let Some((user, click)) = render_table(state, config, ui) {
            apply_click(state, config, &user, click, ui.ctx());
        }

        ui.add_space(8.0);
        render_load_more(state, config, ui);
    });

    show_edit_form(state, config, ui);

    response.response
}

fn render_table(
    state: &UsersPanelState,
    config: &BusinessConfig,
    ui: &mut Ui,
) -> Option<(User, ActionClick)> {
    let table = state.table()?;
    let mut clicked = None;

    Frame::NONE
        .stroke(Stroke::new(1.0, TABLE_BORDER_COLOR))
        .inner_margin(Margin::ZERO)
        .show(ui, |ui| {
            ScrollArea::vertical()
                .max_height((ui.available_height() - LOAD_MORE_HEIGHT).max(MIN_TABLE_HEIGHT))
                .show(ui, |ui| {
                    egui::Grid::new("users_table")
                        .num_columns(UserColumn::COUNT)
                        .striped(true)
                        .spacing(COLUMN_SPACING)
                        .show(ui, |ui| {
                            render_table_header(ui);
                            match table.body() {
                                TableBody::Rows(users) => {
                                    for user in users {
                                        let action = state.row_action(&user.id);
                                        if let Some(click) =
                                            render_user_row(ui, user, action, config.read_only)
                                        {
                                            clicked = Some((user.clone(), click));
                                        }
                                    }
                                }
                                TableBody::Empty => render_empty_row(ui),
                            }
                        });
                });
        });

    clicked
}

fn apply_click(
    state: &mut UsersPanelState,
    config: &BusinessConfig,
    user: &User,
    click: ActionClick,
    ctx: &egui::Context,
) {
    match click {
        ActionClick::Edit => state.open_edit_form(user),
        ActionClick::Delete => {
            let id = user.id.clone();
            if let Some(request) = state.row_action_mut(&id).begin_delete(config, &id) {
                send_row_action(&request, id, ActionKind::Delete, ctx.clone(), state.sender());
            }
        }
    }
}

/// "Load more" is shown while rows remain and disabled while a page is in flight.
fn render_load_more(state: &mut UsersPanelState, config: &BusinessConfig, ui: &mut Ui) {
    let Some(table) = state.table() else {
        return;
    };
    if !table.can_load_more() {
        return;
    }
    let enabled = table.is_load_more_enabled();
    let loading = table.is_loading();

    let clicked = ui
        .vertical_centered(|ui| {
            ui.horizontal(|ui| {
                let clicked = ui
                    .add_enabled(enabled, egui::Button::new("Load more"))
                    .clicked();
                if loading {
                    ui.spinner();
                }
                clicked
            })
            .inner
        })
        .inner;

    if clicked
        && let Some(query) = state.table_mut().and_then(|table| table.begin_load_more())
    {
        let generation = state.generation();
        fetch_page(config, query, generation, ui.ctx().clone(), state.sender());
    }
}
