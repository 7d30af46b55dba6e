use eframe::egui::Ui;
use egui_extras::{Size, StripBuilder};
use nonet_board::{PuzzleBoard, RejectedMove};
use nonet_core::Position;

use crate::{
    app::GameStatus,
    ui::{self, Action, grid::GridViewModel},
};

pub fn show(
    ui: &mut Ui,
    board: &PuzzleBoard,
    status: GameStatus,
    selected_cell: Option<Position>,
    last_rejection: Option<RejectedMove>,
) -> Vec<Action> {
    let selected_digit = selected_cell.and_then(|pos| board.cell(pos).as_digit());
    let vm = GridViewModel::new(board, selected_cell, selected_digit);

    let mut actions = vec![];
    StripBuilder::new(ui)
        .size(Size::relative(0.75))
        .size(Size::relative(0.25))
        .horizontal(|mut strip| {
            strip.cell(|ui| {
                StripBuilder::new(ui)
                    .size(Size::relative(9.0 / (9.0 + 2.0)))
                    .size(Size::relative(2.0 / (9.0 + 2.0)))
                    .vertical(|mut strip| {
                        strip.cell(|ui| {
                            actions.extend(&super::grid::show(ui, &vm));
                        });
                        strip.cell(|ui| {
                            actions.extend(&super::keypad::show(ui, board, selected_cell));
                        });
                    });
            });
            strip.cell(|ui| {
                actions.extend(&ui::sidebar::show(ui, status, last_rejection));
            });
        });
    actions
}
