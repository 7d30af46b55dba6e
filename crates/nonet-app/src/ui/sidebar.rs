use eframe::egui::{RichText, Ui};
use nonet_board::RejectedMove;

use crate::{app::GameStatus, ui::Action};

pub fn show(ui: &mut Ui, status: GameStatus, last_rejection: Option<RejectedMove>) -> Vec<Action> {
    let mut actions = vec![];
    ui.vertical(|ui| {
        let (text, color) = match status {
            GameStatus::InProgress => ("Game in progress", ui.visuals().text_color()),
            GameStatus::Solved => (
                "Congratulations! You solved the puzzle!",
                ui.visuals().warn_fg_color,
            ),
        };
        ui.label(RichText::new(text).size(20.0).color(color));
        if let Some(rejection) = last_rejection {
            ui.label(RichText::new(rejection.to_string()).color(ui.visuals().error_fg_color));
        }
        if ui.button(RichText::new("Reset").size(20.0)).clicked() {
            actions.push(Action::ResetPuzzle);
        }
    });
    actions
}
