//! Nonet desktop application UI.
//!
//! # Design Notes
//! - A single fixed puzzle is loaded at startup; the solver runs once inside
//!   `PuzzleBoard::load` to produce the solution the win check compares
//!   against.
//! - Keyboard-driven input (digits, arrows, delete/backspace) with mouse
//!   selection; candidate hints are drawn in every empty cell and refresh on
//!   each edit.
//! - Rejected moves leave the board untouched and show up in the sidebar
//!   until the next accepted action.

use eframe::{
    App, CreationContext, Frame,
    egui::{CentralPanel, Context},
};
use nonet_board::{PuzzleBoard, RejectedMove, UnsolvablePuzzle};
use nonet_core::{Digit, DigitGrid, Position};

use crate::ui::{self, Action, MoveDirection};

/// The puzzle this application ships with; 0 denotes an empty cell.
const CLASSIC_PUZZLE: [[u8; 9]; 9] = [
    [5, 3, 0, 0, 7, 0, 0, 0, 0],
    [6, 0, 0, 1, 9, 5, 0, 0, 0],
    [0, 9, 8, 0, 0, 0, 0, 6, 0],
    [8, 0, 0, 0, 6, 0, 0, 0, 3],
    [4, 0, 0, 8, 0, 3, 0, 0, 1],
    [7, 0, 0, 0, 2, 0, 0, 0, 6],
    [0, 6, 0, 0, 0, 0, 2, 8, 0],
    [0, 0, 0, 4, 1, 9, 0, 0, 5],
    [0, 0, 0, 0, 8, 0, 0, 7, 9],
];

#[derive(Debug)]
pub struct NonetApp {
    board: PuzzleBoard,
    selected_cell: Option<Position>,
    last_rejection: Option<RejectedMove>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Solved,
}

impl NonetApp {
    pub fn new(_cc: &CreationContext<'_>) -> Result<Self, UnsolvablePuzzle> {
        let board = PuzzleBoard::load(DigitGrid::from_rows(CLASSIC_PUZZLE))?;
        log::info!("loaded puzzle with {} givens", board.given_count());
        Ok(Self {
            board,
            selected_cell: None,
            last_rejection: None,
        })
    }

    fn status(&self) -> GameStatus {
        if self.board.is_complete() {
            GameStatus::Solved
        } else {
            GameStatus::InProgress
        }
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::SelectCell(pos) => self.selected_cell = Some(pos),
            Action::ClearSelection => self.selected_cell = None,
            Action::MoveSelection(direction) => self.move_selection(direction),
            Action::SetDigit(digit) => self.set_digit(digit),
            Action::ClearCell => self.clear_cell(),
            Action::ResetPuzzle => self.reset_puzzle(),
        }
    }

    fn move_selection(&mut self, direction: MoveDirection) {
        const DEFAULT_POSITION: Position = Position::new(0, 0);
        let pos = self.selected_cell.get_or_insert(DEFAULT_POSITION);
        let next = match direction {
            MoveDirection::Up => pos.up(),
            MoveDirection::Down => pos.down(),
            MoveDirection::Left => pos.left(),
            MoveDirection::Right => pos.right(),
        };
        if let Some(next) = next {
            *pos = next;
        }
    }

    fn set_digit(&mut self, digit: Digit) {
        if let Some(pos) = self.selected_cell {
            match self.board.set_digit(pos, digit) {
                Ok(()) => self.last_rejection = None,
                Err(rejection) => {
                    log::debug!("rejected {digit} at ({}, {}): {rejection}", pos.x(), pos.y());
                    self.last_rejection = Some(rejection);
                }
            }
        }
    }

    fn clear_cell(&mut self) {
        if let Some(pos) = self.selected_cell {
            match self.board.clear_cell(pos) {
                Ok(()) => self.last_rejection = None,
                Err(rejection) => self.last_rejection = Some(rejection),
            }
        }
    }

    fn reset_puzzle(&mut self) {
        self.board.reset();
        self.selected_cell = None;
        self.last_rejection = None;
    }
}

impl App for NonetApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        for action in ctx.input(|i| ui::input::handle_input(i)) {
            self.apply(action);
        }

        let mut actions = vec![];
        CentralPanel::default().show(ctx, |ui| {
            actions = ui::game_screen::show(
                ui,
                &self.board,
                self.status(),
                self.selected_cell,
                self.last_rejection,
            );
        });
        for action in actions {
            self.apply(action);
        }
    }
}
