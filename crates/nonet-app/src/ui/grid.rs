use std::sync::Arc;

use eframe::egui::{
    Align2, Button, Color32, FontId, Grid, Painter, Rect, RichText, Stroke, StrokeKind, Ui, Vec2,
    Visuals,
};
use nonet_board::{CellState, PuzzleBoard};
use nonet_core::{Digit, DigitSet, Position};

use crate::ui::Action;

#[derive(Debug, Clone)]
pub struct GridViewModel<'a> {
    board: &'a PuzzleBoard,
    selected_cell: Option<Position>,
    selected_digit: Option<Digit>,
}

impl<'a> GridViewModel<'a> {
    pub fn new(
        board: &'a PuzzleBoard,
        selected_cell: Option<Position>,
        selected_digit: Option<Digit>,
    ) -> Self {
        Self {
            board,
            selected_cell,
            selected_digit,
        }
    }

    fn cell_highlight(&self, cell_pos: Position) -> CellHighlight {
        let cell_digit = self.board.cell(cell_pos).as_digit();
        if Some(cell_pos) == self.selected_cell {
            CellHighlight::Selected
        } else if self.selected_digit.is_some_and(|d| Some(d) == cell_digit) {
            CellHighlight::SameDigit
        } else if self
            .selected_cell
            .is_some_and(|p| p.shares_house(cell_pos))
        {
            CellHighlight::SameHouse
        } else {
            CellHighlight::None
        }
    }

    fn cell_text(&self, pos: Position, visuals: &Visuals) -> RichText {
        match self.board.cell(pos) {
            CellState::Given(digit) => {
                RichText::new(digit.as_str()).color(visuals.strong_text_color())
            }
            CellState::Filled(digit) => RichText::new(digit.as_str()).color(visuals.text_color()),
            CellState::Empty => RichText::new(""),
        }
    }

    fn candidates(&self, pos: Position) -> DigitSet {
        self.board.valid_candidates(pos)
    }

    fn inactive_border_color(visuals: &Visuals) -> Color32 {
        visuals.widgets.inactive.fg_stroke.color
    }

    fn grid_thick_border(visuals: &Visuals) -> Stroke {
        Stroke::new(3.0, Self::inactive_border_color(visuals))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CellHighlight {
    Selected,
    SameDigit,
    SameHouse,
    None,
}

impl CellHighlight {
    fn fill_color(self, visuals: &Visuals) -> Color32 {
        match self {
            Self::Selected | Self::SameDigit => visuals.selection.bg_fill,
            Self::SameHouse => visuals.widgets.hovered.bg_fill,
            Self::None => visuals.text_edit_bg_color(),
        }
    }

    fn border(self, visuals: &Visuals) -> Stroke {
        match self {
            Self::Selected => Stroke::new(6.0, visuals.selection.stroke.color),
            Self::SameDigit => Stroke::new(2.0, visuals.selection.stroke.color),
            Self::SameHouse => Stroke::new(1.5, visuals.widgets.hovered.fg_stroke.color),
            Self::None => Stroke::new(1.0, GridViewModel::inactive_border_color(visuals)),
        }
    }
}

pub fn show(ui: &mut Ui, vm: &GridViewModel<'_>) -> Vec<Action> {
    let mut actions = vec![];

    let style = Arc::clone(ui.style());
    let visuals = &style.visuals;
    let thick_border = GridViewModel::grid_thick_border(visuals);
    let candidate_color = visuals.weak_text_color();

    let grid_size = ui.available_size().min_elem();
    let cell_size = grid_size / 9.0;

    Grid::new(ui.id().with("board"))
        .spacing((0.0, 0.0))
        .min_col_width(cell_size * 3.0)
        .min_row_height(cell_size * 3.0)
        .show(ui, |ui| {
            for box_row in 0..3 {
                for box_col in 0..3 {
                    let box_index = box_row * 3 + box_col;
                    let grid = Grid::new(ui.id().with(format!("box_{box_row}_{box_col}")))
                        .spacing((0.0, 0.0))
                        .min_col_width(cell_size)
                        .min_row_height(cell_size)
                        .show(ui, |ui| {
                            for cell_row in 0..3 {
                                for cell_col in 0..3 {
                                    let cell_index = cell_row * 3 + cell_col;
                                    let pos = Position::from_box(box_index, cell_index);
                                    let text = vm.cell_text(pos, visuals).size(cell_size * 0.8);
                                    let highlight = vm.cell_highlight(pos);
                                    let button = Button::new(text)
                                        .min_size(Vec2::splat(cell_size))
                                        .fill(highlight.fill_color(visuals));
                                    let button = ui.add(button);
                                    if vm.board.cell(pos).is_empty() {
                                        draw_candidates(
                                            ui.painter(),
                                            button.rect.shrink(cell_size * 0.08),
                                            vm.candidates(pos),
                                            candidate_color,
                                        );
                                    }
                                    ui.painter().rect_stroke(
                                        button.rect,
                                        0.0,
                                        highlight.border(visuals),
                                        StrokeKind::Inside,
                                    );
                                    if button.clicked() {
                                        actions.push(Action::SelectCell(pos));
                                    }
                                }
                                ui.end_row();
                            }
                        });
                    ui.painter().rect_stroke(
                        grid.response.rect,
                        0.0,
                        thick_border,
                        StrokeKind::Inside,
                    );
                }
                ui.end_row();
            }
        });

    actions
}

/// Draws the cell's current candidates as a 3x3 arrangement of small digits,
/// each digit at the spot it would occupy on a keypad.
fn draw_candidates(painter: &Painter, rect: Rect, digits: DigitSet, color: Color32) {
    let font = FontId::proportional(rect.height() / 3.0);

    let cell_w = rect.width() / 3.0;
    let cell_h = rect.height() / 3.0;

    for digit in digits {
        let idx = digit.value() - 1;
        let x = f32::from(idx % 3);
        let y = f32::from(idx / 3);

        let center = rect.min + Vec2::new((x + 0.5) * cell_w, (y + 0.5) * cell_h);
        painter.text(center, Align2::CENTER_CENTER, digit.as_str(), font.clone(), color);
    }
}
