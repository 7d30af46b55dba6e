use eframe::egui::{InputState, Key};
use nonet_core::Digit;

use crate::ui::{Action, MoveDirection};

struct Trigger {
    key: Key,
    command: bool,
}

impl Trigger {
    const fn new(key: Key, command: bool) -> Self {
        Self { key, command }
    }
}

struct Shortcut {
    trigger: Trigger,
    action: Action,
}

impl Shortcut {
    const fn command(key: Key, action: Action) -> Self {
        Self {
            trigger: Trigger::new(key, true),
            action,
        }
    }

    const fn plain(key: Key, action: Action) -> Self {
        Self {
            trigger: Trigger::new(key, false),
            action,
        }
    }
}

const SHORTCUTS: [Shortcut; 17] = [
    Shortcut::command(Key::R, Action::ResetPuzzle),
    Shortcut::plain(Key::ArrowUp, Action::MoveSelection(MoveDirection::Up)),
    Shortcut::plain(Key::ArrowDown, Action::MoveSelection(MoveDirection::Down)),
    Shortcut::plain(Key::ArrowLeft, Action::MoveSelection(MoveDirection::Left)),
    Shortcut::plain(Key::ArrowRight, Action::MoveSelection(MoveDirection::Right)),
    Shortcut::plain(Key::Escape, Action::ClearSelection),
    Shortcut::plain(Key::Delete, Action::ClearCell),
    Shortcut::plain(Key::Backspace, Action::ClearCell),
    Shortcut::plain(Key::Num1, Action::SetDigit(Digit::D1)),
    Shortcut::plain(Key::Num2, Action::SetDigit(Digit::D2)),
    Shortcut::plain(Key::Num3, Action::SetDigit(Digit::D3)),
    Shortcut::plain(Key::Num4, Action::SetDigit(Digit::D4)),
    Shortcut::plain(Key::Num5, Action::SetDigit(Digit::D5)),
    Shortcut::plain(Key::Num6, Action::SetDigit(Digit::D6)),
    Shortcut::plain(Key::Num7, Action::SetDigit(Digit::D7)),
    Shortcut::plain(Key::Num8, Action::SetDigit(Digit::D8)),
    Shortcut::plain(Key::Num9, Action::SetDigit(Digit::D9)),
];

pub fn handle_input(i: &InputState) -> Vec<Action> {
    let mut actions = vec![];
    // `i.modifiers.command` is true when Ctrl (Windows/Linux) or Cmd (Mac) is pressed
    for shortcut in SHORTCUTS {
        if i.key_pressed(shortcut.trigger.key) && i.modifiers.command == shortcut.trigger.command {
            actions.push(shortcut.action);
        }
    }
    actions
}
