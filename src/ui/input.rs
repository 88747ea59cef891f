//! 键盘事件映射 (Input -> Action)
//!
//! 将按键事件转换为 Action

use crossterm::event::KeyCode;

use super::actions::Action;
use super::state::App;

/// 根据当前导航状态和按键获取对应的 Action
pub fn get_action(can_go_back: bool, key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Esc if can_go_back => Some(Action::Back),
        KeyCode::Esc => Some(Action::Quit),
        KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => Some(Action::NextTab),
        KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => Some(Action::PrevTab),
        KeyCode::Char('?') => Some(Action::OpenMissingRoute),
        KeyCode::Backspace | KeyCode::Char('b') => Some(Action::Back),
        KeyCode::Char('r') => Some(Action::Remount),
        _ => None,
    }
}

/// 处理按键事件，返回是否退出
pub fn handle_key_event(app: &mut App, key: KeyCode) -> bool {
    match get_action(app.stack.can_go_back(), key) {
        Some(action) => app.dispatch(action),
        None => false,
    }
}
