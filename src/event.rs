use crate::actions::Action;
use crate::app::{AppMode, AppState};
use crate::catalog::CategorySelector;
use crate::hit::HitTarget;
use crate::modal::CloseTrigger;
use anyhow::Result;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use std::time::Duration;

const WHEEL_ROWS: isize = 1;
const PAGE_ROWS: isize = 3;

pub fn handle_events(app: &AppState) -> Result<Option<Action>> {
    if event::poll(Duration::from_millis(50))? {
        return Ok(match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => handle_key_event(app, key),
            Event::Mouse(mouse) => handle_mouse_event(app, mouse),
            // The next draw picks up the new size.
            _ => None,
        });
    }
    Ok(None)
}

/// Overlays take keys first: alert, then help, the pledge form, the modal.
pub fn handle_key_event(app: &AppState, key: KeyEvent) -> Option<Action> {
    if key.code == KeyCode::Char('c') && key.modifiers == KeyModifiers::CONTROL {
        return Some(Action::Quit);
    }
    if app.alert.is_some() {
        return handle_alert_key(key);
    }
    match &app.mode {
        AppMode::Help => handle_help_mode(key),
        AppMode::Pledge { .. } => handle_pledge_mode(key),
        AppMode::Browsing if app.modal.is_visible() => handle_modal_key(key),
        AppMode::Browsing => handle_browsing_mode(key),
    }
}

fn handle_alert_key(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => Some(Action::DismissAlert),
        _ => None,
    }
}

fn handle_browsing_mode(key: KeyEvent) -> Option<Action> {
    use KeyCode::*;

    match (key.code, key.modifiers) {
        (Char('q'), KeyModifiers::NONE) => Some(Action::Quit),

        // Focus
        (Tab, _) => Some(Action::FocusNext),
        (BackTab, _) => Some(Action::FocusPrevious),

        // Movement
        (Char('h'), KeyModifiers::NONE) | (Left, _) => Some(Action::CursorLeft),
        (Char('j'), KeyModifiers::NONE) | (Down, _) => Some(Action::CursorDown),
        (Char('k'), KeyModifiers::NONE) | (Up, _) => Some(Action::CursorUp),
        (Char('l'), KeyModifiers::NONE) | (Right, _) => Some(Action::CursorRight),
        (PageDown, _) => Some(Action::ScrollGrid(PAGE_ROWS)),
        (PageUp, _) => Some(Action::ScrollGrid(-PAGE_ROWS)),

        // Activation
        (Enter, _) => Some(Action::Activate),
        (Char('a'), KeyModifiers::NONE) | (Char(' '), KeyModifiers::NONE) => {
            Some(Action::AddToCart)
        }
        (Char('d'), KeyModifiers::NONE) | (Char('x'), KeyModifiers::NONE) | (Delete, _) => {
            Some(Action::RemoveFromCart)
        }

        // Category shortcuts
        (Char('0'), KeyModifiers::NONE) => Some(Action::SelectCategory(CategorySelector::All)),
        (Char(c @ '1'..='9'), KeyModifiers::NONE) => c
            .to_digit(10)
            .map(|id| Action::SelectCategory(CategorySelector::Id(id))),

        (Char('p'), KeyModifiers::NONE) => Some(Action::OpenPledge),
        (Char('?'), _) => Some(Action::ShowHelp),

        _ => None,
    }
}

fn handle_modal_key(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Esc => Some(Action::CloseModal(CloseTrigger::Escape)),
        KeyCode::Char('c') => Some(Action::CloseModal(CloseTrigger::Button)),
        KeyCode::Char('a') | KeyCode::Enter => Some(Action::AddModalPlantToCart),
        KeyCode::Char('q') => Some(Action::Quit),
        _ => None,
    }
}

fn handle_pledge_mode(key: KeyEvent) -> Option<Action> {
    use KeyCode::*;

    match key.code {
        Esc => Some(Action::CancelPledge),
        Enter => Some(Action::SubmitPledge),
        Backspace => Some(Action::Backspace),
        Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::TypeChar(c)),
        _ => None,
    }
}

fn handle_help_mode(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => Some(Action::CloseHelp),
        _ => None,
    }
}

/// Routes a click to the topmost region the last frame drew under it.
pub fn handle_mouse_event(app: &AppState, mouse: MouseEvent) -> Option<Action> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {}
        MouseEventKind::ScrollDown if accepts_scroll(app) => {
            return Some(Action::ScrollGrid(WHEEL_ROWS))
        }
        MouseEventKind::ScrollUp if accepts_scroll(app) => {
            return Some(Action::ScrollGrid(-WHEEL_ROWS))
        }
        _ => return None,
    }

    let target = app.hit_map.resolve(mouse.column, mouse.row);
    if app.alert.is_some() {
        return matches!(target, Some(HitTarget::AlertDismiss)).then_some(Action::DismissAlert);
    }
    match app.mode {
        AppMode::Help => return Some(Action::CloseHelp),
        AppMode::Pledge { .. } => return None,
        AppMode::Browsing => {}
    }

    match target? {
        HitTarget::ModalClose => Some(Action::CloseModal(CloseTrigger::Button)),
        HitTarget::ModalAddToCart => Some(Action::AddModalPlantToCart),
        HitTarget::ModalBackdrop => Some(Action::CloseModal(CloseTrigger::OutsideClick)),
        HitTarget::ModalPanel | HitTarget::AlertDismiss => None,
        _ if app.modal.is_visible() => None,
        HitTarget::Category(index) => Some(Action::SelectCategoryAt(index)),
        HitTarget::CardBody(index) => Some(Action::ActivateCard(index)),
        HitTarget::CardButton(index) => Some(Action::AddCardToCart(index)),
        HitTarget::CartRemove(index) => Some(Action::RemoveLine(index)),
    }
}

fn accepts_scroll(app: &AppState) -> bool {
    app.alert.is_none() && app.mode == AppMode::Browsing && !app.modal.scroll_locked()
}
