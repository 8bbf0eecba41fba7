mod alert;
mod cart;
mod category;
mod grid;
mod help;
mod modal;
mod navigation;
mod pledge;

use crate::app::{AppState, Focus};
use crate::catalog::CategorySelector;
use crate::modal::CloseTrigger;
use anyhow::Result;
use tracing::debug;

// Re-export all public functions from submodules
pub use alert::*;
pub use cart::*;
pub use category::*;
pub use grid::*;
pub use help::*;
pub use modal::*;
pub use navigation::*;
pub use pledge::*;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Application control
    Quit,

    // Focus and cursor
    FocusNext,
    FocusPrevious,
    CursorUp,
    CursorDown,
    CursorLeft,
    CursorRight,

    // Acting on whatever the focused pane has under its cursor
    Activate,
    AddToCart,
    RemoveFromCart,

    // Categories
    SelectCategory(CategorySelector),
    SelectCategoryAt(usize),

    // Grid
    ActivateCard(usize),
    AddCardToCart(usize),
    ScrollGrid(isize),

    // Cart
    RemoveLine(usize),

    // Detail modal
    CloseModal(CloseTrigger),
    AddModalPlantToCart,

    // Alerts
    DismissAlert,

    // Pledge form
    OpenPledge,
    TypeChar(char),
    Backspace,
    SubmitPledge,
    CancelPledge,

    // Help
    ShowHelp,
    CloseHelp,
}

impl Action {
    /// Actions that reach behind the detail modal.
    fn targets_background(&self) -> bool {
        matches!(
            self,
            Action::FocusNext
                | Action::FocusPrevious
                | Action::CursorUp
                | Action::CursorDown
                | Action::CursorLeft
                | Action::CursorRight
                | Action::Activate
                | Action::AddToCart
                | Action::RemoveFromCart
                | Action::SelectCategory(_)
                | Action::SelectCategoryAt(_)
                | Action::ActivateCard(_)
                | Action::AddCardToCart(_)
                | Action::ScrollGrid(_)
                | Action::RemoveLine(_)
                | Action::OpenPledge
        )
    }

    /// Actions that act on a plant card, given the focused pane.
    fn targets_card(&self, focus: Focus) -> bool {
        match self {
            Action::ActivateCard(_) | Action::AddCardToCart(_) => true,
            Action::Activate | Action::AddToCart => focus == Focus::Grid,
            _ => false,
        }
    }
}

pub fn execute_action(action: Action, app: &mut AppState) -> Result<()> {
    if app.alert.is_some() && !matches!(action, Action::DismissAlert | Action::Quit) {
        debug!(?action, "ignored while an alert is showing");
        return Ok(());
    }
    if app.modal.is_visible() && action.targets_background() {
        debug!(?action, "ignored while the detail modal is open");
        return Ok(());
    }
    if app.is_loading() && action.targets_card(app.focus) {
        debug!(?action, "ignored while the plant grid is hidden");
        return Ok(());
    }

    match action {
        Action::Quit => {
            app.running = false;
        }

        // Focus and cursor
        Action::FocusNext => navigation::focus_next(app),
        Action::FocusPrevious => navigation::focus_previous(app),
        Action::CursorUp => navigation::cursor_up(app),
        Action::CursorDown => navigation::cursor_down(app),
        Action::CursorLeft => navigation::cursor_left(app),
        Action::CursorRight => navigation::cursor_right(app),

        Action::Activate => navigation::activate(app),
        Action::AddToCart => navigation::add_to_cart(app),
        Action::RemoveFromCart => navigation::remove_from_cart(app),

        // Categories
        Action::SelectCategory(selector) => category::select_category(app, selector),
        Action::SelectCategoryAt(index) => category::select_category_at(app, index),

        // Grid
        Action::ActivateCard(index) => grid::activate_card(app, index),
        Action::AddCardToCart(index) => grid::add_card_to_cart(app, index),
        Action::ScrollGrid(rows) => grid::scroll_grid(app, rows),

        // Cart
        Action::RemoveLine(index) => cart::remove_line(app, index),

        // Detail modal
        Action::CloseModal(trigger) => modal::close_modal(app, trigger),
        Action::AddModalPlantToCart => modal::add_modal_plant_to_cart(app),

        Action::DismissAlert => alert::dismiss_alert(app),

        // Pledge form
        Action::OpenPledge => pledge::open_pledge(app),
        Action::TypeChar(c) => pledge::type_char(app, c),
        Action::Backspace => pledge::backspace(app),
        Action::SubmitPledge => pledge::submit_pledge(app),
        Action::CancelPledge => pledge::cancel_pledge(app),

        // Help
        Action::ShowHelp => help::show_help(app),
        Action::CloseHelp => help::close_help(app),
    }

    Ok(())
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use crate::catalog::PlantId;

    #[test]
    fn test_alert_blocks_other_actions() {
        let mut app = app_with_plants(&["Mango"]);
        app.show_alert("Stop");

        execute_action(Action::AddCardToCart(0), &mut app).unwrap();
        assert!(app.cart.is_empty());

        execute_action(Action::DismissAlert, &mut app).unwrap();
        execute_action(Action::AddCardToCart(0), &mut app).unwrap();
        assert_eq!(app.cart.len(), 1);
    }

    #[test]
    fn test_modal_blocks_background() {
        let mut app = app_with_plants(&["Mango", "Neem"]);
        app.modal.begin_loading(PlantId(1));

        execute_action(Action::SelectCategory(CategorySelector::Id(2)), &mut app).unwrap();
        assert_eq!(app.categories.active(), CategorySelector::All);

        execute_action(Action::CloseModal(CloseTrigger::Escape), &mut app).unwrap();
        execute_action(Action::SelectCategory(CategorySelector::Id(2)), &mut app).unwrap();
        assert_eq!(app.categories.active(), CategorySelector::Id(2));
    }

    #[test]
    fn test_hidden_grid_ignores_card_actions() {
        let mut app = app_with_plants(&["Mango", "Neem"]);
        execute_action(Action::SelectCategory(CategorySelector::Id(3)), &mut app).unwrap();
        assert!(app.is_loading());

        execute_action(Action::AddToCart, &mut app).unwrap();
        execute_action(Action::Activate, &mut app).unwrap();
        execute_action(Action::AddCardToCart(1), &mut app).unwrap();
        execute_action(Action::ActivateCard(1), &mut app).unwrap();
        assert!(app.cart.is_empty());
        assert_eq!(app.grid.active_card(), None);
        assert!(!app.has_pending_activation());

        // The category list still answers Enter.
        app.focus = Focus::Categories;
        execute_action(Action::Activate, &mut app).unwrap();
        assert_eq!(app.in_flight(), 2);
    }

    #[test]
    fn test_quit() {
        let mut app = create_test_app();
        execute_action(Action::Quit, &mut app).unwrap();
        assert!(!app.running);
    }
}
