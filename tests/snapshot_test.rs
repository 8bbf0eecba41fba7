use green_earth::actions::{self, Action};
use green_earth::catalog::CategorySelector;
use green_earth::event::handle_mouse_event;
use green_earth::modal::CloseTrigger;
use green_earth::ui::{self, cart::line_text, help::HelpRenderer};
use green_earth::AppState;
use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use insta::assert_snapshot;
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
use std::time::{Duration, Instant};

mod common;
use common::*;

fn draw(app: &mut AppState, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|frame| ui::render(frame, app)).unwrap();
    buffer_text(terminal.backend().buffer())
}

fn buffer_text(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut text = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let Some(cell) = buffer.cell((x, y)) {
                text.push_str(cell.symbol());
            }
        }
        text.push('\n');
    }
    text
}

fn click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

#[test]
fn test_render_storefront() {
    let catalog = sample_catalog();
    let mut app = create_test_app(&catalog);

    let screen = draw(&mut app, 100, 30);
    assert!(screen.contains("Categories"));
    assert!(screen.contains("All Trees"));
    assert!(screen.contains("Aquatic Plants"));
    assert!(screen.contains("Mango Tree"));
    assert!(screen.contains("[Fruit Tree]"));
    assert!(screen.contains("[ Add to Cart ]"));
    assert!(screen.contains("Your cart is empty"));
    assert!(screen.contains("৳0"));
}

#[test]
fn test_render_loading_hides_grid() {
    let catalog = sample_catalog();
    let mut app = create_test_app(&catalog);
    actions::execute_action(Action::SelectCategory(CategorySelector::Id(1)), &mut app).unwrap();

    let screen = draw(&mut app, 100, 30);
    assert!(screen.contains("Loading plants..."));
    assert!(!screen.contains("[ Add to Cart ]"));

    settle(&mut app, &catalog);
    let screen = draw(&mut app, 100, 30);
    assert!(!screen.contains("Loading plants..."));
    assert!(screen.contains("Guava Tree"));
}

#[test]
fn test_render_empty_category() {
    let catalog = sample_catalog();
    let mut app = create_test_app(&catalog);
    actions::execute_action(Action::SelectCategory(CategorySelector::Id(3)), &mut app).unwrap();
    settle(&mut app, &catalog);

    let screen = draw(&mut app, 100, 30);
    assert!(screen.contains("Shade Trees"));
    assert!(screen.contains("No plants found in this category."));
}

#[test]
fn test_render_cart_lines() {
    let catalog = sample_catalog();
    let mut app = create_test_app(&catalog);
    actions::execute_action(Action::AddCardToCart(0), &mut app).unwrap();
    actions::execute_action(Action::AddCardToCart(0), &mut app).unwrap();

    let screen = draw(&mut app, 100, 30);
    assert!(screen.contains("[ Added! ]"));
    assert!(screen.contains("৳500 × 2"));
    assert!(screen.contains("৳1000"));
}

#[test]
fn test_clicks_follow_drawn_layout() {
    let catalog = sample_catalog();
    let mut app = create_test_app(&catalog);
    draw(&mut app, 100, 30);

    // One column of cards: the first card spans rows 1-9 of the grid pane,
    // and its button sits on the last row inside the border.
    assert_eq!(
        handle_mouse_event(&app, click(30, 8)),
        Some(Action::AddCardToCart(0))
    );
    assert_eq!(
        handle_mouse_event(&app, click(30, 4)),
        Some(Action::ActivateCard(0))
    );
    assert_eq!(
        handle_mouse_event(&app, click(5, 3)),
        Some(Action::SelectCategoryAt(2))
    );
}

#[test]
fn test_render_detail_modal() {
    let catalog = sample_catalog();
    let mut app = create_test_app(&catalog);
    actions::execute_action(Action::ActivateCard(0), &mut app).unwrap();
    app.tick(Instant::now() + Duration::from_secs(1));

    let screen = draw(&mut app, 100, 30);
    assert!(screen.contains("Loading plant details..."));

    settle(&mut app, &catalog);
    let screen = draw(&mut app, 100, 30);
    assert!(screen.contains("Plant Details"));
    assert!(screen.contains("Mangifera indica"));
    assert!(screen.contains("South Asia"));
    assert!(screen.contains("[ Add to Cart - ৳500 ]"));
    assert!(screen.contains("[ Close ]"));

    // Below the panel, over the first card: only the backdrop answers.
    assert_eq!(
        handle_mouse_event(&app, click(30, 28)),
        Some(Action::CloseModal(CloseTrigger::OutsideClick))
    );
    assert_eq!(handle_mouse_event(&app, click(50, 15)), None);
}

#[test]
fn test_render_alert() {
    let catalog = sample_catalog();
    let mut app = create_test_app(&catalog);
    actions::execute_action(Action::SelectCategory(CategorySelector::Id(9)), &mut app).unwrap();
    settle(&mut app, &catalog);

    let screen = draw(&mut app, 100, 30);
    assert!(screen.contains("An error occurred"));
    assert!(screen.contains("[ OK ]"));

    actions::execute_action(Action::DismissAlert, &mut app).unwrap();
    let screen = draw(&mut app, 100, 30);
    assert!(!screen.contains("[ OK ]"));
    assert!(screen.contains("Error loading plants for this category."));
}

#[test]
fn test_render_too_small() {
    let catalog = sample_catalog();
    let mut app = create_test_app(&catalog);

    let screen = draw(&mut app, 50, 12);
    assert!(screen.contains("Terminal too small"));
    assert!(app.hit_map.is_empty());
}

#[test]
fn test_help_text() {
    assert_snapshot!("help_text", HelpRenderer::plain_text());
}

#[test]
fn test_cart_summary_text() {
    let catalog = sample_catalog();
    let mut app = create_test_app(&catalog);
    for index in [0, 2, 0] {
        actions::execute_action(Action::AddCardToCart(index), &mut app).unwrap();
    }

    let mut text = String::new();
    for line in app.cart.lines() {
        let (name, price) = line_text(line, &app.config.currency_symbol);
        text.push_str(&format!("{}\n{}\n", name, price));
    }
    text.push_str(&format!(
        "Total: {}",
        app.config.format_price(app.cart.total())
    ));

    assert_snapshot!("cart_summary", text);
}
