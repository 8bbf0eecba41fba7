use crate::catalog::{PlantId, PlantSummary};
use std::time::Instant;

pub const NO_PLANTS_MESSAGE: &str = "No plants found in this category.";
pub const LOAD_ERROR_MESSAGE: &str = "Error loading plants for this category.";
pub const NO_DESCRIPTION: &str = "No description available";
pub const ADD_LABEL: &str = "Add to Cart";
pub const ADDED_LABEL: &str = "Added!";
const DEFAULT_CATEGORY_BADGE: &str = "Plant";

/// Local stand-ins for fields the catalog left blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayDefaults {
    pub default_price: u32,
    pub description_max_len: usize,
    pub placeholder_image: String,
}

impl DisplayDefaults {
    /// Zero counts as missing, matching how the storefront has always priced.
    pub fn price(&self, price: Option<u32>) -> u32 {
        price.filter(|p| *p > 0).unwrap_or(self.default_price)
    }

    pub fn image(&self, image: Option<&str>) -> String {
        non_blank(image)
            .unwrap_or(&self.placeholder_image)
            .to_string()
    }
}

pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

pub fn truncate_description(description: Option<&str>, max_len: usize) -> String {
    match non_blank(description) {
        None => NO_DESCRIPTION.to_string(),
        Some(text) if text.chars().count() > max_len => {
            let mut short: String = text.chars().take(max_len).collect();
            short.push_str("...");
            short
        }
        Some(text) => text.to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub id: PlantId,
    pub name: String,
    pub description: String,
    pub image: String,
    pub category: String,
    pub price: u32,
}

impl CardView {
    pub fn from_summary(plant: &PlantSummary, defaults: &DisplayDefaults) -> Self {
        Self {
            id: plant.id,
            name: plant.name.clone(),
            description: truncate_description(
                plant.description.as_deref(),
                defaults.description_max_len,
            ),
            image: defaults.image(plant.image.as_deref()),
            category: non_blank(plant.category.as_deref())
                .unwrap_or(DEFAULT_CATEGORY_BADGE)
                .to_string(),
            price: defaults.price(plant.price),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Card {
    pub view: CardView,
    feedback_until: Option<Instant>,
}

impl Card {
    pub fn button_label(&self) -> &'static str {
        if self.feedback_until.is_some() {
            ADDED_LABEL
        } else {
            ADD_LABEL
        }
    }

    pub fn shows_feedback(&self) -> bool {
        self.feedback_until.is_some()
    }
}

#[derive(Debug, Clone)]
pub enum GridContent {
    /// Nothing has been loaded yet.
    Pending,
    Cards(Vec<Card>),
    Empty,
    Failed,
}

#[derive(Debug, Clone)]
pub struct Grid {
    content: GridContent,
    active_card: Option<usize>,
    cursor: usize,
    scroll_row: usize,
    columns: usize,
    visible_rows: usize,
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    pub fn new() -> Self {
        Self {
            content: GridContent::Pending,
            active_card: None,
            cursor: 0,
            scroll_row: 0,
            columns: 1,
            visible_rows: 1,
        }
    }

    /// Rebuilds every card from `plants`, in order, dropping the previous set.
    pub fn replace(&mut self, plants: &[PlantSummary], defaults: &DisplayDefaults) {
        self.active_card = None;
        self.cursor = 0;
        self.scroll_row = 0;
        self.content = if plants.is_empty() {
            GridContent::Empty
        } else {
            GridContent::Cards(
                plants
                    .iter()
                    .map(|plant| Card {
                        view: CardView::from_summary(plant, defaults),
                        feedback_until: None,
                    })
                    .collect(),
            )
        };
    }

    pub fn show_failure(&mut self) {
        self.active_card = None;
        self.cursor = 0;
        self.scroll_row = 0;
        self.content = GridContent::Failed;
    }

    pub fn content(&self) -> &GridContent {
        &self.content
    }

    pub fn cards(&self) -> &[Card] {
        match &self.content {
            GridContent::Cards(cards) => cards,
            _ => &[],
        }
    }

    pub fn card(&self, index: usize) -> Option<&Card> {
        self.cards().get(index)
    }

    pub fn len(&self) -> usize {
        self.cards().len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards().is_empty()
    }

    pub fn active_card(&self) -> Option<usize> {
        self.active_card
    }

    /// Zooms `index`, un-zooming whichever card held the state before.
    pub fn set_active_card(&mut self, index: usize) -> Option<PlantId> {
        let id = self.card(index)?.view.id;
        self.active_card = Some(index);
        self.cursor = index;
        Some(id)
    }

    pub fn clear_active_card(&mut self) {
        self.active_card = None;
    }

    pub fn mark_added(&mut self, index: usize, until: Instant) {
        if let GridContent::Cards(cards) = &mut self.content {
            if let Some(card) = cards.get_mut(index) {
                card.feedback_until = Some(until);
            }
        }
    }

    pub fn expire_feedback(&mut self, now: Instant) {
        if let GridContent::Cards(cards) = &mut self.content {
            for card in cards.iter_mut() {
                if card.feedback_until.is_some_and(|until| until <= now) {
                    card.feedback_until = None;
                }
            }
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn scroll_row(&self) -> usize {
        self.scroll_row
    }

    pub fn visible_rows(&self) -> usize {
        self.visible_rows
    }

    /// Records how many cards fit on screen. Called by the renderer.
    pub fn set_viewport(&mut self, columns: usize, visible_rows: usize) {
        self.columns = columns.max(1);
        self.visible_rows = visible_rows.max(1);
        self.scroll_row = self.scroll_row.min(self.max_scroll_row());
    }

    pub fn move_cursor(&mut self, dx: isize, dy: isize) {
        let len = self.len();
        if len == 0 {
            return;
        }
        let columns = self.columns as isize;
        let current = self.cursor as isize;
        let row = current / columns + dy;
        let col = current % columns + dx;

        if col < 0 || col >= columns || row < 0 {
            return;
        }
        let target = row * columns + col;
        if target < len as isize {
            self.cursor = target as usize;
        } else if dy > 0 {
            // Short last row: land on its final card.
            let last_row = (len as isize - 1) / columns;
            if row == last_row {
                self.cursor = len - 1;
            }
        }
        self.ensure_cursor_visible();
    }

    pub fn scroll_by(&mut self, rows: isize) {
        let max_row = self.max_scroll_row();
        let next = (self.scroll_row as isize + rows).clamp(0, max_row as isize);
        self.scroll_row = next as usize;
    }

    fn total_rows(&self) -> usize {
        self.len().div_ceil(self.columns)
    }

    fn max_scroll_row(&self) -> usize {
        self.total_rows().saturating_sub(self.visible_rows)
    }

    fn ensure_cursor_visible(&mut self) {
        let row = self.cursor / self.columns;
        if row < self.scroll_row {
            self.scroll_row = row;
        } else if row >= self.scroll_row + self.visible_rows {
            self.scroll_row = row + 1 - self.visible_rows;
        }
        self.scroll_row = self.scroll_row.min(self.max_scroll_row());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn defaults() -> DisplayDefaults {
        DisplayDefaults {
            default_price: 500,
            description_max_len: 100,
            placeholder_image: "placeholder.png".to_string(),
        }
    }

    fn plants(n: u32) -> Vec<PlantSummary> {
        (1..=n)
            .map(|i| PlantSummary::new(i, format!("Plant {}", i)).with_price(i * 100))
            .collect()
    }

    #[test]
    fn test_truncate_description() {
        assert_eq!(truncate_description(None, 100), NO_DESCRIPTION);
        assert_eq!(truncate_description(Some("   "), 100), NO_DESCRIPTION);
        assert_eq!(truncate_description(Some("Short"), 100), "Short");

        let long = "x".repeat(120);
        let short = truncate_description(Some(&long), 100);
        assert_eq!(short.chars().count(), 103);
        assert!(short.ends_with("..."));

        let exact = "y".repeat(100);
        assert_eq!(truncate_description(Some(&exact), 100), exact);
    }

    #[test]
    fn test_card_fallbacks() {
        let plant = PlantSummary::new(5, "Bare");
        let view = CardView::from_summary(&plant, &defaults());
        assert_eq!(view.price, 500);
        assert_eq!(view.image, "placeholder.png");
        assert_eq!(view.category, "Plant");
        assert_eq!(view.description, NO_DESCRIPTION);

        let zero_priced = PlantSummary::new(6, "Free").with_price(0);
        assert_eq!(CardView::from_summary(&zero_priced, &defaults()).price, 500);
    }

    #[test]
    fn test_replace_keeps_input_order() {
        let mut grid = Grid::new();
        grid.replace(&plants(3), &defaults());
        let names: Vec<_> = grid.cards().iter().map(|c| c.view.name.as_str()).collect();
        assert_eq!(names, vec!["Plant 1", "Plant 2", "Plant 3"]);

        grid.replace(&plants(1), &defaults());
        assert_eq!(grid.len(), 1);
    }

    #[test]
    fn test_empty_and_failed_are_distinct() {
        let mut grid = Grid::new();
        grid.replace(&[], &defaults());
        assert!(matches!(grid.content(), GridContent::Empty));

        grid.show_failure();
        assert!(matches!(grid.content(), GridContent::Failed));
    }

    #[test]
    fn test_active_card_is_exclusive() {
        let mut grid = Grid::new();
        grid.replace(&plants(3), &defaults());

        assert_eq!(grid.set_active_card(0), Some(PlantId(1)));
        assert_eq!(grid.set_active_card(2), Some(PlantId(3)));
        assert_eq!(grid.active_card(), Some(2));
        assert_eq!(grid.set_active_card(9), None);
        assert_eq!(grid.active_card(), Some(2));

        grid.replace(&plants(2), &defaults());
        assert_eq!(grid.active_card(), None);
    }

    #[test]
    fn test_feedback_expires() {
        let mut grid = Grid::new();
        grid.replace(&plants(2), &defaults());
        let now = Instant::now();

        grid.mark_added(1, now + Duration::from_millis(1000));
        assert_eq!(grid.card(1).unwrap().button_label(), ADDED_LABEL);
        assert_eq!(grid.card(0).unwrap().button_label(), ADD_LABEL);

        grid.expire_feedback(now + Duration::from_millis(500));
        assert!(grid.card(1).unwrap().shows_feedback());

        grid.expire_feedback(now + Duration::from_millis(1000));
        assert_eq!(grid.card(1).unwrap().button_label(), ADD_LABEL);
    }

    #[test]
    fn test_cursor_movement_in_columns() {
        let mut grid = Grid::new();
        grid.replace(&plants(5), &defaults());
        grid.set_viewport(2, 1);

        grid.move_cursor(1, 0);
        assert_eq!(grid.cursor(), 1);
        grid.move_cursor(1, 0);
        assert_eq!(grid.cursor(), 1);

        grid.move_cursor(0, 1);
        assert_eq!(grid.cursor(), 3);
        assert_eq!(grid.scroll_row(), 1);

        grid.move_cursor(0, 1);
        assert_eq!(grid.cursor(), 4);
        assert_eq!(grid.scroll_row(), 2);

        grid.move_cursor(0, -1);
        grid.move_cursor(0, -1);
        assert_eq!(grid.cursor(), 0);
        assert_eq!(grid.scroll_row(), 0);
    }

    #[test]
    fn test_scroll_is_clamped() {
        let mut grid = Grid::new();
        grid.replace(&plants(6), &defaults());
        grid.set_viewport(2, 2);

        grid.scroll_by(10);
        assert_eq!(grid.scroll_row(), 1);
        grid.scroll_by(-10);
        assert_eq!(grid.scroll_row(), 0);
    }
}
