use crate::catalog::{Category, CategorySelector};

/// Sidebar state. Row 0 is always "All Trees", followed by the fixed categories.
#[derive(Debug, Clone)]
pub struct CategoryState {
    categories: Vec<Category>,
    active: CategorySelector,
    loaded: Option<CategorySelector>,
    cursor: usize,
}

impl CategoryState {
    pub fn new(categories: Vec<Category>) -> Self {
        Self {
            categories,
            active: CategorySelector::All,
            loaded: None,
            cursor: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.categories.len() + 1
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn selector_at(&self, index: usize) -> Option<CategorySelector> {
        match index {
            0 => Some(CategorySelector::All),
            i => self.categories.get(i - 1).map(|c| CategorySelector::Id(c.id)),
        }
    }

    pub fn index_of(&self, selector: CategorySelector) -> Option<usize> {
        match selector {
            CategorySelector::All => Some(0),
            CategorySelector::Id(id) => self
                .categories
                .iter()
                .position(|c| c.id == id)
                .map(|i| i + 1),
        }
    }

    pub fn entries(&self) -> impl Iterator<Item = CategorySelector> + '_ {
        (0..self.len()).filter_map(|i| self.selector_at(i))
    }

    pub fn label(&self, selector: CategorySelector) -> String {
        match selector {
            CategorySelector::Id(id) => self
                .categories
                .iter()
                .find(|c| c.id == id)
                .map(|c| c.name.to_string())
                .unwrap_or_else(|| selector.label()),
            CategorySelector::All => selector.label(),
        }
    }

    pub fn active(&self) -> CategorySelector {
        self.active
    }

    pub fn is_active(&self, selector: CategorySelector) -> bool {
        self.active == selector
    }

    /// Marks `selector` as the only active entry and moves the cursor onto it.
    pub fn set_active(&mut self, selector: CategorySelector) {
        self.active = selector;
        if let Some(index) = self.index_of(selector) {
            self.cursor = index;
        }
    }

    /// The selector whose plants are currently on screen.
    pub fn loaded(&self) -> Option<CategorySelector> {
        self.loaded
    }

    pub fn mark_loaded(&mut self, selector: CategorySelector) {
        self.loaded = Some(selector);
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn cursor_selector(&self) -> Option<CategorySelector> {
        self.selector_at(self.cursor)
    }

    pub fn move_cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_cursor_down(&mut self) {
        if self.cursor + 1 < self.len() {
            self.cursor += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CATEGORIES;

    fn create_state() -> CategoryState {
        CategoryState::new(CATEGORIES.to_vec())
    }

    #[test]
    fn test_initial_state() {
        let state = create_state();
        assert_eq!(state.len(), 11);
        assert_eq!(state.active(), CategorySelector::All);
        assert_eq!(state.loaded(), None);
        assert_eq!(state.cursor_selector(), Some(CategorySelector::All));
    }

    #[test]
    fn test_only_one_active() {
        let mut state = create_state();
        state.set_active(CategorySelector::Id(3));

        let active: Vec<_> = state.entries().filter(|s| state.is_active(*s)).collect();
        assert_eq!(active, vec![CategorySelector::Id(3)]);
        assert_eq!(state.cursor(), 3);

        state.set_active(CategorySelector::All);
        let active: Vec<_> = state.entries().filter(|s| state.is_active(*s)).collect();
        assert_eq!(active, vec![CategorySelector::All]);
    }

    #[test]
    fn test_cursor_bounds() {
        let mut state = create_state();
        state.move_cursor_up();
        assert_eq!(state.cursor(), 0);

        for _ in 0..20 {
            state.move_cursor_down();
        }
        assert_eq!(state.cursor(), 10);
        assert_eq!(state.cursor_selector(), Some(CategorySelector::Id(10)));
    }

    #[test]
    fn test_labels_come_from_table() {
        let state = create_state();
        assert_eq!(state.label(CategorySelector::All), "All Trees");
        assert_eq!(state.label(CategorySelector::Id(8)), "Bamboo");
        assert_eq!(state.selector_at(11), None);
    }
}
