use crate::catalog::PlantId;
use indexmap::IndexMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
    pub id: PlantId,
    pub name: String,
    pub unit_price: u32,
    pub quantity: u32,
}

impl LineItem {
    pub fn subtotal(&self) -> u64 {
        u64::from(self.unit_price) * u64::from(self.quantity)
    }
}

/// Line items keyed by plant id, kept in the order they were first added.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    items: IndexMap<PlantId, LineItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one unit and returns the line's new quantity.
    pub fn add(&mut self, id: PlantId, name: impl Into<String>, unit_price: u32) -> u32 {
        let item = self.items.entry(id).or_insert_with(|| LineItem {
            id,
            name: name.into(),
            unit_price,
            quantity: 0,
        });
        item.quantity += 1;
        item.quantity
    }

    /// Drops the whole line regardless of quantity. Absent ids are ignored.
    pub fn remove(&mut self, id: PlantId) -> bool {
        self.items.shift_remove(&id).is_some()
    }

    pub fn total(&self) -> u64 {
        self.items.values().map(LineItem::subtotal).sum()
    }

    pub fn lines(&self) -> impl Iterator<Item = &LineItem> {
        self.items.values()
    }

    pub fn line_at(&self, index: usize) -> Option<&LineItem> {
        self.items.get_index(index).map(|(_, item)| item)
    }

    pub fn get(&self, id: PlantId) -> Option<&LineItem> {
        self.items.get(&id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn unit_count(&self) -> u64 {
        self.items.values().map(|item| u64::from(item.quantity)).sum()
    }
}
