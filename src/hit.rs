//! Click targets recorded while drawing.
//!
//! The renderer registers every interactive region as it draws it. A click
//! resolves to the most recently registered region containing the point, so
//! anything drawn on top (a card's button over its card, the modal over the
//! page) wins, and only that one target receives the click.

use ratatui::layout::Rect;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    Category(usize),
    CardBody(usize),
    CardButton(usize),
    CartRemove(usize),
    ModalBackdrop,
    ModalPanel,
    ModalClose,
    ModalAddToCart,
    AlertDismiss,
}

#[derive(Debug, Clone, Default)]
pub struct HitMap {
    regions: Vec<(Rect, HitTarget)>,
}

impl HitMap {
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn push(&mut self, area: Rect, target: HitTarget) {
        if area.width > 0 && area.height > 0 {
            self.regions.push((area, target));
        }
    }

    pub fn resolve(&self, column: u16, row: u16) -> Option<HitTarget> {
        self.regions
            .iter()
            .rev()
            .find(|(area, _)| contains(*area, column, row))
            .map(|(_, target)| *target)
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x && column < area.right() && row >= area.y && row < area.bottom()
}
