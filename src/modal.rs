//! Plant detail overlay.
//!
//! `Closed -> Loading -> Open -> Closed`. A failed load goes straight back to
//! `Closed`. While the overlay is visible the background is dimmed and does not
//! scroll; both follow from the state, so closing restores them.

use crate::catalog::{PlantDetail, PlantId};
use crate::grid::{non_blank, DisplayDefaults, NO_DESCRIPTION};
use tracing::debug;

const NO_CATEGORY: &str = "Not specified";

#[derive(Debug, Clone, PartialEq)]
pub enum ModalState {
    Closed,
    Loading { plant: PlantId },
    Open(Box<PlantDetail>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseTrigger {
    Button,
    OutsideClick,
    Escape,
}

#[derive(Debug, Clone)]
pub struct Modal {
    state: ModalState,
}

impl Default for Modal {
    fn default() -> Self {
        Self::new()
    }
}

impl Modal {
    pub fn new() -> Self {
        Self {
            state: ModalState::Closed,
        }
    }

    pub fn state(&self) -> &ModalState {
        &self.state
    }

    pub fn begin_loading(&mut self, plant: PlantId) {
        self.state = ModalState::Loading { plant };
    }

    pub fn open(&mut self, detail: PlantDetail) {
        self.state = ModalState::Open(Box::new(detail));
    }

    pub fn fail(&mut self) {
        self.state = ModalState::Closed;
    }

    /// Returns whether the overlay was showing.
    pub fn close(&mut self, trigger: CloseTrigger) -> bool {
        let was_visible = self.is_visible();
        debug!(?trigger, was_visible, "closing detail modal");
        self.state = ModalState::Closed;
        was_visible
    }

    pub fn is_visible(&self) -> bool {
        !matches!(self.state, ModalState::Closed)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, ModalState::Loading { .. })
    }

    pub fn detail(&self) -> Option<&PlantDetail> {
        match &self.state {
            ModalState::Open(detail) => Some(detail.as_ref()),
            _ => None,
        }
    }

    pub fn scroll_locked(&self) -> bool {
        self.is_visible()
    }

    pub fn background_dimmed(&self) -> bool {
        self.is_visible()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub id: PlantId,
    pub name: String,
    pub image: String,
    pub description: String,
    pub category: String,
    pub price: u32,
    pub scientific_name: Option<String>,
    pub origin: Option<String>,
}

impl DetailView {
    pub fn from_detail(detail: &PlantDetail, defaults: &DisplayDefaults) -> Self {
        let summary = &detail.summary;
        Self {
            id: summary.id,
            name: summary.name.clone(),
            image: defaults.image(summary.image.as_deref()),
            description: non_blank(summary.description.as_deref())
                .unwrap_or(NO_DESCRIPTION)
                .to_string(),
            category: non_blank(summary.category.as_deref())
                .unwrap_or(NO_CATEGORY)
                .to_string(),
            price: defaults.price(summary.price),
            scientific_name: non_blank(detail.scientific_name.as_deref()).map(str::to_string),
            origin: non_blank(detail.origin.as_deref()).map(str::to_string),
        }
    }
}
