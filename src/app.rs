use crate::cart::Cart;
use crate::catalog::{CatalogSource, CategorySelector, PlantId};
use crate::category::CategoryState;
use crate::config::AppConfig;
use crate::fetch::{CatalogReply, CatalogRequest, ReplyPayload, RequestKind};
use crate::grid::{DisplayDefaults, Grid};
use crate::hit::HitMap;
use crate::modal::{CloseTrigger, Modal};
use std::time::Instant;
use tracing::{debug, info, warn};

pub const DETAIL_NOT_FOUND: &str = "Plant details not found";
pub const DETAIL_LOAD_FAILED: &str = "Failed to load plant details";

#[derive(Debug, Clone, PartialEq)]
pub enum AppMode {
    Browsing,
    Pledge { buffer: String, cursor_pos: usize },
    Help,
}

/// Which pane receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Categories,
    Grid,
    Cart,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Categories => Focus::Grid,
            Focus::Grid => Focus::Cart,
            Focus::Cart => Focus::Categories,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Focus::Categories => Focus::Cart,
            Focus::Grid => Focus::Categories,
            Focus::Cart => Focus::Grid,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct PendingActivation {
    due: Instant,
    plant: PlantId,
}

// Latest generation handed out per screen surface.
#[derive(Debug, Default, Clone, Copy)]
struct Generations {
    grid: u64,
    detail: u64,
}

pub struct AppState {
    pub running: bool,
    pub mode: AppMode,
    pub focus: Focus,
    pub config: AppConfig,
    pub defaults: DisplayDefaults,

    pub categories: CategoryState,
    pub grid: Grid,
    pub cart: Cart,
    pub cart_cursor: usize,
    pub modal: Modal,

    /// Blocking notice; all other input waits until it is dismissed.
    pub alert: Option<String>,
    // Message for status line
    pub message: Option<String>,

    pub hit_map: HitMap,

    outbox: Vec<CatalogRequest>,
    in_flight: usize,
    generations: Generations,
    pending_activation: Option<PendingActivation>,
}

impl AppState {
    pub fn new(config: AppConfig, catalog: &dyn CatalogSource) -> Self {
        let defaults = config.display_defaults();
        Self {
            running: true,
            mode: AppMode::Browsing,
            focus: Focus::Grid,
            config,
            defaults,
            categories: CategoryState::new(catalog.categories()),
            grid: Grid::new(),
            cart: Cart::new(),
            cart_cursor: 0,
            modal: Modal::new(),
            alert: None,
            message: None,
            hit_map: HitMap::default(),
            outbox: Vec::new(),
            in_flight: 0,
            generations: Generations::default(),
            pending_activation: None,
        }
    }

    /// Selects "All Trees" and asks for the full catalog.
    pub fn start(&mut self) {
        info!("starting storefront");
        self.select_category(CategorySelector::All);
    }

    pub fn select_category(&mut self, selector: CategorySelector) {
        info!(category = %self.categories.label(selector), "selecting category");
        self.grid.clear_active_card();
        self.pending_activation = None;
        self.categories.set_active(selector);
        self.request_plants(selector);
    }

    pub fn request_plants(&mut self, selector: CategorySelector) {
        self.generations.grid += 1;
        self.queue(RequestKind::Plants(selector), self.generations.grid);
    }

    pub fn request_detail(&mut self, plant: PlantId) {
        self.generations.detail += 1;
        self.queue(RequestKind::PlantDetail(plant), self.generations.detail);
    }

    fn queue(&mut self, kind: RequestKind, generation: u64) {
        debug!(?kind, generation, "queueing catalog request");
        self.in_flight += 1;
        self.outbox.push(CatalogRequest { kind, generation });
    }

    pub fn take_outbox(&mut self) -> Vec<CatalogRequest> {
        std::mem::take(&mut self.outbox)
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    fn is_stale(&self, request: &CatalogRequest) -> bool {
        if !self.config.discard_stale_responses {
            return false;
        }
        let latest = match request.kind {
            RequestKind::Plants(_) => self.generations.grid,
            RequestKind::PlantDetail(_) => self.generations.detail,
        };
        request.generation < latest
    }

    pub fn apply_reply(&mut self, reply: CatalogReply) {
        self.in_flight = self.in_flight.saturating_sub(1);
        let CatalogReply { request, payload } = reply;

        if self.is_stale(&request) {
            debug!(?request, "dropping stale reply");
            return;
        }

        match (request.kind, payload) {
            (RequestKind::Plants(selector), ReplyPayload::Plants(Ok(plants))) => {
                info!(?selector, count = plants.len(), "plants loaded");
                self.grid.replace(&plants, &self.defaults);
                self.categories.mark_loaded(selector);
            }
            (RequestKind::Plants(selector), ReplyPayload::Plants(Err(err))) => {
                warn!(?selector, %err, "could not load plants");
                self.grid.show_failure();
                self.categories.mark_loaded(selector);
                self.show_error(format!("Failed to fetch data: {}", err));
            }
            (RequestKind::PlantDetail(id), ReplyPayload::PlantDetail(Ok(Some(detail)))) => {
                info!(plant = %id, "plant details loaded");
                self.modal.open(detail);
            }
            (RequestKind::PlantDetail(id), ReplyPayload::PlantDetail(Ok(None))) => {
                warn!(plant = %id, "plant details missing from response");
                self.modal.fail();
                self.grid.clear_active_card();
                self.show_error(DETAIL_NOT_FOUND);
            }
            (RequestKind::PlantDetail(id), ReplyPayload::PlantDetail(Err(err))) => {
                warn!(plant = %id, %err, "could not load plant details");
                self.modal.fail();
                self.grid.clear_active_card();
                self.show_error(DETAIL_LOAD_FAILED);
            }
            (kind, _) => warn!(?kind, "reply does not match its request"),
        }
    }

    /// Zooms the card and schedules its detail lookup.
    pub fn activate_card(&mut self, index: usize, now: Instant) {
        let Some(plant) = self.grid.set_active_card(index) else {
            return;
        };
        debug!(%plant, index, "card activated");
        self.pending_activation = Some(PendingActivation {
            due: now + self.config.card_activation_delay(),
            plant,
        });
    }

    pub fn has_pending_activation(&self) -> bool {
        self.pending_activation.is_some()
    }

    /// Adds the card's plant to the cart and flags that card as just added.
    pub fn add_card_to_cart(&mut self, index: usize, now: Instant) -> bool {
        let Some(card) = self.grid.card(index) else {
            return false;
        };
        let (id, name, price) = (card.view.id, card.view.name.clone(), card.view.price);
        let quantity = self.cart.add(id, name, price);
        debug!(plant = %id, quantity, "added to cart");
        self.grid.mark_added(index, now + self.config.added_feedback());
        true
    }

    pub fn remove_cart_line(&mut self, index: usize) -> bool {
        let Some(id) = self.cart.line_at(index).map(|line| line.id) else {
            return false;
        };
        let removed = self.cart.remove(id);
        self.cart_cursor = self.cart_cursor.min(self.cart.len().saturating_sub(1));
        removed
    }

    pub fn close_modal(&mut self, trigger: CloseTrigger) {
        if self.modal.close(trigger) && self.config.discard_stale_responses {
            // A late detail reply must not reopen what the user just closed.
            self.generations.detail += 1;
        }
        self.grid.clear_active_card();
    }

    /// Advances timers: fires due card activations, expires "Added!" labels.
    pub fn tick(&mut self, now: Instant) {
        if let Some(pending) = self.pending_activation {
            if pending.due <= now {
                self.pending_activation = None;
                self.modal.begin_loading(pending.plant);
                self.request_detail(pending.plant);
            }
        }
        self.grid.expire_feedback(now);
    }

    pub fn show_error(&mut self, message: impl AsRef<str>) {
        self.alert = Some(format!("An error occurred: {}", message.as_ref()));
    }

    pub fn show_alert(&mut self, message: impl Into<String>) {
        self.alert = Some(message.into());
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    pub fn set_message(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
    }

    pub fn clear_message(&mut self) {
        self.message = None;
    }
}
