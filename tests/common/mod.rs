use green_earth::catalog::{
    CatalogError, CatalogSource, CategorySelector, PlantDetail, PlantId, PlantSummary,
};
use green_earth::fetch::{self, CatalogRequest};
use green_earth::{AppConfig, AppState};
use std::collections::HashMap;

/// Scripted catalog. Anything not scripted answers with an empty list or no plant.
#[derive(Default)]
pub struct FakeCatalog {
    plants: HashMap<CategorySelector, Result<Vec<PlantSummary>, u16>>,
    details: HashMap<PlantId, Result<Option<PlantDetail>, u16>>,
}

impl FakeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_plants(mut self, selector: CategorySelector, plants: Vec<PlantSummary>) -> Self {
        self.plants.insert(selector, Ok(plants));
        self
    }

    pub fn with_plants_failure(mut self, selector: CategorySelector, status: u16) -> Self {
        self.plants.insert(selector, Err(status));
        self
    }

    pub fn with_detail(mut self, detail: PlantDetail) -> Self {
        self.details.insert(detail.summary.id, Ok(Some(detail)));
        self
    }

    pub fn with_detail_failure(mut self, id: PlantId, status: u16) -> Self {
        self.details.insert(id, Err(status));
        self
    }
}

impl CatalogSource for FakeCatalog {
    fn plants(&self, selector: CategorySelector) -> Result<Vec<PlantSummary>, CatalogError> {
        match self.plants.get(&selector) {
            Some(Ok(plants)) => Ok(plants.clone()),
            Some(Err(status)) => Err(CatalogError::Status(*status)),
            None => Ok(Vec::new()),
        }
    }

    fn plant(&self, id: PlantId) -> Result<Option<PlantDetail>, CatalogError> {
        match self.details.get(&id) {
            Some(Ok(detail)) => Ok(detail.clone()),
            Some(Err(status)) => Err(CatalogError::Status(*status)),
            None => Ok(None),
        }
    }
}

/// The catalog used by most storefront tests.
pub fn sample_catalog() -> FakeCatalog {
    FakeCatalog::new()
        .with_plants(
            CategorySelector::All,
            vec![
                PlantSummary::new(1, "Mango Tree")
                    .with_price(500)
                    .with_category("Fruit Tree")
                    .with_description("A tropical fruit tree."),
                PlantSummary::new(2, "Guava Tree")
                    .with_price(350)
                    .with_category("Fruit Tree"),
                PlantSummary::new(5, "Neem Tree")
                    .with_price(250)
                    .with_category("Medicinal Tree"),
            ],
        )
        .with_plants(
            CategorySelector::Id(1),
            vec![
                PlantSummary::new(1, "Mango Tree").with_price(500),
                PlantSummary::new(2, "Guava Tree").with_price(350),
            ],
        )
        .with_plants(CategorySelector::Id(3), Vec::new())
        .with_plants_failure(CategorySelector::Id(9), 500)
        .with_detail(PlantDetail {
            summary: PlantSummary::new(1, "Mango Tree").with_price(500),
            scientific_name: Some("Mangifera indica".to_string()),
            origin: Some("South Asia".to_string()),
        })
        .with_detail_failure(PlantId(2), 503)
}

pub fn create_test_app(catalog: &FakeCatalog) -> AppState {
    create_test_app_with(AppConfig::default(), catalog)
}

pub fn create_test_app_with(config: AppConfig, catalog: &FakeCatalog) -> AppState {
    let mut app = AppState::new(config, catalog);
    app.start();
    settle(&mut app, catalog);
    app
}

/// Runs every queued request inline, in order, until the outbox is empty.
pub fn settle(app: &mut AppState, catalog: &FakeCatalog) {
    loop {
        let requests = app.take_outbox();
        if requests.is_empty() {
            break;
        }
        for request in requests {
            app.apply_reply(fetch::perform(catalog, request));
        }
    }
}

/// Takes the queued requests without answering them.
#[allow(dead_code)]
pub fn hold(app: &mut AppState) -> Vec<CatalogRequest> {
    app.take_outbox()
}
