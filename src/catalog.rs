//! Catalog client: plant data model, the JSON shapes the remote API returns,
//! and the HTTP source that fetches them.
//!
//! Category names never come from the remote provider. They are taken from the
//! fixed table in [`CATEGORIES`] so the sidebar stays stable even when the API
//! names things inconsistently.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

pub const DEFAULT_API_BASE_URL: &str = "https://openapi.programming-hero.com/api";

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("HTTP error! status: {0}")]
    Status(u16),
    #[error("invalid catalog response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("failed to start fetch worker: {0}")]
    Spawn(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub id: u32,
    pub name: &'static str,
}

pub const CATEGORIES: [Category; 10] = [
    Category { id: 1, name: "Fruit Trees" },
    Category { id: 2, name: "Flowering Trees" },
    Category { id: 3, name: "Shade Trees" },
    Category { id: 4, name: "Medicinal Trees" },
    Category { id: 5, name: "Timber Trees" },
    Category { id: 6, name: "Evergreen Trees" },
    Category { id: 7, name: "Ornamental Plants" },
    Category { id: 8, name: "Bamboo" },
    Category { id: 9, name: "Climbers" },
    Category { id: 10, name: "Aquatic Plants" },
];

pub fn category_name(id: u32) -> Option<&'static str> {
    CATEGORIES.iter().find(|c| c.id == id).map(|c| c.name)
}

/// Which slice of the catalog the grid shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategorySelector {
    All,
    Id(u32),
}

impl CategorySelector {
    pub fn label(self) -> String {
        match self {
            CategorySelector::All => "All Trees".to_string(),
            CategorySelector::Id(id) => category_name(id)
                .map(str::to_string)
                .unwrap_or_else(|| format!("Category {}", id)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct PlantId(pub u32);

impl fmt::Display for PlantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// The API has served ids both as numbers and as numeric strings.
impl<'de> Deserialize<'de> for PlantId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(u32),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(n) => Ok(PlantId(n)),
            Raw::Text(s) => s
                .trim()
                .parse()
                .map(PlantId)
                .map_err(serde::de::Error::custom),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlantSummary {
    pub id: PlantId,
    #[serde(default, deserialize_with = "string_or_null")]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "lenient_price")]
    pub price: Option<u32>,
}

impl PlantSummary {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id: PlantId(id),
            name: name.into(),
            description: None,
            image: None,
            category: None,
            price: None,
        }
    }

    pub fn with_price(mut self, price: u32) -> Self {
        self.price = Some(price);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlantDetail {
    #[serde(flatten)]
    pub summary: PlantSummary,
    #[serde(default, rename = "scientificName")]
    pub scientific_name: Option<String>,
    #[serde(default)]
    pub origin: Option<String>,
}

impl From<PlantSummary> for PlantDetail {
    fn from(summary: PlantSummary) -> Self {
        Self {
            summary,
            scientific_name: None,
            origin: None,
        }
    }
}

fn string_or_null<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

// Prices arrive as integers, floats or strings. Fractions are dropped.
fn lenient_price<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u32>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(u64),
        Float(f64),
        Text(String),
    }

    fn from_float(f: f64) -> Option<u32> {
        (f.is_finite() && f >= 0.0 && f <= u32::MAX as f64).then(|| f.trunc() as u32)
    }

    let price = match Option::<Raw>::deserialize(deserializer)? {
        None => None,
        Some(Raw::Int(n)) => u32::try_from(n).ok(),
        Some(Raw::Float(f)) => from_float(f),
        Some(Raw::Text(s)) => s.trim().parse::<f64>().ok().and_then(from_float),
    };
    Ok(price)
}

#[derive(Deserialize)]
struct PlantsEnvelope {
    #[serde(default)]
    plants: Option<Vec<PlantSummary>>,
}

#[derive(Deserialize)]
struct PlantEnvelope {
    #[serde(default)]
    plant: Option<PlantDetail>,
}

/// Parses a `{ "plants": [...] }` body. A missing or null list is empty.
pub fn parse_plants(body: &str) -> Result<Vec<PlantSummary>, CatalogError> {
    let envelope: PlantsEnvelope = serde_json::from_str(body)?;
    Ok(envelope.plants.unwrap_or_default())
}

/// Parses a `{ "plant": {...} }` body. A missing or null plant is `None`.
pub fn parse_plant(body: &str) -> Result<Option<PlantDetail>, CatalogError> {
    let envelope: PlantEnvelope = serde_json::from_str(body)?;
    Ok(envelope.plant)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base: String,
}

impl Endpoints {
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into().trim_end_matches('/').to_string();
        Self { base }
    }

    pub fn plants(&self) -> String {
        format!("{}/plants", self.base)
    }

    pub fn category_plants(&self, id: u32) -> String {
        format!("{}/category/{}", self.base, id)
    }

    pub fn plant_details(&self, id: PlantId) -> String {
        format!("{}/plant/{}", self.base, id)
    }

    pub fn plants_for(&self, selector: CategorySelector) -> String {
        match selector {
            CategorySelector::All => self.plants(),
            CategorySelector::Id(id) => self.category_plants(id),
        }
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

/// Anything that can answer catalog queries. Implementations run on fetch
/// worker threads.
pub trait CatalogSource: Send + Sync {
    fn plants(&self, selector: CategorySelector) -> Result<Vec<PlantSummary>, CatalogError>;

    fn plant(&self, id: PlantId) -> Result<Option<PlantDetail>, CatalogError>;

    fn categories(&self) -> Vec<Category> {
        CATEGORIES.to_vec()
    }
}

#[derive(Debug, Clone)]
pub struct HttpSettings {
    /// `None` leaves requests unbounded.
    pub request_timeout: Option<Duration>,
    pub use_system_proxy: bool,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            request_timeout: None,
            use_system_proxy: true,
        }
    }
}

pub struct HttpCatalog {
    client: reqwest::blocking::Client,
    endpoints: Endpoints,
}

impl HttpCatalog {
    pub fn new(endpoints: Endpoints, settings: &HttpSettings) -> Result<Self, CatalogError> {
        let mut builder = reqwest::blocking::Client::builder().timeout(settings.request_timeout);
        if !settings.use_system_proxy {
            builder = builder.no_proxy();
        }
        let client = builder.build().map_err(CatalogError::Client)?;
        Ok(Self { client, endpoints })
    }

    fn get_body(&self, url: &str) -> Result<String, CatalogError> {
        debug!(%url, "fetching");
        let transport = |source| CatalogError::Transport {
            url: url.to_string(),
            source,
        };

        let response = self.client.get(url).send().map_err(transport)?;
        let status = response.status();
        debug!(%url, status = status.as_u16(), "response received");
        if !status.is_success() {
            warn!(%url, status = status.as_u16(), "catalog returned an error status");
            return Err(CatalogError::Status(status.as_u16()));
        }

        response.text().map_err(transport)
    }
}

impl CatalogSource for HttpCatalog {
    fn plants(&self, selector: CategorySelector) -> Result<Vec<PlantSummary>, CatalogError> {
        let body = self.get_body(&self.endpoints.plants_for(selector))?;
        let plants = parse_plants(&body)?;
        debug!(?selector, count = plants.len(), "plants decoded");
        Ok(plants)
    }

    fn plant(&self, id: PlantId) -> Result<Option<PlantDetail>, CatalogError> {
        let body = self.get_body(&self.endpoints.plant_details(id))?;
        parse_plant(&body)
    }
}
