use hover_tooltip::TooltipConfig;
use serde::Deserialize;

const CATALOGUE_JSON: &str = include_str!("../catalogue.json");

#[derive(Clone, Debug, Deserialize)]
pub struct Catalogue {
    pub sections: Vec<Section>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Section {
    pub title: String,
    pub entries: Vec<Entry>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Entry {
    pub label: String,
    pub tooltip: TooltipConfig,
}

#[derive(thiserror::Error, Debug)]
#[error("Could not load the showcase catalogue: {source}")]
pub struct CatalogueError {
    #[from]
    source: serde_json::Error,
}

impl Catalogue {

    pub fn load() -> Result<Self, CatalogueError> {
        Self::parse(CATALOGUE_JSON)
    }

    fn parse(json: &str) -> Result<Self, CatalogueError> {
        let catalogue = serde_json::from_str(json)?;
        Ok(catalogue)
    }
}
