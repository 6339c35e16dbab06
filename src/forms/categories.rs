use serde::Deserialize;

/// Query string of the category lookup.
#[derive(Debug, Deserialize)]
pub struct CategoriesQuery {
    #[serde(rename = "type")]
    pub category_type: Option<String>,
}
