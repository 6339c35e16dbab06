use serde::{Deserialize, Serialize};

use crate::domain::types::{CategoryId, CategoryName, CategoryType};

/// Taxonomy entry seeded outside this service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub id: CategoryId,
    pub name: CategoryName,
    #[serde(rename = "type")]
    pub category_type: CategoryType,
}
