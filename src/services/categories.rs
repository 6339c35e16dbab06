use crate::domain::category::Category;
use crate::domain::types::CategoryType;
use crate::repository::CategoryReader;

use super::{ServiceError, ServiceResult};

const INVALID_TYPE_MESSAGE: &str = "Param type must be ProductCategory or CultureCategory";

/// List taxonomy entries of one type, ordered by name.
///
/// The type is checked against the closed set before the store is queried.
pub fn list_categories<R>(category_type: Option<&str>, repo: &R) -> ServiceResult<Vec<Category>>
where
    R: CategoryReader,
{
    let category_type = category_type
        .and_then(|t| CategoryType::try_from(t).ok())
        .ok_or_else(|| ServiceError::Validation(INVALID_TYPE_MESSAGE.to_string()))?;

    match repo.list_categories_by_type(category_type) {
        Ok(mut categories) => {
            categories.sort_by(|a, b| a.name.as_str().cmp(b.name.as_str()));
            Ok(categories)
        }
        Err(e) => {
            log::error!("Failed to list categories: {e}");
            Err(e.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{CategoryId, CategoryName};
    use crate::repository::test::TestRepository;

    fn category(id: &str, name: &str, category_type: CategoryType) -> Category {
        Category {
            id: CategoryId::new(id).unwrap(),
            name: CategoryName::new(name).unwrap(),
            category_type,
        }
    }

    fn repo() -> TestRepository {
        TestRepository::new(
            vec![],
            vec![],
            vec![
                category("c-1", "Noodles", CategoryType::ProductCategory),
                category("c-2", "Thai", CategoryType::CultureCategory),
                category("c-3", "Curry", CategoryType::ProductCategory),
                category("c-4", "Japanese", CategoryType::CultureCategory),
            ],
        )
    }

    #[test]
    fn lists_one_type_sorted_by_name() {
        let repo = repo();
        let names: Vec<String> = list_categories(Some("ProductCategory"), &repo)
            .unwrap()
            .into_iter()
            .map(|c| c.name.into_inner())
            .collect();
        assert_eq!(names, vec!["Curry", "Noodles"]);
    }

    #[test]
    fn unknown_type_is_rejected_before_querying() {
        let repo = repo();
        for raw in [None, Some(""), Some("Cuisine"), Some("productcategory")] {
            assert_eq!(
                list_categories(raw, &repo).unwrap_err(),
                ServiceError::Validation(INVALID_TYPE_MESSAGE.to_string())
            );
        }
        assert_eq!(repo.category_queries(), 0);
    }

    #[test]
    fn empty_result_is_not_an_error() {
        let repo = TestRepository::default();
        assert!(list_categories(Some("CultureCategory"), &repo).unwrap().is_empty());
        assert_eq!(repo.category_queries(), 1);
    }
}
