use diesel::prelude::*;

use crate::domain::category::Category;
use crate::domain::types::CategoryType;
use crate::models::category::Category as DbCategory;
use crate::repository::errors::RepositoryResult;
use crate::repository::{CategoryReader, DieselRepository};

impl CategoryReader for DieselRepository {
    fn list_categories_by_type(
        &self,
        category_type: CategoryType,
    ) -> RepositoryResult<Vec<Category>> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        // Served by categories_type_idx; ordering is left to the caller.
        let items = categories::table
            .filter(categories::category_type.eq(category_type.as_str()))
            .select(DbCategory::as_select())
            .load::<DbCategory>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Category>, _>>()?;

        Ok(items)
    }
}
