use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::access::VenueProductKey;
use crate::domain::product::{NewProduct, Product, ProductDetails};
use crate::domain::types::{ProductId, VenueId};
use crate::models::product::{
    NewProduct as DbNewProduct, Product as DbProduct, ProductChanges,
};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{CreateGuard, DieselRepository, ProductReader, ProductWriter};

impl ProductReader for DieselRepository {
    fn get_active_product(&self, id: &ProductId) -> RepositoryResult<Option<Product>> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let product = products::table
            .filter(products::id.eq(id.as_str()))
            .filter(products::is_active.eq(true))
            .select(DbProduct::as_select())
            .first::<DbProduct>(&mut conn)
            .optional()?;

        product.map(TryInto::try_into).transpose()
    }

    fn list_venue_products(&self, venue_id: &VenueId) -> RepositoryResult<Vec<Product>> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        // Served by products_venue_id_name_idx.
        products::table
            .filter(products::venue_id.eq(venue_id.as_str()))
            .order(products::name.asc())
            .select(DbProduct::as_select())
            .load::<DbProduct>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect()
    }

    fn get_venue_product(&self, key: &VenueProductKey) -> RepositoryResult<Option<Product>> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let product = products::table
            .filter(products::id.eq(key.product_id.as_str()))
            .filter(products::venue_id.eq(key.venue_id.as_str()))
            .select(DbProduct::as_select())
            .first::<DbProduct>(&mut conn)
            .optional()?;

        product.map(TryInto::try_into).transpose()
    }
}

impl ProductWriter for DieselRepository {
    fn create_product(
        &self,
        product: &NewProduct,
        guard: CreateGuard,
    ) -> RepositoryResult<Product> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        let db_product = DbNewProduct::try_from(product)?;

        conn.transaction::<_, RepositoryError, _>(|conn| {
            if guard == CreateGuard::OnePerVenue {
                let owned = products::table
                    .filter(products::venue_id.eq(product.venue_id.as_str()))
                    .count()
                    .get_result::<i64>(conn)?;
                if owned > 0 {
                    return Err(RepositoryError::AlreadyExists);
                }
            }

            // The primary key on `id` is the conditional guard: a taken key is
            // a unique violation and surfaces as AlreadyExists.
            diesel::insert_into(products::table)
                .values(&db_product)
                .execute(conn)?;
            Ok(())
        })?;

        Ok(product.clone().into())
    }

    fn update_product(
        &self,
        key: &VenueProductKey,
        details: &ProductDetails,
        updated_at: NaiveDateTime,
    ) -> RepositoryResult<Option<Product>> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        let changes = ProductChanges::replace_with(details, updated_at)?;

        let updated = diesel::update(
            products::table
                .filter(products::id.eq(key.product_id.as_str()))
                .filter(products::venue_id.eq(key.venue_id.as_str())),
        )
        .set(&changes)
        .returning(DbProduct::as_returning())
        .get_result::<DbProduct>(&mut conn)
        .optional()?;

        updated.map(TryInto::try_into).transpose()
    }

    fn delete_product(&self, key: &VenueProductKey) -> RepositoryResult<usize> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let affected = diesel::delete(
            products::table
                .filter(products::id.eq(key.product_id.as_str()))
                .filter(products::venue_id.eq(key.venue_id.as_str())),
        )
        .execute(&mut conn)?;

        Ok(affected)
    }
}
