use diesel::prelude::*;

use crate::domain::types::{SubjectId, VenueEmail};
use crate::domain::venue::VenueProfile;
use crate::models::venue::VenueProfile as DbVenueProfile;
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, VenueReader};

impl VenueReader for DieselRepository {
    fn get_venue_by_identity(
        &self,
        email: &VenueEmail,
        subject: &SubjectId,
    ) -> RepositoryResult<Option<VenueProfile>> {
        use crate::schema::venue_profiles;

        let mut conn = self.conn()?;

        let profile = venue_profiles::table
            .filter(venue_profiles::venue_email.eq(email.as_str()))
            .filter(venue_profiles::cognito_id.eq(subject.as_str()))
            .select(DbVenueProfile::as_select())
            .first::<DbVenueProfile>(&mut conn)
            .optional()?;

        let profile = profile.map(TryInto::try_into).transpose()?;
        Ok(profile)
    }
}
