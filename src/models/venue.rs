use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::types::{SubjectId, TypeConstraintError, VenueEmail, VenueId, VenueName};
use crate::domain::venue::VenueProfile as DomainVenueProfile;

/// Diesel model representing the `venue_profiles` table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = crate::schema::venue_profiles)]
pub struct VenueProfile {
    pub venue_email: String,
    pub cognito_id: String,
    pub venue_id: String,
    pub venue_name: Option<String>,
    pub created_at: NaiveDateTime,
}

impl TryFrom<VenueProfile> for DomainVenueProfile {
    type Error = TypeConstraintError;

    fn try_from(profile: VenueProfile) -> Result<Self, Self::Error> {
        Ok(Self {
            venue_email: VenueEmail::new(profile.venue_email)?,
            cognito_id: SubjectId::new(profile.cognito_id)?,
            venue_id: VenueId::new(profile.venue_id)?,
            venue_name: profile.venue_name.map(VenueName::new).transpose()?,
            created_at: profile.created_at,
        })
    }
}
