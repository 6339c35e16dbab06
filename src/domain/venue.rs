use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{SubjectId, VenueEmail, VenueId, VenueName};

/// A registered venue operator.
///
/// Profiles are keyed by the operator's email together with the identity
/// provider subject. The internal `venue_id` is assigned once at onboarding
/// and never changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VenueProfile {
    pub venue_email: VenueEmail,
    pub cognito_id: SubjectId,
    pub venue_id: VenueId,
    pub venue_name: Option<VenueName>,
    pub created_at: NaiveDateTime,
}
