use crate::auth::{AuthenticatedUser, VENUE_GROUP};
use crate::domain::types::{SubjectId, VenueEmail, VenueId};
use crate::repository::VenueReader;

use super::{ServiceError, ServiceResult};

/// Resolve the venue operated by the authenticated caller.
///
/// The caller must belong to the venue group and own a profile keyed by
/// `(email, sub)`. A missing profile means the caller is not a registered
/// venue operator and is reported as [`ServiceError::NotFound`].
pub fn resolve_venue_id<R>(user: &AuthenticatedUser, repo: &R) -> ServiceResult<VenueId>
where
    R: VenueReader,
{
    if !user.in_group(VENUE_GROUP) {
        return Err(ServiceError::Unauthorized);
    }

    let (Ok(email), Ok(subject)) = (
        VenueEmail::new(user.email.as_str()),
        SubjectId::new(user.sub.as_str()),
    ) else {
        log::warn!("Token for subject {:?} carries blank identity claims", user.sub);
        return Err(ServiceError::NotFound);
    };

    match repo.get_venue_by_identity(&email, &subject) {
        Ok(Some(profile)) => Ok(profile.venue_id),
        Ok(None) => {
            log::warn!("No venue profile for {email} / {subject}");
            Err(ServiceError::NotFound)
        }
        Err(e) => {
            log::error!("Failed to resolve venue profile: {e}");
            Err(e.into())
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::domain::types::VenueName;
    use crate::domain::venue::VenueProfile;
    use crate::repository::test::TestRepository;
    use chrono::DateTime;

    pub fn venue_user(email: &str, sub: &str) -> AuthenticatedUser {
        AuthenticatedUser {
            sub: sub.into(),
            email: email.into(),
            groups: vec![VENUE_GROUP.into()],
            exp: 0,
        }
    }

    pub fn venue_profile(email: &str, sub: &str, venue_id: &str) -> VenueProfile {
        VenueProfile {
            venue_email: VenueEmail::new(email).unwrap(),
            cognito_id: SubjectId::new(sub).unwrap(),
            venue_id: VenueId::new(venue_id).unwrap(),
            venue_name: Some(VenueName::new("Bangkok Corner").unwrap()),
            created_at: DateTime::from_timestamp(0, 0).unwrap().naive_utc(),
        }
    }

    #[test]
    fn resolves_registered_operator() {
        let repo = TestRepository::new(
            vec![venue_profile("v1@example.com", "sub-1", "ven-1")],
            vec![],
            vec![],
        );
        let venue_id = resolve_venue_id(&venue_user("v1@example.com", "sub-1"), &repo).unwrap();
        assert_eq!(venue_id, "ven-1");
    }

    #[test]
    fn unknown_identity_is_not_found() {
        let repo = TestRepository::new(
            vec![venue_profile("v1@example.com", "sub-1", "ven-1")],
            vec![],
            vec![],
        );
        // Same email, different subject: the key is the pair, not the email.
        let err = resolve_venue_id(&venue_user("v1@example.com", "sub-2"), &repo).unwrap_err();
        assert_eq!(err, ServiceError::NotFound);
    }

    #[test]
    fn caller_outside_venue_group_is_unauthorized() {
        let repo = TestRepository::new(
            vec![venue_profile("v1@example.com", "sub-1", "ven-1")],
            vec![],
            vec![],
        );
        let mut user = venue_user("v1@example.com", "sub-1");
        user.groups = vec!["customer".into()];
        assert_eq!(
            resolve_venue_id(&user, &repo).unwrap_err(),
            ServiceError::Unauthorized
        );
    }
}
