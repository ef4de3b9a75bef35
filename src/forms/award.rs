//! Badge award form

use chrono::NaiveDate;
use serde::Serialize;

use super::{FieldCleaner, FormData};
use crate::lookups::Lookups;
use crate::models::{Badge, CreateAwardRequest, Event, Person};
use crate::utils::errors::Result;

/// A badge awarded to a person, optionally for a specific event
///
/// `badge` is a hidden input carrying the id of the badge being awarded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BadgeAwardForm {
    pub person: Person,
    pub event: Option<Event>,
    pub badge: Badge,
    pub awarded: NaiveDate,
}

impl BadgeAwardForm {
    pub async fn clean<L>(data: &FormData, lookups: &L) -> Result<Self>
    where
        L: Lookups + ?Sized,
    {
        let mut cleaner = FieldCleaner::new(data);

        let person = match cleaner.choice_id("person", true) {
            Some(id) => {
                let found = lookups.person(id).await?;
                cleaner.resolved("person", found)
            }
            None => None,
        };
        let event = match cleaner.choice_id("event", false) {
            Some(id) => {
                let found = lookups.event(id).await?;
                cleaner.resolved("event", found)
            }
            None => None,
        };
        let badge = match cleaner.choice_id("badge", true) {
            Some(id) => {
                let found = lookups.badge(id).await?;
                cleaner.resolved("badge", found)
            }
            None => None,
        };
        let awarded = cleaner.date_field("awarded", true);

        cleaner.finish(|| {
            Some(Self {
                person: person?,
                event,
                badge: badge?,
                awarded: awarded?,
            })
        })
    }

    pub fn to_request(&self) -> CreateAwardRequest {
        CreateAwardRequest {
            person_id: self.person.id,
            badge_id: self.badge.id,
            awarded: self.awarded,
            event_id: self.event.as_ref().map(|event| event.id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::fields::{INVALID_CHOICE, INVALID_DATE, REQUIRED};
    use crate::lookups::MemoryLookups;
    use crate::utils::errors::AmyError;
    use assert_matches::assert_matches;
    use chrono::Utc;

    fn lookups() -> MemoryLookups {
        MemoryLookups::new()
            .with_person(Person {
                id: 4,
                personal: "Ron".to_string(),
                middle: None,
                family: "Weasley".to_string(),
                username: "weasley_ron".to_string(),
                may_contact: false,
                email: None,
                gender: "M".to_string(),
                airport_id: None,
                github: None,
                twitter: None,
                url: None,
                notes: String::new(),
                created_at: Utc::now(),
            })
            .with_badge(Badge {
                id: 2,
                name: "swc-instructor".to_string(),
                title: "Software Carpentry Instructor".to_string(),
                criteria: "Teaching at Software Carpentry workshops or online".to_string(),
            })
    }

    #[tokio::test]
    async fn test_award_without_event() {
        let data = FormData::new().with("person", "4").with("badge", "2").with("awarded", "2015-06-30");
        let form = BadgeAwardForm::clean(&data, &lookups()).await.unwrap();

        assert_eq!(
            form.to_request(),
            CreateAwardRequest {
                person_id: 4,
                badge_id: 2,
                awarded: NaiveDate::from_ymd_opt(2015, 6, 30).unwrap(),
                event_id: None,
            }
        );
    }

    #[tokio::test]
    async fn test_award_errors() {
        let data = FormData::new().with("badge", "9").with("event", "1").with("awarded", "30.06.2015");
        let result = BadgeAwardForm::clean(&data, &lookups()).await;

        assert_matches!(result, Err(AmyError::Validation(errors)) => {
            assert_eq!(errors.field("person"), [REQUIRED.to_string()]);
            assert_eq!(errors.field("badge"), [INVALID_CHOICE.to_string()]);
            assert_eq!(errors.field("event"), [INVALID_CHOICE.to_string()]);
            assert_eq!(errors.field("awarded"), [INVALID_DATE.to_string()]);
        });
    }
}
