//! Person form

use serde::Serialize;

use super::fields::INVALID_CHOICE;
use super::{FieldCleaner, FormData};
use crate::lookups::Lookups;
use crate::models::{Airport, CreatePersonRequest, Gender};
use crate::utils::errors::Result;
use crate::utils::helpers::is_valid_username;

pub const INVALID_USERNAME: &str =
    "Enter a valid username. This value may contain only letters, numbers, underscores, dots and hyphens.";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersonForm {
    pub personal: String,
    pub middle: Option<String>,
    pub family: String,
    pub username: String,
    pub may_contact: bool,
    pub email: Option<String>,
    pub gender: Gender,
    pub airport: Option<Airport>,
    pub github: Option<String>,
    pub twitter: Option<String>,
    pub url: Option<String>,
    pub notes: String,
}

impl PersonForm {
    pub const NAME_MAX_LENGTH: usize = 100;
    pub const USERNAME_MAX_LENGTH: usize = 40;
    pub const EMAIL_MAX_LENGTH: usize = 100;
    pub const HANDLE_MAX_LENGTH: usize = 40;
    pub const URL_MAX_LENGTH: usize = 200;

    pub async fn clean<L>(data: &FormData, lookups: &L) -> Result<Self>
    where
        L: Lookups + ?Sized,
    {
        let mut cleaner = FieldCleaner::new(data);

        let personal = cleaner.char_field("personal", true, Some(Self::NAME_MAX_LENGTH));
        let middle = cleaner.char_field("middle", false, Some(Self::NAME_MAX_LENGTH));
        let family = cleaner.char_field("family", true, Some(Self::NAME_MAX_LENGTH));

        let mut username = cleaner.char_field("username", true, Some(Self::USERNAME_MAX_LENGTH));
        if username.as_deref().is_some_and(|name| !is_valid_username(name)) {
            cleaner.add_error("username", INVALID_USERNAME);
            username = None;
        }

        let may_contact = cleaner.boolean_field("may_contact");
        let email = cleaner.email_field("email", false, Some(Self::EMAIL_MAX_LENGTH));

        let gender = match data.get("gender") {
            None => Some(Gender::default()),
            Some(code) => {
                let gender = Gender::from_code(code);
                if gender.is_none() {
                    cleaner.add_error("gender", INVALID_CHOICE);
                }
                gender
            }
        };

        let airport = match cleaner.choice_id("airport", false) {
            Some(id) => {
                let found = lookups.airport(id).await?;
                cleaner.resolved("airport", found)
            }
            None => None,
        };

        let github = cleaner.char_field("github", false, Some(Self::HANDLE_MAX_LENGTH));
        let twitter = cleaner.char_field("twitter", false, Some(Self::HANDLE_MAX_LENGTH));
        let url = cleaner.url_field("url", false, Some(Self::URL_MAX_LENGTH));
        let notes = cleaner.text_field("notes");

        cleaner.finish(|| {
            Some(Self {
                personal: personal?,
                middle,
                family: family?,
                username: username?,
                may_contact,
                email,
                gender: gender?,
                airport,
                github,
                twitter,
                url,
                notes,
            })
        })
    }

    pub fn to_request(&self) -> CreatePersonRequest {
        CreatePersonRequest {
            personal: self.personal.clone(),
            middle: self.middle.clone(),
            family: self.family.clone(),
            username: self.username.clone(),
            may_contact: self.may_contact,
            email: self.email.clone(),
            gender: self.gender,
            airport_id: self.airport.as_ref().map(|airport| airport.id),
            github: self.github.clone(),
            twitter: self.twitter.clone(),
            url: self.url.clone(),
            notes: self.notes.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::fields::{INVALID_EMAIL, REQUIRED};
    use crate::forms::ValidationErrors;
    use crate::lookups::MemoryLookups;
    use crate::utils::errors::AmyError;

    fn lookups() -> MemoryLookups {
        MemoryLookups::new().with_airport(Airport {
            id: 3,
            iata: "LHR".to_string(),
            fullname: "London Heathrow".to_string(),
            country: "GB".to_string(),
            latitude: 51.4775,
            longitude: -0.461389,
        })
    }

    fn valid() -> FormData {
        FormData::new()
            .with("personal", "Hermione")
            .with("family", "Granger")
            .with("username", "granger_hermione")
    }

    async fn errors_for(data: FormData) -> ValidationErrors {
        match PersonForm::clean(&data, &lookups()).await {
            Err(AmyError::Validation(errors)) => errors,
            other => panic!("expected validation errors, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_minimal_person_defaults() {
        let form = PersonForm::clean(&valid(), &lookups()).await.unwrap();

        assert_eq!(form.gender, Gender::Undisclosed);
        assert!(!form.may_contact);
        assert!(form.middle.is_none());
        assert!(form.airport.is_none());
        assert_eq!(form.notes, "");
    }

    #[tokio::test]
    async fn test_full_person() {
        let data = valid()
            .with("middle", "Jean")
            .with("may_contact", "on")
            .with("email", "hermione@granger.co.uk")
            .with("gender", "F")
            .with("airport", "3")
            .with("github", "hgranger")
            .with("url", "https://granger.co.uk/");
        let request = PersonForm::clean(&data, &lookups()).await.unwrap().to_request();

        assert_eq!(request.middle.as_deref(), Some("Jean"));
        assert!(request.may_contact);
        assert_eq!(request.gender, Gender::Female);
        assert_eq!(request.airport_id, Some(3));
        assert_eq!(request.github.as_deref(), Some("hgranger"));
    }

    #[tokio::test]
    async fn test_required_names() {
        let errors = errors_for(FormData::new().with("username", "x")).await;
        assert_eq!(errors.field("personal"), [REQUIRED.to_string()]);
        assert_eq!(errors.field("family"), [REQUIRED.to_string()]);
    }

    #[tokio::test]
    async fn test_username_rules() {
        let errors = errors_for(valid().with("username", "hermione granger")).await;
        assert_eq!(errors.field("username"), [INVALID_USERNAME.to_string()]);

        let errors = errors_for(valid().with("username", "h".repeat(41))).await;
        assert_eq!(
            errors.field("username"),
            ["Ensure this value has at most 40 characters (it has 41).".to_string()]
        );

        assert!(PersonForm::clean(&valid().with("username", "h.granger-1"), &lookups()).await.is_ok());
    }

    #[tokio::test]
    async fn test_invalid_choices_and_formats() {
        let errors = errors_for(
            valid()
                .with("gender", "X")
                .with("email", "not-an-address")
                .with("airport", "99"),
        )
        .await;

        assert_eq!(errors.field("gender"), [INVALID_CHOICE.to_string()]);
        assert_eq!(errors.field("email"), [INVALID_EMAIL.to_string()]);
        assert_eq!(errors.field("airport"), [INVALID_CHOICE.to_string()]);
    }
}
