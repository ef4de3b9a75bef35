//! Task forms
//!
//! `TaskForm` assigns a person to the event named in the URL;
//! `TaskFullForm` picks the event as well.

use serde::Serialize;

use super::{FieldCleaner, FormData};
use crate::lookups::Lookups;
use crate::models::{CreateTaskRequest, Event, Person, Role};
use crate::utils::errors::Result;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskForm {
    pub event_id: i64,
    pub person: Person,
    pub role: Role,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskFullForm {
    pub event: Event,
    pub person: Person,
    pub role: Role,
}

async fn clean_person_and_role<L>(cleaner: &mut FieldCleaner<'_>, lookups: &L) -> Result<(Option<Person>, Option<Role>)>
where
    L: Lookups + ?Sized,
{
    let person = match cleaner.choice_id("person", true) {
        Some(id) => {
            let found = lookups.person(id).await?;
            cleaner.resolved("person", found)
        }
        None => None,
    };
    let role = match cleaner.choice_id("role", true) {
        Some(id) => {
            let found = lookups.role(id).await?;
            cleaner.resolved("role", found)
        }
        None => None,
    };

    Ok((person, role))
}

impl TaskForm {
    pub async fn clean<L>(data: &FormData, event: &Event, lookups: &L) -> Result<Self>
    where
        L: Lookups + ?Sized,
    {
        let mut cleaner = FieldCleaner::new(data);
        let (person, role) = clean_person_and_role(&mut cleaner, lookups).await?;

        cleaner.finish(|| {
            Some(Self {
                event_id: event.id,
                person: person?,
                role: role?,
            })
        })
    }

    pub fn to_request(&self) -> CreateTaskRequest {
        CreateTaskRequest {
            event_id: self.event_id,
            person_id: self.person.id,
            role_id: self.role.id,
        }
    }
}

impl TaskFullForm {
    pub async fn clean<L>(data: &FormData, lookups: &L) -> Result<Self>
    where
        L: Lookups + ?Sized,
    {
        let mut cleaner = FieldCleaner::new(data);

        let event = match cleaner.choice_id("event", true) {
            Some(id) => {
                let found = lookups.event(id).await?;
                cleaner.resolved("event", found)
            }
            None => None,
        };
        let (person, role) = clean_person_and_role(&mut cleaner, lookups).await?;

        cleaner.finish(|| {
            Some(Self {
                event: event?,
                person: person?,
                role: role?,
            })
        })
    }

    pub fn to_request(&self) -> CreateTaskRequest {
        CreateTaskRequest {
            event_id: self.event.id,
            person_id: self.person.id,
            role_id: self.role.id,
        }
    }
}
