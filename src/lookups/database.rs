//! Lookups backed by the database repositories

use async_trait::async_trait;

use super::{LookupItem, LookupKind, Lookups};
use crate::database::DatabaseService;
use crate::models::{Airport, Badge, Event, Person, Role, Site, Skill};
use crate::utils::errors::Result;

#[async_trait]
impl Lookups for DatabaseService {
    async fn airport(&self, id: i64) -> Result<Option<Airport>> {
        self.airports.find_by_id(id).await
    }

    async fn site(&self, id: i64) -> Result<Option<Site>> {
        self.sites.find_by_id(id).await
    }

    async fn person(&self, id: i64) -> Result<Option<Person>> {
        self.persons.find_by_id(id).await
    }

    async fn event(&self, id: i64) -> Result<Option<Event>> {
        self.events.find_by_id(id).await
    }

    async fn role(&self, id: i64) -> Result<Option<Role>> {
        self.tasks.find_role(id).await
    }

    async fn badge(&self, id: i64) -> Result<Option<Badge>> {
        self.awards.find_badge(id).await
    }

    async fn skills(&self) -> Result<Vec<Skill>> {
        self.skills.list().await
    }

    async fn search(&self, kind: LookupKind, term: &str, limit: i64) -> Result<Vec<LookupItem>> {
        let items = match kind {
            LookupKind::Airport => self
                .airports
                .search(term, limit)
                .await?
                .into_iter()
                .map(|airport| LookupItem::new(airport.id, airport.label()))
                .collect(),
            LookupKind::Site => self
                .sites
                .search(term, limit)
                .await?
                .into_iter()
                .map(|site| LookupItem::new(site.id, site.label()))
                .collect(),
            LookupKind::Person => self
                .persons
                .search(term, limit)
                .await?
                .into_iter()
                .map(|person| LookupItem::new(person.id, person.label()))
                .collect(),
            LookupKind::Event => self
                .events
                .search(term, limit)
                .await?
                .into_iter()
                .map(|event| LookupItem::new(event.id, event.label()))
                .collect(),
        };

        Ok(items)
    }
}
