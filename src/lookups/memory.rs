//! In-memory lookups
//!
//! Backs form cleaning with fixed record sets; used by tests and by tooling
//! that validates submissions without a database.

use async_trait::async_trait;

use super::{LookupItem, LookupKind, Lookups};
use crate::models::{Airport, Badge, Event, Person, Role, Site, Skill};
use crate::utils::errors::Result;

#[derive(Debug, Clone, Default)]
pub struct MemoryLookups {
    pub airports: Vec<Airport>,
    pub sites: Vec<Site>,
    pub persons: Vec<Person>,
    pub events: Vec<Event>,
    pub roles: Vec<Role>,
    pub badges: Vec<Badge>,
    pub skills: Vec<Skill>,
}

impl MemoryLookups {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_airport(mut self, airport: Airport) -> Self {
        self.airports.push(airport);
        self
    }

    pub fn with_site(mut self, site: Site) -> Self {
        self.sites.push(site);
        self
    }

    pub fn with_person(mut self, person: Person) -> Self {
        self.persons.push(person);
        self
    }

    pub fn with_event(mut self, event: Event) -> Self {
        self.events.push(event);
        self
    }

    pub fn with_role(mut self, role: Role) -> Self {
        self.roles.push(role);
        self
    }

    pub fn with_badge(mut self, badge: Badge) -> Self {
        self.badges.push(badge);
        self
    }

    pub fn with_skill(mut self, skill: Skill) -> Self {
        self.skills.push(skill);
        self
    }
}

fn matching<T>(
    records: &[T],
    term: &str,
    limit: i64,
    item: impl Fn(&T) -> LookupItem,
) -> Vec<LookupItem> {
    let term = term.to_lowercase();
    records
        .iter()
        .map(item)
        .filter(|item| item.label.to_lowercase().contains(&term))
        .take(usize::try_from(limit).unwrap_or(0))
        .collect()
}

#[async_trait]
impl Lookups for MemoryLookups {
    async fn airport(&self, id: i64) -> Result<Option<Airport>> {
        Ok(self.airports.iter().find(|a| a.id == id).cloned())
    }

    async fn site(&self, id: i64) -> Result<Option<Site>> {
        Ok(self.sites.iter().find(|s| s.id == id).cloned())
    }

    async fn person(&self, id: i64) -> Result<Option<Person>> {
        Ok(self.persons.iter().find(|p| p.id == id).cloned())
    }

    async fn event(&self, id: i64) -> Result<Option<Event>> {
        Ok(self.events.iter().find(|e| e.id == id && !e.deleted).cloned())
    }

    async fn role(&self, id: i64) -> Result<Option<Role>> {
        Ok(self.roles.iter().find(|r| r.id == id).cloned())
    }

    async fn badge(&self, id: i64) -> Result<Option<Badge>> {
        Ok(self.badges.iter().find(|b| b.id == id).cloned())
    }

    async fn skills(&self) -> Result<Vec<Skill>> {
        let mut skills = self.skills.clone();
        skills.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(skills)
    }

    async fn search(&self, kind: LookupKind, term: &str, limit: i64) -> Result<Vec<LookupItem>> {
        let items = match kind {
            LookupKind::Airport => matching(&self.airports, term, limit, |a| LookupItem::new(a.id, a.label())),
            LookupKind::Site => matching(&self.sites, term, limit, |s| LookupItem::new(s.id, s.label())),
            LookupKind::Person => matching(&self.persons, term, limit, |p| LookupItem::new(p.id, p.label())),
            LookupKind::Event => {
                let live: Vec<&Event> = self.events.iter().filter(|e| !e.deleted).collect();
                matching(&live, term, limit, |e| LookupItem::new(e.id, e.label()))
            }
        };
        Ok(items)
    }
}
