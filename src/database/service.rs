//! Database service layer
//!
//! This module provides a high-level interface to database operations

use serde::Serialize;

use crate::database::repositories::{LocatedPerson, TaskSummary};
use crate::database::{
    AirportRepository, AwardRepository, DatabasePool, EventRepository, LanguageRepository,
    PersonRepository, SiteRepository, SkillRepository, TaskRepository, WorkshopRequestRepository,
};
use crate::forms::{DebriefForm, InstructorsForm, SearchForm};
use crate::models::*;
use crate::utils::errors::AmyError;
use crate::utils::helpers::great_circle_distance_km;

/// How many records of each kind a general search returns
const SEARCH_LIMIT: i64 = 50;

#[derive(Debug, Clone)]
pub struct DatabaseService {
    pool: DatabasePool,
    pub languages: LanguageRepository,
    pub airports: AirportRepository,
    pub sites: SiteRepository,
    pub persons: PersonRepository,
    pub skills: SkillRepository,
    pub events: EventRepository,
    pub tasks: TaskRepository,
    pub awards: AwardRepository,
    pub workshop_requests: WorkshopRequestRepository,
}

/// Matches of a general search, grouped by kind
#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchResults {
    pub sites: Vec<Site>,
    pub events: Vec<Event>,
    pub persons: Vec<Person>,
}

/// One event of a debrief period with its instructors
#[derive(Debug, Clone, Serialize)]
pub struct DebriefEntry {
    pub event: Event,
    pub instructors: Vec<TaskSummary>,
}

impl DatabaseService {
    pub fn new(pool: DatabasePool) -> Self {
        Self {
            languages: LanguageRepository::new(pool.clone()),
            airports: AirportRepository::new(pool.clone()),
            sites: SiteRepository::new(pool.clone()),
            persons: PersonRepository::new(pool.clone()),
            skills: SkillRepository::new(pool.clone()),
            events: EventRepository::new(pool.clone()),
            tasks: TaskRepository::new(pool.clone()),
            awards: AwardRepository::new(pool.clone()),
            workshop_requests: WorkshopRequestRepository::new(pool.clone()),
            pool,
        }
    }

    pub fn pool(&self) -> &DatabasePool {
        &self.pool
    }

    /// Instructors holding every requested skill, nearest to the requested point first
    pub async fn match_instructors(&self, form: &InstructorsForm) -> Result<Vec<InstructorMatch>, AmyError> {
        let skill_ids: Vec<i64> = form.skills.iter().map(|skill| skill.id).collect();
        let candidates = self.persons.find_qualified_with_airport(&skill_ids).await?;

        Ok(rank_instructors(candidates, form.latitude, form.longitude, form.wanted))
    }

    /// Search sites, events and persons for a term
    pub async fn search(&self, form: &SearchForm) -> Result<SearchResults, AmyError> {
        let mut results = SearchResults::default();

        if form.in_sites {
            results.sites = self.sites.search(&form.term, SEARCH_LIMIT).await?;
        }
        if form.in_events {
            results.events = self.events.search(&form.term, SEARCH_LIMIT).await?;
        }
        if form.in_persons {
            results.persons = self.persons.search(&form.term, SEARCH_LIMIT).await?;
        }

        Ok(results)
    }

    /// Events of the debrief period together with who taught them
    pub async fn debrief(&self, form: &DebriefForm) -> Result<Vec<DebriefEntry>, AmyError> {
        let events = self.events.list_starting_between(form.begin_date, form.end_date).await?;
        let event_ids: Vec<i64> = events.iter().map(|event| event.id).collect();
        let instructors = self.tasks.summaries_for_events(&event_ids, "instructor").await?;

        let entries = events
            .into_iter()
            .map(|event| {
                let taught_by = instructors
                    .iter()
                    .filter(|task| task.event_id == event.id)
                    .cloned()
                    .collect();
                DebriefEntry { event, instructors: taught_by }
            })
            .collect();

        Ok(entries)
    }
}

/// Order candidates by distance from `(latitude, longitude)` and keep `wanted`
pub fn rank_instructors(candidates: Vec<LocatedPerson>, latitude: f64, longitude: f64, wanted: u32) -> Vec<InstructorMatch> {
    let mut matches: Vec<InstructorMatch> = candidates
        .into_iter()
        .map(|candidate| InstructorMatch {
            distance_km: great_circle_distance_km(
                latitude,
                longitude,
                candidate.airport_latitude,
                candidate.airport_longitude,
            ),
            airport_iata: candidate.airport_iata,
            person: candidate.person,
        })
        .collect();

    matches.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
    matches.truncate(wanted as usize);
    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn located(id: i64, iata: &str, latitude: f64, longitude: f64) -> LocatedPerson {
        LocatedPerson {
            person: Person {
                id,
                personal: format!("Person{}", id),
                middle: None,
                family: "Tester".to_string(),
                username: format!("tester_{}", id),
                may_contact: true,
                email: None,
                gender: "U".to_string(),
                airport_id: Some(id),
                github: None,
                twitter: None,
                url: None,
                notes: String::new(),
                created_at: Utc::now(),
            },
            airport_iata: iata.to_string(),
            airport_latitude: latitude,
            airport_longitude: longitude,
        }
    }

    #[test]
    fn test_rank_instructors_nearest_first() {
        let candidates = vec![
            located(1, "LHR", 51.47, -0.4543),
            located(2, "YYZ", 43.677, -79.631),
            located(3, "YUL", 45.4706, -73.7408),
        ];

        // Ottawa
        let ranked = rank_instructors(candidates, 45.42, -75.69, 2);

        let order: Vec<&str> = ranked.iter().map(|m| m.airport_iata.as_str()).collect();
        assert_eq!(order, vec!["YUL", "YYZ"]);
        assert!(ranked[0].distance_km < ranked[1].distance_km);
    }

    #[test]
    fn test_rank_instructors_fewer_candidates_than_wanted() {
        let ranked = rank_instructors(vec![located(1, "LHR", 51.47, -0.4543)], 0.0, 0.0, 10);
        assert_eq!(ranked.len(), 1);
    }
}
