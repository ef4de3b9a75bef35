//! Instructor matching form

use serde::Serialize;

use super::{FieldCleaner, FormData};
use crate::lookups::Lookups;
use crate::models::{Airport, Skill};
use crate::utils::errors::Result;

pub const MISSING_LOCATION: &str = "Must specify either an airport code or latitude/longitude";
pub const AMBIGUOUS_LOCATION: &str =
    "Cannot specify both an airport code and a latitude/longitude. Pick one or the other";

/// Where to look for instructors and which skills they need
///
/// The location is either an airport or an explicit coordinate pair, never
/// both; an airport contributes its own coordinates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InstructorsForm {
    pub wanted: u32,
    pub latitude: f64,
    pub longitude: f64,
    pub airport: Option<Airport>,
    pub skills: Vec<Skill>,
}

/// Values a blank instructor search starts from
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InstructorsFormInitial {
    pub wanted: u32,
    /// One checkbox per skill, named after the skill
    pub skills: Vec<String>,
}

impl InstructorsForm {
    pub async fn initial<L>(lookups: &L, search_len: u32) -> Result<InstructorsFormInitial>
    where
        L: Lookups + ?Sized,
    {
        let skills = lookups.skills().await?.into_iter().map(|skill| skill.name).collect();
        Ok(InstructorsFormInitial { wanted: search_len, skills })
    }

    pub async fn clean<L>(data: &FormData, lookups: &L) -> Result<Self>
    where
        L: Lookups + ?Sized,
    {
        let mut cleaner = FieldCleaner::new(data);

        let wanted = cleaner
            .integer_field("wanted", true, Some(1))
            .and_then(|wanted| u32::try_from(wanted).ok());
        let latitude = cleaner.float_field("latitude", false, Some(-90.0), Some(90.0));
        let longitude = cleaner.float_field("longitude", false, Some(-180.0), Some(180.0));
        let airport = match cleaner.choice_id("airport", false) {
            Some(id) => {
                let found = lookups.airport(id).await?;
                cleaner.resolved("airport", found)
            }
            None => None,
        };

        let mut skills = Vec::new();
        for skill in lookups.skills().await? {
            if cleaner.boolean_field(&skill.name) {
                skills.push(skill);
            }
        }

        let location = match (&airport, latitude, longitude) {
            (None, Some(latitude), Some(longitude)) => Some((latitude, longitude)),
            (None, _, _) => {
                cleaner.add_non_field_error(MISSING_LOCATION);
                None
            }
            (Some(airport), None, None) => Some((airport.latitude, airport.longitude)),
            (Some(_), _, _) => {
                cleaner.add_non_field_error(AMBIGUOUS_LOCATION);
                None
            }
        };

        cleaner.finish(|| {
            let (latitude, longitude) = location?;
            Some(Self {
                wanted: wanted?,
                latitude,
                longitude,
                airport,
                skills,
            })
        })
    }
}
