//! Event form

use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;
use serde::Serialize;

use super::fields::INVALID_INTEGER;
use super::{FieldCleaner, FormData};
use crate::lookups::Lookups;
use crate::models::{CreateEventRequest, Site};
use crate::utils::errors::Result;
use crate::utils::helpers::matches_pattern;

pub const SLUG_IS_INTEGER: &str = "Slug must not be an integer-value.";
pub const ENDS_BEFORE_START: &str = "Must not end before it begins.";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventForm {
    pub site: Site,
    pub organizer: Option<Site>,
    pub published: bool,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub slug: String,
    pub url: Option<String>,
    pub reg_key: Option<String>,
    pub attendance: Option<i32>,
    pub admin_fee: Option<f64>,
    pub notes: String,
}

/// Whether `slug` reads as an integer literal, underscore digit groups and
/// a leading sign included
pub fn is_integer_like(slug: &str) -> bool {
    static INTEGER: OnceLock<Option<Regex>> = OnceLock::new();
    matches_pattern(&INTEGER, r"^[+-]?\d+(_\d+)*$", slug.trim())
}

impl EventForm {
    pub const SLUG_MAX_LENGTH: usize = 100;
    pub const REG_KEY_MAX_LENGTH: usize = 20;

    pub async fn clean<L>(data: &FormData, lookups: &L) -> Result<Self>
    where
        L: Lookups + ?Sized,
    {
        let mut cleaner = FieldCleaner::new(data);

        let site = match cleaner.choice_id("site", true) {
            Some(id) => {
                let found = lookups.site(id).await?;
                cleaner.resolved("site", found)
            }
            None => None,
        };
        let organizer = match cleaner.choice_id("organizer", false) {
            Some(id) => {
                let found = lookups.site(id).await?;
                cleaner.resolved("organizer", found)
            }
            None => None,
        };

        let published = cleaner.boolean_field("published");
        let start = cleaner.date_field("start", false);
        let end = cleaner.date_field("end", false);

        let mut slug = cleaner.char_field("slug", true, Some(Self::SLUG_MAX_LENGTH));
        if slug.as_deref().is_some_and(is_integer_like) {
            cleaner.add_error("slug", SLUG_IS_INTEGER);
            slug = None;
        }

        let url = cleaner.url_field("url", false, None);
        let reg_key = cleaner.char_field("reg_key", false, Some(Self::REG_KEY_MAX_LENGTH));
        let attendance = match cleaner.integer_field("attendance", false, Some(0)) {
            Some(value) => match i32::try_from(value) {
                Ok(value) => Some(value),
                Err(_) => {
                    cleaner.add_error("attendance", INVALID_INTEGER);
                    None
                }
            },
            None => None,
        };
        let admin_fee = cleaner.float_field("admin_fee", false, Some(0.0), None);
        let notes = cleaner.text_field("notes");

        if let (Some(start), Some(end)) = (start, end) {
            if end < start {
                cleaner.add_error("end", ENDS_BEFORE_START);
            }
        }

        cleaner.finish(|| {
            Some(Self {
                site: site?,
                organizer,
                published,
                start,
                end,
                slug: slug?,
                url,
                reg_key,
                attendance,
                admin_fee,
                notes,
            })
        })
    }

    pub fn to_request(&self) -> CreateEventRequest {
        CreateEventRequest {
            site_id: self.site.id,
            organizer_id: self.organizer.as_ref().map(|site| site.id),
            published: self.published,
            start: self.start,
            end: self.end,
            slug: self.slug.clone(),
            url: self.url.clone(),
            reg_key: self.reg_key.clone(),
            attendance: self.attendance,
            admin_fee: self.admin_fee,
            notes: self.notes.clone(),
        }
    }
}
