//! Workshop request model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A request from an institution to host a workshop
///
/// `other_preferred_dates`, `scholarship_circumstances`, `administrative_fee`
/// and `institution_other_name` were renamed from `preferred_dates`,
/// `waiver_circumstances`, `centrally_organized_fee` and `institution_name`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct WorkshopRequest {
    pub id: i64,
    pub personal: String,
    pub family: String,
    pub email: String,
    pub institution_id: Option<i64>,
    pub institution_other_name: String,
    pub location: String,
    pub country: String,
    pub other_preferred_dates: String,
    pub administrative_fee: String,
    pub scholarship_circumstances: String,
    pub number_attendees: String,
    pub state: String,
    pub created_at: DateTime<Utc>,
}
