//! Person repository implementation

use sqlx::{FromRow, PgPool};
use crate::models::{BulkPersonEntry, CreatePersonRequest, Person};
use crate::utils::errors::{AmyError, UniqueConstraint};
use crate::utils::helpers::like_pattern;

const UNIQUE_CONSTRAINTS: &[UniqueConstraint] = &[
    UniqueConstraint {
        name: "persons_username_key",
        field: Some("username"),
        message: "Person with this Username already exists.",
    },
    UniqueConstraint {
        name: "persons_email_key",
        field: Some("email"),
        message: "Person with this Email already exists.",
    },
    UniqueConstraint {
        name: "persons_github_key",
        field: Some("github"),
        message: "Person with this Github already exists.",
    },
    UniqueConstraint {
        name: "persons_twitter_key",
        field: Some("twitter"),
        message: "Person with this Twitter already exists.",
    },
];

/// Bulk uploads only carry emails; usernames are derived free of collisions
const BULK_UNIQUE_CONSTRAINTS: &[UniqueConstraint] = &[UniqueConstraint {
    name: "persons_email_key",
    field: Some("file"),
    message: "Person with this Email already exists.",
}];

/// Person with the coordinates of their nearest airport
#[derive(Debug, Clone, FromRow)]
pub struct LocatedPerson {
    #[sqlx(flatten)]
    pub person: Person,
    pub airport_iata: String,
    pub airport_latitude: f64,
    pub airport_longitude: f64,
}

#[derive(Clone, Debug)]
pub struct PersonRepository {
    pool: PgPool,
}

impl PersonRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new person
    pub async fn create(&self, request: CreatePersonRequest) -> Result<Person, AmyError> {
        let person = sqlx::query_as::<_, Person>(
            r#"
            INSERT INTO persons (personal, middle, family, username, may_contact, email, gender, airport_id, github, twitter, url, notes)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING id, personal, middle, family, username, may_contact, email, gender, airport_id, github, twitter, url, notes, created_at
            "#
        )
        .bind(request.personal)
        .bind(request.middle)
        .bind(request.family)
        .bind(request.username)
        .bind(request.may_contact)
        .bind(request.email)
        .bind(request.gender.code())
        .bind(request.airport_id)
        .bind(request.github)
        .bind(request.twitter)
        .bind(request.url)
        .bind(request.notes)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AmyError::from(e).on_unique_violation(UNIQUE_CONSTRAINTS))?;

        Ok(person)
    }

    /// Create every person from a bulk upload, all or nothing
    ///
    /// Usernames are derived from names as `family_personal`, lowercased, with
    /// a numeric suffix while taken.
    pub async fn create_bulk(&self, entries: &[BulkPersonEntry]) -> Result<Vec<Person>, AmyError> {
        let mut tx = self.pool.begin().await?;
        let mut created = Vec::with_capacity(entries.len());

        for entry in entries {
            let base = username_base(&entry.personal, &entry.family);
            let mut username = base.clone();
            let mut suffix = 1;
            loop {
                let taken: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM persons WHERE username = $1")
                    .bind(&username)
                    .fetch_one(&mut *tx)
                    .await?;
                if taken.0 == 0 {
                    break;
                }
                suffix += 1;
                username = format!("{}_{}", base, suffix);
            }

            let person = sqlx::query_as::<_, Person>(
                r#"
                INSERT INTO persons (personal, middle, family, username, email)
                VALUES ($1, $2, $3, $4, $5)
                RETURNING id, personal, middle, family, username, may_contact, email, gender, airport_id, github, twitter, url, notes, created_at
                "#
            )
            .bind(&entry.personal)
            .bind(&entry.middle)
            .bind(&entry.family)
            .bind(username)
            .bind(&entry.email)
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| AmyError::from(e).on_unique_violation(BULK_UNIQUE_CONSTRAINTS))?;

            created.push(person);
        }

        tx.commit().await?;
        Ok(created)
    }

    /// Find person by ID
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Person>, AmyError> {
        let person = sqlx::query_as::<_, Person>(
            "SELECT id, personal, middle, family, username, may_contact, email, gender, airport_id, github, twitter, url, notes, created_at FROM persons WHERE id = $1"
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(person)
    }

    /// Search persons by name, email or username
    pub async fn search(&self, term: &str, limit: i64) -> Result<Vec<Person>, AmyError> {
        let persons = sqlx::query_as::<_, Person>(
            r#"
            SELECT id, personal, middle, family, username, may_contact, email, gender, airport_id, github, twitter, url, notes, created_at
            FROM persons
            WHERE personal ILIKE $1 OR family ILIKE $1 OR email ILIKE $1 OR username ILIKE $1
               OR (personal || ' ' || family) ILIKE $1
            ORDER BY family ASC, personal ASC
            LIMIT $2
            "#
        )
        .bind(like_pattern(term))
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(persons)
    }

    /// Persons with an airport who hold every one of `skill_ids`
    pub async fn find_qualified_with_airport(&self, skill_ids: &[i64]) -> Result<Vec<LocatedPerson>, AmyError> {
        let persons = sqlx::query_as::<_, LocatedPerson>(
            r#"
            SELECT p.id, p.personal, p.middle, p.family, p.username, p.may_contact, p.email, p.gender,
                   p.airport_id, p.github, p.twitter, p.url, p.notes, p.created_at,
                   a.iata AS airport_iata, a.latitude AS airport_latitude, a.longitude AS airport_longitude
            FROM persons p
            INNER JOIN airports a ON a.id = p.airport_id
            WHERE (
                SELECT COUNT(*) FROM qualifications q
                WHERE q.person_id = p.id AND q.skill_id = ANY($1)
            ) = $2
            "#
        )
        .bind(skill_ids)
        .bind(skill_ids.len() as i64)
        .fetch_all(&self.pool)
        .await?;

        Ok(persons)
    }
}

fn username_base(personal: &str, family: &str) -> String {
    let clean = |part: &str| -> String {
        part.chars()
            .filter(|c| c.is_alphanumeric() || *c == '-')
            .flat_map(char::to_lowercase)
            .collect()
    };
    format!("{}_{}", clean(family), clean(personal))
}
