//! Test database helper utilities
//!
//! Database tests run against the PostgreSQL instance named by
//! `TEST_DATABASE_URL` and are skipped when it is not set.

use std::sync::Once;

use sqlx::PgPool;

use amy::models::{Airport, Event, Person, Site};
use amy::DatabaseService;

static INIT: Once = Once::new();

/// Migrated test database with an empty data set
pub struct TestDatabase {
    pub pool: PgPool,
    pub service: DatabaseService,
}

impl TestDatabase {
    /// Connect and migrate, or `None` when no test database is configured
    pub async fn connect() -> Option<Self> {
        INIT.call_once(|| {
            let _ = tracing_subscriber::fmt().with_test_writer().try_init();
        });

        let database_url = match std::env::var("TEST_DATABASE_URL") {
            Ok(url) => url,
            Err(_) => {
                eprintln!("TEST_DATABASE_URL not set, skipping database test");
                return None;
            }
        };

        let pool = PgPool::connect(&database_url).await.expect("Failed to connect to test database");
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("Failed to run migrations");

        let db = Self {
            service: DatabaseService::new(pool.clone()),
            pool,
        };
        db.cleanup().await.expect("Failed to clean test database");
        Some(db)
    }

    /// Delete all rows except the seeded roles
    pub async fn cleanup(&self) -> Result<(), sqlx::Error> {
        // Delete in reverse order of dependencies
        for table in [
            "awards",
            "badges",
            "tasks",
            "events",
            "qualifications",
            "skills",
            "persons",
            "airports",
            "workshop_requests",
            "sites",
            "languages",
            "data_fix_history",
        ] {
            sqlx::query(&format!("DELETE FROM {}", table)).execute(&self.pool).await?;
        }

        Ok(())
    }

    pub async fn create_site(&self, domain: &str) -> Site {
        self.service
            .sites
            .create(domain, &format!("Site {}", domain), Some("GB"))
            .await
            .expect("Failed to create site")
    }

    pub async fn create_airport(&self, iata: &str, latitude: f64, longitude: f64) -> Airport {
        self.service
            .airports
            .create(iata, &format!("{} Airport", iata), "CA", latitude, longitude)
            .await
            .expect("Failed to create airport")
    }

    pub async fn create_person(&self, personal: &str, family: &str, airport_id: Option<i64>) -> Person {
        let mut request = person_request(personal, family);
        request.airport_id = airport_id;
        self.service.persons.create(request).await.expect("Failed to create person")
    }

    pub async fn create_event(&self, site_id: i64, slug: &str, start: Option<chrono::NaiveDate>) -> Event {
        let mut request = event_request(site_id, slug);
        request.start = start;
        self.service.events.create(request).await.expect("Failed to create event")
    }

    /// Role id seeded by the initial migration
    pub async fn role_id(&self, name: &str) -> i64 {
        let (id,): (i64,) = sqlx::query_as("SELECT id FROM roles WHERE name = $1")
            .bind(name)
            .fetch_one(&self.pool)
            .await
            .expect("Seeded role missing");
        id
    }
}

pub fn person_request(personal: &str, family: &str) -> amy::models::CreatePersonRequest {
    amy::models::CreatePersonRequest {
        personal: personal.to_string(),
        middle: None,
        family: family.to_string(),
        username: format!("{}_{}", family, personal).to_lowercase(),
        may_contact: true,
        email: None,
        gender: amy::models::Gender::Undisclosed,
        airport_id: None,
        github: None,
        twitter: None,
        url: None,
        notes: String::new(),
    }
}

pub fn event_request(site_id: i64, slug: &str) -> amy::models::CreateEventRequest {
    amy::models::CreateEventRequest {
        site_id,
        organizer_id: None,
        published: false,
        start: None,
        end: None,
        slug: slug.to_string(),
        url: None,
        reg_key: None,
        attendance: None,
        admin_fee: None,
        notes: String::new(),
    }
}
