//! Record fixtures for form tests

use chrono::Utc;

use amy::models::{Airport, Badge, Event, Person, Role, Site, Skill};
use amy::MemoryLookups;

pub fn test_airport() -> Airport {
    Airport {
        id: 1,
        iata: "YYZ".to_string(),
        fullname: "Toronto Pearson International Airport".to_string(),
        country: "CA".to_string(),
        latitude: 43.677,
        longitude: -79.631,
    }
}

pub fn test_site(id: i64, domain: &str) -> Site {
    Site {
        id,
        domain: domain.to_string(),
        fullname: format!("Site {}", domain),
        country: None,
        notes: String::new(),
    }
}

pub fn test_person(id: i64, personal: &str, family: &str) -> Person {
    Person {
        id,
        personal: personal.to_string(),
        middle: None,
        family: family.to_string(),
        username: format!("{}_{}", family, personal).to_lowercase(),
        may_contact: true,
        email: None,
        gender: "U".to_string(),
        airport_id: None,
        github: None,
        twitter: None,
        url: None,
        notes: String::new(),
        created_at: Utc::now(),
    }
}

pub fn test_event(id: i64, site_id: i64, slug: &str) -> Event {
    Event {
        id,
        site_id,
        organizer_id: None,
        published: true,
        start: None,
        end: None,
        slug: slug.to_string(),
        url: None,
        reg_key: None,
        attendance: None,
        admin_fee: None,
        notes: String::new(),
        deleted: false,
        created_at: Utc::now(),
    }
}

/// Lookups holding one record of every kind a form can reference
pub fn test_lookups() -> MemoryLookups {
    MemoryLookups::new()
        .with_airport(test_airport())
        .with_site(test_site(1, "example.edu"))
        .with_person(test_person(1, "Hermione", "Granger"))
        .with_event(test_event(1, 1, "2015-04-01-example"))
        .with_role(Role { id: 1, name: "instructor".to_string() })
        .with_badge(Badge {
            id: 1,
            name: "swc-instructor".to_string(),
            title: "Software Carpentry Instructor".to_string(),
            criteria: "Teaching at Software Carpentry workshops or online".to_string(),
        })
        .with_skill(Skill { id: 1, name: "Python".to_string() })
        .with_skill(Skill { id: 2, name: "R".to_string() })
}

/// Registry document in the IANA language-subtag JSON layout
pub const TEST_REGISTRY: &str = r#"[
    {"Type": "language", "Subtag": "ia", "Description": ["Interlingua (International Auxiliary Language Association)"]},
    {"Type": "language", "Subtag": "cu", "Description": ["Church Slavic", "Church Slavonic", "Old Bulgarian", "Old Church Slavonic", "Old Slavonic"]},
    {"Type": "language", "Subtag": "en", "Description": ["English"]},
    {"Type": "language", "Subtag": "tlh", "Description": ["Klingon", "tlhIngan Hol", "Klingon language of the Star Trek universe"]},
    {"Type": "script", "Subtag": "Cyrs", "Description": ["Cyrillic (Old Church Slavonic variant)"]}
]"#;
