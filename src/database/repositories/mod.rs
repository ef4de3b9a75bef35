//! Database repositories module
//!
//! This module contains all repository implementations for data access

pub mod airport;
pub mod award;
pub mod event;
pub mod language;
pub mod person;
pub mod site;
pub mod skill;
pub mod task;
pub mod workshop_request;

// Re-export repositories
pub use airport::AirportRepository;
pub use award::AwardRepository;
pub use event::EventRepository;
pub use language::LanguageRepository;
pub use person::{LocatedPerson, PersonRepository};
pub use site::SiteRepository;
pub use skill::SkillRepository;
pub use task::{TaskRepository, TaskSummary};
pub use workshop_request::WorkshopRequestRepository;
