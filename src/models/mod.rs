//! Data models module
//!
//! This module contains all data structures used throughout the application

pub mod airport;
pub mod award;
pub mod event;
pub mod language;
pub mod person;
pub mod site;
pub mod skill;
pub mod task;
pub mod workshop_request;

// Re-export commonly used models
pub use airport::Airport;
pub use award::{Award, Badge, CreateAwardRequest};
pub use event::{CreateEventRequest, Event, EventIdent};
pub use language::Language;
pub use person::{BulkPersonEntry, CreatePersonRequest, Gender, InstructorMatch, Person};
pub use site::Site;
pub use skill::Skill;
pub use task::{CreateTaskRequest, Role, Task};
pub use workshop_request::WorkshopRequest;
