//! Business logic services
//!
//! Services coordinate repositories, the cache and the scoring engine.

pub mod assessment;
pub mod data;
pub mod user;

pub use assessment::AssessmentService;
pub use data::DataService;
pub use user::UserService;
