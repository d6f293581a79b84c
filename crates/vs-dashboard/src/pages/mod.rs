//! Role dashboard pages

mod admin;
mod institution;
mod student;
mod verifier;

pub use admin::AdminDashboard;
pub use institution::InstitutionDashboard;
pub use student::StudentDashboard;
pub use verifier::VerifierDashboard;
