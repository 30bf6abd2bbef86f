pub mod accounts;
pub mod auth;
pub mod exams;
pub mod results;
pub mod students;

pub use accounts::AccountService;
pub use auth::{AccessGuard, AuthService};
pub use exams::ExamService;
pub use results::ResultService;
pub use students::StudentService;
