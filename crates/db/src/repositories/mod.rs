//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod choice_repo;
pub mod department_repo;
pub mod employee_repo;
pub mod membership_repo;
pub mod project_repo;
pub mod question_repo;
pub mod user_repo;

pub use choice_repo::ChoiceRepo;
pub use department_repo::DepartmentRepo;
pub use employee_repo::EmployeeRepo;
pub use membership_repo::MembershipRepo;
pub use project_repo::ProjectRepo;
pub use question_repo::QuestionRepo;
pub use user_repo::UserRepo;
