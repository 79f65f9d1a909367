pub mod choice;
pub mod department;
pub mod employee;
pub mod membership;
pub mod project;
pub mod question;
pub mod user;
