//! sea-orm entities backing the employee service.

pub mod employees;

pub mod prelude {
    pub use super::employees::Entity as Employees;
}
