//! HR module: employee record storage and the service facade used by HTTP handlers.

mod service;
mod store;
#[cfg(any(test, feature = "testing"))]
pub mod testing;

use sea_orm::DbErr;
use thiserror::Error;

pub use entity::employees::Model as Employee;
pub use service::EmployeeService;
pub use store::{EmployeeStore, SeaOrmEmployeeStore};

#[derive(Debug, Error)]
pub enum HrError {
    #[error(transparent)]
    Database(#[from] DbErr),
}

pub type HrResult<T> = Result<T, HrError>;

/// Insert candidate; the identifier is assigned by the store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewEmployee {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}
