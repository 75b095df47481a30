//! In-process [`EmployeeStore`] doubles for handler and service tests.

use std::{
    collections::BTreeMap,
    sync::{Mutex, MutexGuard, PoisonError},
};

use async_trait::async_trait;
use sea_orm::DbErr;

use crate::{Employee, EmployeeStore, HrResult, NewEmployee};

#[derive(Default)]
struct Rows {
    last_id: i32,
    by_id: BTreeMap<i32, Employee>,
}

impl Rows {
    fn email_taken(&self, email: &str, except: Option<i32>) -> bool {
        self.by_id
            .values()
            .any(|row| row.email == email && Some(row.id) != except)
    }
}

/// Map-backed store that enforces unique emails like the real table does.
#[derive(Default)]
pub struct MemoryEmployeeStore {
    rows: Mutex<Rows>,
}

impl MemoryEmployeeStore {
    pub fn with_employees(seed: impl IntoIterator<Item = NewEmployee>) -> Self {
        let store = Self::default();
        {
            let mut rows = store.rows();
            for candidate in seed {
                rows.last_id += 1;
                let id = rows.last_id;
                rows.by_id.insert(id, materialize(id, candidate));
            }
        }
        store
    }

    pub fn len(&self) -> usize {
        self.rows().by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn rows(&self) -> MutexGuard<'_, Rows> {
        self.rows.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn materialize(id: i32, candidate: NewEmployee) -> Employee {
    Employee {
        id,
        first_name: candidate.first_name,
        last_name: candidate.last_name,
        email: candidate.email,
    }
}

fn unique_violation() -> DbErr {
    DbErr::Custom("duplicate key value violates unique constraint \"employees_email_key\"".into())
}

#[async_trait]
impl EmployeeStore for MemoryEmployeeStore {
    async fn find_all(&self) -> HrResult<Vec<Employee>> {
        Ok(self.rows().by_id.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i32) -> HrResult<Option<Employee>> {
        Ok(self.rows().by_id.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> HrResult<Option<Employee>> {
        Ok(self
            .rows()
            .by_id
            .values()
            .find(|row| row.email == email)
            .cloned())
    }

    async fn insert(&self, employee: NewEmployee) -> HrResult<Employee> {
        let mut rows = self.rows();
        if rows.email_taken(&employee.email, None) {
            return Err(unique_violation().into());
        }
        rows.last_id += 1;
        let row = materialize(rows.last_id, employee);
        rows.by_id.insert(row.id, row.clone());
        Ok(row)
    }

    async fn update(&self, employee: Employee) -> HrResult<Employee> {
        let mut rows = self.rows();
        if !rows.by_id.contains_key(&employee.id) {
            return Err(DbErr::RecordNotUpdated.into());
        }
        if rows.email_taken(&employee.email, Some(employee.id)) {
            return Err(unique_violation().into());
        }
        rows.by_id.insert(employee.id, employee.clone());
        Ok(employee)
    }

    async fn delete(&self, id: i32) -> HrResult<()> {
        self.rows().by_id.remove(&id);
        Ok(())
    }
}

/// Store whose every call fails, standing in for an unreachable database.
pub struct FailingEmployeeStore {
    message: String,
}

impl FailingEmployeeStore {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    fn fail<T>(&self) -> HrResult<T> {
        Err(DbErr::Custom(self.message.clone()).into())
    }
}

#[async_trait]
impl EmployeeStore for FailingEmployeeStore {
    async fn find_all(&self) -> HrResult<Vec<Employee>> {
        self.fail()
    }

    async fn find_by_id(&self, _id: i32) -> HrResult<Option<Employee>> {
        self.fail()
    }

    async fn find_by_email(&self, _email: &str) -> HrResult<Option<Employee>> {
        self.fail()
    }

    async fn insert(&self, _employee: NewEmployee) -> HrResult<Employee> {
        self.fail()
    }

    async fn update(&self, _employee: Employee) -> HrResult<Employee> {
        self.fail()
    }

    async fn delete(&self, _id: i32) -> HrResult<()> {
        self.fail()
    }
}
