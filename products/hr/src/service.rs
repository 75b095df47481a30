use std::sync::Arc;

use tracing::instrument;

use crate::{Employee, EmployeeStore, HrResult, NewEmployee};

/// Thin facade over an [`EmployeeStore`]. Every call is a straight delegation.
#[derive(Clone)]
pub struct EmployeeService {
    store: Arc<dyn EmployeeStore>,
}

impl EmployeeService {
    pub fn new(store: Arc<dyn EmployeeStore>) -> Self {
        Self { store }
    }

    pub fn from_store(store: impl EmployeeStore + 'static) -> Self {
        Self::new(Arc::new(store))
    }

    #[instrument(name = "hr.save_employee", skip_all)]
    pub async fn save_employee(&self, employee: NewEmployee) -> HrResult<Employee> {
        self.store.insert(employee).await
    }

    #[instrument(name = "hr.get_all_employees", skip_all)]
    pub async fn get_all_employees(&self) -> HrResult<Vec<Employee>> {
        self.store.find_all().await
    }

    #[instrument(name = "hr.get_employee_by_id", skip(self))]
    pub async fn get_employee_by_id(&self, id: i32) -> HrResult<Option<Employee>> {
        self.store.find_by_id(id).await
    }

    #[instrument(name = "hr.find_by_email", skip_all)]
    pub async fn find_by_email(&self, email: &str) -> HrResult<Option<Employee>> {
        self.store.find_by_email(email).await
    }

    #[instrument(name = "hr.update_employee", skip_all, fields(id = employee.id))]
    pub async fn update_employee(&self, employee: Employee) -> HrResult<Employee> {
        self.store.update(employee).await
    }

    #[instrument(name = "hr.delete_employee", skip(self))]
    pub async fn delete_employee(&self, id: i32) -> HrResult<()> {
        self.store.delete(id).await
    }
}

impl std::fmt::Debug for EmployeeService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmployeeService").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FailingEmployeeStore, MemoryEmployeeStore};

    fn john() -> NewEmployee {
        NewEmployee {
            first_name: "John".into(),
            last_name: "Doe".into(),
            email: "john.doe@example.com".into(),
        }
    }

    #[tokio::test]
    async fn save_then_lookup_by_id_and_email() {
        let service = EmployeeService::from_store(MemoryEmployeeStore::default());
        let saved = service.save_employee(john()).await.unwrap();
        assert!(saved.id > 0);

        let by_id = service.get_employee_by_id(saved.id).await.unwrap();
        assert_eq!(by_id, Some(saved.clone()));
        let by_email = service.find_by_email("john.doe@example.com").await.unwrap();
        assert_eq!(by_email, Some(saved));
        assert_eq!(service.find_by_email("nobody@example.com").await.unwrap(), None);
    }

    #[tokio::test]
    async fn update_and_delete_delegate_to_store() {
        let service = EmployeeService::from_store(MemoryEmployeeStore::default());
        let mut saved = service.save_employee(john()).await.unwrap();
        saved.email = "jd@example.com".into();
        let updated = service.update_employee(saved.clone()).await.unwrap();
        assert_eq!(updated, saved);

        service.delete_employee(saved.id).await.unwrap();
        assert!(service.get_all_employees().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn store_failures_propagate_unchanged() {
        let service = EmployeeService::from_store(FailingEmployeeStore::new("connection refused"));
        let err = service.get_all_employees().await.unwrap_err();
        assert!(err.to_string().contains("connection refused"));
    }
}
