use async_trait::async_trait;
use entity::employees;
use platform_db::DbPool;
use sea_orm::{
    ActiveModelTrait, ActiveValue::{Set, Unchanged}, ColumnTrait, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::{Employee, HrResult, NewEmployee};

/// Persistence seam for employee records.
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    async fn find_all(&self) -> HrResult<Vec<Employee>>;

    async fn find_by_id(&self, id: i32) -> HrResult<Option<Employee>>;

    async fn find_by_email(&self, email: &str) -> HrResult<Option<Employee>>;

    async fn insert(&self, employee: NewEmployee) -> HrResult<Employee>;

    /// Overwrite the names and email of the row identified by `employee.id`.
    async fn update(&self, employee: Employee) -> HrResult<Employee>;

    async fn delete(&self, id: i32) -> HrResult<()>;
}

#[derive(Clone, Debug)]
pub struct SeaOrmEmployeeStore {
    pool: DbPool,
}

impl SeaOrmEmployeeStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmployeeStore for SeaOrmEmployeeStore {
    async fn find_all(&self) -> HrResult<Vec<Employee>> {
        let rows = employees::Entity::find()
            .order_by_asc(employees::Column::Id)
            .all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn find_by_id(&self, id: i32) -> HrResult<Option<Employee>> {
        Ok(employees::Entity::find_by_id(id).one(&self.pool).await?)
    }

    async fn find_by_email(&self, email: &str) -> HrResult<Option<Employee>> {
        let row = employees::Entity::find()
            .filter(employees::Column::Email.eq(email))
            .one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn insert(&self, employee: NewEmployee) -> HrResult<Employee> {
        let model = employees::ActiveModel {
            first_name: Set(employee.first_name),
            last_name: Set(employee.last_name),
            email: Set(employee.email),
            ..Default::default()
        };
        Ok(model.insert(&self.pool).await?)
    }

    async fn update(&self, employee: Employee) -> HrResult<Employee> {
        let model = employees::ActiveModel {
            id: Unchanged(employee.id),
            first_name: Set(employee.first_name),
            last_name: Set(employee.last_name),
            email: Set(employee.email),
        };
        Ok(model.update(&self.pool).await?)
    }

    async fn delete(&self, id: i32) -> HrResult<()> {
        employees::Entity::delete_by_id(id).exec(&self.pool).await?;
        Ok(())
    }
}
