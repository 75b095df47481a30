//! REST handlers for `/api/employees`.
//!
//! Validation happens here; persistence is delegated to [`EmployeeService`]. Error bodies are
//! plain text, success bodies are JSON (except the delete confirmation).

use axum::{
    Json, Router,
    extract::{FromRef, Path, State},
    routing::get,
};
use platform_api::{ApiError, ApiResult, ListResult};
use products_hr::{Employee, EmployeeService, NewEmployee};
use serde::Deserialize;
use tracing::{info, instrument};

const FIELDS_REQUIRED: &str = "First Name, Last Name, and Email are required";

/// Employee routes, mountable on any state that can hand out an [`EmployeeService`].
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
    EmployeeService: FromRef<S>,
{
    Router::new()
        .route("/api/employees", get(list_employees).post(create_employee))
        .route(
            "/api/employees/{id}",
            get(get_employee).put(update_employee).delete(delete_employee),
        )
}

/// Request body for create and update. Every field is optional so that a missing field is
/// answered with a 400 message instead of a deserialization rejection.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeePayload {
    pub id: Option<i32>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
}

impl EmployeePayload {
    fn into_candidate(self) -> ApiResult<NewEmployee> {
        match (
            present(self.first_name),
            present(self.last_name),
            present(self.email),
        ) {
            (Some(first_name), Some(last_name), Some(email)) => Ok(NewEmployee {
                first_name,
                last_name,
                email,
            }),
            _ => Err(ApiError::bad_request(FIELDS_REQUIRED)),
        }
    }
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.is_empty())
}

fn not_found_message(id: i64) -> String {
    format!("Employee with ID {id} not found")
}

/// Path ids are accepted as `i64`; anything outside the key range cannot name a stored row.
fn stored_key(id: i64) -> Option<i32> {
    i32::try_from(id).ok()
}

#[instrument(name = "employees.create", skip_all)]
async fn create_employee(
    State(service): State<EmployeeService>,
    Json(payload): Json<EmployeePayload>,
) -> ApiResult<Json<Employee>> {
    const CONTEXT: &str = "Error saving employee";

    if payload.id.is_some() {
        return Err(ApiError::bad_request("Employee ID is not null"));
    }
    let candidate = payload.into_candidate()?;

    let existing = service
        .find_by_email(&candidate.email)
        .await
        .map_err(|err| ApiError::internal(CONTEXT, err))?;
    if existing.is_some() {
        return Err(ApiError::bad_request("Employee with the same email already exists"));
    }

    let saved = service
        .save_employee(candidate)
        .await
        .map_err(|err| ApiError::internal(CONTEXT, err))?;
    info!(id = saved.id, "employee created");
    Ok(Json(saved))
}

#[instrument(name = "employees.list", skip_all)]
async fn list_employees(
    State(service): State<EmployeeService>,
) -> ApiResult<Json<ListResult<Employee>>> {
    let employees = service
        .get_all_employees()
        .await
        .map_err(|err| ApiError::internal("Error getting employees", err))?;
    Ok(Json(ListResult::new(employees)))
}

#[instrument(name = "employees.get", skip(service))]
async fn get_employee(
    State(service): State<EmployeeService>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Employee>> {
    let Some(key) = stored_key(id) else {
        return Err(ApiError::not_found(not_found_message(id)));
    };
    service
        .get_employee_by_id(key)
        .await
        .map_err(|err| ApiError::internal("Error getting employee by ID", err))?
        .map(Json)
        .ok_or_else(|| ApiError::not_found(not_found_message(id)))
}

#[instrument(name = "employees.update", skip(service, payload))]
async fn update_employee(
    State(service): State<EmployeeService>,
    Path(id): Path<i64>,
    Json(payload): Json<EmployeePayload>,
) -> ApiResult<Json<Employee>> {
    const CONTEXT: &str = "Error updating employee";

    let Some(body_id) = payload.id else {
        return Err(ApiError::bad_request("Employee ID in request body should not be null"));
    };
    if i64::from(body_id) != id {
        return Err(ApiError::bad_request(
            "Employee ID in request body must match the path variable",
        ));
    }
    let candidate = payload.into_candidate()?;

    let Some(mut employee) = service
        .get_employee_by_id(body_id)
        .await
        .map_err(|err| ApiError::internal(CONTEXT, err))?
    else {
        return Err(ApiError::not_found(not_found_message(id)));
    };

    employee.first_name = candidate.first_name;
    employee.last_name = candidate.last_name;
    employee.email = candidate.email;

    let updated = service
        .update_employee(employee)
        .await
        .map_err(|err| ApiError::internal(CONTEXT, err))?;
    info!(id, "employee updated");
    Ok(Json(updated))
}

/// A missing record is a 400 here, unlike get and update which answer 404.
#[instrument(name = "employees.delete", skip(service))]
async fn delete_employee(
    State(service): State<EmployeeService>,
    Path(id): Path<i64>,
) -> ApiResult<String> {
    const CONTEXT: &str = "Error deleting employee";

    let Some(key) = stored_key(id) else {
        return Err(ApiError::bad_request(not_found_message(id)));
    };
    let existing = service
        .get_employee_by_id(key)
        .await
        .map_err(|err| ApiError::internal(CONTEXT, err))?;
    if existing.is_none() {
        return Err(ApiError::bad_request(not_found_message(id)));
    }

    service
        .delete_employee(key)
        .await
        .map_err(|err| ApiError::internal(CONTEXT, err))?;
    info!(id, "employee deleted");
    Ok(format!("Employee with ID {id} deleted successfully"))
}
