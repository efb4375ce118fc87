use axum::extract::{Json, Path, State};

use crate::AppState;
use crate::error::AppResult;
use crate::upstream::Employee;

use super::model::EmployeeInput;

#[utoipa::path(
    get,
    path = "/v1/employees",
    tag = "Employees",
    responses(
        (status = 200, description = "All employees", body = Vec<Employee>),
        (status = 500, description = "Upstream failure", body = String, content_type = "text/plain"),
    )
)]
#[axum::debug_handler]
pub async fn get_all_employees(State(state): State<AppState>) -> AppResult<Json<Vec<Employee>>> {
    Ok(Json(state.cache.get_employees().await?))
}

#[utoipa::path(
    get,
    path = "/v1/employees/search/{name}",
    tag = "Employees",
    params(("name" = String, Path, description = "Exact, case-sensitive employee name")),
    responses(
        (status = 200, description = "Employees with exactly this name", body = Vec<Employee>),
        (status = 404, description = "No employee has this name", body = String, content_type = "text/plain"),
        (status = 500, description = "Upstream failure", body = String, content_type = "text/plain"),
    )
)]
#[axum::debug_handler]
pub async fn search_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<Json<Vec<Employee>>> {
    Ok(Json(state.cache.get_employee_by_name(&name).await?))
}

#[utoipa::path(
    get,
    path = "/v1/employees/{id}",
    tag = "Employees",
    params(("id" = String, Path, description = "Numeric employee id")),
    responses(
        (status = 200, description = "The employee", body = Employee),
        (status = 404, description = "Employee not found", body = String, content_type = "text/plain"),
        (status = 500, description = "Malformed id or upstream failure", body = String, content_type = "text/plain"),
    )
)]
#[axum::debug_handler]
pub async fn get_employee_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Employee>> {
    Ok(Json(state.cache.get_employee_by_id(&id).await?))
}

#[utoipa::path(
    get,
    path = "/v1/employees/highestSalary",
    tag = "Employees",
    responses(
        (status = 200, description = "Highest salary, 0 when there are no employees", body = i64),
        (status = 500, description = "Upstream failure", body = String, content_type = "text/plain"),
    )
)]
#[axum::debug_handler]
pub async fn get_highest_salary(State(state): State<AppState>) -> AppResult<Json<i64>> {
    Ok(Json(state.cache.get_highest_salary().await?))
}

#[utoipa::path(
    get,
    path = "/v1/employees/topTenHighestEarningEmployeeNames",
    tag = "Employees",
    responses(
        (status = 200, description = "Top ten earners, including ties at the tenth salary", body = Vec<String>),
        (status = 500, description = "Upstream failure", body = String, content_type = "text/plain"),
    )
)]
#[axum::debug_handler]
pub async fn get_top_ten_highest_earning_names(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<String>>> {
    Ok(Json(state.cache.get_top_ten_highest_earning_names().await?))
}

#[utoipa::path(
    post,
    path = "/v1/employees",
    tag = "Employees",
    request_body = EmployeeInput,
    responses(
        (status = 200, description = "The employee as echoed by upstream", body = Employee),
        (status = 500, description = "Upstream failure", body = String, content_type = "text/plain"),
    )
)]
#[axum::debug_handler]
pub async fn create_employee(
    State(state): State<AppState>,
    Json(input): Json<EmployeeInput>,
) -> AppResult<Json<Employee>> {
    Ok(Json(state.cache.create_employee(input.0).await?))
}

#[utoipa::path(
    delete,
    path = "/v1/employees/{id}",
    tag = "Employees",
    params(("id" = String, Path, description = "Numeric employee id")),
    responses(
        (status = 200, description = "Name of the deleted employee", body = String),
        (status = 404, description = "Employee not found", body = String, content_type = "text/plain"),
        (status = 500, description = "Malformed id or upstream failure", body = String, content_type = "text/plain"),
    )
)]
#[axum::debug_handler]
pub async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<String>> {
    Ok(Json(state.cache.delete_employee(&id).await?))
}
