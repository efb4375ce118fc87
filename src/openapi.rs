use axum::Json;
use utoipa::OpenApi;

use crate::routes::employee::{EmployeeInput, handler};
use crate::upstream::Employee;

/// OpenAPI 文档，覆盖全部 `/v1/employees` 路由
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Employee Directory API",
        description = "Read/write facade over the remote employee directory"
    ),
    paths(
        handler::get_all_employees,
        handler::search_by_name,
        handler::get_employee_by_id,
        handler::get_highest_salary,
        handler::get_top_ten_highest_earning_names,
        handler::create_employee,
        handler::delete_employee,
    ),
    components(schemas(Employee, EmployeeInput)),
    tags((name = "Employees", description = "Employee lookups, aggregates and mutations"))
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_employee_route() {
        let openapi = ApiDoc::openapi();
        let paths = &openapi.paths.paths;

        assert!(paths["/v1/employees"].get.is_some());
        assert!(paths["/v1/employees"].post.is_some());
        assert!(paths["/v1/employees/search/{name}"].get.is_some());
        assert!(paths["/v1/employees/highestSalary"].get.is_some());
        assert!(paths["/v1/employees/topTenHighestEarningEmployeeNames"].get.is_some());
        assert!(paths["/v1/employees/{id}"].get.is_some());
        assert!(paths["/v1/employees/{id}"].delete.is_some());
    }

    #[test]
    fn employee_schema_uses_canonical_field_names() {
        let openapi = ApiDoc::openapi();
        let json = serde_json::to_value(&openapi).unwrap();
        let employee = &json["components"]["schemas"]["Employee"];

        for field in ["id", "employee_name", "employee_salary", "employee_age", "profile_image"] {
            assert!(employee["properties"].get(field).is_some(), "missing {}", field);
        }
        let required = employee["required"].as_array().unwrap();
        assert!(required.contains(&serde_json::json!("employee_name")));
        assert!(json["components"]["schemas"].get("EmployeeInput").is_some());
    }
}
