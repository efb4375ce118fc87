use axum::{Router, routing::get};

use crate::{AppState, middleware::log_errors, openapi::openapi_json, routes};

// 员工相关的路由
pub fn employee_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/employees",
            get(routes::employee::get_all_employees).post(routes::employee::create_employee),
        )
        .route(
            "/employees/search/{name}",
            get(routes::employee::search_by_name),
        )
        .route(
            "/employees/highestSalary",
            get(routes::employee::get_highest_salary),
        )
        .route(
            "/employees/topTenHighestEarningEmployeeNames",
            get(routes::employee::get_top_ten_highest_earning_names),
        )
        .route(
            "/employees/{id}",
            get(routes::employee::get_employee_by_id).delete(routes::employee::delete_employee),
        )
}

// 创建主路由
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/v1", employee_routes())
        .route("/openapi.json", get(openapi_json))
        .layer(axum::middleware::from_fn(log_errors))
        .with_state(state)
}
