#![allow(dead_code)]

use std::sync::Arc;

use employee_directory::{
    AppState, cache::EmployeeCache, config::Config, upstream::UpstreamClient,
};
use serde_json::{Value, json};
use wiremock::MockServer;

pub fn config(server: &MockServer) -> Config {
    Config {
        upstream_base_url: server.uri(),
        upstream_timeout_secs: 5,
        server_host: "127.0.0.1".into(),
        server_port: 0,
    }
}

pub fn cache(server: &MockServer) -> EmployeeCache {
    let upstream = UpstreamClient::new(&config(server)).unwrap();
    EmployeeCache::new(upstream)
}

pub fn state(server: &MockServer) -> AppState {
    AppState {
        config: config(server),
        cache: Arc::new(cache(server)),
    }
}

pub fn employee_json(id: i64, name: &str, salary: i64) -> Value {
    json!({
        "id": id,
        "employee_name": name,
        "employee_salary": salary,
        "employee_age": 25 + id,
        "profile_image": ""
    })
}

pub fn list_body(employees: &[(&str, i64)]) -> Value {
    let data: Vec<Value> = employees
        .iter()
        .enumerate()
        .map(|(i, (name, salary))| employee_json(i as i64 + 1, name, *salary))
        .collect();
    json!({ "status": "success", "data": data })
}

pub fn office() -> Vec<(&'static str, i64)> {
    vec![
        ("Jim Halpert", 150000),
        ("Pam Beesley", 200000),
        ("John Doe", 50000),
        ("Jane Smith", 75000),
        ("Steve Johnson", 120000),
        ("Samantha Williams", 60000),
        ("Robert Brown", 80000),
        ("Rebecca Davis", 95000),
        ("Michael Miller", 70000),
        ("Michelle Wilson", 650000),
        ("David Moore", 55000),
        ("Danielle Taylor", 125000),
        ("Brian Anderson", 90000),
        ("Brenda Thomas", 90000),
        ("Adam Jackson", 100000),
        ("Amanda White", 110000),
        ("Chris Harris", 105000),
        ("Jim Halpert", 50000),
    ]
}
