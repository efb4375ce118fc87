use serde::Deserialize;
use serde_json::{Map, Value};
use utoipa::ToSchema;

/// Free-form employee fields forwarded to the upstream directory as-is,
/// e.g. `{"name": "John Doe", "salary": 50000, "age": 30}`
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(transparent)]
#[schema(value_type = Object)]
pub struct EmployeeInput(pub Map<String, Value>);
