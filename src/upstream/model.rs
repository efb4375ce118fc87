use serde::{Deserialize, Deserializer, Serialize, de::Error as _};
use utoipa::ToSchema;

/// Details about the Employee
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Employee {
    /// Identifier assigned by the upstream directory
    #[serde(default, deserialize_with = "lenient_opt_i64")]
    #[schema(example = 1)]
    pub id: Option<i64>,
    /// Name of the employee
    #[serde(alias = "name", default)]
    #[schema(example = "John Doe", required = true)]
    pub employee_name: String,
    /// Salary of the employee
    #[serde(alias = "salary", default, deserialize_with = "lenient_i64")]
    #[schema(example = 50000, required = true)]
    pub employee_salary: i64,
    /// Age of the employee
    #[serde(alias = "age", default, deserialize_with = "lenient_i64")]
    #[schema(example = 30, required = true)]
    pub employee_age: i64,
    /// Profile image reference, absent when upstream has none
    #[serde(default, deserialize_with = "empty_as_none")]
    pub profile_image: Option<String>,
}

/// 上游接口统一的 `{status, data}` 信封
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub status: Option<String>,
    pub data: Option<T>,
    pub message: Option<String>,
}

// 上游的 create 接口会把数字字段回显成字符串
#[derive(Deserialize)]
#[serde(untagged)]
enum LenientNumber {
    Int(i64),
    Float(f64),
    Text(String),
}

fn lenient_opt_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<LenientNumber>::deserialize(deserializer)? {
        None => Ok(None),
        Some(LenientNumber::Int(v)) => Ok(Some(v)),
        Some(LenientNumber::Float(v)) => Ok(Some(v as i64)),
        Some(LenientNumber::Text(s)) => {
            let s = s.trim();
            if s.is_empty() {
                return Ok(None);
            }
            s.parse::<i64>()
                .map(Some)
                .map_err(|e| D::Error::custom(format!("invalid number {:?}: {}", s, e)))
        }
    }
}

fn lenient_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_opt_i64(deserializer)?.unwrap_or(0))
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.filter(|s| !s.is_empty()))
}
