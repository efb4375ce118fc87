use std::sync::Arc;

use serde_json::{Map, Value};
use tokio::sync::{Mutex, RwLock};

use crate::error::{AppError, AppResult};
use crate::upstream::{Employee, UpstreamClient};

use super::aggregate;
use super::keys::CacheSlot;
use super::models::{CacheSlots, EmployeeSnapshot};

/// 员工列表及其派生聚合值的进程级缓存
///
/// 读操作优先走缓存；写操作成功后三个槽位一起失效。
pub struct EmployeeCache {
    upstream: UpstreamClient,
    slots: RwLock<CacheSlots>,
    // 同一时间只允许一个列表拉取写入缓存
    populate: Mutex<()>,
}

impl EmployeeCache {
    pub fn new(upstream: UpstreamClient) -> Self {
        Self {
            upstream,
            slots: RwLock::new(CacheSlots::default()),
            populate: Mutex::new(()),
        }
    }

    pub async fn get_employees(&self) -> AppResult<Vec<Employee>> {
        tracing::info!("Fetching all employees");
        let snapshot = self.employee_snapshot().await?;
        Ok(snapshot.employees.to_vec())
    }

    pub async fn get_employee_by_name(&self, name: &str) -> AppResult<Vec<Employee>> {
        tracing::info!("Fetching employees with name: {}", name);
        let snapshot = self.employee_snapshot().await?;

        let matches = aggregate::filter_by_name(&snapshot.employees, name);
        if matches.is_empty() {
            return Err(AppError::not_found_name(name));
        }
        Ok(matches)
    }

    /// 按 ID 查询总是直接请求上游，不走列表缓存
    pub async fn get_employee_by_id(&self, id: &str) -> AppResult<Employee> {
        tracing::info!("Fetching employee with id: {}", id);
        self.fetch_by_id(parse_id(id)?).await
    }

    pub async fn get_highest_salary(&self) -> AppResult<i64> {
        if let Some(salary) = self.slots.read().await.highest_salary() {
            tracing::debug!("Cache hit: {}", CacheSlot::HighestSalary);
            return Ok(salary);
        }

        tracing::debug!("Cache miss: {}", CacheSlot::HighestSalary);
        let snapshot = self.employee_snapshot().await?;
        let salary = aggregate::highest_salary(&snapshot.employees);

        self.slots
            .write()
            .await
            .store_highest_salary(snapshot.generation, salary);
        Ok(salary)
    }

    pub async fn get_top_ten_highest_earning_names(&self) -> AppResult<Vec<String>> {
        if let Some(names) = self.slots.read().await.top_ten_names() {
            tracing::debug!("Cache hit: {}", CacheSlot::TopTenNames);
            return Ok(names.to_vec());
        }

        tracing::debug!("Cache miss: {}", CacheSlot::TopTenNames);
        let snapshot = self.employee_snapshot().await?;
        let names = Arc::new(aggregate::top_earner_names(&snapshot.employees));

        self.slots
            .write()
            .await
            .store_top_ten_names(snapshot.generation, names.clone());
        Ok(names.to_vec())
    }

    /// 字段原样转发给上游，不做校验
    pub async fn create_employee(&self, fields: Map<String, Value>) -> AppResult<Employee> {
        tracing::info!("Creating new employee with input: {:?}", fields);
        let employee = self.upstream.create_employee(&fields).await?;
        self.invalidate_all().await;
        Ok(employee)
    }

    /// 先查出记录再删除，不存在的 ID 不会请求上游删除接口
    pub async fn delete_employee(&self, id: &str) -> AppResult<String> {
        tracing::info!("Deleting employee with id: {}", id);
        let id = parse_id(id)?;
        let employee = self.fetch_by_id(id).await?;

        self.upstream.delete_employee(id).await?;
        self.invalidate_all().await;
        Ok(employee.employee_name)
    }

    pub async fn invalidate_all(&self) {
        self.slots.write().await.invalidate_all();
        tracing::debug!(
            "Evicted cache slots: {}",
            CacheSlot::ALL.map(|slot| slot.as_str()).join(", ")
        );
    }

    async fn fetch_by_id(&self, id: i64) -> AppResult<Employee> {
        self.upstream.get_employee_by_id(id).await
    }

    async fn employee_snapshot(&self) -> AppResult<EmployeeSnapshot> {
        if let Some(snapshot) = self.slots.read().await.employees() {
            tracing::debug!("Cache hit: {}", CacheSlot::Employees);
            return Ok(snapshot);
        }

        let _populating = self.populate.lock().await;

        // 等锁期间可能已经被其他请求填充
        let generation = {
            let slots = self.slots.read().await;
            if let Some(snapshot) = slots.employees() {
                tracing::debug!("Cache populated while waiting: {}", CacheSlot::Employees);
                return Ok(snapshot);
            }
            slots.generation()
        };

        tracing::debug!("Cache miss: {}, fetching from upstream", CacheSlot::Employees);
        let employees = Arc::new(self.upstream.list_employees().await?);

        if !self
            .slots
            .write()
            .await
            .store_employees(generation, employees.clone())
        {
            tracing::debug!("Cache invalidated during fetch, result not stored");
        }

        Ok(EmployeeSnapshot {
            generation,
            employees,
        })
    }
}

fn parse_id(id: &str) -> AppResult<i64> {
    id.trim()
        .parse::<i64>()
        .map_err(|_| AppError::MalformedInput(format!("employee id must be numeric, got {:?}", id)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_numeric_ids() {
        assert_eq!(parse_id("20").unwrap(), 20);
        assert_eq!(parse_id(" 7 ").unwrap(), 7);
    }

    #[test]
    fn rejects_non_numeric_ids() {
        assert!(matches!(parse_id("abc"), Err(AppError::MalformedInput(_))));
        assert!(matches!(parse_id(""), Err(AppError::MalformedInput(_))));
    }
}
