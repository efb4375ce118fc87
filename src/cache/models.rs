use std::sync::Arc;

use crate::upstream::Employee;

/// 单个缓存值：要么是完整的值，要么为空
#[derive(Debug, Clone)]
pub struct CacheEntry<T> {
    value: Option<T>,
}

impl<T> Default for CacheEntry<T> {
    fn default() -> Self {
        Self { value: None }
    }
}

impl<T: Clone> CacheEntry<T> {
    pub fn get(&self) -> Option<T> {
        self.value.clone()
    }

    pub fn is_valid(&self) -> bool {
        self.value.is_some()
    }

    pub fn populate(&mut self, value: T) {
        self.value = Some(value);
    }

    pub fn invalidate(&mut self) {
        self.value = None;
    }
}

/// 一次上游拉取得到的员工列表快照
#[derive(Debug, Clone)]
pub struct EmployeeSnapshot {
    pub generation: u64,
    pub employees: Arc<Vec<Employee>>,
}

/// 三个缓存槽位及失效计数
///
/// 每次失效都会递增 `generation`。写入方带上开始工作前观察到的代数，
/// 代数过期的写入会被丢弃，变更之前算出的结果不会留在缓存里。
/// 派生槽位只有在列表槽位有效时才能读写。
#[derive(Debug, Default)]
pub struct CacheSlots {
    generation: u64,
    employees: CacheEntry<Arc<Vec<Employee>>>,
    highest_salary: CacheEntry<i64>,
    top_ten_names: CacheEntry<Arc<Vec<String>>>,
}

impl CacheSlots {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn employees(&self) -> Option<EmployeeSnapshot> {
        self.employees.get().map(|employees| EmployeeSnapshot {
            generation: self.generation,
            employees,
        })
    }

    pub fn highest_salary(&self) -> Option<i64> {
        if !self.employees.is_valid() {
            return None;
        }
        self.highest_salary.get()
    }

    pub fn top_ten_names(&self) -> Option<Arc<Vec<String>>> {
        if !self.employees.is_valid() {
            return None;
        }
        self.top_ten_names.get()
    }

    pub fn store_employees(&mut self, generation: u64, employees: Arc<Vec<Employee>>) -> bool {
        if generation != self.generation {
            return false;
        }
        self.employees.populate(employees);
        true
    }

    pub fn store_highest_salary(&mut self, generation: u64, salary: i64) -> bool {
        if !self.accepts_derived(generation) {
            return false;
        }
        self.highest_salary.populate(salary);
        true
    }

    pub fn store_top_ten_names(&mut self, generation: u64, names: Arc<Vec<String>>) -> bool {
        if !self.accepts_derived(generation) {
            return false;
        }
        self.top_ten_names.populate(names);
        true
    }

    pub fn invalidate_all(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.employees.invalidate();
        self.highest_salary.invalidate();
        self.top_ten_names.invalidate();
    }

    fn accepts_derived(&self, generation: u64) -> bool {
        generation == self.generation && self.employees.is_valid()
    }
}
