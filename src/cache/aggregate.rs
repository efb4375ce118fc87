use crate::upstream::Employee;

pub const TOP_EARNER_COUNT: usize = 10;

/// 列表中的最高薪资，列表为空时为 0
pub fn highest_salary(employees: &[Employee]) -> i64 {
    employees
        .iter()
        .map(|e| e.employee_salary)
        .fold(0, i64::max)
}

/// 按薪资降序排列，截止到第 `count` 名的薪资
///
/// 截止线是薪资值而不是人数：与第 `count` 名薪资相同的员工全部保留，
/// 结果可能多于 `count` 条。薪资相同的员工保持原有顺序。
pub fn top_earners(employees: &[Employee], count: usize) -> Vec<&Employee> {
    let mut ranked: Vec<&Employee> = employees.iter().collect();
    ranked.sort_by(|a, b| b.employee_salary.cmp(&a.employee_salary));

    if count == 0 {
        ranked.clear();
    } else if ranked.len() > count {
        let cutoff = ranked[count - 1].employee_salary;
        let end = ranked[count..]
            .iter()
            .position(|e| e.employee_salary < cutoff)
            .map_or(ranked.len(), |offset| count + offset);
        ranked.truncate(end);
    }

    ranked
}

pub fn top_earner_names(employees: &[Employee]) -> Vec<String> {
    let earners = top_earners(employees, TOP_EARNER_COUNT);
    for earner in &earners {
        tracing::debug!(
            "Top earner: {}, Salary: {}",
            earner.employee_name,
            earner.employee_salary
        );
    }
    earners.into_iter().map(|e| e.employee_name.clone()).collect()
}

/// 姓名精确匹配（区分大小写），保持原有顺序
pub fn filter_by_name(employees: &[Employee], name: &str) -> Vec<Employee> {
    employees
        .iter()
        .filter(|e| e.employee_name == name)
        .cloned()
        .collect()
}
