/// 缓存槽位，三个槽位总是一起失效
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheSlot {
    Employees,
    HighestSalary,
    TopTenNames,
}

impl CacheSlot {
    pub const ALL: [CacheSlot; 3] = [
        CacheSlot::Employees,
        CacheSlot::HighestSalary,
        CacheSlot::TopTenNames,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CacheSlot::Employees => "employees",
            CacheSlot::HighestSalary => "highestSalary",
            CacheSlot::TopTenNames => "topTenHighestEarningEmployeeNames",
        }
    }
}

impl std::fmt::Display for CacheSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
