pub mod handler;
mod model;

pub use handler::{
    create_employee,
    delete_employee,
    get_all_employees,
    get_employee_by_id,
    get_highest_salary,
    get_top_ten_highest_earning_names,
    search_by_name,
};
pub use model::EmployeeInput;
