//! Domain models and request bodies

pub mod employee;

pub use employee::{
    CreatedEmployee, Employee, EmployeeColumns, EmployeePatch, InvalidValue, NewEmployee, Salary,
};
