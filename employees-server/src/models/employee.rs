//! Employee record and the bodies accepted by create / partial update
//!
//! Request bodies keep `name`/`salary` as raw JSON. Turning them into column
//! values is the gateway's job ([`EmployeeColumns::from_body`]), so a value the
//! table cannot store is a gateway failure, not a request error.

use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use sqlx::FromRow;

/// Column width of `employee.name`
pub const NAME_MAX_CHARS: usize = 45;

/// Largest magnitude an f64 holds without losing integer precision (2^53)
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Numeric salary column (`DOUBLE PRECISION`)
///
/// Whole values serialize as JSON integers (`1000`, not `1000.0`).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, sqlx::Type)]
#[serde(transparent)]
#[sqlx(transparent)]
pub struct Salary(pub f64);

impl Serialize for Salary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0.fract() == 0.0 && self.0.abs() <= MAX_EXACT_INTEGER {
            serializer.serialize_i64(self.0 as i64)
        } else {
            serializer.serialize_f64(self.0)
        }
    }
}

/// Employee record from database
///
/// `name` and `salary` are nullable columns; a create without them stores NULL.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Employee {
    pub id: i64,
    pub name: Option<String>,
    pub salary: Option<Salary>,
}

/// A supplied value that does not fit its column
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvalidValue {
    #[error("{column}: cannot store {value}")]
    WrongType { column: &'static str, value: String },

    #[error("{column}: exceeds {max} characters")]
    TooLong { column: &'static str, max: usize },
}

/// Column values ready to be written
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeeColumns {
    pub name: Option<String>,
    pub salary: Option<Salary>,
}

impl EmployeeColumns {
    /// Convert raw body values the way the table would.
    ///
    /// Strings are stored as-is in `name`; numbers and numeric strings are
    /// accepted for `salary`. Anything else is rejected.
    pub fn from_body(name: Option<&Value>, salary: Option<&Value>) -> Result<Self, InvalidValue> {
        Ok(Self {
            name: name.map(name_column).transpose()?,
            salary: salary.map(salary_column).transpose()?,
        })
    }

    pub fn into_employee(self, id: i64) -> Employee {
        Employee {
            id,
            name: self.name,
            salary: self.salary,
        }
    }

    /// Coalesce-on-null: only supplied columns overwrite the stored record.
    pub fn apply(self, employee: &mut Employee) {
        if let Some(name) = self.name {
            employee.name = Some(name);
        }
        if let Some(salary) = self.salary {
            employee.salary = Some(salary);
        }
    }
}

fn name_column(value: &Value) -> Result<String, InvalidValue> {
    let Value::String(name) = value else {
        return Err(wrong_type("name", value));
    };
    if name.chars().count() > NAME_MAX_CHARS {
        return Err(InvalidValue::TooLong {
            column: "name",
            max: NAME_MAX_CHARS,
        });
    }
    Ok(name.clone())
}

fn salary_column(value: &Value) -> Result<Salary, InvalidValue> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    number
        .filter(|n| n.is_finite())
        .map(Salary)
        .ok_or_else(|| wrong_type("salary", value))
}

fn wrong_type(column: &'static str, value: &Value) -> InvalidValue {
    InvalidValue::WrongType {
        column,
        value: value.to_string(),
    }
}

/// Create employee request
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewEmployee {
    pub name: Option<Value>,
    pub salary: Option<Value>,
}

impl NewEmployee {
    pub fn columns(&self) -> Result<EmployeeColumns, InvalidValue> {
        EmployeeColumns::from_body(self.name.as_ref(), self.salary.as_ref())
    }

    /// Echo the supplied values back with the generated id.
    pub fn into_created(self, id: i64) -> CreatedEmployee {
        CreatedEmployee {
            id,
            name: self.name,
            salary: self.salary,
        }
    }
}

/// Create response: generated id plus the values as supplied
#[derive(Debug, Clone, Serialize)]
pub struct CreatedEmployee {
    pub id: i64,
    pub name: Option<Value>,
    pub salary: Option<Value>,
}

/// Partial update request.
///
/// A missing or null field keeps the stored value, it never clears it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmployeePatch {
    pub name: Option<Value>,
    pub salary: Option<Value>,
}

impl EmployeePatch {
    pub fn columns(&self) -> Result<EmployeeColumns, InvalidValue> {
        EmployeeColumns::from_body(self.name.as_ref(), self.salary.as_ref())
    }
}
