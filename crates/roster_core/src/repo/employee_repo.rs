//! Employee repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Persist employees together with their department foreign key.
//! - Read employees joined with their department so callers always get the
//!   full department record.
//!
//! # Invariants
//! - `save` refuses employees without a saved department.
//! - `phone_number` is unique in the store; the services check it first but
//!   the constraint is the backstop.

use crate::model::audit::Audit;
use crate::model::department::DepartmentId;
use crate::model::employee::{Employee, EmployeeId};
use crate::repo::department_repo::read_department;
use crate::repo::{ensure_connection_ready, RepoError, RepoResult};
use rusqlite::{params, Connection, Row, ToSql};

const EMPLOYEE_COLUMNS: &[&str] = &[
    "id",
    "name",
    "last_name",
    "address",
    "email",
    "phone_number",
    "department_id",
    "created_at",
    "created_by",
    "updated_at",
    "updated_by",
];

const EMPLOYEE_SELECT_SQL: &str = "SELECT
    e.id AS id,
    e.name AS name,
    e.last_name AS last_name,
    e.address AS address,
    e.email AS email,
    e.phone_number AS phone_number,
    e.created_at AS created_at,
    e.created_by AS created_by,
    e.updated_at AS updated_at,
    e.updated_by AS updated_by,
    d.id AS d_id,
    d.name AS d_name,
    d.department_code AS d_department_code,
    d.description AS d_description,
    d.building AS d_building,
    d.phone_number AS d_phone_number,
    d.created_at AS d_created_at,
    d.created_by AS d_created_by,
    d.updated_at AS d_updated_at,
    d.updated_by AS d_updated_by
FROM employees e
JOIN departments d ON d.id = e.department_id";

const EMPLOYEE_UPSERT_SQL: &str = "INSERT INTO employees (
    id,
    name,
    last_name,
    address,
    email,
    phone_number,
    department_id,
    created_at,
    created_by,
    updated_at,
    updated_by
) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, COALESCE(?8, strftime('%s', 'now') * 1000), ?9, ?10, ?11)
ON CONFLICT (id) DO UPDATE SET
    name = excluded.name,
    last_name = excluded.last_name,
    address = excluded.address,
    email = excluded.email,
    phone_number = excluded.phone_number,
    department_id = excluded.department_id,
    created_at = COALESCE(?8, employees.created_at),
    created_by = COALESCE(?9, employees.created_by),
    updated_at = COALESCE(?10, strftime('%s', 'now') * 1000),
    updated_by = ?11;";

/// Lookup/persist contract for employees.
pub trait EmployeeRepository {
    fn find_all(&self) -> RepoResult<Vec<Employee>>;
    fn find_by_id(&self, id: EmployeeId) -> RepoResult<Option<Employee>>;
    /// Natural-key lookup by full name, ignoring case. Returns the oldest
    /// match when several employees share a name.
    fn find_by_name_and_last_name_ignore_case(
        &self,
        name: &str,
        last_name: &str,
    ) -> RepoResult<Option<Employee>>;
    /// Natural-key lookup by exact phone number.
    fn find_by_phone_number(&self, phone_number: &str) -> RepoResult<Option<Employee>>;
    /// Exact, case-sensitive email match.
    fn find_by_email(&self, email: &str) -> RepoResult<Option<Employee>>;
    fn find_by_department_id(&self, department_id: DepartmentId) -> RepoResult<Vec<Employee>>;
    /// Employees whose first name contains `fragment`, ignoring case.
    fn find_by_name_containing_ignore_case(&self, fragment: &str) -> RepoResult<Vec<Employee>>;
    /// Inserts (when `employee.id` is `None`) or overwrites an employee and
    /// returns the stored row.
    fn save(&self, employee: &Employee) -> RepoResult<Employee>;
    fn delete_by_id(&self, id: EmployeeId) -> RepoResult<()>;
}

/// SQLite-backed employee repository.
pub struct SqliteEmployeeRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteEmployeeRepository<'conn> {
    /// Wraps a connection opened through `open_db`/`open_db_in_memory`.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, "employees", EMPLOYEE_COLUMNS)?;
        Ok(Self { conn })
    }

    fn query(&self, filter: &str, bind: &[&dyn ToSql]) -> RepoResult<Vec<Employee>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{EMPLOYEE_SELECT_SQL} WHERE {filter} ORDER BY e.id ASC;"))?;
        let mut rows = stmt.query(bind)?;
        let mut employees = Vec::new();
        while let Some(row) = rows.next()? {
            employees.push(read_employee(row)?);
        }
        Ok(employees)
    }

    fn query_first(&self, filter: &str, bind: &[&dyn ToSql]) -> RepoResult<Option<Employee>> {
        Ok(self.query(filter, bind)?.into_iter().next())
    }
}

impl EmployeeRepository for SqliteEmployeeRepository<'_> {
    fn find_all(&self) -> RepoResult<Vec<Employee>> {
        self.query("1 = 1", &[])
    }

    fn find_by_id(&self, id: EmployeeId) -> RepoResult<Option<Employee>> {
        self.query_first("e.id = ?1", &[&id])
    }

    fn find_by_name_and_last_name_ignore_case(
        &self,
        name: &str,
        last_name: &str,
    ) -> RepoResult<Option<Employee>> {
        self.query_first(
            "e.name = ?1 COLLATE NOCASE AND e.last_name = ?2 COLLATE NOCASE",
            &[&name, &last_name],
        )
    }

    fn find_by_phone_number(&self, phone_number: &str) -> RepoResult<Option<Employee>> {
        self.query_first("e.phone_number = ?1", &[&phone_number])
    }

    fn find_by_email(&self, email: &str) -> RepoResult<Option<Employee>> {
        self.query_first("e.email = ?1", &[&email])
    }

    fn find_by_department_id(&self, department_id: DepartmentId) -> RepoResult<Vec<Employee>> {
        self.query("e.department_id = ?1", &[&department_id])
    }

    fn find_by_name_containing_ignore_case(&self, fragment: &str) -> RepoResult<Vec<Employee>> {
        let pattern = format!("%{}%", escape_like(fragment));
        self.query("e.name LIKE ?1 ESCAPE '\\'", &[&pattern])
    }

    fn save(&self, employee: &Employee) -> RepoResult<Employee> {
        let department_id = employee.department_id().ok_or(RepoError::MissingDepartment)?;
        let audit = &employee.audit;
        self.conn.execute(
            EMPLOYEE_UPSERT_SQL,
            params![
                employee.id,
                employee.name.as_str(),
                employee.last_name.as_str(),
                employee.address.as_deref(),
                employee.email.as_str(),
                employee.phone_number.as_str(),
                department_id,
                audit.created_at,
                audit.created_by.as_deref(),
                audit.updated_at,
                audit.updated_by.as_deref(),
            ],
        )?;

        let id = employee
            .id
            .unwrap_or_else(|| self.conn.last_insert_rowid());
        self.find_by_id(id)?
            .ok_or_else(|| RepoError::InvalidData(format!("employee {id} missing after save")))
    }

    fn delete_by_id(&self, id: EmployeeId) -> RepoResult<()> {
        self.conn.execute("DELETE FROM employees WHERE id = ?1;", [id])?;
        Ok(())
    }
}

fn read_employee(row: &Row<'_>) -> RepoResult<Employee> {
    let phone_number: String = row.get("phone_number")?;
    if phone_number.trim().is_empty() {
        return Err(RepoError::InvalidData(
            "blank value in employees.phone_number".to_string(),
        ));
    }

    Ok(Employee {
        id: Some(row.get("id")?),
        name: row.get("name")?,
        last_name: row.get("last_name")?,
        address: row.get("address")?,
        email: row.get("email")?,
        phone_number,
        department: Some(read_department(row, "d_")?),
        audit: Audit {
            created_at: row.get("created_at")?,
            created_by: row.get("created_by")?,
            updated_at: row.get("updated_at")?,
            updated_by: row.get("updated_by")?,
        },
    })
}

fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::escape_like;

    #[test]
    fn escape_like_guards_wildcards() {
        assert_eq!(escape_like("50%_a\\b"), "50\\%\\_a\\\\b");
        assert_eq!(escape_like("ann"), "ann");
    }
}
