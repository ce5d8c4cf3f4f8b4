//! Department repository contract and SQLite implementation.
//!
//! # Invariants
//! - `save` is an upsert keyed by the caller-assigned id.
//! - Name lookups compare case-insensitively (`COLLATE NOCASE`).
//! - `delete_by_id` of a missing id is not an error; employees of a deleted
//!   department are removed by the store cascade.

use crate::model::audit::Audit;
use crate::model::department::{Department, DepartmentId};
use crate::repo::{ensure_connection_ready, RepoError, RepoResult};
use rusqlite::{params, Connection, Row, ToSql};

pub(crate) const DEPARTMENT_COLUMNS: &[&str] = &[
    "id",
    "name",
    "department_code",
    "description",
    "building",
    "phone_number",
    "created_at",
    "created_by",
    "updated_at",
    "updated_by",
];

const DEPARTMENT_SELECT_SQL: &str = "SELECT
    id,
    name,
    department_code,
    description,
    building,
    phone_number,
    created_at,
    created_by,
    updated_at,
    updated_by
FROM departments";

const DEPARTMENT_UPSERT_SQL: &str = "INSERT INTO departments (
    id,
    name,
    department_code,
    description,
    building,
    phone_number,
    created_at,
    created_by,
    updated_at,
    updated_by
) VALUES (?1, ?2, ?3, ?4, ?5, ?6, COALESCE(?7, strftime('%s', 'now') * 1000), ?8, ?9, ?10)
ON CONFLICT (id) DO UPDATE SET
    name = excluded.name,
    department_code = excluded.department_code,
    description = excluded.description,
    building = excluded.building,
    phone_number = excluded.phone_number,
    created_at = COALESCE(?7, departments.created_at),
    created_by = COALESCE(?8, departments.created_by),
    updated_at = COALESCE(?9, strftime('%s', 'now') * 1000),
    updated_by = ?10;";

/// Lookup/persist contract for departments.
pub trait DepartmentRepository {
    fn find_all(&self) -> RepoResult<Vec<Department>>;
    fn find_by_id(&self, id: DepartmentId) -> RepoResult<Option<Department>>;
    /// Natural-key lookup by name, ignoring case.
    fn find_by_name_ignore_case(&self, name: &str) -> RepoResult<Option<Department>>;
    /// Inserts or overwrites the department with `department.id` and returns
    /// the stored row.
    fn save(&self, department: &Department) -> RepoResult<Department>;
    fn delete_by_id(&self, id: DepartmentId) -> RepoResult<()>;
}

/// SQLite-backed department repository.
pub struct SqliteDepartmentRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteDepartmentRepository<'conn> {
    /// Wraps a connection opened through `open_db`/`open_db_in_memory`.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, "departments", DEPARTMENT_COLUMNS)?;
        Ok(Self { conn })
    }

    fn query_one(&self, filter: &str, param: &dyn ToSql) -> RepoResult<Option<Department>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{DEPARTMENT_SELECT_SQL} WHERE {filter} LIMIT 1;"))?;
        let mut rows = stmt.query(&[param])?;
        match rows.next()? {
            Some(row) => Ok(Some(read_department(row, "")?)),
            None => Ok(None),
        }
    }
}

impl DepartmentRepository for SqliteDepartmentRepository<'_> {
    fn find_all(&self) -> RepoResult<Vec<Department>> {
        let mut stmt = self.conn.prepare(&format!(
            "{DEPARTMENT_SELECT_SQL} ORDER BY name COLLATE NOCASE ASC, id ASC;"
        ))?;
        let mut rows = stmt.query([])?;
        let mut departments = Vec::new();
        while let Some(row) = rows.next()? {
            departments.push(read_department(row, "")?);
        }
        Ok(departments)
    }

    fn find_by_id(&self, id: DepartmentId) -> RepoResult<Option<Department>> {
        self.query_one("id = ?1", &id)
    }

    fn find_by_name_ignore_case(&self, name: &str) -> RepoResult<Option<Department>> {
        self.query_one("name = ?1 COLLATE NOCASE", &name)
    }

    fn save(&self, department: &Department) -> RepoResult<Department> {
        let id = department.id.ok_or(RepoError::MissingDepartmentId)?;
        let audit = &department.audit;
        self.conn.execute(
            DEPARTMENT_UPSERT_SQL,
            params![
                id,
                department.name.as_str(),
                department.department_code.as_str(),
                department.description.as_deref(),
                department.building.as_deref(),
                department.phone_number.as_deref(),
                audit.created_at,
                audit.created_by.as_deref(),
                audit.updated_at,
                audit.updated_by.as_deref(),
            ],
        )?;

        self.find_by_id(id)?
            .ok_or_else(|| RepoError::InvalidData(format!("department {id} missing after save")))
    }

    fn delete_by_id(&self, id: DepartmentId) -> RepoResult<()> {
        self.conn
            .execute("DELETE FROM departments WHERE id = ?1;", [id])?;
        Ok(())
    }
}

/// Reads department columns, each named `{prefix}{column}`.
pub(crate) fn read_department(row: &Row<'_>, prefix: &str) -> RepoResult<Department> {
    let column = |name: &str| format!("{prefix}{name}");
    let name: String = row.get(column("name").as_str())?;
    if name.trim().is_empty() {
        return Err(RepoError::InvalidData(
            "blank value in departments.name".to_string(),
        ));
    }

    Ok(Department {
        id: Some(row.get(column("id").as_str())?),
        name,
        department_code: row.get(column("department_code").as_str())?,
        description: row.get(column("description").as_str())?,
        building: row.get(column("building").as_str())?,
        phone_number: row.get(column("phone_number").as_str())?,
        audit: Audit {
            created_at: row.get(column("created_at").as_str())?,
            created_by: row.get(column("created_by").as_str())?,
            updated_at: row.get(column("updated_at").as_str())?,
            updated_by: row.get(column("updated_by").as_str())?,
        },
    })
}
