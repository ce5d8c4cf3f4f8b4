use roster_core::db::migrations::latest_version;
use roster_core::db::open_db_in_memory;
use roster_core::{
    Audit, Department, DepartmentRepository, Employee, EmployeeRepository, RepoError,
    SqliteDepartmentRepository, SqliteEmployeeRepository,
};
use rusqlite::Connection;

fn department(id: i64, name: &str, code: &str) -> Department {
    Department {
        id: Some(id),
        ..Department::new(name, code)
    }
}

#[test]
fn save_and_find_by_id_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteDepartmentRepository::try_new(&conn).unwrap();

    let mut cs = department(1_000_000_001, "Computer Science", "CS_101");
    cs.description = Some("Algorithms and systems".to_string());
    cs.building = Some("ZH1_23".to_string());
    cs.phone_number = Some("9345432123".to_string());
    cs.audit = Audit::created_by("Admin");
    let saved = repo.save(&cs).unwrap();

    assert_eq!(saved.id, Some(1_000_000_001));
    assert_eq!(saved.building.as_deref(), Some("ZH1_23"));
    assert_eq!(saved.audit.created_by.as_deref(), Some("Admin"));
    assert!(saved.audit.created_at.is_some());

    let loaded = repo.find_by_id(1_000_000_001).unwrap().unwrap();
    assert_eq!(loaded, saved);
    assert!(repo.find_by_id(7).unwrap().is_none());
}

#[test]
fn find_by_name_ignores_case() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteDepartmentRepository::try_new(&conn).unwrap();
    repo.save(&department(11, "Mathematics", "MATH_102")).unwrap();

    let found = repo.find_by_name_ignore_case("mATHEMATICS").unwrap().unwrap();
    assert_eq!(found.department_code, "MATH_102");
    assert!(repo.find_by_name_ignore_case("Physics").unwrap().is_none());
}

#[test]
fn save_with_existing_id_overwrites_and_keeps_creation_stamp() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteDepartmentRepository::try_new(&conn).unwrap();
    let mut original = department(21, "Accounting", "ACC_201");
    original.audit = Audit {
        created_at: Some(1_000),
        created_by: Some("Admin".to_string()),
        ..Audit::default()
    };
    repo.save(&original).unwrap();

    let mut changed = department(21, "Accounting", "ACC_202");
    changed.audit.updated_by = Some("Auditor".to_string());
    let saved = repo.save(&changed).unwrap();

    assert_eq!(saved.department_code, "ACC_202");
    assert_eq!(saved.audit.created_at, Some(1_000));
    assert_eq!(saved.audit.created_by.as_deref(), Some("Admin"));
    assert_eq!(saved.audit.updated_by.as_deref(), Some("Auditor"));
    assert!(saved.audit.updated_at.is_some());
    assert_eq!(repo.find_all().unwrap().len(), 1);
}

#[test]
fn store_rejects_duplicate_name_in_other_case() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteDepartmentRepository::try_new(&conn).unwrap();
    repo.save(&department(31, "Engineering", "ENG_101")).unwrap();

    let err = repo
        .save(&department(32, "ENGINEERING", "ENG_102"))
        .unwrap_err();
    assert!(err.is_unique_violation(), "unexpected error: {err}");
}

#[test]
fn save_without_id_is_rejected() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteDepartmentRepository::try_new(&conn).unwrap();

    let err = repo.save(&Department::new("Physics", "PHY_101")).unwrap_err();
    assert!(matches!(err, RepoError::MissingDepartmentId));
}

#[test]
fn delete_cascades_to_employees_and_ignores_missing_ids() {
    let conn = open_db_in_memory().unwrap();
    let departments = SqliteDepartmentRepository::try_new(&conn).unwrap();
    let employees = SqliteEmployeeRepository::try_new(&conn).unwrap();

    let hr = departments
        .save(&department(41, "Human Resources", "HR_301"))
        .unwrap();
    employees
        .save(&Employee {
            id: None,
            name: "Clara".to_string(),
            last_name: "White".to_string(),
            address: None,
            email: "clara@example.com".to_string(),
            phone_number: "423456789".to_string(),
            department: Some(hr),
            audit: Audit::default(),
        })
        .unwrap();

    departments.delete_by_id(41).unwrap();
    departments.delete_by_id(41).unwrap();

    assert!(departments.find_all().unwrap().is_empty());
    assert!(employees.find_all().unwrap().is_empty());
}

#[test]
fn find_all_orders_by_name() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteDepartmentRepository::try_new(&conn).unwrap();
    repo.save(&department(3, "engineering", "ENG")).unwrap();
    repo.save(&department(1, "Human Resources", "HR")).unwrap();
    repo.save(&department(2, "Accounting", "ACC")).unwrap();

    let names: Vec<_> = repo
        .find_all()
        .unwrap()
        .into_iter()
        .map(|department| department.name)
        .collect();
    assert_eq!(names, ["Accounting", "engineering", "Human Resources"]);
}

#[test]
fn repository_rejects_uninitialized_connection() {
    let conn = Connection::open_in_memory().unwrap();

    match SqliteDepartmentRepository::try_new(&conn) {
        Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version: 0,
        }) => assert_eq!(expected_version, latest_version()),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected uninitialized connection error"),
    }
}

#[test]
fn repository_rejects_connection_missing_required_column() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(
        "CREATE TABLE departments (
            id INTEGER PRIMARY KEY NOT NULL,
            name TEXT NOT NULL,
            department_code TEXT NOT NULL
        );",
    )
    .unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    let result = SqliteDepartmentRepository::try_new(&conn);
    assert!(matches!(
        result,
        Err(RepoError::MissingRequiredColumn {
            table: "departments",
            column: "description"
        })
    ));
}

#[test]
fn repository_rejects_connection_without_table() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    let result = SqliteDepartmentRepository::try_new(&conn);
    assert!(matches!(
        result,
        Err(RepoError::MissingRequiredTable("departments"))
    ));
}
