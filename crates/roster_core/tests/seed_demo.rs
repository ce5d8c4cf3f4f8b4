use roster_core::db::open_db_in_memory;
use roster_core::{
    seed_demo_data, DepartmentRepository, EmployeeRepository, SeedSummary,
    SequentialDepartmentIds, SqliteDepartmentRepository, SqliteEmployeeRepository,
};

#[test]
fn seeds_two_departments_and_five_employees() {
    let conn = open_db_in_memory().unwrap();

    let summary = seed_demo_data(&conn, &SequentialDepartmentIds::starting_at(1)).unwrap();
    assert_eq!(
        summary,
        SeedSummary {
            departments: 2,
            employees: 5
        }
    );

    let departments = SqliteDepartmentRepository::try_new(&conn).unwrap();
    let employees = SqliteEmployeeRepository::try_new(&conn).unwrap();
    let engineering = departments
        .find_by_name_ignore_case("engineering")
        .unwrap()
        .unwrap();
    assert_eq!(engineering.department_code, "ALG_101");
    assert_eq!(engineering.audit.created_by.as_deref(), Some("Admin"));

    assert_eq!(employees.find_all().unwrap().len(), 5);
    assert_eq!(
        employees
            .find_by_department_id(engineering.id.unwrap())
            .unwrap()
            .len(),
        3
    );
}

#[test]
fn reseeding_replaces_existing_rows() {
    let conn = open_db_in_memory().unwrap();
    seed_demo_data(&conn, &SequentialDepartmentIds::starting_at(1)).unwrap();

    seed_demo_data(&conn, &SequentialDepartmentIds::starting_at(50)).unwrap();

    let departments = SqliteDepartmentRepository::try_new(&conn).unwrap();
    let employees = SqliteEmployeeRepository::try_new(&conn).unwrap();
    let ids: Vec<_> = departments
        .find_all()
        .unwrap()
        .into_iter()
        .filter_map(|department| department.id)
        .collect();
    assert_eq!(ids, [50, 51]);
    assert_eq!(employees.find_all().unwrap().len(), 5);
}
