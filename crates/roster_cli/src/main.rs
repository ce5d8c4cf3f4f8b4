//! Roster smoke entry point.
//!
//! `roster [config.json]` opens the configured store, optionally seeds the
//! demo roster, and prints a JSON snapshot of both services' listings.

use roster_core::db::{open_db, open_db_in_memory};
use roster_core::{
    core_version, init_logging, seed_demo_data, CoreConfig, DepartmentService, EmployeeService,
    RandomDepartmentIds, SqliteDepartmentRepository, SqliteEmployeeRepository,
};
use serde_json::json;
use std::error::Error;
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("roster: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let config = match std::env::args().nth(1) {
        Some(path) => CoreConfig::load(path)?,
        None => CoreConfig::default(),
    };

    if let Some(logging) = &config.logging {
        init_logging(logging)?;
    }

    let conn = match &config.db_path {
        Some(path) => open_db(path)?,
        None => open_db_in_memory()?,
    };

    if config.seed_demo_data {
        let summary = seed_demo_data(&conn, &RandomDepartmentIds)?;
        log::info!(
            "event=cli_seed module=cli status=ok departments={} employees={}",
            summary.departments,
            summary.employees
        );
    }

    let departments = DepartmentService::new(SqliteDepartmentRepository::try_new(&conn)?)
        .with_validation(config.validation.clone());
    let employees = EmployeeService::new(
        SqliteEmployeeRepository::try_new(&conn)?,
        SqliteDepartmentRepository::try_new(&conn)?,
    )
    .with_validation(config.validation.clone());

    let snapshot = json!({
        "version": core_version(),
        "departments": departments.list_all()?,
        "employees": employees.list_all()?,
    });
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}
