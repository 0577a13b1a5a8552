//! Console menu loop.
//!
//! # Responsibility
//! - Dispatch bounded menu choices onto use-case service calls.
//! - Translate service errors into console messages; the loop itself only
//!   fails on I/O errors.
//!
//! # Invariants
//! - Invalid input never mutates the roster.
//! - The loop terminates only on the exit choice or end of input.

use staffdesk_core::{EmployeeDraft, EmployeeRepository, EmployeeService, EmployeeUpdate};
use std::io::{self, BufRead, Write};

/// Runs the menu loop until the exit choice or end of input.
///
/// Generic over reader/writer so tests can drive the loop with in-memory
/// buffers.
pub fn run<S, R, W>(
    service: &mut EmployeeService<S>,
    input: &mut R,
    output: &mut W,
) -> io::Result<()>
where
    S: EmployeeRepository,
    R: BufRead,
    W: Write,
{
    writeln!(output, "Welcome to the Employee Management System!")?;

    loop {
        writeln!(output)?;
        writeln!(output, "Choose an action:")?;
        writeln!(output, "1. Add Employee")?;
        writeln!(output, "2. Display All Employees")?;
        writeln!(output, "3. Exit")?;
        writeln!(output, "4. Edit Employee")?;

        let Some(choice) = prompt(input, output, "Enter your choice: ")? else {
            break;
        };

        match choice.trim() {
            "1" => add_employee(service, input, output)?,
            "2" => display_employees(service, output)?,
            "3" => {
                writeln!(output, "Exiting the system. Goodbye!")?;
                break;
            }
            "4" => edit_employee(service, input, output)?,
            other => {
                log::debug!("event=menu_choice_rejected module=cli choice={other}");
                writeln!(output, "Invalid choice. Please try again.")?;
            }
        }
    }

    Ok(())
}

fn add_employee<S, R, W>(
    service: &mut EmployeeService<S>,
    input: &mut R,
    output: &mut W,
) -> io::Result<()>
where
    S: EmployeeRepository,
    R: BufRead,
    W: Write,
{
    writeln!(output)?;
    writeln!(output, "Enter Employee Details:")?;

    let Some(name) = prompt(input, output, "Name: ")? else {
        return Ok(());
    };
    let Some(role) = prompt(input, output, "Role (Manager/Developer/HR): ")? else {
        return Ok(());
    };
    let Some(salary_text) = prompt(input, output, "Salary: ")? else {
        return Ok(());
    };
    let salary = match salary_text.trim().parse::<f64>() {
        Ok(value) => value,
        Err(_) => {
            writeln!(
                output,
                "Invalid salary `{}`; employee not added.",
                salary_text.trim()
            )?;
            return Ok(());
        }
    };
    let Some(department) = prompt(input, output, "Department: ")? else {
        return Ok(());
    };

    match service.add_employee(EmployeeDraft {
        name,
        role,
        salary,
        department,
    }) {
        Ok(_) => writeln!(output, "Employee added successfully!")?,
        Err(err) => writeln!(output, "Error: {err}")?,
    }

    Ok(())
}

fn display_employees<S, W>(service: &EmployeeService<S>, output: &mut W) -> io::Result<()>
where
    S: EmployeeRepository,
    W: Write,
{
    writeln!(output)?;
    writeln!(output, "All Employees in the Database:")?;
    for employee in service.list_employees() {
        writeln!(output, "{}", employee.detail_block())?;
    }
    Ok(())
}

fn edit_employee<S, R, W>(
    service: &mut EmployeeService<S>,
    input: &mut R,
    output: &mut W,
) -> io::Result<()>
where
    S: EmployeeRepository,
    R: BufRead,
    W: Write,
{
    writeln!(output)?;
    writeln!(output, "Edit Employee Details:")?;
    writeln!(output, "Select an Employee to Edit:")?;
    for (position, employee) in service.list_employees().iter().enumerate() {
        writeln!(output, "{}. {}", position + 1, employee.name)?;
    }

    let Some(selection) = prompt(input, output, "Enter the Employee number: ")? else {
        return Ok(());
    };
    // Selections are 1-based on the console.
    let index = match selection.trim().parse::<usize>() {
        Ok(number) if number >= 1 => number - 1,
        _ => {
            writeln!(output, "Invalid employee selection.")?;
            return Ok(());
        }
    };
    let Some(current) = service.get_employee(index) else {
        writeln!(output, "Invalid employee selection.")?;
        return Ok(());
    };

    writeln!(output, "Enter new details (leave blank to keep original):")?;

    let Some(name) = prompt(input, output, &format!("Name ({}): ", current.name))? else {
        return Ok(());
    };
    let Some(role) = prompt(input, output, &format!("Role ({}): ", current.role))? else {
        return Ok(());
    };
    let Some(salary_text) = prompt(input, output, &format!("Salary ({}): ", current.salary))?
    else {
        return Ok(());
    };
    let salary = if salary_text.trim().is_empty() {
        None
    } else {
        match salary_text.trim().parse::<f64>() {
            Ok(value) => Some(value),
            Err(_) => {
                writeln!(
                    output,
                    "Invalid salary `{}`; employee not updated.",
                    salary_text.trim()
                )?;
                return Ok(());
            }
        }
    };
    let Some(department) = prompt(
        input,
        output,
        &format!("Department ({}): ", current.department),
    )?
    else {
        return Ok(());
    };

    let update = EmployeeUpdate {
        name: non_blank(name),
        role: non_blank(role),
        salary,
        department: non_blank(department),
    };

    match service.edit_employee(index, update) {
        Ok(_) => writeln!(output, "Employee details updated successfully!")?,
        Err(err) => writeln!(output, "Error: {err}")?,
    }

    Ok(())
}

/// Writes a prompt and reads one line. Returns `None` at end of input.
fn prompt<R, W>(input: &mut R, output: &mut W, label: &str) -> io::Result<Option<String>>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{label}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(Some(line))
}

fn non_blank(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::run;
    use staffdesk_core::{EmployeeService, InMemoryEmployeeRepository, Role};
    use std::io::Cursor;

    fn run_script(
        service: &mut EmployeeService<InMemoryEmployeeRepository>,
        script: &str,
    ) -> String {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();
        run(service, &mut input, &mut output).expect("in-memory I/O cannot fail");
        String::from_utf8(output).expect("console output is UTF-8")
    }

    fn fresh_service() -> EmployeeService<InMemoryEmployeeRepository> {
        EmployeeService::new(InMemoryEmployeeRepository::new())
    }

    #[test]
    fn exit_choice_prints_goodbye() {
        let mut service = fresh_service();
        let output = run_script(&mut service, "3\n");

        assert!(output.contains("Welcome to the Employee Management System!"));
        assert!(output.contains("Exiting the system. Goodbye!"));
    }

    #[test]
    fn end_of_input_terminates_the_loop() {
        let mut service = fresh_service();
        let output = run_script(&mut service, "");

        assert!(output.contains("Enter your choice: "));
    }

    #[test]
    fn invalid_choice_keeps_the_loop_alive() {
        let mut service = fresh_service();
        let output = run_script(&mut service, "9\n3\n");

        assert!(output.contains("Invalid choice. Please try again."));
        assert!(output.contains("Exiting the system. Goodbye!"));
    }

    #[test]
    fn add_three_employees_then_display_lists_them_in_order() {
        let mut service = fresh_service();
        let script = "1\nAlice\nManager\n1000\nEng\n\
                      1\nBob\ndeveloper\n800\nEng\n\
                      1\nCarol\nHR\n900\nPeople\n\
                      2\n3\n";
        let output = run_script(&mut service, script);

        assert_eq!(output.matches("Employee added successfully!").count(), 3);
        assert!(output.contains("All Employees in the Database:"));

        let roster = service.list_employees();
        assert_eq!(roster.len(), 3);
        assert_eq!(roster[0].name, "Alice");
        assert_eq!(roster[0].role, Role::Manager);
        assert_eq!(roster[1].name, "Bob");
        assert_eq!(roster[1].role, Role::Developer);
        assert_eq!(roster[2].name, "Carol");
        assert_eq!(roster[2].role, Role::Hr);

        let alice_block = output.find("Employee Name  : Alice").expect("Alice listed");
        let bob_block = output.find("Employee Name  : Bob").expect("Bob listed");
        let carol_block = output.find("Employee Name  : Carol").expect("Carol listed");
        assert!(alice_block < bob_block && bob_block < carol_block);
    }

    #[test]
    fn display_with_empty_roster_prints_no_blocks() {
        let mut service = fresh_service();
        let output = run_script(&mut service, "2\n3\n");

        assert!(output.contains("All Employees in the Database:"));
        assert!(!output.contains("Employee Name"));
    }

    #[test]
    fn invalid_role_reports_error_and_adds_nothing() {
        let mut service = fresh_service();
        let output = run_script(&mut service, "1\nBob\nIntern\n500\nOps\n3\n");

        assert!(output.contains("Error: invalid role `Intern`"));
        assert!(!output.contains("Employee added successfully!"));
        assert_eq!(service.employee_count(), 0);
    }

    #[test]
    fn malformed_salary_on_add_is_recoverable() {
        let mut service = fresh_service();
        let output = run_script(&mut service, "1\nBob\nDeveloper\nlots\n3\n");

        assert!(output.contains("Invalid salary `lots`; employee not added."));
        assert!(output.contains("Exiting the system. Goodbye!"));
        assert_eq!(service.employee_count(), 0);
    }

    #[test]
    fn edit_with_blank_fields_keeps_original_values() {
        let mut service = fresh_service();
        let script = "1\nAlice\nManager\n1000\nEng\n\
                      4\n1\n\n\n2000\n\n\
                      3\n";
        let output = run_script(&mut service, script);

        assert!(output.contains("Name (Alice): "));
        assert!(output.contains("Role (Manager): "));
        assert!(output.contains("Salary (1000): "));
        assert!(output.contains("Department (Eng): "));
        assert!(output.contains("Employee details updated successfully!"));

        let edited = service.get_employee(0).expect("record still stored");
        assert_eq!(edited.name, "Alice");
        assert_eq!(edited.role, Role::Manager);
        assert_eq!(edited.salary, 2000.0);
        assert_eq!(edited.department, "Eng");
    }

    #[test]
    fn edit_lists_records_with_one_based_indices() {
        let mut service = fresh_service();
        let script = "1\nAlice\nManager\n1000\nEng\n\
                      1\nBob\nDeveloper\n800\nEng\n\
                      4\n2\n\n\n\n\n\
                      3\n";
        let output = run_script(&mut service, script);

        assert!(output.contains("1. Alice"));
        assert!(output.contains("2. Bob"));
        assert!(output.contains("Name (Bob): "));
    }

    #[test]
    fn out_of_range_selection_is_rejected_without_mutation() {
        let mut service = fresh_service();
        let script = "1\nAlice\nManager\n1000\nEng\n4\n7\n3\n";
        let output = run_script(&mut service, script);

        assert!(output.contains("Invalid employee selection."));
        let roster = service.list_employees();
        assert_eq!(roster.len(), 1);
        assert_eq!(roster[0].salary, 1000.0);
    }

    #[test]
    fn non_numeric_selection_is_rejected() {
        let mut service = fresh_service();
        let output = run_script(&mut service, "4\nfirst\n3\n");

        assert!(output.contains("Invalid employee selection."));
    }
}
