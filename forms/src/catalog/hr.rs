use super::Module;
use crate::derive::Formula;
use crate::schema::{FieldSpec, FormSchema, Refinement};

/// Gross pay shown on the salary sheet until payroll rules exist.
const SHEET_GROSS: f64 = 50_000.0;
const SHEET_DEDUCTIONS: f64 = 5_000.0;

pub(super) fn module() -> Module {
    Module::new("hr", "HR", "HR Management")
        .form(employee_master())
        .form(salary_head())
        .form(salary_structure())
        .form(salary_sheet())
        .form(advance_memo())
}

fn employee_master() -> FormSchema {
    FormSchema::new("hr", "employee-master", "Employee Master", "New Employee")
        .description("Add a new staff member to the system.")
        .field(FieldSpec::text("empCode", "Emp Code").required("Employee code is required."))
        .field(FieldSpec::text("name", "Name").required("Employee name is required."))
        .field(FieldSpec::text("designation", "Designation").required("Designation is required."))
        .field(FieldSpec::text("mobile", "Mobile").min_len(10, Some("Mobile number must be at least 10 digits.")))
        .field(FieldSpec::date("joiningDate", "Joining Date").required_message("Joining date is required."))
        .field(FieldSpec::number("basicSalary", "Basic Salary").min(0.0, Some("Basic salary must be positive.")))
        .field(
            FieldSpec::text("bankDetails", "Bank Details")
                .placeholder("Bank Name, Account No, IFSC")
                .required("Bank details are required."),
        )
        .submit_label("Save Employee")
        .notify("Employee Saved")
}

fn salary_head() -> FormSchema {
    FormSchema::new("hr", "salary-head", "Salary Head", "Salary Head Master")
        .description("Define salary components like HRA, PF, etc.")
        .field(
            FieldSpec::text("headName", "Head Name")
                .placeholder("e.g. HRA, PF")
                .required("Head name is required."),
        )
        .field(FieldSpec::select("type", "Type", &[("Earning", "Earning"), ("Deduction", "Deduction")]))
        .submit_label("Save Head")
        .notify("Salary Head Saved")
}

fn salary_structure() -> FormSchema {
    FormSchema::new("hr", "salary-structure", "Salary Structure", "Employee Salary Structure")
        .description("Assign pay structure to an employee.")
        .field(
            FieldSpec::text("empName", "Employee Name")
                .placeholder("Select Employee")
                .required("Employee name is required."),
        )
        .field(FieldSpec::date("effectiveDate", "Effective Date").required_message("Effective date is required."))
        .field(FieldSpec::number("basic", "Basic").min(0.0, None))
        .field(FieldSpec::number("hra", "HRA").min(0.0, None))
        .field(FieldSpec::number("da", "DA").min(0.0, None))
        .field(FieldSpec::number("pfPercent", "PF %").min(0.0, None).max(100.0, None))
        .submit_label("Save Structure")
        .notify("Salary Structure Saved")
}

fn salary_sheet() -> FormSchema {
    FormSchema::new("hr", "salary-sheet", "Salary Sheet", "Employee Salary Sheet")
        .description("Process monthly payroll.")
        .field(FieldSpec::month("month", "Month"))
        .field(
            FieldSpec::number("totalDays", "Total Days")
                .default_number(30.0)
                .min(1.0, None)
                .max(31.0, None),
        )
        .field(FieldSpec::number("presentDays", "Present Days").default_number(30.0).min(0.0, None))
        .refine(Refinement::LessOrEqual {
            field: "presentDays".to_owned(),
            limit: "totalDays".to_owned(),
            message: "Present days cannot be more than total days".to_owned(),
        })
        .derived("Calculated Gross", Formula::constant(SHEET_GROSS))
        .derived("Deductions", Formula::constant(SHEET_DEDUCTIONS))
        .derived("Net Pay", Formula::constant(SHEET_GROSS - SHEET_DEDUCTIONS))
        .submit_label("Process Payroll")
        .notify("Salary Sheet Processed")
        .keep_values()
}

fn advance_memo() -> FormSchema {
    FormSchema::new("hr", "advance-memo", "Advance Memo", "Employee Advance Memo")
        .description("Record a loan or advance given to an employee.")
        .field(
            FieldSpec::text("empName", "Employee Name")
                .placeholder("Select Employee")
                .required("Employee name is required."),
        )
        .field(FieldSpec::date("date", "Date"))
        .field(FieldSpec::number("amount", "Amount").min(1.0, None))
        .field(FieldSpec::text("purpose", "Purpose").required("Purpose is required."))
        .field(FieldSpec::month("recoveryMonth", "Recovery Start Month"))
        .submit_label("Save Memo")
        .notify("Advance Memo Saved")
}
