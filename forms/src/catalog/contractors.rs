use super::Module;
use crate::derive::Formula;
use crate::schema::{FieldSpec, FormSchema};

/// Flat rates used for the payout preview on the salary sheet.
const DAILY_RATE: f64 = 500.0;
const OVERTIME_RATE: f64 = 100.0;

pub(super) fn module() -> Module {
    Module::new("contractors", "Contractors", "Contractors Employee Management")
        .form(employee_master())
        .form(salary_head())
        .form(salary_structure())
        .form(salary_sheet())
        .form(advance_memo())
        .form(voucher_payment())
}

fn employee_master() -> FormSchema {
    FormSchema::new("contractors", "employee-master", "Employee Master", "New Contractor Employee")
        .description("Register a new contract labor worker.")
        .auto_number("Worker ID")
        .field(
            FieldSpec::text("contractorFirm", "Contractor Firm")
                .placeholder("Contractor Firm Name")
                .required("Contractor firm name is required."),
        )
        .field(FieldSpec::text("workerName", "Worker Name").required("Worker name is required."))
        .field(FieldSpec::text("aadharNo", "Aadhar No").exact_len(12, Some("Aadhar number must be 12 digits.")))
        .field(
            FieldSpec::radio("skillLevel", "Skill Level", &[("Skilled", "Skilled"), ("Unskilled", "Unskilled")])
                .default_text("Unskilled"),
        )
        .submit_label("Save Worker")
        .notify("Contractor Employee Saved")
}

fn salary_head() -> FormSchema {
    FormSchema::new("contractors", "salary-head", "Salary Head", "Contractor Salary Head Master")
        .description("Define daily and overtime rates for contract roles.")
        .field(FieldSpec::text("role", "Role").placeholder("e.g. Helper, Welder").required("Role is required."))
        .field(FieldSpec::number("dailyRate", "Daily Rate").min(0.0, Some("Rate must be positive.")))
        .field(FieldSpec::number("overtimeRate", "Overtime Rate").min(0.0, Some("Rate must be positive.")))
        .submit_label("Save Rate")
        .notify("Contractor Salary Head Saved")
}

fn salary_structure() -> FormSchema {
    FormSchema::new("contractors", "salary-structure", "Salary Structure", "Contractor Salary Structure")
        .description("Map a worker to their role and pay rate.")
        .field(
            FieldSpec::text("workerName", "Worker Name")
                .placeholder("Select Worker")
                .required("Worker name is required."),
        )
        .field(FieldSpec::text("role", "Role").placeholder("Select Role").required("Role is required."))
        .field(FieldSpec::number("applicableDailyRate", "Applicable Daily Rate").min(0.0, None))
        .submit_label("Save Structure")
        .notify("Salary Structure Saved")
}

fn salary_sheet() -> FormSchema {
    FormSchema::new("contractors", "salary-sheet", "Salary Sheet", "Contractor Salary Sheet")
        .description("Calculate monthly payout for a contractor.")
        .field(FieldSpec::text("contractorName", "Contractor Name").placeholder("Select Contractor").non_empty())
        .field(FieldSpec::month("month", "Month"))
        .field(FieldSpec::text("workerName", "Worker Name").placeholder("Select Worker").non_empty())
        .field(FieldSpec::number("daysWorked", "Days Worked").min(0.0, None))
        .field(FieldSpec::number("overtimeHours", "Overtime Hours").min(0.0, None))
        .derived(
            "Total Payable",
            Formula::linear(&[("daysWorked", DAILY_RATE), ("overtimeHours", OVERTIME_RATE)]),
        )
        .submit_label("Process Sheet")
        .notify("Salary Sheet Processed")
        .keep_values()
}

fn advance_memo() -> FormSchema {
    FormSchema::new("contractors", "advance-memo", "Advance Memo", "Contractor Advance Memo")
        .description("Record an advance given to a contractor for their labor.")
        .field(
            FieldSpec::text("contractorName", "Contractor Name")
                .placeholder("Select Contractor")
                .required("Contractor name is required."),
        )
        .field(FieldSpec::date("date", "Date"))
        .field(FieldSpec::number("amount", "Amount").min(1.0, None))
        .field(FieldSpec::textarea("remarks", "Remarks").optional())
        .submit_label("Save Memo")
        .notify("Advance Memo Saved")
}

fn voucher_payment() -> FormSchema {
    FormSchema::new("contractors", "voucher-payment", "Voucher Payment", "New Contractor Payment")
        .description("Record a payment made to a contractor.")
        .auto_number("Voucher No")
        .field(
            FieldSpec::text("contractorName", "Contractor Name")
                .placeholder("Contractor Name")
                .required("Contractor is required."),
        )
        .field(
            FieldSpec::text("salarySheetRef", "Salary Sheet Ref")
                .placeholder("Sheet ID")
                .required("Salary Sheet Ref is required."),
        )
        .field(FieldSpec::number("netAmountPaid", "Net Amount Paid").min(0.01, None))
        .field(FieldSpec::number("tdsDeducted", "TDS Deducted").min(0.0, None))
        .submit_label("Save Payment")
        .notify("Contractor Payment Saved")
}
