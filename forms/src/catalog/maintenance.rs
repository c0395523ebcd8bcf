use super::Module;
use crate::derive::Formula;
use crate::schema::{FieldSpec, FormSchema};

pub(super) fn module() -> Module {
    Module::new("maintenance", "Maintenance", "Maintenance Management")
        .form(tool_master())
        .form(maintenance_chart())
        .form(calibration_report())
        .form(rectification_memo())
}

fn tool_master() -> FormSchema {
    FormSchema::new("maintenance", "tool-master", "Tool Master", "New Tool")
        .description("Add a new tool or asset to the master list.")
        .auto_number("Asset Code")
        .field(
            FieldSpec::text("toolName", "Tool Name")
                .placeholder("e.g. Lathe Machine")
                .required("Tool name is required."),
        )
        .field(
            FieldSpec::text("location", "Location")
                .placeholder("e.g. Shop Floor 1")
                .required("Location is required."),
        )
        .field(
            FieldSpec::number("maintenanceInterval", "Maintenance Interval (Days)")
                .default_number(30.0)
                .min(1.0, Some("Interval must be at least 1 day.")),
        )
        .submit_label("Save Tool")
        .notify("Tool Saved")
}

fn maintenance_chart() -> FormSchema {
    FormSchema::new("maintenance", "maintenance-chart", "Maintenance Chart", "Tool Maintenance Chart")
        .description("Schedule a maintenance task for a tool.")
        .field(
            FieldSpec::text("toolRef", "Tool Ref")
                .placeholder("Select Tool")
                .required("Tool reference is required."),
        )
        .field(FieldSpec::date("scheduledDate", "Scheduled Date"))
        .field(FieldSpec::group(
            "tasks",
            "Task List",
            vec![
                FieldSpec::checkbox("greasing", "Greasing"),
                FieldSpec::checkbox("cleaning", "Cleaning"),
                FieldSpec::checkbox("inspection", "Inspection"),
            ],
        ))
        .submit_label("Save Schedule")
        .notify("Maintenance Scheduled")
}

fn calibration_report() -> FormSchema {
    FormSchema::new("maintenance", "calibration-report", "Calibration Report", "Tool Calibration Report")
        .description("Log the results of a tool calibration.")
        .field(
            FieldSpec::text("toolRef", "Tool Ref")
                .placeholder("Select Tool")
                .required("Tool reference is required."),
        )
        .field(FieldSpec::date("calibrationDate", "Calibration Date"))
        .field(FieldSpec::number("standardValue", "Standard Value"))
        .field(FieldSpec::number("actualValue", "Actual Value"))
        .field(FieldSpec::select("result", "Result", &[("Pass", "Pass"), ("Fail", "Fail")]))
        .derived("Deviation", Formula::difference("actualValue", "standardValue"))
        .submit_label("Save Report")
        .notify("Calibration Report Saved")
}

fn rectification_memo() -> FormSchema {
    FormSchema::new("maintenance", "rectification-memo", "Rectification Memo", "Tool Maintenance/Rectification Memo")
        .description("Log a repair or unscheduled maintenance job.")
        .auto_number("Job ID")
        .field(
            FieldSpec::text("toolRef", "Tool Ref")
                .placeholder("Select Tool")
                .required("Tool reference is required."),
        )
        .field(
            FieldSpec::text("technician", "Technician")
                .placeholder("Technician Name")
                .required("Technician name is required."),
        )
        .field(
            FieldSpec::textarea("issue", "Issue / Work Done")
                .placeholder("Describe the issue and the fix")
                .required("Issue description is required."),
        )
        .field(FieldSpec::text("sparesUsed", "Spares Used").placeholder("e.g. Bearing, Oil").optional())
        .field(FieldSpec::number("cost", "Cost").min(0.0, None).optional())
        .submit_label("Save Memo")
        .notify("Maintenance Memo Saved")
}
