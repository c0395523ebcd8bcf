use super::Module;
use crate::schema::{FieldSpec, FormSchema};

pub(super) fn module() -> Module {
    Module::new("quality", "Quality", "Quality Management")
        .form(iqc())
        .form(mts())
        .form(pqc())
        .form(pdi())
        .form(qrd())
}

fn iqc() -> FormSchema {
    FormSchema::new("quality", "iqc", "Incoming (IQC)", "Incoming Quality Control")
        .description("Perform quality check on incoming materials.")
        .field(FieldSpec::text("grnRef", "GRN Ref").placeholder("GRN-001").required("GRN Reference is required."))
        .field(FieldSpec::text("item", "Item").placeholder("Item Name").required("Item name is required."))
        .field(
            FieldSpec::number("sampleQty", "Sample Qty")
                .default_number(1.0)
                .min(1.0, Some("Sample quantity must be at least 1.")),
        )
        .field(FieldSpec::radio("visualCheck", "Visual Check", &[("Pass", "Pass"), ("Fail", "Fail")]))
        .field(
            FieldSpec::text("dimensionCheck", "Dimension Check")
                .placeholder("e.g. 5.01mm, 10.2mm")
                .required("Dimension check details are required."),
        )
        .submit_label("Save IQC Report")
        .notify("IQC Report Saved")
}

fn mts() -> FormSchema {
    FormSchema::new("quality", "mts", "Transfer (MTS)", "Material Transfer Slip QC")
        .description("Check materials during inter-departmental movement.")
        .field(FieldSpec::text("mtaRef", "MTA Ref").placeholder("MTA-001").required("MTA Ref is required."))
        .field(FieldSpec::text("item", "Item").placeholder("Item Name").required("Item is required."))
        .field(
            FieldSpec::number("qtyChecked", "Qty Checked")
                .default_number(1.0)
                .min(1.0, Some("Quantity must be at least 1.")),
        )
        .field(FieldSpec::select("status", "Status", &[("OK", "OK"), ("Damaged", "Damaged")]))
        .submit_label("Save MTS Report")
        .notify("MTS Saved")
}

fn pqc() -> FormSchema {
    FormSchema::new("quality", "pqc", "Process (PQC)", "Process Quality Control")
        .description("Perform in-process quality checks on the production line.")
        .field(
            FieldSpec::text("routeCardRef", "Route Card Ref")
                .placeholder("RC-001")
                .required("Route Card Ref is required."),
        )
        .field(
            FieldSpec::text("stageName", "Stage Name")
                .placeholder("e.g. Assembly")
                .required("Stage Name is required."),
        )
        .field(FieldSpec::text("operator", "Operator").placeholder("Operator Name").required("Operator is required."))
        .field(
            FieldSpec::textarea("observations", "Observations")
                .placeholder("Note any quality observations...")
                .required("Observations are required."),
        )
        .submit_label("Save PQC Report")
        .notify("PQC Report Saved")
}

fn pdi() -> FormSchema {
    FormSchema::new("quality", "pdi", "Pre-Dispatch (PDI)", "Pre-Dispatch Inspection (PDI)")
        .description("Conduct a final audit before dispatching goods.")
        .field(FieldSpec::text("soRef", "SO Ref").placeholder("SO-001").required("SO Ref is required."))
        .field(FieldSpec::text("boxNo", "Box No").placeholder("Box-01").required("Box No is required."))
        .field(FieldSpec::select(
            "packagingCondition",
            "Packaging Condition",
            &[("Good", "Good"), ("Fair", "Fair"), ("Poor", "Poor")],
        ))
        .field(FieldSpec::select(
            "labelAccuracy",
            "Label Accuracy",
            &[("Correct", "Correct"), ("Incorrect", "Incorrect")],
        ))
        .submit_label("Save PDI Report")
        .notify("PDI Report Saved")
}

fn qrd() -> FormSchema {
    FormSchema::new("quality", "qrd", "Rejection (QRD)", "Quality Rejection Decision")
        .description("Decide the course of action for rejected materials.")
        .field(
            FieldSpec::text("rejectionId", "Rejection ID")
                .placeholder("e.g. REJ-001")
                .required("Rejection ID is required."),
        )
        .field(FieldSpec::text("item", "Item").placeholder("Item Name").required("Item is required."))
        .field(
            FieldSpec::number("qty", "Quantity")
                .default_number(1.0)
                .min(1.0, Some("Quantity must be at least 1.")),
        )
        .field(FieldSpec::select(
            "action",
            "Action",
            &[("Scrap", "Scrap"), ("Return", "Return to Vendor"), ("Rework", "Rework"), ("Downgrade", "Downgrade")],
        ))
        .submit_label("Save Decision")
        .notify("QRD Saved")
}
