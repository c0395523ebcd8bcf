//! Shop-floor documents: BOM, routecards, material movement, job work.

use super::Module;
use crate::derive::Formula;
use crate::schema::{FieldSpec, FormSchema, Refinement};

pub(super) fn module() -> Module {
    Module::new("production", "Production", "Production Management")
        .form(bom())
        .form(routecard())
        .form(material_issue())
        .form(mta())
        .form(production_report())
        .form(job_order())
        .form(challan_out())
        .form(external_grn())
        .form(job_bill())
        .form(routecard_closure())
}

fn bom() -> FormSchema {
    FormSchema::new("production", "bom", "BOM", "Production Flow Details (BOM)")
        .description("Define a process with its required raw materials (Bill of Materials).")
        .field(
            FieldSpec::text("finishedGood", "Finished Good")
                .placeholder("e.g. Assembled Widget")
                .required("Finished good name is required."),
        )
        .field(
            FieldSpec::text("processName", "Process Name")
                .placeholder("e.g. Cutting")
                .required("Process name is required."),
        )
        .field(
            FieldSpec::text("machine", "Machine")
                .placeholder("e.g. CNC Machine")
                .required("Machine is required."),
        )
        .field(
            FieldSpec::number("outputQty", "Output Quantity")
                .placeholder("1")
                .default_number(1.0)
                .min(1.0, Some("Output quantity must be at least 1.")),
        )
        .field(
            FieldSpec::line_items(
                "rawMaterials",
                "Raw Materials",
                "Add Raw Material",
                vec![
                    FieldSpec::text("itemName", "Item Name")
                        .placeholder("Component or Material Name")
                        .required("Item name is required."),
                    FieldSpec::number("quantity", "Quantity")
                        .placeholder("1")
                        .default_number(1.0)
                        .min(1.0, Some("Quantity must be at least 1.")),
                ],
            )
            .min_rows_message("Please add at least one raw material."),
        )
        .submit_label("Save Production Flow")
        .notify_with("Production Flow Saved", "The new production flow has been successfully saved.")
}

fn routecard() -> FormSchema {
    FormSchema::new("production", "routecard", "Routecard", "New Production Routecard")
        .description("Track the progress of a production batch.")
        .auto_number("Route Card No")
        .field(FieldSpec::text("batchNo", "Batch No").placeholder("Batch-001").non_empty())
        .field(FieldSpec::text("product", "Product").placeholder("Product Name").non_empty())
        .field(FieldSpec::number("planQty", "Plan Quantity").default_number(1.0).min(1.0, None))
        .field(FieldSpec::date("startDate", "Start Date"))
        .field(FieldSpec::date("endDate", "End Date"))
        .refine(Refinement::DateOrder {
            start: "startDate".to_owned(),
            end: "endDate".to_owned(),
            message: "End date cannot be before start date.".to_owned(),
        })
        .submit_label("Create Routecard")
        .notify("Routecard Created")
}

fn material_issue() -> FormSchema {
    FormSchema::new("production", "material-issue", "Material Issue", "Material Issue")
        .description("Issue materials from inventory to the production floor.")
        .auto_number("Issue ID")
        .field(FieldSpec::text("routeCardRef", "Route Card Ref").placeholder("RC-001").non_empty())
        .field(FieldSpec::text("item", "Item").placeholder("Item Name").non_empty())
        .field(FieldSpec::number("qtyRequested", "Qty Requested").default_number(1.0).min(1.0, None))
        .field(FieldSpec::number("qtyIssued", "Qty Issued").default_number(1.0).min(1.0, None))
        .submit_label("Issue Material")
        .notify("Material Issued")
}

fn mta() -> FormSchema {
    FormSchema::new("production", "mta", "MTA", "Material Transfer Acknowledgement")
        .description("Record inter-departmental material movement.")
        .auto_number("MTA No")
        .field(FieldSpec::text("fromDept", "From Dept").placeholder("e.g. Stores").non_empty())
        .field(FieldSpec::text("toDept", "To Dept").placeholder("e.g. Assembly").non_empty())
        .field(FieldSpec::text("item", "Item").placeholder("Item Name").non_empty())
        .field(FieldSpec::number("qty", "Quantity").default_number(1.0).min(1.0, None))
        .field(FieldSpec::text("receivedBy", "Received By").placeholder("Employee Name").non_empty())
        .submit_label("Acknowledge Transfer")
        .notify("MTA Created")
}

fn production_report() -> FormSchema {
    FormSchema::new("production", "prod-report", "Prod. Report", "Daily Production Report")
        .description("Log daily output and rejections.")
        .field(FieldSpec::date("date", "Date"))
        .field(FieldSpec::text("shift", "Shift").placeholder("e.g. A").default_text("A").non_empty())
        .field(FieldSpec::text("machineNo", "Machine No").placeholder("Machine ID").non_empty())
        .field(FieldSpec::text("operator", "Operator").placeholder("Operator Name").non_empty())
        .field(FieldSpec::number("productionQty", "Production Qty").min(0.0, None))
        .field(FieldSpec::number("rejectionQty", "Rejection Qty").min(0.0, None))
        .submit_label("Save Report")
        .notify("Production Logged")
}

fn job_order() -> FormSchema {
    FormSchema::new("production", "job-order", "Job Order", "External Job Order")
        .description("Outsource work to an external contractor.")
        .auto_number("Job Order No")
        .field(FieldSpec::text("contractor", "Contractor").placeholder("Contractor Name").non_empty())
        .field(FieldSpec::text("itemSent", "Item Sent").placeholder("Item Name").non_empty())
        .field(FieldSpec::text("processRequired", "Process Required").placeholder("e.g. Plating").non_empty())
        .field(FieldSpec::number("rate", "Rate").min(0.0, None))
        .submit_label("Create Job Order")
        .notify("Job Order Created")
}

fn challan_out() -> FormSchema {
    FormSchema::new("production", "challan-out", "Challan Out", "Challan Out")
        .description("Send materials out for external job work.")
        .auto_number("Challan No")
        .field(FieldSpec::text("jobOrderRef", "Job Order Ref").placeholder("JO-001").non_empty())
        .field(FieldSpec::text("item", "Item").placeholder("Item Name").non_empty())
        .field(FieldSpec::number("qty", "Quantity").default_number(1.0).min(1.0, None))
        .field(FieldSpec::text("vehicleNo", "Vehicle No").placeholder("Vehicle Number").non_empty())
        .submit_label("Create Challan")
        .notify("Challan Created")
}

fn external_grn() -> FormSchema {
    FormSchema::new("production", "external-grn", "External GRN", "External GRN & IQC")
        .description("Receive and inspect goods from external job work.")
        .auto_number("GRN No")
        .field(FieldSpec::text("challanRef", "Challan Ref").placeholder("CHN-001").non_empty())
        .field(FieldSpec::number("receivedQty", "Received Qty").min(0.0, None))
        .field(FieldSpec::number("passedQty", "Passed Qty").min(0.0, None))
        .field(FieldSpec::number("rejectedQty", "Rejected Qty").min(0.0, None))
        .refine(Refinement::LessOrEqual {
            field: "passedQty".to_owned(),
            limit: "receivedQty".to_owned(),
            message: "Passed quantity cannot exceed received quantity.".to_owned(),
        })
        .submit_label("Receive Goods")
        .notify("External GRN Created")
}

fn job_bill() -> FormSchema {
    FormSchema::new("production", "job-bill", "Job Bill", "Job Work Billbook")
        .description("Log a bill received from a contractor.")
        .auto_number("Bill No")
        .field(FieldSpec::text("jobOrderRef", "Job Order Ref").placeholder("JO-001").non_empty())
        .field(FieldSpec::number("laborCharges", "Labor Charges").min(0.0, None))
        .field(FieldSpec::number("gst", "GST").min(0.0, None))
        .derived("Total", Formula::sum(&["laborCharges", "gst"]))
        .submit_label("Log Bill")
        .notify("Bill Logged")
}

fn routecard_closure() -> FormSchema {
    FormSchema::new("production", "routecard-closure", "Closure", "Routecard Closure")
        .description("Finish a production batch and record final quantities.")
        .field(FieldSpec::text("routeCardRef", "Route Card Ref").placeholder("RC-001").non_empty())
        .field(FieldSpec::number("finalFgQty", "Final FG Qty").min(0.0, None))
        .field(FieldSpec::number("scrapGenerated", "Scrap Generated").min(0.0, None))
        .field(FieldSpec::date("closureDate", "Closure Date"))
        .submit_label("Close Routecard")
        .notify("Routecard Closed")
}
