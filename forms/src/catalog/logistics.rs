use super::Module;
use crate::derive::Formula;
use crate::schema::{FieldSpec, FormSchema};

pub(super) fn module() -> Module {
    Module::new("logistics", "Logistics", "Logistics Management")
        .form(transport_master())
        .form(transport_order())
        .form(challan_out())
        .form(freight_billbook())
}

fn transport_master() -> FormSchema {
    FormSchema::new("logistics", "transport-master", "Transport Master", "New Transporter")
        .description("Add a new transporter to the master list.")
        .field(FieldSpec::text("transporterName", "Transporter Name").required("Transporter name is required."))
        .field(FieldSpec::text("ownerName", "Owner Name").required("Owner name is required."))
        .field(FieldSpec::text("mobile", "Mobile").min_len(10, Some("Mobile number must be at least 10 digits.")))
        .field(FieldSpec::text("gstin", "GSTIN").exact_len(15, Some("GSTIN must be 15 characters.")))
        .submit_label("Save Transporter")
        .notify("Transporter Saved")
}

fn transport_order() -> FormSchema {
    FormSchema::new("logistics", "transport-order", "Transport Order", "New Transport Order")
        .description("Book a truck for a shipment.")
        .auto_number("Order No")
        .field(
            FieldSpec::text("transporter", "Transporter")
                .placeholder("Select Transporter")
                .required("Transporter is required."),
        )
        .field(FieldSpec::date("pickupDate", "Pickup Date"))
        .field(FieldSpec::text("destination", "Destination").required("Destination is required."))
        .field(
            FieldSpec::text("vehicleType", "Vehicle Type")
                .placeholder("e.g. 20ft Container")
                .required("Vehicle type is required."),
        )
        .submit_label("Create Order")
        .notify("Transport Order Created")
}

fn challan_out() -> FormSchema {
    FormSchema::new("logistics", "challan-out", "Challan Out", "Challan Out")
        .description("Create a delivery document.")
        .auto_number("Challan No")
        .field(
            FieldSpec::text("transportOrderRef", "Transport Order Ref")
                .placeholder("TO-001")
                .required("Transport order reference is required."),
        )
        .field(
            FieldSpec::line_items(
                "items",
                "Item List",
                "Add Item",
                vec![
                    FieldSpec::text("itemName", "Item Name").required("Item name is required."),
                    FieldSpec::number("quantity", "Quantity")
                        .default_number(1.0)
                        .min(1.0, Some("Quantity must be at least 1.")),
                ],
            )
            .min_rows_message("Please add at least one item."),
        )
        .submit_label("Create Challan")
        .notify("Challan Created")
}

fn freight_billbook() -> FormSchema {
    FormSchema::new("logistics", "freight-billbook", "Freight Billbook", "Freight Billbook")
        .description("Log an invoice from a transporter.")
        .auto_number("Bill No")
        .field(FieldSpec::date("date", "Date"))
        .field(FieldSpec::text("lrNo", "LR No").required("LR No is required."))
        .field(FieldSpec::number("freightAmount", "Freight Amount").min(0.0, None))
        .field(FieldSpec::number("gst", "GST").min(0.0, None))
        .derived("Total Payable", Formula::sum(&["freightAmount", "gst"]))
        .submit_label("Log Bill")
        .notify("Freight Bill Logged")
}
