use super::Module;
use crate::derive::Formula;
use crate::schema::{FieldSpec, FormSchema, Refinement};

pub(super) fn module() -> Module {
    Module::new("purchase", "Purchase", "Purchase Management")
        .form(indent())
        .form(goods_receipt())
}

fn indent() -> FormSchema {
    FormSchema::new("purchase", "indent", "Material Indent", "New Material Indent")
        .description("Create an internal request for materials.")
        .auto_number("Indent No")
        .field(
            FieldSpec::date("requestDate", "Request Date")
                .past_only()
                .required_message("A request date is required."),
        )
        .field(
            FieldSpec::text("department", "Department")
                .placeholder("e.g. Production")
                .required("Department is required."),
        )
        .field(
            FieldSpec::select("priority", "Priority", &[("High", "High"), ("Medium", "Medium"), ("Low", "Low")])
                .default_text("Medium"),
        )
        .field(
            FieldSpec::line_items(
                "items",
                "Items",
                "Add Item",
                vec![
                    FieldSpec::text("itemName", "Item Name")
                        .placeholder("Product Name")
                        .required("Item name is required."),
                    FieldSpec::number("currentStock", "Current Stock")
                        .placeholder("0")
                        .min(0.0, Some("Stock cannot be negative.")),
                    FieldSpec::number("requestedQty", "Requested Qty")
                        .placeholder("1")
                        .default_number(1.0)
                        .min(1.0, Some("Quantity must be at least 1.")),
                ],
            )
            .min_rows_message("Please add at least one item."),
        )
        .submit_label("Save Indent")
        .notify_with("Indent Saved", "The new material indent has been successfully saved.")
}

fn goods_receipt() -> FormSchema {
    FormSchema::new("purchase", "goods-receipt", "Goods Receipt", "Goods Receipt Note")
        .description("Record material received against a purchase order.")
        .auto_number("GRN No")
        .field(FieldSpec::text("supplierName", "Supplier Name").required("Supplier name is required."))
        .field(
            FieldSpec::text("poRef", "PO Ref")
                .placeholder("PO-001")
                .required("Purchase order reference is required."),
        )
        .field(FieldSpec::date("receiptDate", "Receipt Date").past_only())
        .field(
            FieldSpec::number("totalQty", "Total Qty")
                .default_number(1.0)
                .min(1.0, Some("Quantity must be at least 1.")),
        )
        .field(FieldSpec::number("acceptedQty", "Accepted Qty").min(0.0, Some("Quantity cannot be negative.")))
        .derived("Rejected Qty", Formula::difference("totalQty", "acceptedQty"))
        .refine(Refinement::LessOrEqual {
            field: "acceptedQty".to_owned(),
            limit: "totalQty".to_owned(),
            message: "Accepted quantity cannot exceed total quantity.".to_owned(),
        })
        .submit_label("Save GRN")
        .notify_with("GRN Saved", "The goods receipt has been successfully recorded.")
}
