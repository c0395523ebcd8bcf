use super::Module;
use crate::schema::{FieldSpec, FormSchema};

pub(super) fn module() -> Module {
    Module::new("sales", "Sales", "Sales Management").form(inquiry())
}

fn inquiry() -> FormSchema {
    FormSchema::new("sales", "inquiry", "Inquiry", "New Inquiry")
        .description("Enter the details for a new sales inquiry.")
        .auto_number("Inquiry No")
        .field(
            FieldSpec::text("customerName", "Customer Name")
                .placeholder("Enter customer name")
                .required("Customer name is required."),
        )
        .field(
            FieldSpec::date("inquiryDate", "Inquiry Date")
                .past_only()
                .required_message("An inquiry date is required."),
        )
        .field(FieldSpec::text("salesPerson", "Sales Person").default_text("John Doe"))
        .field(
            FieldSpec::line_items(
                "items",
                "Items",
                "Add Item",
                vec![
                    FieldSpec::text("itemName", "Item Name")
                        .placeholder("Product Name")
                        .required("Item name is required."),
                    FieldSpec::number("quantity", "Quantity")
                        .placeholder("1")
                        .default_number(1.0)
                        .min(1.0, Some("Quantity must be at least 1.")),
                    FieldSpec::number("targetPrice", "Target Price")
                        .placeholder("0.00")
                        .min(0.0, Some("Target price cannot be negative.")),
                ],
            )
            .min_rows_message("Please add at least one item."),
        )
        .field(FieldSpec::select(
            "status",
            "Status",
            &[("New", "New"), ("Processing", "Processing"), ("Quoted", "Quoted"), ("Lost", "Lost")],
        ))
        .submit_label("Save Inquiry")
        .notify_with("Inquiry Saved", "The new inquiry has been successfully saved.")
}
