use super::Module;
use crate::schema::{FieldSpec, FormSchema};

pub(super) fn module() -> Module {
    Module::new("inventory", "Inventory", "Warehouse Management")
        .form(warehouse_master())
        .form(opening_stock())
        .form(dispatch_srv())
        .form(stock_transfer())
        .form(material_receipt())
}

fn warehouse_master() -> FormSchema {
    FormSchema::new("inventory", "warehouse-master", "Warehouse Master", "New Warehouse")
        .description("Add a new warehouse to the master list.")
        .auto_number("Warehouse ID")
        .field(
            FieldSpec::text("name", "Name")
                .placeholder("e.g. Main Warehouse")
                .required("Warehouse name is required."),
        )
        .field(FieldSpec::text("managerName", "Manager Name").required("Manager name is required."))
        .field(
            FieldSpec::textarea("address", "Address")
                .placeholder("Enter full address")
                .required("Address is required."),
        )
        .submit_label("Save Warehouse")
        .notify("Warehouse Saved")
}

fn opening_stock() -> FormSchema {
    FormSchema::new("inventory", "opening-stock", "Opening Stock", "Warehouse Opening Stock")
        .description("Set up the initial stock for an item.")
        .field(
            FieldSpec::text("itemName", "Item Name")
                .placeholder("Select Item")
                .required("Item name is required."),
        )
        .field(FieldSpec::number("openingQty", "Opening Quantity").min(0.0, Some("Quantity cannot be negative.")))
        .field(FieldSpec::number("value", "Value").min(0.0, Some("Value cannot be negative.")))
        .field(FieldSpec::date("date", "Date"))
        .submit_label("Save Opening Stock")
        .notify("Opening Stock Saved")
}

fn dispatch_srv() -> FormSchema {
    FormSchema::new("inventory", "dispatch-srv", "Dispatch SRV", "New Dispatch SRV (Service Voucher)")
        .description("Create a non-sales dispatch, like a returnable gate pass.")
        .auto_number("SRV No")
        .field(FieldSpec::date("date", "Date"))
        .field(
            FieldSpec::text("partyName", "Party Name")
                .placeholder("Recipient's Name")
                .required("Party name is required."),
        )
        .field(
            FieldSpec::text("item", "Item")
                .placeholder("Item being dispatched")
                .required("Item name is required."),
        )
        .field(
            FieldSpec::number("qty", "Quantity")
                .default_number(1.0)
                .min(1.0, Some("Quantity must be at least 1.")),
        )
        .field(FieldSpec::radio("returnExpected", "Return Expected?", &[("Yes", "Yes"), ("No", "No")]))
        .submit_label("Create SRV")
        .notify("SRV Created")
}

fn stock_transfer() -> FormSchema {
    FormSchema::new("inventory", "stock-transfer", "Stock Transfer", "Warehouse Stock Transfer")
        .description("Move stock between two warehouses.")
        .auto_number("Transfer ID")
        .field(
            FieldSpec::text("fromWarehouse", "From Warehouse")
                .placeholder("Select Source")
                .required("Source warehouse is required."),
        )
        .field(
            FieldSpec::text("toWarehouse", "To Warehouse")
                .placeholder("Select Destination")
                .required("Destination warehouse is required."),
        )
        .field(FieldSpec::text("item", "Item").placeholder("Item to Transfer").required("Item is required."))
        .field(
            FieldSpec::number("qty", "Quantity")
                .default_number(1.0)
                .min(1.0, Some("Quantity must be at least 1.")),
        )
        .submit_label("Initiate Transfer")
        .notify("Stock Transfer Initiated")
}

fn material_receipt() -> FormSchema {
    FormSchema::new("inventory", "material-receipt", "Material Receipt", "Warehouse Material Receipt")
        .description("Receive transferred or returned material.")
        .auto_number("Receipt ID")
        .field(
            FieldSpec::text("sourceDocRef", "Source Doc Ref")
                .placeholder("e.g. Transfer ID, SRV No")
                .required("Source document is required."),
        )
        .field(FieldSpec::text("item", "Item").placeholder("Item Name").required("Item is required."))
        .field(
            FieldSpec::number("qtyReceived", "Qty Received")
                .default_number(1.0)
                .min(1.0, Some("Quantity must be at least 1.")),
        )
        .submit_label("Receive Material")
        .notify("Material Received")
}
