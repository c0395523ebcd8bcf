use super::Module;
use crate::derive::Formula;
use crate::schema::{DefaultValue, FieldSpec, FormSchema};

pub(super) fn module() -> Module {
    Module::new("assets", "Assets", "Asset Management")
        .form(asset_master())
        .form(asset_addition())
        .form(asset_allocation())
        .form(asset_sale())
        .form(asset_depreciation())
}

fn asset_master() -> FormSchema {
    FormSchema::new("assets", "asset-master", "Asset Master", "New Fixed Asset")
        .description("Add a new asset to the master list.")
        .auto_number("Asset Tag")
        .field(FieldSpec::text("name", "Name").placeholder("e.g. Dell Laptop").required("Asset name is required."))
        .field(
            FieldSpec::select(
                "group",
                "Group",
                &[("IT", "IT"), ("Plant", "Plant & Machinery"), ("Furniture", "Furniture")],
            )
            .default_text("Plant"),
        )
        .field(FieldSpec::date("purchaseDate", "Purchase Date"))
        .field(FieldSpec::number("value", "Value").min(0.0, Some("Value cannot be negative.")))
        .submit_label("Save Asset")
        .notify("Asset Saved")
}

fn asset_addition() -> FormSchema {
    FormSchema::new("assets", "asset-addition", "Asset Addition", "Asset Addition Memo")
        .description("Log the addition of a new asset.")
        .field(
            FieldSpec::text("assetRef", "Asset Ref")
                .placeholder("Select Asset")
                .required("Asset reference is required."),
        )
        .field(
            FieldSpec::text("invoiceRef", "Invoice Ref")
                .placeholder("Purchase Invoice No")
                .required("Invoice reference is required."),
        )
        .field(FieldSpec::date("installationDate", "Installation Date"))
        .field(
            FieldSpec::number("depreciationRate", "Depreciation Rate (%)")
                .default_number(15.0)
                .min(0.0, Some("Rate must be positive."))
                .max(100.0, Some("Rate cannot exceed 100.")),
        )
        .submit_label("Save Memo")
        .notify("Asset Addition Memo Saved")
}

fn asset_allocation() -> FormSchema {
    FormSchema::new("assets", "asset-allocation", "Asset Allocation", "Asset Allocation")
        .description("Assign an asset to a user or department.")
        .field(FieldSpec::text("assetTag", "Asset Tag").placeholder("Select Asset").required("Asset tag is required."))
        .field(
            FieldSpec::text("employeeName", "Employee Name")
                .placeholder("Select Employee")
                .required("Employee name is required."),
        )
        .field(
            FieldSpec::text("department", "Department")
                .placeholder("e.g. IT, Sales")
                .required("Department is required."),
        )
        .field(FieldSpec::date("dateAssigned", "Date Assigned"))
        .submit_label("Allocate Asset")
        .notify("Asset Allocated")
}

fn asset_sale() -> FormSchema {
    FormSchema::new("assets", "asset-sale", "Asset Sale", "Asset Sale Memo")
        .description("Record the disposal or sale of an asset.")
        .field(FieldSpec::text("assetTag", "Asset Tag").placeholder("Select Asset").required("Asset tag is required."))
        .field(FieldSpec::date("saleDate", "Sale Date"))
        .field(FieldSpec::number("saleValue", "Sale Value").min(0.0, None))
        .field(FieldSpec::number("bookValue", "Book Value").min(0.0, None))
        .derived("Gain / Loss", Formula::difference("saleValue", "bookValue"))
        .submit_label("Record Sale")
        .notify("Asset Sale Recorded")
}

fn asset_depreciation() -> FormSchema {
    FormSchema::new("assets", "asset-depreciation", "Asset Depreciation", "Asset Depreciation Voucher")
        .description("Perform year-end depreciation calculation.")
        .field(
            FieldSpec::text("year", "Year")
                .placeholder("YYYY")
                .default_value(DefaultValue::CurrentYear)
                .exact_len(4, Some("Enter a valid year.")),
        )
        .field(FieldSpec::text("assetTag", "Asset Tag").placeholder("Select Asset").required("Asset tag is required."))
        .field(FieldSpec::number("openingBalance", "Opening Balance"))
        .field(FieldSpec::number("depreciationAmount", "Depreciation Amount"))
        .derived("Closing Balance", Formula::difference("openingBalance", "depreciationAmount"))
        .submit_label("Save Voucher")
        .notify("Depreciation Voucher Saved")
}
