//! Tax and statutory books: GST, TDS/TCS, registers, cheque books.
//!
//! The register and balance sheet totals are fixed figures until a ledger
//! backs them.

use super::Module;
use crate::derive::Formula;
use crate::schema::{DefaultValue, FieldSpec, FormSchema, Refinement};

const REGISTER_TAX_LIABILITY: f64 = 12_345.67;

pub(super) fn module() -> Module {
    Module::new("statutory", "Statutory", "Statutory Management")
        .form(gst_taxation())
        .form(gstr1_upload())
        .form(gst2a_recon())
        .form(gst_challan())
        .form(tds_trace())
        .form(tcs_details())
        .form(gstr_register())
        .form(cheque_book())
        .form(balance_sheet())
}

fn percent(name: &str, label: &str) -> FieldSpec {
    FieldSpec::number(name, label).min(0.0, None).max(100.0, None)
}

fn gst_taxation() -> FormSchema {
    FormSchema::new("statutory", "gst-taxation", "GST Master", "GST Taxation Master")
        .description("Set up tax rules for HSN codes.")
        .field(FieldSpec::text("hsnCode", "HSN Code").required("HSN Code is required."))
        .field(FieldSpec::text("description", "Description").required("Description is required."))
        .field(percent("igst", "IGST %"))
        .field(percent("cgst", "CGST %"))
        .field(percent("sgst", "SGST %"))
        .submit_label("Save Rule")
        .notify("GST Rule Saved")
}

fn gstr1_upload() -> FormSchema {
    FormSchema::new("statutory", "gstr1-upload", "GSTR-1", "GSTR-1 Sales Upload")
        .description("Prepare sales data for GSTR-1 filing.")
        .field(FieldSpec::month("month", "Month"))
        .field(FieldSpec::text("invoiceNo", "Invoice No").required("Invoice number is required."))
        .field(FieldSpec::text("customerGstin", "Customer GSTIN").exact_len(15, Some("Must be 15 characters.")))
        .field(FieldSpec::number("taxableValue", "Taxable Value").min(0.0, None))
        .field(FieldSpec::number("taxAmount", "Tax Amount").min(0.0, None))
        .field(FieldSpec::text("state", "State").required("State is required."))
        .submit_label("Add to GSTR-1")
        .notify("GSTR-1 Entry Saved")
}

fn gst2a_recon() -> FormSchema {
    FormSchema::new("statutory", "gst2a-recon", "GST2A Recon", "GST2A Reconciliation")
        .description("Compare purchase records with the GST portal data.")
        .field(FieldSpec::month("month", "Month"))
        .field(FieldSpec::text("vendorGstin", "Vendor GSTIN").exact_len(15, Some("Must be 15 characters.")))
        .field(FieldSpec::number("totalItc", "Total Input Tax Credit (ITC)").min(0.0, None))
        .field(FieldSpec::number("matchedAmount", "Matched Amount").min(0.0, None))
        .derived("Mismatch Amount", Formula::difference("totalItc", "matchedAmount"))
        .submit_label("Save Reconciliation")
        .notify("Reconciliation Saved")
}

fn gst_challan() -> FormSchema {
    FormSchema::new("statutory", "gst-challan", "GST Challan", "GST Deposit Challan")
        .description("Record a GST payment challan.")
        .auto_number("Challan No")
        .field(FieldSpec::text("cpin", "CPIN").required("CPIN is required."))
        .field(FieldSpec::date("date", "Date"))
        .field(FieldSpec::text("bank", "Bank").required("Bank is required."))
        .field(FieldSpec::select("taxType", "Tax Type", &[("CGST", "CGST"), ("SGST", "SGST"), ("IGST", "IGST")]))
        .field(FieldSpec::number("amount", "Amount").min(0.01, None))
        .submit_label("Save Challan")
        .notify("Challan Saved")
}

fn tds_trace() -> FormSchema {
    FormSchema::new("statutory", "tds-trace", "TDS", "TDS Trace & Details")
        .description("Track tax deducted at source.")
        .field(
            FieldSpec::text("section", "Section")
                .placeholder("e.g., 194C")
                .default_text("194C")
                .required("Section is required."),
        )
        .field(FieldSpec::text("deducteeName", "Deductee Name").required("Deductee name is required."))
        .field(FieldSpec::number("paymentAmount", "Payment Amount").min(0.0, None))
        .field(percent("tdsRate", "TDS Rate %").default_number(1.0))
        .field(FieldSpec::text("certificateNo", "Certificate No").optional())
        .derived("TDS Amount", Formula::percent("paymentAmount", "tdsRate"))
        .submit_label("Save TDS Record")
        .notify("TDS Record Saved")
}

fn tcs_details() -> FormSchema {
    FormSchema::new("statutory", "tcs-details", "TCS", "TCS Details")
        .description("Track tax collected at source.")
        .field(FieldSpec::text("customerName", "Customer Name").required("Customer name is required."))
        .field(FieldSpec::number("saleValue", "Sale Value").min(0.0, None))
        .field(percent("tcsRate", "TCS Rate %").default_number(0.1))
        .derived("TCS Amount", Formula::percent("saleValue", "tcsRate"))
        .submit_label("Save TCS Record")
        .notify("TCS Record Saved")
}

fn gstr_register() -> FormSchema {
    FormSchema::new("statutory", "gstr-register", "GSTR Register", "GSTR1 & GSTR2 Register")
        .description("View a detailed tax ledger.")
        .field(FieldSpec::date_range("dateRange", "Date range"))
        .field(FieldSpec::select("transactionType", "Transaction Type", &[("B2B", "B2B"), ("B2C", "B2C")]))
        .refine(Refinement::DateOrder {
            start: "dateRange.from".to_owned(),
            end: "dateRange.to".to_owned(),
            message: "End date cannot be before start date.".to_owned(),
        })
        .derived("Total Tax Liability", Formula::constant(REGISTER_TAX_LIABILITY))
        .submit_label("Generate Register")
        .notify("Register Generated")
        .keep_values()
}

fn cheque_book() -> FormSchema {
    FormSchema::new("statutory", "cheque-book", "Cheque Book", "Add New Cheque Book")
        .field(
            FieldSpec::text("bankAccount", "Bank Account")
                .placeholder("Select Account")
                .default_value(DefaultValue::Unset)
                .non_empty(),
        )
        .field(
            FieldSpec::number("startLeafNo", "Start Leaf No")
                .default_value(DefaultValue::Unset)
                .min(1.0, None),
        )
        .field(
            FieldSpec::number("endLeafNo", "End Leaf No")
                .default_value(DefaultValue::Unset)
                .min(1.0, None),
        )
        .refine(Refinement::LessOrEqual {
            field: "startLeafNo".to_owned(),
            limit: "endLeafNo".to_owned(),
            message: "Start leaf cannot be after end leaf.".to_owned(),
        })
        .table(
            "Cheque Status Tracker",
            &["Leaf No", "Status", "Issued To", "Date"],
            &[
                &["1001", "Used", "ABC Corp", "2023-05-15"],
                &["1002", "Cancelled", "-", "2023-05-16"],
                &["1003", "Blank", "-", "-"],
            ],
        )
        .submit_label("Add Cheque Book")
        .notify("Cheque Book Added")
        .keep_values()
}

fn balance_sheet() -> FormSchema {
    FormSchema::new("statutory", "balance-sheet", "Balance Sheet", "Balance Sheet")
        .description("Generate a financial statement.")
        .field(FieldSpec::date("asOnDate", "As On Date"))
        .derived("Assets Total", Formula::constant(5_000_000.0))
        .derived("Liabilities Total", Formula::constant(2_500_000.0))
        .derived("Capital Account", Formula::constant(2_000_000.0))
        .derived("Current Assets", Formula::constant(500_000.0))
        .submit_label("Generate")
        .notify("Balance Sheet Generated")
        .keep_values()
}
