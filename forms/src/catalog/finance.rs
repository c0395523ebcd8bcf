use super::Module;
use crate::schema::{FieldSpec, FormSchema};

pub(super) fn module() -> Module {
    Module::new("finance", "Finance", "Finance Management").form(journal_voucher())
}

fn journal_voucher() -> FormSchema {
    FormSchema::new("finance", "journal-voucher", "Journal Voucher", "New Journal Voucher")
        .description("Create an adjustment entry for your accounts.")
        .auto_number("Journal No")
        .field(FieldSpec::date("date", "Date").past_only().required_message("A date is required."))
        .field(
            FieldSpec::text("debitAccount", "Debit Account")
                .placeholder("e.g. Rent Expense")
                .required("Debit account is required."),
        )
        .field(
            FieldSpec::text("creditAccount", "Credit Account")
                .placeholder("e.g. Cash")
                .required("Credit account is required."),
        )
        .field(
            FieldSpec::number("amount", "Amount")
                .placeholder("0.00")
                .min(0.01, Some("Amount must be greater than 0.")),
        )
        .field(
            FieldSpec::textarea("narration", "Narration")
                .placeholder("Enter a brief description of the transaction")
                .required("Narration is required."),
        )
        .submit_label("Save Journal Voucher")
        .notify_with("Journal Voucher Saved", "The new journal voucher has been successfully saved.")
}
