//! Application settings. Linked from the sidebar footer; both cards render on
//! one page.

use super::Module;
use crate::schema::{FieldSpec, FormSchema};

pub(super) fn module() -> Module {
    Module::new("settings", "Settings", "Settings")
        .footer()
        .stacked()
        .form(trigger_engine())
        .form(users_roles())
}

fn trigger_engine() -> FormSchema {
    FormSchema::new("settings", "trigger-engine", "Trigger Engine", "Trigger Engine")
        .description("Configure automated notifications via WhatsApp and Email for status changes and reminders.")
        .field(FieldSpec::text("smtpHost", "SMTP Host").placeholder("smtp.example.com").optional())
        .field(
            FieldSpec::text("whatsappGateway", "WhatsApp Gateway URL")
                .placeholder("https://your-gateway.example.com")
                .optional(),
        )
        .field(FieldSpec::group(
            "events",
            "Notification Events",
            vec![
                FieldSpec::checkbox("newSalesOrder", "New Sales Order").default_bool(true),
                FieldSpec::checkbox("purchaseOrderRaised", "Purchase Order Raised").default_bool(true),
                FieldSpec::checkbox("productionCompleted", "Production Order Completed"),
            ],
        ))
        .submit_label("Save Changes")
        .notify("Settings Saved")
}

fn users_roles() -> FormSchema {
    FormSchema::new("settings", "users-roles", "Users & Roles", "Users & Roles")
        .description("Manage user access and permissions with Role-Based Access Control.")
        .field(FieldSpec::text("user", "User").default_text("Olivia Martin").non_empty())
        .field(
            FieldSpec::select(
                "role",
                "Role",
                &[("admin", "Admin"), ("manager", "Manager"), ("editor", "Editor"), ("viewer", "Viewer")],
            )
            .default_text("viewer"),
        )
        .submit_label("Update Role")
        .notify("Role Updated")
}
