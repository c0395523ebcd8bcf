use super::Module;

pub(super) fn module() -> Module {
    Module::new("reports", "Reports", "Reports").placeholder(
        "Reporting & Analytics",
        "Generate comprehensive reports and gain insights from your ERP data.",
        "Reports module content will be displayed here.",
    )
}
