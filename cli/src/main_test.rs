use super::*;
use clap::CommandFactory;

#[test]
fn cli_definition_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn parses_forms_list_with_module_filter() {
    let cli = Cli::try_parse_from(["erp-cli", "forms", "list", "--module", "hr"]).unwrap();
    assert_eq!(cli.base_url, "http://127.0.0.1:3000");
    let Command::Forms(FormsCommand { command: FormsSubcommand::List { module } }) = cli.command else {
        panic!("expected forms list");
    };
    assert_eq!(module.as_deref(), Some("hr"));
}

#[test]
fn parses_submit_with_base_url() {
    let cli = Cli::try_parse_from([
        "erp-cli",
        "--base-url",
        "http://erp.local:8080/",
        "submit",
        "sales.inquiry",
        "--data",
        "{}",
    ])
    .unwrap();
    assert_eq!(cli.base_url, "http://erp.local:8080/");
    assert!(matches!(cli.command, Command::Submit { ref form_id, .. } if form_id == "sales.inquiry"));
}

#[test]
fn payload_requires_exactly_one_source() {
    assert!(Cli::try_parse_from(["erp-cli", "validate", "sales.inquiry"]).is_err());
    assert!(Cli::try_parse_from(["erp-cli", "validate", "sales.inquiry", "--data", "{}", "--input", "a.json"]).is_err());
}

#[test]
fn endpoint_strips_trailing_slash() {
    assert_eq!(endpoint("http://erp.local/", "/healthz"), "http://erp.local/healthz");
}

#[test]
fn parse_record_requires_object() {
    assert!(parse_record(r#"{"a": 1}"#).is_ok());
    assert!(matches!(parse_record("[1]"), Err(CliError::NotAnObject)));
    assert!(matches!(parse_record("{"), Err(CliError::InvalidJson(_))));
}

#[test]
fn list_lines_filters_by_module() {
    let lines = list_lines(forms::catalog(), Some("finance")).unwrap();
    assert_eq!(lines, ["finance.journal-voucher\tJournal Voucher"]);
    assert_eq!(list_lines(forms::catalog(), None).unwrap().len(), 59);
    assert!(matches!(list_lines(forms::catalog(), Some("payroll")), Err(CliError::Catalog(_))));
}

#[test]
fn validate_offline_reports_errors() {
    let record = parse_record(r#"{"gstin": "SHORT"}"#).unwrap();
    let Err(CliError::Invalid(errors)) = validate_offline(forms::catalog(), "logistics.transport-master", &record) else {
        panic!("expected validation failure");
    };
    assert_eq!(errors.get("gstin"), Some("GSTIN must be 15 characters."));
}

#[test]
fn validate_offline_returns_payload() {
    let record = parse_record(
        r#"{"contractorFirm": "Acme", "workerName": "Ravi", "aadharNo": "123412341234", "skillLevel": "Skilled"}"#,
    )
    .unwrap();
    let payload = validate_offline(forms::catalog(), "contractors.employee-master", &record).unwrap();
    assert_eq!(payload["skillLevel"], serde_json::json!("Skilled"));
}
