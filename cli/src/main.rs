use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use forms::{Catalog, CatalogError, Record, ValidationErrors};
use serde_json::Value;

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned HTTP {status}: {message}")]
    ServerError { status: u16, message: String },
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("payload must be a JSON object")]
    NotAnObject,
    #[error("failed to read {path}: {source}")]
    ReadInput { path: String, source: std::io::Error },
    #[error("{0}")]
    Invalid(ValidationErrors),
}

#[derive(Parser, Debug)]
#[command(name = "erp-cli", about = "ApexERP form catalog and submission CLI")]
struct Cli {
    #[arg(long, env = "ERP_BASE_URL", default_value = "http://127.0.0.1:3000")]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check that the server is up.
    Ping,
    /// Inspect the form catalog (offline).
    Forms(FormsCommand),
    /// Validate a record against a form schema (offline).
    Validate {
        form_id: String,
        #[command(flatten)]
        payload: PayloadArgs,
    },
    /// Submit a record to a running server.
    Submit {
        form_id: String,
        #[command(flatten)]
        payload: PayloadArgs,
    },
}

#[derive(Args, Debug)]
struct FormsCommand {
    #[command(subcommand)]
    command: FormsSubcommand,
}

#[derive(Subcommand, Debug)]
enum FormsSubcommand {
    List {
        #[arg(long)]
        module: Option<String>,
    },
    Show {
        form_id: String,
    },
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct PayloadArgs {
    /// Record as inline JSON.
    #[arg(long)]
    data: Option<String>,
    /// Path to a file holding the record as JSON.
    #[arg(long)]
    input: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let catalog = forms::catalog();

    match cli.command {
        Command::Ping => run_ping(&cli.base_url).await,
        Command::Forms(forms) => run_forms(catalog, forms),
        Command::Validate { form_id, payload } => {
            let record = read_payload(&payload)?;
            let payload = validate_offline(catalog, &form_id, &record)?;
            print_json(&Value::Object(payload))
        }
        Command::Submit { form_id, payload } => {
            let record = read_payload(&payload)?;
            let json = submit(&cli.base_url, &form_id, record).await?;
            print_json(&json)
        }
    }
}

async fn run_ping(base_url: &str) -> Result<(), CliError> {
    let client = http_client()?;
    let response = client.get(endpoint(base_url, "/healthz")).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(CliError::ServerError { status: status.as_u16(), message: "health check failed".to_owned() });
    }
    println!("ok");
    Ok(())
}

fn run_forms(catalog: &Catalog, forms: FormsCommand) -> Result<(), CliError> {
    match forms.command {
        FormsSubcommand::List { module } => {
            for line in list_lines(catalog, module.as_deref())? {
                println!("{line}");
            }
            Ok(())
        }
        FormsSubcommand::Show { form_id } => {
            let schema = catalog.form(&form_id)?;
            print_json(&serde_json::to_value(schema)?)
        }
    }
}

/// `id<TAB>title` for every form, optionally limited to one module.
fn list_lines(catalog: &Catalog, module: Option<&str>) -> Result<Vec<String>, CliError> {
    let forms: Vec<_> = match module {
        Some(slug) => catalog.module(slug)?.forms.iter().collect(),
        None => catalog.forms().collect(),
    };
    Ok(forms.into_iter().map(|form| format!("{}\t{}", form.id, form.title)).collect())
}

fn validate_offline(catalog: &Catalog, form_id: &str, record: &Record) -> Result<Record, CliError> {
    let schema = catalog.form(form_id)?;
    forms::validate(schema, record).map_err(|errors| {
        for (path, message) in errors.iter() {
            eprintln!("{path}: {message}");
        }
        CliError::Invalid(errors)
    })
}

async fn submit(base_url: &str, form_id: &str, record: Record) -> Result<Value, CliError> {
    let client = http_client()?;
    let url = endpoint(base_url, &format!("/api/forms/{form_id}/submissions"));
    let response = client.post(url).json(&record).send().await?;
    let status = response.status();
    let value = response.json::<Value>().await.unwrap_or(Value::Null);

    if !status.is_success() {
        return Err(CliError::ServerError { status: status.as_u16(), message: value.to_string() });
    }
    Ok(value)
}

fn http_client() -> Result<reqwest::Client, CliError> {
    Ok(reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?)
}

fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}

fn read_payload(args: &PayloadArgs) -> Result<Record, CliError> {
    let raw = match (&args.data, &args.input) {
        (Some(data), _) => data.clone(),
        (None, Some(path)) => std::fs::read_to_string(path)
            .map_err(|source| CliError::ReadInput { path: path.clone(), source })?,
        (None, None) => return Err(CliError::NotAnObject),
    };
    parse_record(&raw)
}

fn parse_record(raw: &str) -> Result<Record, CliError> {
    match serde_json::from_str::<Value>(raw)? {
        Value::Object(map) => Ok(map),
        _ => Err(CliError::NotAnObject),
    }
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
