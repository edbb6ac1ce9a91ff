use clap::Parser;
use colored::*;
use eyre::{Context, Result, eyre};
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

mod cli;

use cli::Cli;
use cli::commands::Commands;
use ghl_console::catalog::Category;
use ghl_console::client::HttpGateway;
use ghl_console::config::Config;
use ghl_console::docs::{DocSection, ONBOARDING};
use ghl_console::probe::{self, ProbeOutcome};
use ghl_console::state::{AppState, Section};
use ghl_console::view::{CatalogView, CategorySummary, ToolDetail, catalog_json, outcome_box, status_badge};

fn setup_logging(log_level: &str) -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("ghl-console")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("ghl-console.log");

    // Setup env_logger with file output
    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    // RUST_LOG, when set, overrides the configured level
    env_logger::Builder::new()
        .parse_filters(log_level)
        .parse_default_env()
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

async fn run_application(cli: &Cli, config: &Config) -> Result<()> {
    info!("Starting application");

    if cli.is_verbose() {
        println!("{} {}", "Gateway:".yellow(), config.server.base_url);
    }

    if !config.display.color {
        colored::control::set_override(false);
    }

    let gateway = HttpGateway::from_config(&config.server).context("Failed to create gateway client")?;

    match &cli.command {
        None => handle_onboarding(&gateway, config).await,
        Some(Commands::Status) => handle_status_command(&gateway, config).await,
        Some(Commands::Tools {
            category,
            json,
            descriptions,
        }) => {
            let show_descriptions = *descriptions || config.display.show_descriptions;
            handle_tools_command(&gateway, category.as_deref(), *json, show_descriptions, cli.is_verbose()).await
        }
        Some(Commands::Categories) => handle_categories_command(&gateway).await,
        Some(Commands::Show { name }) => handle_show_command(&gateway, name).await,
        Some(Commands::TestConnection) => handle_test_connection_command(&gateway, config).await,
        Some(Commands::Exec { tool, args, args_file }) => {
            handle_exec_command(&gateway, config, tool, args.as_deref(), args_file.as_deref()).await
        }
        Some(Commands::Docs { section, list }) => handle_docs_command(section.as_deref(), *list),
    }
}

async fn handle_onboarding(gateway: &HttpGateway, config: &Config) -> Result<()> {
    let credentials = config.credentials();
    let state = AppState::initialize(gateway, Some(&credentials)).await;
    info!("Showing section: {}", state.section);

    println!("{}", status_badge(&state.server_status));
    println!();
    println!("{}", "GoHighLevel MCP Console".bold());
    println!("{} tools available\n", state.tool_count());
    print!("{}", ONBOARDING);
    Ok(())
}

async fn handle_status_command(gateway: &HttpGateway, config: &Config) -> Result<()> {
    let credentials = config.credentials();
    let state = AppState::new()
        .check_server_status(gateway, Some(&credentials))
        .await;
    println!("{}", status_badge(&state.server_status));
    Ok(())
}

async fn handle_tools_command(
    gateway: &HttpGateway,
    category: Option<&str>,
    json: bool,
    show_descriptions: bool,
    verbose: bool,
) -> Result<()> {
    let filter = category
        .map(|label| Category::from_label(label).ok_or_else(|| eyre!("Unknown category: {}", label)))
        .transpose()?;

    let state = AppState::new().with_section(Section::Tools).load_tools(gateway).await;
    info!("Loaded {} tools", state.tool_count());
    if verbose {
        if let Some(at) = state.refreshed_at {
            println!("{} {}", "Refreshed:".yellow(), at.to_rfc3339());
        }
    }

    let mut catalog = state.catalog();
    if let Some(category) = filter {
        catalog = catalog.only(category);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&catalog_json(&catalog))?);
    } else {
        print!("{}", CatalogView::new(show_descriptions).render(&catalog));
    }
    Ok(())
}

async fn handle_categories_command(gateway: &HttpGateway) -> Result<()> {
    let state = AppState::new().with_section(Section::Tools).load_tools(gateway).await;
    let summaries = CategorySummary::from_catalog(&state.catalog());
    print!("{}", CatalogView::default().render_summaries(&summaries));
    Ok(())
}

async fn handle_show_command(gateway: &HttpGateway, name: &str) -> Result<()> {
    let state = AppState::new().with_section(Section::Tools).load_tools(gateway).await;
    match ToolDetail::find(&state.tools, name) {
        Some(detail) => print!("{}", CatalogView::default().render_detail(&detail)),
        None => println!("{} {}", "Tool not found:".red(), name),
    }
    Ok(())
}

async fn handle_test_connection_command(gateway: &HttpGateway, config: &Config) -> Result<()> {
    let credentials = config.credentials();
    let state = AppState::new().with_section(Section::Testing);
    info!("Testing connection with {:?} ({})", credentials, state.section);
    print!("{}", outcome_box(&ProbeOutcome::loading("Testing connection...")));
    let outcome = probe::test_connection(gateway, &credentials).await;
    print!("{}", outcome_box(&outcome));
    Ok(())
}

async fn handle_exec_command(
    gateway: &HttpGateway,
    config: &Config,
    tool: &str,
    args: Option<&str>,
    args_file: Option<&Path>,
) -> Result<()> {
    let raw_args = match args_file {
        Some(path) => fs::read_to_string(path).context(format!("Failed to read {}", path.display()))?,
        None => args.unwrap_or_default().to_string(),
    };

    let credentials = config.credentials();
    let state = AppState::new().with_section(Section::Testing);
    info!("Running {} from {}", tool, state.section);

    let outcome = match probe::prepare_tool(&credentials, tool, &raw_args) {
        Ok(request) => {
            print!(
                "{}",
                outcome_box(&ProbeOutcome::loading(format!("Executing {}...", request.tool_name)))
            );
            probe::run_tool(gateway, &credentials, &request).await
        }
        Err(outcome) => outcome,
    };
    print!("{}", outcome_box(&outcome));
    Ok(())
}

fn handle_docs_command(section: Option<&str>, list: bool) -> Result<()> {
    if list {
        for doc in DocSection::ALL {
            println!("  {:<16} {}", doc.slug(), doc.title());
        }
        return Ok(());
    }

    let state = AppState::new().with_section(Section::Docs);
    let doc = DocSection::resolve(section);
    info!("Showing {} section: {}", state.section, doc);
    println!("{}\n", doc.title().bold());
    print!("{}", doc.content());
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let mut config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    config.apply_overrides(cli.base_url.as_deref(), cli.api_key.as_deref(), cli.location_id.as_deref());

    // Logging level comes from the config
    setup_logging(&config.log_level).context("Failed to setup logging")?;

    info!("Starting with config from: {:?}", cli.config);

    // Run the main application logic
    run_application(&cli, &config).await.context("Application failed")?;

    Ok(())
}
