// Main entry point for yapi-mcp
// Uses clap for argument parsing and serves MCP over stdio

use clap::{Arg, Command};
use rmcp::{transport::stdio, ServiceExt};
use tracing::{error, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use yapi_mcp::config::{RawConfig, DEFAULT_LOG_LEVEL};
use yapi_mcp::{YapiClient, YapiServer};

/// Log to stderr; stdout belongs to the MCP transport
fn init_tracing(level: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry().with(filter).with(fmt_layer).init();
}

#[tokio::main]
async fn main() {
    let matches = Command::new("yapi-mcp")
        .version(clap::crate_version!())
        .author("Jake Abendroth")
        .about("MCP server exposing YAPI interface documentation to LLM agents")
        .after_help("ENVIRONMENT:\n  YAPI_BASE_URL       YAPI server URL (e.g. http://yapi.example.com)\n  YAPI_TOKEN          Value of the _yapi_token cookie\n  YAPI_UID            Value of the _yapi_uid cookie\n  YAPI_TIMEOUT_SECS   Per-request timeout in seconds (default: 30)\n  LOG_LEVEL           Tracing filter (default: info)\n\nFlags take precedence over environment variables.")
        .arg(Arg::new("base_url")
            .short('b')
            .long("base-url")
            .num_args(1)
            .help("YAPI server URL"))
        .arg(Arg::new("token")
            .short('t')
            .long("token")
            .num_args(1)
            .help("YAPI token (_yapi_token cookie)"))
        .arg(Arg::new("uid")
            .short('u')
            .long("uid")
            .num_args(1)
            .help("YAPI user ID (_yapi_uid cookie)"))
        .arg(Arg::new("timeout_secs")
            .long("timeout-secs")
            .num_args(1)
            .help("Per-request timeout in seconds"))
        .arg(Arg::new("log_level")
            .long("log-level")
            .num_args(1)
            .help("Tracing filter directive, e.g. debug or yapi_mcp=trace"))
        .get_matches();

    let mut raw = RawConfig::from_env();
    let flag = |name: &str| matches.get_one::<String>(name).cloned();
    if let Some(v) = flag("base_url") {
        raw.base_url = Some(v);
    }
    if let Some(v) = flag("token") {
        raw.token = Some(v);
    }
    if let Some(v) = flag("uid") {
        raw.uid = Some(v);
    }
    if let Some(v) = flag("timeout_secs") {
        raw.timeout_secs = Some(v);
    }
    if let Some(v) = flag("log_level") {
        raw.log_level = Some(v);
    }

    let config = raw.validate().unwrap_or_else(|e| {
        eprintln!("{}", e);
        std::process::exit(1);
    });

    init_tracing(&config.log_level);
    info!(base_url = %config.base_url, uid = config.uid, "YAPI MCP Server starting");

    let client = YapiClient::new(&config).unwrap_or_else(|e| {
        eprintln!("{}", e);
        std::process::exit(1);
    });

    let service = match YapiServer::new(client).serve(stdio()).await {
        Ok(service) => service,
        Err(e) => {
            error!(error = ?e, "failed to start MCP service");
            std::process::exit(1);
        }
    };
    info!("YAPI MCP Server connected via stdio");

    if let Err(e) = service.waiting().await {
        error!(error = ?e, "MCP service stopped with error");
        std::process::exit(1);
    }
}
