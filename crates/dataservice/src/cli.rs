use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

#[derive(Clone, Debug, Parser)]
#[command(name = "dataservice", version = env!("CARGO_PKG_VERSION"), about, long_about = None, propagate_version = true)]
pub struct App {
    /// Raise log verbosity (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Read settings from this TOML file instead of ~/.config/dataservice/config.toml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    #[command(alias = "g", name = "get", about = "Fetch a URL and print its JSON body")]
    Get(GetArg),
    #[command(name = "completions", about = "Print shell completions")]
    Completions(CompletionsArg),
}

#[derive(Clone, Debug, clap::Args)]
pub struct GetArg {
    pub url: String,

    /// Shape to decode the body into
    #[arg(long = "as", value_enum, default_value_t = Shape::Value)]
    pub shape: Shape,

    /// Print on a single line
    #[arg(long)]
    pub compact: bool,

    /// Extra request header, repeatable
    #[arg(short = 'H', long = "header", value_name = "KEY: VALUE", value_parser = parse_header)]
    pub headers: Vec<(String, String)>,

    /// Fail on a non-2xx status instead of decoding the body
    #[arg(long)]
    pub require_success: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Shape {
    /// Any JSON value
    Value,
    /// A swapi person record
    Actor,
}

#[derive(Clone, Debug, clap::Args)]
pub struct CompletionsArg {
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Split `KEY: VALUE` and check both halves are legal HTTP, so a bad header is
/// a usage error here rather than a failed request later.
fn parse_header(s: &str) -> Result<(String, String), String> {
    use reqwest::header::{HeaderName, HeaderValue};

    let (key, value) = s
        .split_once(':')
        .ok_or_else(|| format!("expected `KEY: VALUE`, got `{s}`"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("empty header name in `{s}`"));
    }
    let value = value.trim();
    HeaderName::from_bytes(key.as_bytes()).map_err(|_| format!("invalid header name `{key}`"))?;
    HeaderValue::from_str(value).map_err(|_| format!("invalid header value for `{key}`"))?;
    Ok((key.to_string(), value.to_string()))
}
