//! Command line parsing for the `blaseball` binary

use thiserror::Error;

pub const USAGE: &str = r#"Blaseball feed client - live league and game data over Socket.IO

USAGE:
    blaseball [OPTIONS] [COOKIE]

ARGS:
    <COOKIE>            Session cookie sent with the WebSocket handshake

OPTIONS:
    --config <PATH>     Load configuration from JSON file
    --url <URL>         Override the feed URL
    --help              Print this help message

ENVIRONMENT VARIABLES:
    BLASEBALL_COOKIE    Session cookie (used when no COOKIE argument is given)
    BLASEBALL_URL       Feed URL
    RUST_LOG            Log level filter (default: blaseball=info)

EXAMPLES:
    # Connect with a cookie copied from the browser
    blaseball 'connect.sid=s%3A...'

    # Run with config file
    blaseball --config client.json
"#;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CliError {
    #[error("{0} requires a value")]
    MissingValue(&'static str),

    #[error("Unknown argument: {0}")]
    UnknownArgument(String),

    #[error("Unexpected extra argument: {0}")]
    UnexpectedArgument(String),
}

/// Options given on the command line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliArgs {
    pub config_path: Option<String>,
    pub url: Option<String>,
    pub cookie: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Run(CliArgs),
}

/// Parse arguments, excluding the program name
pub fn parse_args<I>(args: I) -> Result<Command, CliError>
where
    I: IntoIterator<Item = String>,
{
    let mut parsed = CliArgs::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--help" | "-h" => return Ok(Command::Help),
            "--config" | "-c" => {
                parsed.config_path = Some(args.next().ok_or(CliError::MissingValue("--config"))?);
            }
            "--url" => {
                parsed.url = Some(args.next().ok_or(CliError::MissingValue("--url"))?);
            }
            flag if flag.starts_with('-') && flag.len() > 1 => {
                return Err(CliError::UnknownArgument(flag.to_string()));
            }
            _ if parsed.cookie.is_none() => parsed.cookie = Some(arg),
            _ => return Err(CliError::UnexpectedArgument(arg)),
        }
    }

    Ok(Command::Run(parsed))
}
