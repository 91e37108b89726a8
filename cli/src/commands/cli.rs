use clap::{ArgGroup, Parser};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamFormat {
    Text,
    Jsonl,
}

#[derive(Parser, Debug, Clone)]
#[command(name = "sqlswarm", version, about = "Multi-threaded SQL load runner")]
#[command(group(ArgGroup::new("auth").required(true).args(["integrated", "user"])))]
#[command(group(ArgGroup::new("input").required(true).args(["query", "file"])))]
pub struct Args {
    /// Database server address.
    #[arg(long, short = 's')]
    pub server: String,

    #[arg(long, default_value_t = 3306)]
    pub port: u16,

    /// Database name.
    #[arg(long, short = 'd')]
    pub database: String,

    /// Connect as the current OS user without a password.
    #[arg(long)]
    pub integrated: bool,

    /// Database username.
    #[arg(long, short = 'u', requires = "password")]
    pub user: Option<String>,

    /// Database password.
    #[arg(long, short = 'p', requires = "user")]
    pub password: Option<String>,

    /// SQL statement every worker executes once.
    #[arg(long, short = 'q')]
    pub query: Option<String>,

    /// Read the SQL statement from a file instead.
    #[arg(long, short = 'f')]
    pub file: Option<String>,

    /// Number of concurrent workers.
    #[arg(long, short = 't')]
    pub threads: u32,

    /// Stagger step in ms: worker i waits delay * i before starting.
    #[arg(long, default_value_t = 0)]
    pub delay: u64,

    /// Per-worker query timeout in seconds.
    #[arg(long, default_value_t = 30)]
    pub timeout: u64,

    #[arg(long, value_enum, default_value = "text")]
    pub stream_format: StreamFormat,
}
