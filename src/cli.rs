use std::path::PathBuf;
use clap::{ ArgAction, Parser };

#[derive(Debug, Parser)]
#[command(
    version,
    about = "Check the health of a FlexLM license server",
    long_about = None
)]
pub struct Cli {
    #[arg(
        short = 'l',
        long = "lmutil",
        help = "Path to the lmutil utility (defaults to $LMUTIL_PATH, then \"lmutil\" on PATH)"
    )]
    pub lmutil: Option<PathBuf>,
    #[arg(short = 's', long = "server", help = "The FlexLM server IP or FQDN")]
    pub server: String,
    #[arg(short = 'p', long = "port", help = "The FlexLM port")]
    pub port: u16,
    #[arg(
        short = 'j',
        long = "json",
        action = ArgAction::SetTrue,
        help = "Output the information in JSON format instead of the monitoring line"
    )]
    pub json: bool,
}
