use clap::Parser;

/// basa — terminal chat assistant for Javanese language questions.
#[derive(Parser, Debug)]
#[command(name = "basa", version, about)]
pub struct Args {
    /// Gemini model identifier override.
    #[arg(short = 'm', long)]
    pub model: Option<String>,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}
