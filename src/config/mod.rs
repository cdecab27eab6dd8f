use clap::Parser;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "is-it-prime", version)]
#[command(about = "Tells you whether the whole numbers you type are prime")]
pub struct CliConfig {
    #[arg(short, long, help = "Log debug output to stderr")]
    pub verbose: bool,
}
