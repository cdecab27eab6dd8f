use clap::Parser;
use is_it_prime::utils::logger;
use is_it_prime::{spawn_line_reader, CliConfig, PrimeRepl};
use tokio::io::BufReader;

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    // Logs go to stderr so the session on stdout is untouched
    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    // Stdin is owned by the reader task from here on
    let source = spawn_line_reader(BufReader::new(tokio::io::stdin()));
    let repl = PrimeRepl::new(source, tokio::io::stdout());

    // Quit and end of input both return Ok; only a broken terminal gets here
    if let Err(e) = repl.run().await {
        tracing::error!("Interactive loop failed: {}", e);
        eprintln!("{}", e.user_friendly_message());
        std::process::exit(1);
    }
}
