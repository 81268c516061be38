use anyhow::Result;
use errwrap::cli::{self, Commands};
use errwrap::commands::{self, CheckConfig};

fn main() -> Result<()> {
    let cli = cli::parse_args();
    cli::init_logging(cli.verbosity);

    match cli.command {
        Commands::Check {
            paths,
            fix,
            format,
            config,
            jobs,
            no_tests,
            show_fixes,
            plain,
        } => {
            let check_config = CheckConfig {
                paths,
                fix,
                format: format.map(Into::into),
                config_path: config,
                jobs,
                no_tests,
                show_fixes,
                plain,
            };
            let outcome = commands::handle_check(check_config)?;
            std::process::exit(outcome.exit_code());
        }
        Commands::Init { force } => commands::init_config(force),
    }
}
