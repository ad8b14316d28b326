use clap::Parser;

use salary_chart::cli::{Cli, Commands};
use salary_chart::commands::{run_companies, run_config, run_init, run_render};

fn main() {
    let cli = Cli::parse();

    let exit_code = match &cli.command {
        Commands::Render(args) => run_render(args, &cli),
        Commands::Companies(args) => run_companies(args, &cli),
        Commands::Init(args) => run_init(args),
        Commands::Config(args) => run_config(args, &cli),
    };

    std::process::exit(exit_code);
}
