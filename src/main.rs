mod cli;
mod commands;
mod context;
mod engine;
mod failure;
mod resolve;

fn main() {
    let outcome = cli::Cli::build().and_then(commands::run);

    if let Err(problem) = outcome {
        eprintln!("{problem}");
        std::process::exit(problem.exit_code());
    }
}
