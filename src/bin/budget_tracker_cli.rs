use budget_tracker::{cli::run_cli, config::Config, init};

fn main() {
    init();

    if let Err(err) = run_cli(Config::from_env()) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
