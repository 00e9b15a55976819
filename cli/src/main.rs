use ri_offering_cli::argparse::parse_args;
use ri_offering_cli::{commands, utils};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = parse_args();
    utils::init_logger(cli.verbose);

    match commands::handle_command(cli, &mut std::io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
