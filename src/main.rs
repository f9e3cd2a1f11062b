use std::process::ExitCode;

use json_form::cli;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let command_line_interface = cli::CommandLineInterface::load();
    log::debug!("{command_line_interface:#?}");
    command_line_interface.run()
}
