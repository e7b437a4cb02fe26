use std::process::ExitCode;

mod platform;

fn main() -> ExitCode {
    match platform::run_app() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            catalog_logging::catalog_error!("catalog_app stopped: {}", err);
            eprintln!("catalog_app: {err}");
            ExitCode::FAILURE
        }
    }
}
