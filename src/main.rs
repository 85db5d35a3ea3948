use std::process::ExitCode;

fn main() -> ExitCode {
    match heif_regions::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
