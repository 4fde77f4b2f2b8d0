use std::io::{self, Write};
use std::process;

use mtxsym_batch::config::BatchConfig;
use structopt::StructOpt;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = match BatchConfig::from_iter_safe(std::env::args_os()) {
        Ok(config) => config,
        // --help and --version
        Err(err) if !err.use_stderr() => err.exit(),
        Err(err) => {
            eprintln!("{}", err);
            process::exit(2);
        }
    };
    let report = match mtxsym_batch::run(&config) {
        Ok(report) => report,
        Err(err) => {
            eprintln!(
                "Could not read {}: {}",
                config.get_list_file().display(),
                err
            );
            process::exit(2);
        }
    };
    let stdout = io::stdout();
    let mut out = stdout.lock();
    report.write(&mut out)?;
    out.flush()?;
    if !report.all_correct() {
        process::exit(1);
    }
    Ok(())
}
