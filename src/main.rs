use clap::Parser;
use clap::error::ErrorKind;
use log::debug;

/// Convert a Merc/Diku area file to JSON on standard output.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Path to the area file
    area_file: String,
}

/// Argument errors exit 1, matching the original converter; help and
/// version output is not an error.
fn usage_exit_code(kind: ErrorKind) -> i32 {
    match kind {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => 1,
    }
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    env_logger::init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            std::process::exit(usage_exit_code(err.kind()));
        }
    };

    debug!("converting {}", args.area_file);
    let document = area_scan::convert_file(&args.area_file)?;
    print!("{document}");
    Ok(())
}
