use std::path::{Path, PathBuf};

use clap::Parser;

use compdb_strip::{compdb, filter};

#[derive(Parser)]
#[command(
    name = "compdb-strip",
    version,
    about = "Strip -fconcepts and -fcoroutines from a compilation database for clang-tidy"
)]
struct Cli {
    /// Compilation database to read
    #[arg(value_name = "IN_COMPILE_COMMANDS_JSON", allow_hyphen_values = true)]
    input: PathBuf,

    /// Where to write the filtered database
    #[arg(value_name = "OUT_JSON", allow_hyphen_values = true)]
    output: PathBuf,
}

fn cmd_strip(input: &Path, output: &Path) -> anyhow::Result<()> {
    let db = compdb::load(input)?;
    let db = filter::filter(db);
    compdb::save(output, &db)
}

fn main() {
    let cli = Cli::parse();
    let exit_code = match cmd_strip(&cli.input, &cli.output) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("[compdb-strip] error: {e:#}");
            1
        }
    };
    std::process::exit(exit_code);
}
