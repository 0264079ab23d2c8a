use stwno_mensa_rs::cache_operations::Paths;
use stwno_mensa_rs::shared_main::{logger_init, run, RunFlags};

use clap::Parser;
use std::io::{self, Write};
use std::process::exit;

/// Prints this week's meal plan of a Studentenwerk Niederbayern/Oberpfalz canteen.
/// {n}Canteen and price category are read from the config file.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Clear config and cache, then recreate the default config
    #[arg(short = 'c')]
    clear: bool,
    /// Force downloading/updating the canteen data
    #[arg(short = 'd')]
    download: bool,
    /// Only print today's meals
    #[arg(short = 't')]
    today: bool,
    /// Disable colored output
    #[arg(short = 'n')]
    no_color: bool,
    /// Enable verbose logging{n}[SETS env: RUST_LOG=debug]
    #[arg(short, long)]
    verbose: bool,
}

impl From<&Args> for RunFlags {
    fn from(args: &Args) -> Self {
        RunFlags {
            clear: args.clear,
            force_download: args.download,
            today_only: args.today,
            no_color: args.no_color,
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = Args::parse();

    if args.verbose {
        std::env::set_var("RUST_LOG", "debug");
    }
    logger_init(module_path!());

    let paths = match Paths::from_user_dirs() {
        Ok(paths) => paths,
        Err(e) => {
            log::error!("{}", e);
            exit(1);
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = run(&paths, RunFlags::from(&args), chrono::Local::now(), &mut out).await {
        flush_partial_output(&mut out);
        log::error!("{:#}", e);
        exit(1);
    }
}

/// Gets whatever was printed before a failure out ahead of the error log.
fn flush_partial_output<W: Write>(out: &mut W) {
    if let Err(e) = out.flush() {
        log::warn!("Could not flush output: {}", e);
    }
}
