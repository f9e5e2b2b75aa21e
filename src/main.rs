//! Build a polygon from typed or file supplied points, then record its area.

use clap::Parser;
use polygen::{io::ReportStore, *};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "polygen")]
#[command(about = "Build a simple polygon point by point and record its area", long_about = None)]
struct Cli {
    /// Enter points at the prompt instead of reading an input file
    #[arg(short, long)]
    manual: bool,

    /// Relative location of the input file
    #[arg(short, long)]
    inputfile: Option<PathBuf>,

    /// Report history file
    #[arg(short, long, default_value = "data/area_results.dat")]
    store: PathBuf,

    /// Tolerance when comparing points and intersections
    #[arg(short, long, default_value_t = DEFAULT_TOLERANCE)]
    tolerance: f64,

    /// Print the stored report history and exit
    #[arg(long)]
    decode: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let store = ReportStore::new(cli.store);

    if cli.decode {
        print!("{}", store.read()?);
        return Ok(());
    }

    let gen = PolygonGenerator::new().tolerance(cli.tolerance);
    let polygon = if cli.manual {
        let mut src = Interactive::stdio();
        src.intro()?;
        gen.build(&mut src)?
    } else {
        gen.build(Batch::open(cli.inputfile.unwrap_or_default())?)?
    };

    let report = Report::new(&polygon).to_string();
    print!("{report}");
    store.prepend(&report)?;
    log::info!("report saved to {}", store.path().display());

    Ok(())
}
