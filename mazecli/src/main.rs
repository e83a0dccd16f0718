mod error;
mod logging;
mod report;
mod settings;

use std::path::PathBuf;

use clap::Parser;
use mazecore::Maze;

use error::CliError;
use settings::Settings;

#[derive(Parser, Debug)]
#[clap(version, author, about, name = "mazecli")]
struct Args {
    #[clap(help = "Number of rows, defaults to the value in settings")]
    rows: Option<usize>,
    #[clap(help = "Number of columns, defaults to the value in settings")]
    cols: Option<usize>,
    #[clap(short, long, help = "Seed for reproducible generation")]
    seed: Option<u64>,
    #[clap(short, long, help = "Path to the settings file")]
    config: Option<PathBuf>,
    #[clap(long, action, help = "Carve without randomness")]
    no_rng: bool,
    #[clap(short, long, action, help = "Print wall flags of every cell")]
    walls: bool,
    #[clap(short, long, action, help = "Log debug messages to stderr")]
    verbose: bool,
    #[clap(long, action, help = "Show config path and quit")]
    show_config_path: bool,
    #[clap(long, action, help = "Reset config to default and quit")]
    reset_config: bool,
}

fn main() -> Result<(), CliError> {
    let args = Args::parse();
    logging::init(args.verbose);

    let settings_path = args.config.clone().unwrap_or_else(Settings::default_path);

    if args.show_config_path {
        if let Some(s) = settings_path.to_str() {
            println!("{}", s);
        } else {
            println!("{:?}", settings_path);
        }
        return Ok(());
    }

    if args.reset_config {
        return Settings::reset_config(&settings_path);
    }

    better_panic::install();

    let settings = Settings::load(&settings_path)?;
    let spec = settings.maze_spec(args.rows, args.cols, args.seed, args.no_rng);
    log::debug!("maze spec: {:?}", spec);

    let mut maze = Maze::from_spec(&spec)?;
    maze.generate()?;
    let path = maze.solve()?.to_vec();

    print!("{}", report::report(&maze, &path, args.walls)?);

    Ok(())
}
