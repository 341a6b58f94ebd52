use std::path::PathBuf;

use clap::Parser;
use screencraft::Screencraft;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file with course content, replacing the built-in course
    #[arg(short, long)]
    content: Option<PathBuf>,
}

fn main() {
    pretty_env_logger::init();
    let args = Args::parse();

    let result = match args.content {
        Some(path) => Screencraft::from_json(path),
        None => Screencraft::builtin(),
    };

    let platform = match result {
        Ok(platform) => platform,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = platform.run() {
        eprintln!("Error running screencraft: {}", e);
        std::process::exit(1);
    }
}
