use pyseal::{decode::decode_file, encode::encode_file};

use std::process::exit;

use clap::Parser;
use log::error;
use simple_logger::{set_up_color_terminal, SimpleLogger};

#[derive(Debug, Parser, Clone)]
#[command(name = "pyseal", about = "Wraps a source file in a self-decoding loader")]
enum Cli {
    /// Writes encoded_<FILE>, a loader that decodes and runs FILE
    #[command()]
    Encode { file: String },

    /// Prints the source embedded in an encoded artifact
    #[command()]
    Decode { file: String },
}

fn main() {
    set_up_color_terminal();
    let logger = SimpleLogger::new().without_timestamps().with_level(log::LevelFilter::Info);
    let max_level = logger.max_level();

    log::set_max_level(max_level);
    if let Err(err) = log::set_boxed_logger(Box::new(logger)) {
        eprintln!("failed to set up logging: {}", err);
    }

    let args = Cli::parse();

    let res = match args {
        Cli::Encode { file } => encode_file(&file).map(|_| ()),
        Cli::Decode { file } => decode_file(&file),
    };

    if let Err(err) = res {
        error!("{:#}", err);
        exit(1)
    }
}
