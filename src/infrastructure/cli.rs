use std::path::PathBuf;

use clap::Parser;

use crate::utils::version;

#[derive(Parser, Debug)]
#[command(author, version = version(), about)]
pub struct Cli {
    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Tick rate, i.e. number of ticks per second",
        default_value_t = 4.0
    )]
    pub tick_rate: f64,

    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Frame rate, i.e. number of frames per second",
        default_value_t = 30.0
    )]
    pub frame_rate: f64,

    #[arg(short, long, value_name = "FILE", help = "Load the deck from a JSON5 file")]
    pub deck: Option<PathBuf>,

    #[arg(
        short,
        long,
        value_name = "SLIDE",
        help = "Open at this 1-based slide; ignored when out of range"
    )]
    pub start: Option<i64>,

    #[arg(long, help = "Write the print layout of every slide to stdout and exit")]
    pub print: bool,

    #[arg(
        long,
        value_name = "COLUMNS",
        help = "Line width used by --print",
        default_value_t = 80
    )]
    pub width: u16,
}
