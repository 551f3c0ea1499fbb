use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, LineWriter, Write};
use std::process;

use log::error;
use wordseg_rs::{Segmenter, WordsegError};

fn run(
    dict_filename: &str,
    input_filename: &str,
    output_filename: &str,
) -> Result<(), WordsegError> {
    let mut segmenter = Segmenter::new();
    segmenter.use_dict_file(dict_filename)?;

    let io_error = |path: &str| {
        let path = path.to_string();
        move |source: io::Error| WordsegError::Io {
            path: path.into(),
            source,
        }
    };

    let input_file = File::open(input_filename).map_err(io_error(input_filename))?;
    let lines = io::BufReader::new(input_file).lines();

    let mut opts = OpenOptions::new();
    opts.create(true).write(true).truncate(true);
    let output_file = opts.open(output_filename).map_err(io_error(output_filename))?;
    let mut writer = LineWriter::new(output_file);

    for line in lines {
        let line = line.map_err(io_error(input_filename))?;
        let tokens = segmenter.segment_text(&line);
        writeln!(writer, "{}", tokens.join(",")).map_err(io_error(output_filename))?;
    }
    writer.flush().map_err(io_error(output_filename))
}

fn main() {
    env_logger::init();
    let args: Vec<_> = std::env::args().collect();
    if args.len() != 4 {
        eprintln!("usage: {} <dictionary> <input> <output>", args[0]);
        process::exit(2);
    }
    if let Err(e) = run(&args[1], &args[2], &args[3]) {
        error!("{}", e);
        process::exit(1);
    }
}
