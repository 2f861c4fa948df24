extern crate log;
extern crate log4rs;

use anyhow::Result;
use icdar_reader::measure_time;
use icdar_reader::options::{app, ReaderOptions};
use icdar_reader::{read_dataset, Label};
use log::info;

fn main() -> Result<()> {
    log4rs::init_file("log4rs.yml", Default::default())?;

    let matches = app().get_matches();
    let opts = ReaderOptions::new(&matches)?;
    let dataset = measure_time!(
        "loading dataset",
        || read_dataset(
            opts.training_dir,
            opts.test_dir,
            &opts.layout,
            opts.training_limit,
            opts.test_limit,
            opts.read_options,
        ),
        icdar_reader::macros::LogType::Info
    )?;

    info!(
        "training: {} images, {} rectangles",
        dataset.training_len(),
        count_rectangles(dataset.training_labels())
    );
    info!(
        "test: {} images, {} rectangles",
        dataset.test_len(),
        count_rectangles(dataset.test_labels())
    );

    Ok(())
}

fn count_rectangles(labels: &[Label]) -> usize {
    labels.iter().map(Label::len).sum()
}
