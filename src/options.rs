use crate::layout::DatasetLayout;
use crate::reader::ReadOptions;
use crate::utils::parse_number;
use anyhow::{anyhow, Result};

pub const DEFAULT_TRAINING_DIR: &str = "./icdar2013/training";
pub const DEFAULT_TEST_DIR: &str = "./icdar2013/test";

#[derive(Debug)]
pub struct ReaderOptions<'a> {
    pub training_dir: &'a str,
    pub test_dir: &'a str,
    pub training_limit: usize,
    pub test_limit: usize,
    pub layout: DatasetLayout,
    pub read_options: ReadOptions,
}

impl Default for ReaderOptions<'_> {
    fn default() -> Self {
        Self {
            training_dir: DEFAULT_TRAINING_DIR,
            test_dir: DEFAULT_TEST_DIR,
            training_limit: 0,
            test_limit: 0,
            layout: DatasetLayout::icdar_2013(),
            read_options: ReadOptions::default(),
        }
    }
}

impl<'a> ReaderOptions<'a> {
    pub fn new(args: &'a clap::ArgMatches) -> Result<Self> {
        let mut opts = Self::default();
        if let Some(path) = args.value_of("training-dir") {
            opts.training_dir = path;
        }
        if let Some(path) = args.value_of("test-dir") {
            opts.test_dir = path;
        }
        if let Some(limit) = args.value_of("training-limit") {
            opts.training_limit = parse_number(limit, "training limit")?;
        }
        if let Some(limit) = args.value_of("test-limit") {
            opts.test_limit = parse_number(limit, "test limit")?;
        }
        if let Some(path) = args.value_of("layout") {
            opts.layout = DatasetLayout::from_json_file(path)?;
        }
        if args.is_present("parallel") {
            opts.read_options.parallel = true;
        }
        if opts.training_dir.is_empty() || opts.test_dir.is_empty() {
            return Err(anyhow!("Dataset directories must not be empty"));
        }

        Ok(opts)
    }
}

pub fn app<'a, 'b>() -> clap::App<'a, 'b> {
    use clap::{App, Arg};
    App::new("icdar-reader")
        .about("Loads an ICDAR text detection dataset and reports what was read")
        .arg(
            Arg::with_name("training-dir")
                .long("training-dir")
                .takes_value(true)
                .help("Directory with the training images and ground truth files"),
        )
        .arg(
            Arg::with_name("test-dir")
                .long("test-dir")
                .takes_value(true)
                .help("Directory with the test images and ground truth files"),
        )
        .arg(
            Arg::with_name("training-limit")
                .long("training-limit")
                .takes_value(true)
                .help("Maximum number of training pairs, 0 reads all"),
        )
        .arg(
            Arg::with_name("test-limit")
                .long("test-limit")
                .takes_value(true)
                .help("Maximum number of test pairs, 0 reads all"),
        )
        .arg(
            Arg::with_name("layout")
                .long("layout")
                .takes_value(true)
                .help("JSON file describing file names and index ranges (ICDAR 2013 by default)"),
        )
        .arg(
            Arg::with_name("parallel")
                .long("parallel")
                .help("Decode files on all available cores"),
        )
}
