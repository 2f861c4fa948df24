use crate::dataset::{Dataset, Image, Label};
use crate::error::IcdarError;
use crate::ground_truth::read_label;
use crate::image_ops::read_image;
use crate::layout::{DatasetLayout, SplitLayout, ICDAR_2013};
use crate::measure_time;
use log::{debug, error, info};
use rayon::prelude::*;
use std::path::Path;

pub type Split = (Vec<Image>, Vec<Label>);

// Layout ranges can be far larger than the directory behind them.
const MAX_RESERVED_PAIRS: usize = 1024;
const PARALLEL_CHUNK_SIZE: usize = 64;

#[derive(Copy, Clone, Debug, Default)]
pub struct ReadOptions {
    /// Decode the files of a split on the rayon pool.
    pub parallel: bool,
}

/// Reads the ICDAR 2013 training and test splits with default options.
pub fn read_2013_dataset<P: AsRef<Path>, Q: AsRef<Path>>(
    training_dir: P,
    test_dir: Q,
    training_limit: usize,
    test_limit: usize,
) -> Result<Dataset, IcdarError> {
    read_dataset(
        training_dir,
        test_dir,
        &ICDAR_2013,
        training_limit,
        test_limit,
        ReadOptions::default(),
    )
}

/// Reads both splits, a limit of 0 reads the whole configured range.
pub fn read_dataset<P: AsRef<Path>, Q: AsRef<Path>>(
    training_dir: P,
    test_dir: Q,
    layout: &DatasetLayout,
    training_limit: usize,
    test_limit: usize,
    options: ReadOptions,
) -> Result<Dataset, IcdarError> {
    let training_dir = training_dir.as_ref();
    let test_dir = test_dir.as_ref();
    let read_training = || {
        measure_time!("reading training split", || read_split(
            training_dir,
            &layout.training,
            training_limit,
            options
        ))
    };
    let read_test = || {
        measure_time!("reading test split", || read_split(
            test_dir,
            &layout.test,
            test_limit,
            options
        ))
    };
    let dataset = if options.parallel {
        let (training, test) = rayon::join(read_training, read_test);
        Dataset::new(training?, test?)
    } else {
        let training = read_training()?;
        Dataset::new(training, read_test()?)
    };
    info!(
        "Loaded {} training and {} test images",
        dataset.training_len(),
        dataset.test_len()
    );

    Ok(dataset)
}

/// Reads the pairs of one split in ascending index order.
///
/// Reading stops at the first pair whose label or image file can't be opened,
/// so a directory with fewer files than the layout describes gives a shorter
/// split. Any other failure aborts the whole read.
pub fn read_split<P: AsRef<Path>>(
    dir: P,
    layout: &SplitLayout,
    limit: usize,
    options: ReadOptions,
) -> Result<Split, IcdarError> {
    let dir = dir.as_ref();
    let expected = layout.count(limit);
    let mut indices = layout.indices(limit);
    let mut split = (
        Vec::with_capacity(expected.min(MAX_RESERVED_PAIRS)),
        Vec::with_capacity(expected.min(MAX_RESERVED_PAIRS)),
    );
    if options.parallel {
        loop {
            let chunk = indices
                .by_ref()
                .take(PARALLEL_CHUNK_SIZE)
                .collect::<Vec<usize>>();
            if chunk.is_empty() {
                break;
            }
            let pairs = chunk
                .into_par_iter()
                .map(|index| (index, read_pair(dir, layout, index)))
                .collect::<Vec<_>>();
            if !extend_split(&mut split, pairs.into_iter())? {
                break;
            }
        }
    } else {
        extend_split(
            &mut split,
            indices.map(|index| (index, read_pair(dir, layout, index))),
        )?;
    }
    info!(
        "Read {} of {} pairs from {}",
        split.0.len(),
        expected,
        dir.display()
    );

    Ok(split)
}

fn read_pair(dir: &Path, layout: &SplitLayout, index: usize) -> Result<(Label, Image), IcdarError> {
    let label = read_label(layout.label_path(dir, index), layout.delimiter)?;
    let image = read_image(layout.image_path(dir, index))?;
    Ok((label, image))
}

/// Appends pairs in order, returns `false` once a missing file ended the split.
fn extend_split<I>(split: &mut Split, pairs: I) -> Result<bool, IcdarError>
where
    I: Iterator<Item = (usize, Result<(Label, Image), IcdarError>)>,
{
    let (images, labels) = split;
    for (index, pair) in pairs {
        match pair {
            Ok((label, image)) => {
                labels.push(label);
                images.push(image);
            }
            Err(e) if e.is_missing_file() => {
                debug!("Stopped at index {}: {}", index, e);
                return Ok(false);
            }
            Err(e) => {
                error!("Failed reading index {}: {}", index, e);
                return Err(e);
            }
        }
    }

    Ok(true)
}
