#[macro_use]
extern crate lazy_static;

#[macro_use]
pub mod macros;
pub mod dataset;
pub mod error;
pub mod ground_truth;
pub mod image_ops;
pub mod layout;
pub mod options;
pub mod reader;
pub mod utils;

pub use dataset::{Dataset, Image, Label, PixelRgb, Rectangle};
pub use error::IcdarError;
pub use ground_truth::{read_label, Delimiter};
pub use image_ops::read_image;
pub use layout::{DatasetLayout, SplitLayout, ICDAR_2013};
pub use reader::{read_2013_dataset, read_dataset, read_split, ReadOptions};
