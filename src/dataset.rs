#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct PixelRgb {
  pub r: u8,
  pub g: u8,
  pub b: u8,
}

/// A decoded image, pixels stored row by row.
#[derive(Clone, Debug, PartialEq)]
pub struct Image {
  width: u32,
  height: u32,
  pixels: Vec<PixelRgb>,
}

impl Image {
  /// Returns `None` when `pixels` doesn't hold exactly `width * height` values.
  pub fn from_pixels(width: u32, height: u32, pixels: Vec<PixelRgb>) -> Option<Image> {
    if pixels.len() as u64 != width as u64 * height as u64 {
      return None;
    }
    Some(Image {
      width,
      height,
      pixels,
    })
  }

  pub fn width(&self) -> u32 {
    self.width
  }

  pub fn height(&self) -> u32 {
    self.height
  }

  pub fn pixels(&self) -> &[PixelRgb] {
    &self.pixels
  }

  pub fn pixel(&self, x: u32, y: u32) -> Option<PixelRgb> {
    if x >= self.width || y >= self.height {
      return None;
    }
    self
      .pixels
      .get(y as usize * self.width as usize + x as usize)
      .copied()
  }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rectangle {
  pub left: usize,
  pub top: usize,
  pub right: usize,
  pub bottom: usize,
  pub text: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Label {
  pub rectangles: Vec<Rectangle>,
}

impl Label {
  pub fn len(&self) -> usize {
    self.rectangles.len()
  }

  pub fn is_empty(&self) -> bool {
    self.rectangles.is_empty()
  }
}

/// Training and test splits, each kept as a pair of index-aligned sequences.
#[derive(Debug, Default)]
pub struct Dataset {
  training_images: Vec<Image>,
  training_labels: Vec<Label>,
  test_images: Vec<Image>,
  test_labels: Vec<Label>,
}

impl Dataset {
  pub(crate) fn new(
    (training_images, training_labels): (Vec<Image>, Vec<Label>),
    (test_images, test_labels): (Vec<Image>, Vec<Label>),
  ) -> Dataset {
    debug_assert_eq!(training_images.len(), training_labels.len());
    debug_assert_eq!(test_images.len(), test_labels.len());
    Dataset {
      training_images,
      training_labels,
      test_images,
      test_labels,
    }
  }

  pub fn training_images(&self) -> &[Image] {
    &self.training_images
  }

  pub fn training_labels(&self) -> &[Label] {
    &self.training_labels
  }

  pub fn test_images(&self) -> &[Image] {
    &self.test_images
  }

  pub fn test_labels(&self) -> &[Label] {
    &self.test_labels
  }

  pub fn training_len(&self) -> usize {
    self.training_images.len()
  }

  pub fn test_len(&self) -> usize {
    self.test_images.len()
  }

  /// Drops training pairs past `new_size`. Never grows the split.
  pub fn resize_training(&mut self, new_size: usize) {
    self.training_images.truncate(new_size);
    self.training_labels.truncate(new_size);
  }

  /// Drops test pairs past `new_size`. Never grows the split.
  pub fn resize_test(&mut self, new_size: usize) {
    self.test_images.truncate(new_size);
    self.test_labels.truncate(new_size);
  }
}
