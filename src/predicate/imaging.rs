//! Image predicates, decoded with the `image` crate.
//!
//! Extension checks are plain glob matches and never open the file. Dimension
//! checks read only the image header. Tone checks read the palette of indexed
//! GIF and PNG files and decode every other image in full.

use super::{GlobMatch, Or, Predicate};
use crate::error::FinderError;
use crate::types::Candidate;
use image::error::{DecodingError, ImageError, ImageFormatHint};
use image::{ImageFormat, RgbImage};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::LazyLock;

const IMAGE_PATTERNS: [&str; 6] = ["*.jpg", "*.jpeg", "*.png", "*.gif", "*.bmp", "*.tiff"];

/// Deviation at or above which an image counts as color.
const COLOR_DEVIATION: f64 = 1.0;

static IMAGE_EXTENSIONS: LazyLock<Or> = LazyLock::new(|| {
    let mut extensions = Or::default();
    for pattern in IMAGE_PATTERNS {
        extensions.push(GlobMatch::new(pattern).expect("IMAGE_PATTERNS glob is invalid"));
    }
    extensions
});

/// Accepts paths with a common image extension. The check is case-sensitive.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageFilter;

impl ImageFilter {
    pub fn new() -> Self {
        Self
    }
}

impl Predicate for ImageFilter {
    fn accepts(&self, candidate: &Candidate<'_>) -> Result<bool, FinderError> {
        IMAGE_EXTENSIONS.accepts(candidate)
    }
}

/// Accepts images whose pixel dimensions fall within the configured bounds.
///
/// With no bounds set this is an [`ImageFilter`] and the file is never opened.
/// A bound of zero, minimum or maximum, counts as unset.
#[derive(Debug, Default)]
pub struct ImageDimensionFilter {
    images: ImageFilter,
    min_width: u32,
    min_height: u32,
    max_width: Option<u32>,
    max_height: Option<u32>,
}

impl ImageDimensionFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn min_width(mut self, width: u32) -> Self {
        self.min_width = width;
        self
    }

    pub fn min_height(mut self, height: u32) -> Self {
        self.min_height = height;
        self
    }

    pub fn max_width(mut self, width: u32) -> Self {
        self.max_width = (width > 0).then_some(width);
        self
    }

    pub fn max_height(mut self, height: u32) -> Self {
        self.max_height = (height > 0).then_some(height);
        self
    }

    fn is_bounded(&self) -> bool {
        self.min_width > 0
            || self.min_height > 0
            || self.max_width.is_some()
            || self.max_height.is_some()
    }

    fn fits(&self, width: u32, height: u32) -> bool {
        width >= self.min_width
            && height >= self.min_height
            && self.max_width.is_none_or(|max| width <= max)
            && self.max_height.is_none_or(|max| height <= max)
    }
}

impl Predicate for ImageDimensionFilter {
    fn accepts(&self, candidate: &Candidate<'_>) -> Result<bool, FinderError> {
        if !self.images.accepts(candidate)? {
            return Ok(false);
        }
        if !self.is_bounded() {
            return Ok(true);
        }
        let path = candidate.full_path();
        let (width, height) =
            image::image_dimensions(&path).map_err(|e| FinderError::image(&*path, e))?;
        Ok(self.fits(width, height))
    }
}

/// Accepts images without significant color.
///
/// Indexed GIF and PNG files are greyscale when every palette entry has equal red,
/// green and blue, whether or not the pixels use that entry. Luminance images are
/// always greyscale. Anything else is greyscale when the sample standard deviation
/// of its red, green and blue channel means is below 1.0; alpha is ignored.
#[derive(Debug, Default)]
pub struct GreyscaleImageFilter(ImageFilter);

impl GreyscaleImageFilter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Predicate for GreyscaleImageFilter {
    fn accepts(&self, candidate: &Candidate<'_>) -> Result<bool, FinderError> {
        if !self.0.accepts(candidate)? {
            return Ok(false);
        }
        is_greyscale_image(&candidate.full_path())
    }
}

/// Accepts images with significant color: the complement of
/// [`GreyscaleImageFilter`] among images, so a deviation of exactly 1.0 is color.
#[derive(Debug, Default)]
pub struct ColorImageFilter(ImageFilter);

impl ColorImageFilter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Predicate for ColorImageFilter {
    fn accepts(&self, candidate: &Candidate<'_>) -> Result<bool, FinderError> {
        if !self.0.accepts(candidate)? {
            return Ok(false);
        }
        Ok(!is_greyscale_image(&candidate.full_path())?)
    }
}

fn is_greyscale_image(path: &Path) -> Result<bool, FinderError> {
    if let Some(palette) = read_palette(path)? {
        return Ok(is_greyscale_palette(&palette));
    }
    let image = image::open(path).map_err(|e| FinderError::image(path, e))?;
    if !image.color().has_color() {
        return Ok(true);
    }
    let means = channel_means(&image.to_rgb8());
    Ok(is_greyscale_deviation(channel_deviation(means)))
}

/// Packed RGB palette of an indexed image, or `None` for direct-color formats.
fn read_palette(path: &Path) -> Result<Option<Vec<u8>>, FinderError> {
    match ImageFormat::from_path(path) {
        Ok(ImageFormat::Gif) => gif_palette(path),
        Ok(ImageFormat::Png) => png_palette(path),
        _ => Ok(None),
    }
}

// The first frame's local palette wins over the global one.
fn gif_palette(path: &Path) -> Result<Option<Vec<u8>>, FinderError> {
    let mut decoder = gif::DecodeOptions::new()
        .read_info(open_buffered(path)?)
        .map_err(|e| palette_error(path, ImageFormat::Gif, e))?;
    let local = decoder
        .next_frame_info()
        .map_err(|e| palette_error(path, ImageFormat::Gif, e))?
        .and_then(|frame| frame.palette.clone());
    Ok(local.or_else(|| decoder.global_palette().map(<[u8]>::to_vec)))
}

fn png_palette(path: &Path) -> Result<Option<Vec<u8>>, FinderError> {
    let reader = png::Decoder::new(open_buffered(path)?)
        .read_info()
        .map_err(|e| palette_error(path, ImageFormat::Png, e))?;
    let info = reader.info();
    if info.color_type != png::ColorType::Indexed {
        return Ok(None);
    }
    Ok(info.palette.as_deref().map(<[u8]>::to_vec))
}

fn open_buffered(path: &Path) -> Result<BufReader<File>, FinderError> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|e| FinderError::io(path, e))
}

fn palette_error(
    path: &Path,
    format: ImageFormat,
    err: impl Into<Box<dyn std::error::Error + Send + Sync>>,
) -> FinderError {
    let source = ImageError::Decoding(DecodingError::new(ImageFormatHint::Exact(format), err));
    FinderError::image(path, source)
}

/// Whether every entry of a packed RGB palette is a shade of grey.
pub fn is_greyscale_palette(palette: &[u8]) -> bool {
    palette
        .chunks_exact(3)
        .all(|rgb| rgb[0] == rgb[1] && rgb[1] == rgb[2])
}

fn channel_means(image: &RgbImage) -> [f64; 3] {
    let count = u64::from(image.width()) * u64::from(image.height());
    if count == 0 {
        return [0.0; 3];
    }
    let mut sums = [0u64; 3];
    for pixel in image.pixels() {
        for (sum, sample) in sums.iter_mut().zip(pixel.0) {
            *sum += u64::from(sample);
        }
    }
    sums.map(|sum| sum as f64 / count as f64)
}

/// Sample standard deviation (Bessel-corrected) of three channel means.
pub fn channel_deviation(means: [f64; 3]) -> f64 {
    let mean = means.iter().sum::<f64>() / 3.0;
    let squares: f64 = means.iter().map(|m| (m - mean).powi(2)).sum();
    (squares / 2.0).sqrt()
}

/// Whether a channel-mean deviation counts as greyscale.
pub fn is_greyscale_deviation(deviation: f64) -> bool {
    deviation < COLOR_DEVIATION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_means_have_no_deviation() {
        assert_eq!(channel_deviation([42.0, 42.0, 42.0]), 0.0);
    }

    #[test]
    fn deviation_is_bessel_corrected() {
        // mean 1, squared distances 1 + 0 + 1, divided by n - 1
        assert!((channel_deviation([0.0, 1.0, 2.0]) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn boundary_deviation_is_color() {
        assert!(!is_greyscale_deviation(1.0));
        assert!(is_greyscale_deviation(0.999));
        assert!(!is_greyscale_deviation(1.001));
    }

    #[test]
    fn dimension_bounds_are_inclusive() {
        let filter = ImageDimensionFilter::new().min_width(24).max_width(24);
        assert!(filter.is_bounded());
        assert!(filter.fits(24, 100));
        assert!(!filter.fits(25, 100));
        assert!(!filter.fits(23, 100));
    }

    #[test]
    fn zero_bounds_are_unset() {
        let filter = ImageDimensionFilter::new().min_width(0).min_height(0);
        assert!(!filter.is_bounded());
        let filter = ImageDimensionFilter::new().max_width(0).max_height(0);
        assert!(!filter.is_bounded());
        assert!(filter.fits(640, 480));
    }

    #[test]
    fn palette_needs_every_entry_grey() {
        assert!(is_greyscale_palette(&[0, 0, 0, 128, 128, 128, 255, 255, 255]));
        assert!(!is_greyscale_palette(&[0, 0, 0, 255, 0, 0]));
        assert!(!is_greyscale_palette(&[255, 0, 0, 0, 255, 0, 0, 0, 255]));
        assert!(is_greyscale_palette(&[]));
    }
}
