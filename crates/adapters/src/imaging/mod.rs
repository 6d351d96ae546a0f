mod render;

use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use edge_pad_application::{ApplicationError, DimensionReader, EdgeSampler};
use edge_pad_domain::{ImageDimensions, PixelRect, Rgb};
use image::io::{Limits, Reader as ImageReader};
use image::{DynamicImage, GenericImageView};

/// Imaging ports backed by the `image` crate.
///
/// Keeps the most recently decoded source around so sampling both edges and
/// rendering decode each file only once. Target canvases are checked against
/// `limits` before they are allocated.
#[derive(Debug, Default)]
pub struct ImageCrateCodec {
    last_decoded: RefCell<Option<(PathBuf, Rc<DynamicImage>)>>,
    limits: Limits,
}

impl ImageCrateCodec {
    pub fn with_limits(limits: Limits) -> Self {
        Self {
            last_decoded: RefCell::default(),
            limits,
        }
    }

    fn check_canvas(&self, width: u32, height: u32) -> Result<(), ApplicationError> {
        let mut limits = self.limits.clone();
        limits
            .check_dimensions(width, height)
            .and_then(|()| limits.reserve(u64::from(width) * u64::from(height) * 4))
            .map_err(|error| {
                ApplicationError::ResourceLimit(format!("canvas {width}x{height}: {error}"))
            })
    }

    fn decoded(&self, path: &Path) -> Result<Rc<DynamicImage>, String> {
        if let Some((cached_path, image)) = self.last_decoded.borrow().as_ref() {
            if cached_path == path {
                return Ok(Rc::clone(image));
            }
        }

        let image = ImageReader::open(path)
            .map_err(|error| format!("failed to open {:?}: {error}", path))?
            .with_guessed_format()
            .map_err(|error| format!("failed to detect format of {:?}: {error}", path))?
            .decode()
            .map_err(|error| format!("failed to decode {:?}: {error}", path))?;
        let image = Rc::new(image);
        *self.last_decoded.borrow_mut() = Some((path.to_path_buf(), Rc::clone(&image)));
        Ok(image)
    }
}

impl DimensionReader for ImageCrateCodec {
    fn read_dimensions(&self, path: &Path) -> Result<ImageDimensions, ApplicationError> {
        let (width, height) = ImageReader::open(path)
            .map_err(|error| ApplicationError::DimensionRead(format!("{:?}: {error}", path)))?
            .with_guessed_format()
            .map_err(|error| ApplicationError::DimensionRead(format!("{:?}: {error}", path)))?
            .into_dimensions()
            .map_err(|error| ApplicationError::DimensionRead(format!("{:?}: {error}", path)))?;
        Ok(ImageDimensions::new(width, height)?)
    }
}

impl EdgeSampler for ImageCrateCodec {
    fn sample_strip_average(
        &self,
        path: &Path,
        strip: PixelRect,
    ) -> Result<Rgb, ApplicationError> {
        let image = self.decoded(path).map_err(ApplicationError::Sampling)?;
        average_rgb(&image, strip).map_err(ApplicationError::Sampling)
    }
}

/// Mean of the red, green and blue channels over `strip`; alpha is ignored.
fn average_rgb(image: &DynamicImage, strip: PixelRect) -> Result<Rgb, String> {
    let (width, height) = image.dimensions();
    let fits = strip.width > 0
        && strip.height > 0
        && u64::from(strip.x) + u64::from(strip.width) <= u64::from(width)
        && u64::from(strip.y) + u64::from(strip.height) <= u64::from(height);
    if !fits {
        return Err(format!(
            "strip {}x{}+{}+{} lies outside {width}x{height}",
            strip.width, strip.height, strip.x, strip.y
        ));
    }

    let region = image
        .crop_imm(strip.x, strip.y, strip.width, strip.height)
        .to_rgb8();
    let mut sums = [0_u64; 3];
    for pixel in region.pixels() {
        for (sum, channel) in sums.iter_mut().zip(pixel.0) {
            *sum += u64::from(channel);
        }
    }

    let count = strip.area();
    let mean = |sum: u64| ((sum + count / 2) / count) as u8;
    Ok(Rgb([mean(sums[0]), mean(sums[1]), mean(sums[2])]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgb as PixelRgb, Rgba};
    use tempfile::TempDir;

    fn striped_png(dir: &TempDir, name: &str) -> PathBuf {
        let path = dir.path().join(name);
        let img = ImageBuffer::from_fn(30, 20, |_x, y| match y {
            0 => PixelRgb([200_u8, 0, 0]),
            19 => PixelRgb([0_u8, 0, 200]),
            _ => PixelRgb([0_u8, 120, 0]),
        });
        img.save(&path).expect("png should be saved");
        path
    }

    #[test]
    fn reads_dimensions_without_full_decode() {
        let dir = TempDir::new().expect("tempdir should be created");
        let path = striped_png(&dir, "sample.png");

        let dims = ImageCrateCodec::default()
            .read_dimensions(&path)
            .expect("dimensions should be read");
        assert_eq!((dims.width(), dims.height()), (30, 20));
    }

    #[test]
    fn corrupt_file_is_a_dimension_read_failure() {
        let dir = TempDir::new().expect("tempdir should be created");
        let path = dir.path().join("broken.jpg");
        std::fs::write(&path, b"definitely not a jpeg").expect("write");

        let result = ImageCrateCodec::default().read_dimensions(&path);
        assert!(matches!(result, Err(ApplicationError::DimensionRead(_))));
    }

    #[test]
    fn samples_top_and_bottom_rows() {
        let dir = TempDir::new().expect("tempdir should be created");
        let path = striped_png(&dir, "sample.png");
        let codec = ImageCrateCodec::default();

        let top = codec
            .sample_strip_average(
                &path,
                PixelRect {
                    x: 0,
                    y: 0,
                    width: 30,
                    height: 1,
                },
            )
            .expect("top strip");
        let bottom = codec
            .sample_strip_average(
                &path,
                PixelRect {
                    x: 0,
                    y: 19,
                    width: 30,
                    height: 1,
                },
            )
            .expect("bottom strip");
        assert_eq!(top, Rgb([200, 0, 0]));
        assert_eq!(bottom, Rgb([0, 0, 200]));
    }

    #[test]
    fn averaging_rounds_and_ignores_alpha() {
        let dir = TempDir::new().expect("tempdir should be created");
        let path = dir.path().join("alpha.png");
        let img = ImageBuffer::from_fn(2, 1, |x, _y| {
            if x == 0 {
                Rgba([0_u8, 10, 100, 0])
            } else {
                Rgba([255_u8, 11, 100, 255])
            }
        });
        img.save(&path).expect("png should be saved");

        let color = ImageCrateCodec::default()
            .sample_strip_average(
                &path,
                PixelRect {
                    x: 0,
                    y: 0,
                    width: 2,
                    height: 1,
                },
            )
            .expect("strip");
        assert_eq!(color, Rgb([128, 11, 100]));
    }

    #[test]
    fn out_of_bounds_strip_is_a_sampling_failure() {
        let dir = TempDir::new().expect("tempdir should be created");
        let path = striped_png(&dir, "sample.png");

        let result = ImageCrateCodec::default().sample_strip_average(
            &path,
            PixelRect {
                x: 0,
                y: 20,
                width: 30,
                height: 1,
            },
        );
        assert!(matches!(result, Err(ApplicationError::Sampling(_))));
    }
}
