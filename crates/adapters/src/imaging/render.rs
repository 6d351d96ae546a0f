use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use edge_pad_application::{ApplicationError, CanvasRenderer, RenderRequest};
use edge_pad_domain::{CanvasFill, PixelRect, RasterFormat, Rgb};
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{
    imageops, ColorType, DynamicImage, GrayImage, ImageEncoder, RgbImage, Rgba, RgbaImage,
};
use log::warn;

use super::ImageCrateCodec;

impl CanvasRenderer for ImageCrateCodec {
    fn render(&self, request: &RenderRequest<'_>) -> Result<(), ApplicationError> {
        let plan = request.plan;
        self.check_canvas(plan.target_width, plan.target_height)?;
        let source = self
            .decoded(request.source)
            .map_err(ApplicationError::DimensionRead)?;

        let mut canvas = paint_canvas(plan.target_width, plan.target_height, &request.fill);
        let (x, y) = plan.source_offset();
        imageops::overlay(&mut canvas, &source.to_rgba8(), i64::from(x), i64::from(y));

        let flattened = Flattened::from_canvas(canvas, is_grayscale(source.color()));
        write_output(request.output, |writer| {
            encode(&flattened, writer, request.format, request.jpeg_quality)
        })
    }

    fn copy_verbatim(&self, source: &Path, output: &Path) -> Result<(), ApplicationError> {
        if let Err(error) = fs::copy(source, output) {
            remove_partial(output);
            return Err(ApplicationError::Io(format!(
                "failed to copy {:?} to {:?}: {error}",
                source, output
            )));
        }
        Ok(())
    }
}

/// Opaque canvas pixels in the narrowest layout that still holds the source.
enum Flattened {
    Rgb(RgbImage),
    Luma(GrayImage),
}

impl Flattened {
    fn from_canvas(canvas: RgbaImage, grayscale: bool) -> Self {
        let canvas = DynamicImage::ImageRgba8(canvas);
        if grayscale {
            Self::Luma(canvas.to_luma8())
        } else {
            Self::Rgb(canvas.to_rgb8())
        }
    }

    fn parts(&self) -> (&[u8], u32, u32, ColorType) {
        match self {
            Self::Rgb(image) => (image.as_raw(), image.width(), image.height(), ColorType::Rgb8),
            Self::Luma(image) => (image.as_raw(), image.width(), image.height(), ColorType::L8),
        }
    }
}

fn is_grayscale(color: ColorType) -> bool {
    matches!(
        color,
        ColorType::L8 | ColorType::La8 | ColorType::L16 | ColorType::La16
    )
}

fn opaque(color: Rgb) -> Rgba<u8> {
    let [red, green, blue] = color.0;
    Rgba([red, green, blue, 255])
}

fn paint_canvas(width: u32, height: u32, fill: &CanvasFill) -> RgbaImage {
    match *fill {
        CanvasFill::Uniform(color) => RgbaImage::from_pixel(width, height, opaque(color)),
        CanvasFill::TwoTone {
            background,
            secondary,
            secondary_region,
        } => {
            let mut canvas = RgbaImage::from_pixel(width, height, opaque(background));
            fill_rect(&mut canvas, secondary_region, opaque(secondary));
            canvas
        }
    }
}

fn fill_rect(canvas: &mut RgbaImage, rect: PixelRect, color: Rgba<u8>) {
    let right = rect.x.saturating_add(rect.width).min(canvas.width());
    let bottom = rect.y.saturating_add(rect.height).min(canvas.height());
    for y in rect.y..bottom {
        for x in rect.x..right {
            canvas.put_pixel(x, y, color);
        }
    }
}

/// Creates `output` and hands it to `write`; removes the file if anything fails.
fn write_output<F>(output: &Path, write: F) -> Result<(), ApplicationError>
where
    F: FnOnce(&mut BufWriter<File>) -> Result<(), ApplicationError>,
{
    let file = File::create(output)
        .map_err(|error| ApplicationError::Io(format!("failed to create {:?}: {error}", output)))?;
    let mut writer = BufWriter::new(file);

    let result = write(&mut writer).and_then(|()| {
        writer
            .flush()
            .map_err(|error| ApplicationError::Io(error.to_string()))
    });
    drop(writer);
    if result.is_err() {
        remove_partial(output);
    }
    result
}

fn encode<W: Write>(
    image: &Flattened,
    mut writer: W,
    format: RasterFormat,
    jpeg_quality: u8,
) -> Result<(), ApplicationError> {
    let (buf, width, height, color) = image.parts();
    let encoded = match format {
        RasterFormat::Jpeg => JpegEncoder::new_with_quality(&mut writer, jpeg_quality)
            .write_image(buf, width, height, color),
        RasterFormat::Png => PngEncoder::new(&mut writer).write_image(buf, width, height, color),
    };
    encoded.map_err(|error| ApplicationError::Encode(error.to_string()))?;
    writer
        .flush()
        .map_err(|error| ApplicationError::Io(error.to_string()))
}

fn remove_partial(output: &Path) {
    if !output.exists() {
        return;
    }
    if let Err(error) = fs::remove_file(output) {
        warn!("failed to remove partial output {:?}: {error}", output);
    }
}
