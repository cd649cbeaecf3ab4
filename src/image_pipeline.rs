use dicom::object::DefaultDicomObject;
use dicom::pixeldata::PixelDecoder;
use iced::widget::image::Handle;

/// Renders the first frame of an instance into a small RGBA thumbnail.
pub struct ThumbnailPipeline {
    max_edge: u32,
}

impl ThumbnailPipeline {
    pub fn new(max_edge: u32) -> Self {
        Self {
            max_edge: max_edge.max(1),
        }
    }

    pub fn render(&self, object: &DefaultDicomObject) -> Result<Option<Handle>, String> {
        let decoded = object
            .decode_pixel_data()
            .map_err(|err| format!("Failed to decode pixel data: {err}"))?;

        if decoded.number_of_frames() == 0 {
            return Ok(None);
        }

        let image = decoded
            .to_dynamic_image(0)
            .map_err(|err| format!("Failed to convert first frame: {err}"))?;
        let (width, height) = self.fitted_size(image.width(), image.height());
        if width == 0 || height == 0 {
            return Ok(None);
        }
        let rgba = image.thumbnail_exact(width, height).into_rgba8();
        let (width, height) = rgba.dimensions();
        Ok(Some(Handle::from_rgba(width, height, rgba.into_raw())))
    }

    /// Size a frame of `width` x `height` takes once scaled to fit the
    /// thumbnail box, keeping its aspect ratio.
    pub fn fitted_size(&self, width: u32, height: u32) -> (u32, u32) {
        if width == 0 || height == 0 {
            return (0, 0);
        }
        if width <= self.max_edge && height <= self.max_edge {
            return (width, height);
        }

        let scale = f64::from(self.max_edge) / f64::from(width.max(height));
        let scaled = |value: u32| ((f64::from(value) * scale).round() as u32).max(1);
        (scaled(width), scaled(height))
    }
}
