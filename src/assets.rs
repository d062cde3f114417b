//! Landing page illustration.
//!
//! The PNG is decoded once at start-up, scaled (nearest neighbour) to fit its
//! slot and converted to RGB565. Any failure is an [`AssetError`]; the caller
//! logs it and draws the fallback panel instead. Nothing is retried.

use std::path::{Path, PathBuf};

use embedded_graphics::pixelcolor::{Rgb565, Rgb888};
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use image::RgbImage;
use thiserror::Error;

/// Errors loading an image asset.
#[derive(Error, Debug)]
pub enum AssetError {
    #[error("failed to load {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("{} has no pixels", path.display())]
    Empty { path: PathBuf },
}

/// A decoded, pre-scaled RGB565 image.
#[derive(Clone, Debug)]
pub struct ImageAsset {
    size: Size,
    pixels: Vec<Rgb565>,
}

impl ImageAsset {
    /// Decode `path` and scale it to fit within `max`, keeping the aspect ratio.
    pub fn load(
        path: impl AsRef<Path>,
        max: Size,
    ) -> Result<Self, AssetError> {
        let path = path.as_ref();
        let decoded = image::open(path).map_err(|source| AssetError::Decode {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_rgb(&decoded.to_rgb8(), max).ok_or_else(|| AssetError::Empty {
            path: path.to_path_buf(),
        })
    }

    /// Scale an in-memory image. `None` if either image or slot is empty.
    pub fn from_rgb(
        image: &RgbImage,
        max: Size,
    ) -> Option<Self> {
        let source = Size::new(image.width(), image.height());
        let size = fit_size(source, max)?;

        let pixels = (0..size.height)
            .flat_map(|y| (0..size.width).map(move |x| (x, y)))
            .map(|(x, y)| {
                let sx = (u64::from(x) * u64::from(source.width) / u64::from(size.width)) as u32;
                let sy = (u64::from(y) * u64::from(source.height) / u64::from(size.height)) as u32;
                let [r, g, b] = image.get_pixel(sx, sy).0;
                Rgb565::from(Rgb888::new(r, g, b))
            })
            .collect();

        Some(Self { size, pixels })
    }

    /// Scaled size.
    #[inline]
    pub const fn size(&self) -> Size {
        self.size
    }

    /// Draw centered in `slot`.
    pub fn draw<D>(
        &self,
        target: &mut D,
        slot: Rectangle,
    ) where
        D: DrawTarget<Color = Rgb565>,
    {
        let area = Rectangle::with_center(slot.center(), self.size);
        target.fill_contiguous(&area, self.pixels.iter().copied()).ok();
    }
}

/// Largest size with the aspect ratio of `source` that fits in `max`.
fn fit_size(
    source: Size,
    max: Size,
) -> Option<Size> {
    if source.width == 0 || source.height == 0 || max.width == 0 || max.height == 0 {
        return None;
    }
    // Compare max.w / src.w against max.h / src.h without floats.
    let width_limited = u64::from(max.width) * u64::from(source.height) <= u64::from(max.height) * u64::from(source.width);
    let size = if width_limited {
        let height = u64::from(source.height) * u64::from(max.width) / u64::from(source.width);
        Size::new(max.width, height.max(1) as u32)
    } else {
        let width = u64::from(source.width) * u64::from(max.height) / u64::from(source.height);
        Size::new(width.max(1) as u32, max.height)
    };
    Some(size)
}

#[cfg(test)]
mod tests {
    use embedded_graphics_simulator::SimulatorDisplay;
    use image::Rgb;

    use super::*;

    fn temp_png(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("kwakkie-{}-{name}.png", std::process::id()))
    }

    #[test]
    fn test_fit_size() {
        let slot = Size::new(300, 240);
        assert_eq!(fit_size(Size::new(600, 480), slot), Some(Size::new(300, 240)), "Same ratio");
        assert_eq!(fit_size(Size::new(100, 100), slot), Some(Size::new(240, 240)), "Height bound");
        assert_eq!(fit_size(Size::new(300, 100), slot), Some(Size::new(300, 100)), "Width bound");
        assert_eq!(fit_size(Size::new(1000, 1), slot), Some(Size::new(300, 1)), "Never collapses");
        assert_eq!(fit_size(Size::new(0, 10), slot), None);
        assert_eq!(fit_size(Size::new(10, 10), Size::zero()), None);
    }

    #[test]
    fn test_from_rgb_nearest_neighbour() {
        // Left half red, right half blue.
        let image = RgbImage::from_fn(2, 1, |x, _| if x == 0 { Rgb([255, 0, 0]) } else { Rgb([0, 0, 255]) });
        let asset = ImageAsset::from_rgb(&image, Size::new(4, 4)).unwrap();
        assert_eq!(asset.size(), Size::new(4, 2));

        let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(4, 2));
        asset.draw(&mut display, Rectangle::new(Point::zero(), Size::new(4, 2)));
        assert_eq!(display.get_pixel(Point::new(1, 1)), Rgb565::RED);
        assert_eq!(display.get_pixel(Point::new(2, 0)), Rgb565::BLUE);
    }

    #[test]
    fn test_load_missing_file() {
        let err = ImageAsset::load(temp_png("missing"), Size::new(10, 10)).unwrap_err();
        assert!(matches!(err, AssetError::Decode { .. }));
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn test_load_garbage_file() {
        let path = temp_png("garbage");
        std::fs::write(&path, b"not a png").unwrap();
        let result = ImageAsset::load(&path, Size::new(10, 10));
        std::fs::remove_file(&path).ok();
        assert!(matches!(result, Err(AssetError::Decode { .. })));
    }

    #[test]
    fn test_load_png_round_trip() {
        let path = temp_png("green");
        RgbImage::from_pixel(8, 4, Rgb([0, 255, 0])).save(&path).unwrap();
        let result = ImageAsset::load(&path, Size::new(300, 240));
        std::fs::remove_file(&path).ok();

        let asset = result.unwrap();
        assert_eq!(asset.size(), Size::new(300, 150));
    }

    #[test]
    fn test_empty_slot_is_error() {
        let path = temp_png("slot");
        RgbImage::from_pixel(2, 2, Rgb([0, 0, 0])).save(&path).unwrap();
        let result = ImageAsset::load(&path, Size::zero());
        std::fs::remove_file(&path).ok();
        assert!(matches!(result, Err(AssetError::Empty { .. })));
    }
}
