//! QR code images
//!
//! The API delivers the QR code as a `data:image/png;base64,...` URL. It is
//! decoded once into a grid of modules; terminals draw two module rows per
//! cell with half blocks.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::errors::{ClientError, Result};

const DARK_THRESHOLD: u8 = 128;

/// Light modules drawn around the code on every side
const QUIET_ZONE: usize = 1;

/// Decode a `data:<mime>;base64,<payload>` URL into raw bytes
pub fn decode_data_url(data_url: &str) -> Result<Vec<u8>> {
    let rest = data_url
        .strip_prefix("data:")
        .ok_or_else(|| ClientError::decode("QR code is not a data URL"))?;
    let (meta, payload) = rest
        .split_once(',')
        .ok_or_else(|| ClientError::decode("QR data URL has no payload"))?;
    if !meta.ends_with(";base64") {
        return Err(ClientError::decode("QR data URL is not base64 encoded"));
    }

    STANDARD
        .decode(payload.trim())
        .map_err(|e| ClientError::decode(format!("Invalid QR payload: {}", e)))
}

/// Monochrome module grid, margins cropped
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrBitmap {
    width: usize,
    height: usize,
    dark: Vec<bool>,
}

impl QrBitmap {
    pub fn from_data_url(data_url: &str) -> Result<Self> {
        Self::from_image_bytes(&decode_data_url(data_url)?)
    }

    /// Decode any raster format `image` understands.
    ///
    /// The module size is taken from the top-left finder pattern, which is
    /// always 7 modules wide; each module is then sampled at its center.
    pub fn from_image_bytes(bytes: &[u8]) -> Result<Self> {
        let image = image::load_from_memory(bytes)
            .map_err(|e| ClientError::decode(format!("Invalid QR image: {}", e)))?
            .to_luma_alpha8();
        let (width, height) = image.dimensions();
        let is_dark = |x: u32, y: u32| {
            let [luma, alpha] = image.get_pixel(x, y).0;
            alpha >= DARK_THRESHOLD && luma < DARK_THRESHOLD
        };

        let mut bounds: Option<(u32, u32, u32, u32)> = None;
        for y in 0..height {
            for x in 0..width {
                if is_dark(x, y) {
                    bounds = Some(match bounds {
                        None => (x, y, x, y),
                        Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
                    });
                }
            }
        }
        let (x0, y0, x1, y1) =
            bounds.ok_or_else(|| ClientError::decode("QR image has no dark modules"))?;

        let finder_run = (x0..=x1).take_while(|&x| is_dark(x, y0)).count();
        let module = finder_run.div_ceil(7).max(1);

        Ok(Self::sample(
            (x1 - x0 + 1) as usize,
            (y1 - y0 + 1) as usize,
            module,
            |x, y| is_dark(x0 + x as u32, y0 + y as u32),
        ))
    }

    fn sample(width: usize, height: usize, step: usize, is_dark: impl Fn(usize, usize) -> bool) -> Self {
        let cols = width.div_ceil(step);
        let rows = height.div_ceil(step);
        let center = |i: usize, limit: usize| (i * step + step / 2).min(limit - 1);

        let mut dark = Vec::with_capacity(cols * rows);
        for y in 0..rows {
            for x in 0..cols {
                dark.push(is_dark(center(x, width), center(y, height)));
            }
        }
        Self {
            width: cols,
            height: rows,
            dark,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn is_dark(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height && self.dark[y * self.width + x]
    }

    /// Terminal cells needed by `half_block_rows`, quiet zone included
    pub fn cell_size(&self) -> (usize, usize) {
        let width = self.width + 2 * QUIET_ZONE;
        let height = (self.height + 2 * QUIET_ZONE).div_ceil(2);
        (width, height)
    }

    /// Downsample until the code fits in `max_cols` x `max_rows` cells.
    ///
    /// `None` when not even a single module per cell fits.
    pub fn fit(&self, max_cols: usize, max_rows: usize) -> Option<Self> {
        let cols = max_cols.checked_sub(2 * QUIET_ZONE).filter(|c| *c > 0)?;
        let pixel_rows = (max_rows * 2)
            .checked_sub(2 * QUIET_ZONE)
            .filter(|r| *r > 0)?;

        let step = self
            .width
            .div_ceil(cols)
            .max(self.height.div_ceil(pixel_rows));
        if step <= 1 {
            return Some(self.clone());
        }
        Some(Self::sample(self.width, self.height, step, |x, y| {
            self.is_dark(x, y)
        }))
    }

    /// One string per terminal row: `█` both halves dark, `▀` top only,
    /// `▄` bottom only. Meant to be drawn dark-on-light.
    pub fn half_block_rows(&self) -> Vec<String> {
        let dark_at = |x: usize, y: usize| {
            x >= QUIET_ZONE && y >= QUIET_ZONE && self.is_dark(x - QUIET_ZONE, y - QUIET_ZONE)
        };
        let (width, _) = self.cell_size();
        let pixel_height = self.height + 2 * QUIET_ZONE;

        (0..pixel_height)
            .step_by(2)
            .map(|y| {
                (0..width)
                    .map(|x| match (dark_at(x, y), dark_at(x, y + 1)) {
                        (true, true) => '█',
                        (true, false) => '▀',
                        (false, true) => '▄',
                        (false, false) => ' ',
                    })
                    .collect()
            })
            .collect()
    }
}

/// PNG data URL drawn from `#`/`.` rows, for tests elsewhere in the crate
#[cfg(test)]
pub(crate) fn png_data_url(rows: &[&str], scale: u32, margin: u32) -> String {
    let width = rows[0].len() as u32 * scale + 2 * margin;
    let height = rows.len() as u32 * scale + 2 * margin;
    let mut img = image::GrayImage::from_pixel(width, height, image::Luma([255]));
    for (y, row) in rows.iter().enumerate() {
        for (x, c) in row.chars().enumerate() {
            if c != '#' {
                continue;
            }
            for dy in 0..scale {
                for dx in 0..scale {
                    img.put_pixel(
                        margin + x as u32 * scale + dx,
                        margin + y as u32 * scale + dy,
                        image::Luma([0]),
                    );
                }
            }
        }
    }

    let mut bytes = Vec::new();
    image::DynamicImage::ImageLuma8(img)
        .write_to(&mut std::io::Cursor::new(&mut bytes), image::ImageFormat::Png)
        .unwrap();
    format!("data:image/png;base64,{}", STANDARD.encode(bytes))
}

#[cfg(test)]
pub(crate) const FINDER: [&str; 7] = [
    "#######",
    "#.....#",
    "#.###.#",
    "#.###.#",
    "#.###.#",
    "#.....#",
    "#######",
];
