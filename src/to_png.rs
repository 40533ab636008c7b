#![cfg(feature = "host")]
//! PNG previews of a clock face, read back from strip frames through the wiring.
//!
//! The letter grid is drawn as round LEDs with the four minute slots in an extra row
//! below it. Dead cells stay dark.

use crate::display::DisplaySink;
use crate::geometry::MinuteSlot;
use crate::render::StripFrame;
use crate::wiring::Wiring;
use png::{BitDepth, ColorType, Encoder, ScaledFloat};
use smart_leds::RGB8;
use std::error::Error;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

const PREVIEW_INVERSE_GAMMA: f32 = 2.2;

/// Colors of the face as a viewer sees them: `height + 1` rows of `width` cells, the last
/// row holding the minute slots.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FaceImage {
    width: u32,
    height: u32,
    cells: Vec<RGB8>,
}

impl FaceImage {
    /// Read every cell and minute slot of `frame` back through `wiring`.
    #[must_use]
    pub fn from_frame(frame: &StripFrame, wiring: &Wiring) -> Self {
        let geometry = wiring.geometry();
        let width = geometry.width();
        let height = geometry.height();
        let mut cells = Vec::with_capacity(usize::from(width) * (usize::from(height) + 1));
        for y in 0..height {
            for x in 0..width {
                let color = wiring
                    .try_strip_index(x, y)
                    .ok()
                    .and_then(|index| frame.pixel(index))
                    .unwrap_or_default();
                cells.push(color);
            }
        }
        let first_slot_column = (width / 2).saturating_sub(2);
        let mut minute_row = vec![RGB8::default(); usize::from(width)];
        for (offset, slot) in MinuteSlot::ALL.into_iter().enumerate() {
            let column = usize::from(first_slot_column) + offset;
            if let (Some(cell), Some(color)) = (
                minute_row.get_mut(column),
                frame.pixel(wiring.minute_slot_index(slot)),
            ) {
                *cell = color;
            }
        }
        cells.extend(minute_row);
        Self {
            width: u32::from(width),
            height: u32::from(height) + 1,
            cells,
        }
    }

    /// Color of letter cell `(x, y)`, or of minute slot `x` when `y == height`.
    #[must_use]
    pub fn cell(&self, x: u32, y: u32) -> Option<RGB8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells.get((y * self.width + x) as usize).copied()
    }
}

/// [`DisplaySink`] that keeps every flushed frame, for previews and tests.
#[derive(Clone, Debug, Default)]
pub struct FrameRecorder {
    /// Frames in flush order.
    pub frames: Vec<StripFrame>,
}

impl DisplaySink for FrameRecorder {
    async fn flush(&mut self, frame: &StripFrame) -> crate::Result<()> {
        self.frames.push(frame.clone());
        Ok(())
    }
}

/// Render one frame of the face into a PNG no larger than `target_max_dimension`.
///
/// # Errors
///
/// Any I/O or encoding error.
pub fn write_face_png(
    frame: &StripFrame,
    wiring: &Wiring,
    output_path: impl AsRef<Path>,
    target_max_dimension: u32,
) -> Result<(), Box<dyn Error>> {
    let output_path = output_path.as_ref();
    let face = FaceImage::from_frame(frame, wiring);
    let cell_size = select_cell_size(face.width, face.height, target_max_dimension)?;
    let (width, height, pixels) = face_pixels(&face, cell_size);
    create_parent(output_path)?;

    let file = File::create(output_path)?;
    let mut encoder = Encoder::new(BufWriter::new(file), width, height);
    encoder.set_color(ColorType::Rgb);
    encoder.set_depth(BitDepth::Sixteen);
    encoder.set_source_gamma(ScaledFloat::new(1.0));
    let mut writer = encoder.write_header()?;
    writer.write_image_data(&pixels)?;
    info!("to_png: wrote PNG to {}", output_path.display());
    Ok(())
}

/// Render a sequence of frames, e.g. a typewriter reveal, into a looping APNG.
///
/// # Errors
///
/// Any I/O or encoding error, or an empty `frames`.
pub fn write_face_apng(
    frames: &[StripFrame],
    wiring: &Wiring,
    output_path: impl AsRef<Path>,
    target_max_dimension: u32,
    frame_delay_ms: u16,
) -> Result<(), Box<dyn Error>> {
    let output_path = output_path.as_ref();
    if frames.is_empty() {
        return Err("no frames to write".into());
    }
    let faces: Vec<FaceImage> = frames
        .iter()
        .map(|frame| FaceImage::from_frame(frame, wiring))
        .collect();
    let geometry = wiring.geometry();
    let cell_size = select_cell_size(
        u32::from(geometry.width()),
        u32::from(geometry.height()) + 1,
        target_max_dimension,
    )?;
    let rendered: Vec<(u32, u32, Vec<u8>)> = faces
        .iter()
        .map(|face| face_pixels(face, cell_size))
        .collect();
    let (width, height) = rendered
        .first()
        .map(|(width, height, _)| (*width, *height))
        .ok_or("no frames to write")?;
    create_parent(output_path)?;

    let file = File::create(output_path)?;
    let mut encoder = Encoder::new(BufWriter::new(file), width, height);
    encoder.set_color(ColorType::Rgb);
    encoder.set_depth(BitDepth::Sixteen);
    encoder.set_source_gamma(ScaledFloat::new(1.0));
    encoder.set_animated(u32::try_from(frames.len())?, 0)?;
    let mut writer = encoder.write_header()?;
    for (_, _, pixels) in rendered {
        writer.set_frame_delay(frame_delay_ms, 1000)?;
        writer.write_image_data(&pixels)?;
    }
    writer.finish()?;
    info!("to_png: wrote APNG to {}", output_path.display());
    Ok(())
}

fn create_parent(output_path: &Path) -> std::io::Result<()> {
    match output_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => std::fs::create_dir_all(parent),
        _ => Ok(()),
    }
}

fn select_cell_size(
    face_width: u32,
    face_height: u32,
    target_max_dimension: u32,
) -> Result<u32, Box<dyn Error>> {
    if target_max_dimension < 4 {
        return Err("target_max_dimension must be at least 4".into());
    }
    let mut cell_size = target_max_dimension;
    while cell_size > 4 {
        let border = led_radius(cell_size);
        let max_dimension = (face_width.max(face_height)) * cell_size + border * 2;
        if max_dimension <= target_max_dimension {
            break;
        }
        cell_size -= 1;
    }
    Ok(cell_size)
}

fn led_radius(cell_size: u32) -> u32 {
    let led_margin = (cell_size / 8).max(1);
    ((cell_size - led_margin * 2) / 2).max(1)
}

fn face_pixels(face: &FaceImage, cell_size: u32) -> (u32, u32, Vec<u8>) {
    let led_radius = led_radius(cell_size);
    let fade_width = (led_radius / 3).max(1);
    let border = led_radius;
    let width = face.width * cell_size + border * 2;
    let height = face.height * cell_size + border * 2;
    let mut bytes = vec![0u8; (width * height * 3 * 2) as usize];
    let center = (cell_size - 1) as i32 / 2;
    let led_radius_f = led_radius as f32;
    let inner_radius_f = led_radius.saturating_sub(fade_width) as f32;
    let radius_sq = (led_radius as i32) * (led_radius as i32);

    for row_index in 0..face.height {
        for column_index in 0..face.width {
            let pixel = face.cell(column_index, row_index).unwrap_or_default();
            let cell_origin_x = column_index * cell_size;
            let cell_origin_y = row_index * cell_size;

            for local_y in 0..cell_size {
                let delta_y = local_y as i32 - center;
                for local_x in 0..cell_size {
                    let delta_x = local_x as i32 - center;
                    let distance_sq = delta_x * delta_x + delta_y * delta_y;
                    if distance_sq > radius_sq {
                        continue;
                    }
                    let distance = (distance_sq as f32).sqrt();
                    let intensity = if distance <= inner_radius_f {
                        1.0
                    } else {
                        let fade_span = led_radius_f - inner_radius_f;
                        (1.0 - (distance - inner_radius_f) / fade_span).max(0.0)
                    };
                    let x = border + cell_origin_x + local_x;
                    let y = border + cell_origin_y + local_y;
                    let pixel_index = ((y * width + x) * 3 * 2) as usize;
                    let Some(target) = bytes.get_mut(pixel_index..pixel_index + 6) else {
                        continue;
                    };
                    for (channel_index, channel) in [pixel.r, pixel.g, pixel.b].into_iter().enumerate() {
                        let value = linear_to_u16(inverse_gamma_to_linear(channel) * intensity);
                        if let Some(pair) = target.get_mut(channel_index * 2..channel_index * 2 + 2) {
                            pair.copy_from_slice(&value.to_be_bytes());
                        }
                    }
                }
            }
        }
    }

    (width, height, bytes)
}

fn inverse_gamma_to_linear(channel: u8) -> f32 {
    let normalized = f32::from(channel) / 255.0;
    normalized.powf(PREVIEW_INVERSE_GAMMA)
}

fn linear_to_u16(value: f32) -> u16 {
    let clamped = value.clamp(0.0, 1.0);
    (clamped * 65535.0).round() as u16
}
