use image::{Rgba, RgbaImage};

/// Shadow/highlight endpoints for the sepia colorize ramp.
const SEPIA_BLACK: [u8; 3] = [0x70, 0x42, 0x14];
const SEPIA_WHITE: [u8; 3] = [0xC0, 0xA0, 0x80];

/// A color transform applied uniformly to every frame before assembly.
/// Pure, total, and dimension-preserving for all variants.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FilterKind {
    #[default]
    None,
    Grayscale,
    Sepia,
}

impl FilterKind {
    pub fn apply(self, frame: RgbaImage) -> RgbaImage {
        match self {
            Self::None => frame,
            Self::Grayscale => map_pixels(frame, |px| {
                let l = luma(px);
                Rgba([l, l, l, px[3]])
            }),
            Self::Sepia => map_pixels(frame, |px| {
                let l = luma(px);
                Rgba([
                    colorize_channel(l, SEPIA_BLACK[0], SEPIA_WHITE[0]),
                    colorize_channel(l, SEPIA_BLACK[1], SEPIA_WHITE[1]),
                    colorize_channel(l, SEPIA_BLACK[2], SEPIA_WHITE[2]),
                    px[3],
                ])
            }),
        }
    }
}

fn map_pixels(mut frame: RgbaImage, f: impl Fn(Rgba<u8>) -> Rgba<u8>) -> RgbaImage {
    for px in frame.pixels_mut() {
        *px = f(*px);
    }
    frame
}

/// ITU-R 601-2 luma.
fn luma(px: Rgba<u8>) -> u8 {
    let l = 299 * u32::from(px[0]) + 587 * u32::from(px[1]) + 114 * u32::from(px[2]);
    (l / 1000) as u8
}

/// Linear two-point ramp: gray 0 maps to `black`, gray 255 to `white`.
fn colorize_channel(l: u8, black: u8, white: u8) -> u8 {
    let black = u32::from(black);
    let white = u32::from(white);
    let l = u32::from(l);
    ((black * (255 - l) + white * l + 127) / 255) as u8
}
