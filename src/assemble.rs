use image::RgbaImage;

use crate::{
    error::{GifreelError, GifreelResult},
    fetch::{FetchOutcome, FrameFetcher},
    filter::FilterKind,
    locator::FrameUrl,
};

#[derive(Clone, Copy, Debug, Default)]
pub struct AssembleOpts {
    pub filter: FilterKind,
    /// Reverse the final frame order before handing off to the writer.
    pub reverse: bool,
}

/// The ordered frames that survived the fetch loop. Guaranteed non-empty.
#[derive(Clone, Debug)]
pub struct FrameSequence {
    frames: Vec<RgbaImage>,
}

impl FrameSequence {
    pub fn new(frames: Vec<RgbaImage>) -> GifreelResult<Self> {
        if frames.is_empty() {
            return Err(GifreelError::NoFramesLoaded);
        }
        Ok(Self { frames })
    }

    pub fn frames(&self) -> &[RgbaImage] {
        &self.frames
    }

    pub fn into_frames(self) -> Vec<RgbaImage> {
        self.frames
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

pub fn decode_frame(bytes: &[u8]) -> GifreelResult<RgbaImage> {
    let dyn_img = image::load_from_memory(bytes)
        .map_err(|e| GifreelError::decode(format!("decode fetched frame: {e}")))?;
    Ok(dyn_img.to_rgba8())
}

/// Walks the sequence starting at `start`: fetch, decode, filter, advance.
///
/// The loop has no iteration bound of its own; it ends on the first terminal
/// fetch, the first undecodable frame (which is dropped), or a
/// non-incrementable URL. The last guard keeps a malformed start URL from
/// degenerating into an endless identical-request loop when the server keeps
/// answering 200 for it.
#[tracing::instrument(skip(fetcher))]
pub fn assemble(
    fetcher: &mut dyn FrameFetcher,
    start: FrameUrl,
    opts: AssembleOpts,
) -> GifreelResult<FrameSequence> {
    let mut frames: Vec<RgbaImage> = Vec::new();
    let mut url = start;

    loop {
        match fetcher.fetch(&url) {
            FetchOutcome::Terminal(reason) => {
                if frames.is_empty() {
                    tracing::info!(url = %url, %reason, "first request failed");
                } else {
                    tracing::info!(frames = frames.len(), %reason, "reached the end of the sequence");
                }
                break;
            }
            FetchOutcome::Bytes(bytes) => {
                let decoded = match decode_frame(&bytes) {
                    Ok(img) => img,
                    Err(err) => {
                        tracing::info!(url = %url, %err, "stopping at undecodable frame");
                        break;
                    }
                };
                drop(bytes);

                tracing::debug!(url = %url, width = decoded.width(), height = decoded.height(), "frame loaded");
                frames.push(opts.filter.apply(decoded));

                let next = url.next();
                if next == url {
                    tracing::info!(url = %url, "frame url is not incrementable, stopping");
                    break;
                }
                url = next;
            }
        }
    }

    if opts.reverse {
        frames.reverse();
    }
    FrameSequence::new(frames)
}
