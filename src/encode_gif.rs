use std::{
    fs::File,
    io::BufWriter,
    path::{Path, PathBuf},
};

use image::{
    Delay, Frame,
    codecs::gif::{GifEncoder, Repeat},
};

use crate::{
    assemble::FrameSequence,
    error::{GifreelError, GifreelResult},
};

/// GIF delays are u16 centiseconds on the wire.
const MAX_FRAME_DELAY_MS: u32 = u16::MAX as u32 * 10;

#[derive(Clone, Debug)]
pub struct EncodeConfig {
    pub out_path: PathBuf,
    /// Uniform display time per frame, in milliseconds.
    pub frame_delay_ms: u32,
    pub overwrite: bool,
}

impl EncodeConfig {
    pub fn new(out_path: impl Into<PathBuf>, frame_delay_ms: u32) -> Self {
        Self {
            out_path: out_path.into(),
            frame_delay_ms,
            overwrite: true,
        }
    }

    pub fn validate(&self) -> GifreelResult<()> {
        if self.out_path.as_os_str().is_empty() {
            return Err(GifreelError::validation("output path must be non-empty"));
        }
        if self.frame_delay_ms > MAX_FRAME_DELAY_MS {
            return Err(GifreelError::validation(format!(
                "frame delay must be <= {MAX_FRAME_DELAY_MS} ms"
            )));
        }
        Ok(())
    }
}

pub fn ensure_parent_dir(path: &Path) -> GifreelResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        use anyhow::Context as _;
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

/// Writes the sequence as a looping GIF: every frame gets the same delay and
/// the loop count is always infinite.
pub fn encode_gif(seq: FrameSequence, cfg: &EncodeConfig) -> GifreelResult<()> {
    cfg.validate()?;
    ensure_parent_dir(&cfg.out_path)?;

    if !cfg.overwrite && cfg.out_path.exists() {
        return Err(GifreelError::validation(format!(
            "output file '{}' already exists",
            cfg.out_path.display()
        )));
    }

    let file = File::create(&cfg.out_path).map_err(|e| {
        GifreelError::encode(format!(
            "failed to create '{}': {e}",
            cfg.out_path.display()
        ))
    })?;

    let delay = Delay::from_numer_denom_ms(cfg.frame_delay_ms, 1);
    let mut encoder = GifEncoder::new(BufWriter::new(file));
    encoder
        .set_repeat(Repeat::Infinite)
        .map_err(|e| GifreelError::encode(format!("failed to set loop flag: {e}")))?;
    encoder
        .try_encode_frames(
            seq.into_frames()
                .into_iter()
                .map(|img| Ok(Frame::from_parts(img, 0, 0, delay))),
        )
        .map_err(|e| GifreelError::encode(format!("failed to encode gif frames: {e}")))?;

    Ok(())
}
