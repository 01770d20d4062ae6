//! Gifreel reassembles numbered frame-sequence photography from the web into
//! a looping GIF.
//!
//! E-commerce sites often expose 360°-spin product shots as a flat series of
//! numbered images (`.../001.jpg`, `.../002.jpg`, …) with no manifest. Gifreel
//! probes that series one frame at a time and stitches whatever it finds into
//! a single animated artifact.
//!
//! # Pipeline overview
//!
//! 1. **Locate**: [`FrameUrl::next`] derives the next URL in the sequence
//!    (pure string work, no I/O).
//! 2. **Fetch**: a [`FrameFetcher`] retrieves raw bytes; any failure is
//!    terminal for the sequence.
//! 3. **Assemble**: [`assemble`] loops locate/fetch/decode/filter until the
//!    sequence ends, producing a non-empty [`FrameSequence`].
//! 4. **Encode**: [`encode_gif`] writes the frames with uniform timing and an
//!    infinite loop count.
//!
//! Fetching is strictly sequential: frame order is the artifact's meaning,
//! and the sequence length is unknown until the remote side says no.
#![forbid(unsafe_code)]

pub mod assemble;
pub mod encode_gif;
pub mod error;
pub mod fetch;
pub mod filter;
pub mod locator;

pub use assemble::{AssembleOpts, FrameSequence, assemble, decode_frame};
pub use encode_gif::{EncodeConfig, encode_gif, ensure_parent_dir};
pub use error::{GifreelError, GifreelResult};
pub use fetch::{DEFAULT_TIMEOUT, FetchOutcome, FrameFetcher, HttpFetcher, TerminalReason};
pub use filter::FilterKind;
pub use locator::{FRAME_EXT, FrameUrl};
