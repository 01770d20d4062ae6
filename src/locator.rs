use std::fmt;

/// File extension a frame URL must end with for its index to be found.
pub const FRAME_EXT: &str = ".jpg";

/// A remote frame location. Opaque: any string is accepted, but only URLs
/// ending in `<digits>.jpg` are incrementable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameUrl(String);

impl FrameUrl {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Computes the URL of the next frame in the sequence.
    ///
    /// Finds the digit run immediately preceding a trailing `.jpg`, adds one
    /// to its value, and splices the result back in at the exact span of the
    /// original run, zero-padded to at least the original run's width
    /// (`007` becomes `008`, `099` becomes `100`, `999` becomes `1000`).
    /// The splice is position-anchored, so an identical digit run appearing
    /// earlier in the URL is never touched.
    ///
    /// URLs with no trailing `<digits>.jpg` (and digit runs too large for
    /// `u64`) are non-incrementable: the URL is returned unchanged, which the
    /// caller detects by equality.
    pub fn next(&self) -> FrameUrl {
        let Some(stem) = self.0.strip_suffix(FRAME_EXT) else {
            return self.clone();
        };

        let digits = stem
            .bytes()
            .rev()
            .take_while(u8::is_ascii_digit)
            .count();
        if digits == 0 {
            return self.clone();
        }

        let run_start = stem.len() - digits;
        let run = &stem[run_start..];
        let Some(value) = run.parse::<u64>().ok().and_then(|v| v.checked_add(1)) else {
            return self.clone();
        };

        let mut next = String::with_capacity(self.0.len() + 1);
        next.push_str(&stem[..run_start]);
        next.push_str(&format!("{value:0digits$}"));
        next.push_str(FRAME_EXT);
        FrameUrl(next)
    }
}

impl fmt::Display for FrameUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FrameUrl {
    fn from(url: &str) -> Self {
        Self::new(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn next_of(url: &str) -> String {
        FrameUrl::new(url).next().as_str().to_string()
    }

    #[test]
    fn increments_trailing_index() {
        assert_eq!(next_of("https://shop.example/spin/001.jpg"), "https://shop.example/spin/002.jpg");
        assert_eq!(next_of("https://shop.example/spin_7.jpg"), "https://shop.example/spin_8.jpg");
    }

    #[test]
    fn double_increment_adds_two() {
        let u = FrameUrl::new("https://shop.example/p/007.jpg");
        assert_eq!(u.next().next().as_str(), "https://shop.example/p/009.jpg");
    }

    #[test]
    fn preserves_zero_padding_width() {
        assert_eq!(next_of("a/009.jpg"), "a/010.jpg");
        assert_eq!(next_of("a/099.jpg"), "a/100.jpg");
    }

    #[test]
    fn overflowing_width_grows() {
        assert_eq!(next_of("a/999.jpg"), "a/1000.jpg");
        assert_eq!(next_of("a/9.jpg"), "a/10.jpg");
    }

    #[test]
    fn non_incrementable_urls_are_unchanged() {
        for url in [
            "https://shop.example/spin/cover.jpg",
            "https://shop.example/spin/001.png",
            "https://shop.example/spin/001.jpg?size=large",
            ".jpg",
            "",
        ] {
            let u = FrameUrl::new(url);
            assert_eq!(u.next(), u, "expected no-op for {url:?}");
        }
    }

    #[test]
    fn replacement_is_anchored_to_the_trailing_run() {
        // The run's text recurring earlier in the URL must not be rewritten.
        assert_eq!(next_of("https://cdn.example/001/001.jpg"), "https://cdn.example/001/002.jpg");
        assert_eq!(next_of("https://cdn.example/12.jpg-archive/12.jpg"), "https://cdn.example/12.jpg-archive/13.jpg");
    }

    #[test]
    fn run_larger_than_u64_is_non_incrementable() {
        let url = "a/99999999999999999999999999.jpg";
        let u = FrameUrl::new(url);
        assert_eq!(u.next(), u);
    }
}
