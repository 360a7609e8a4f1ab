//! Proportional bar quantization into block glyphs

/// Partial-block resolution: eighths of a character cell.
pub const BAR_PARTS: usize = 8;

const WHOLE_GLYPH: char = '█';
const PARTIAL_GLYPHS: [char; BAR_PARTS + 1] = [' ', '▏', '▎', '▍', '▌', '▋', '▊', '▉', '█'];

/// Running maximum across all samples of one visualization pass.
///
/// Every sample must be added before the first [`length_for`] call: the
/// maximum is only final after a full scan.
///
/// [`length_for`]: BarScale::length_for
#[derive(Debug, Clone, Copy, Default)]
pub struct BarScale {
    max: f64,
}

impl BarScale {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one sample into the running maximum.
    pub fn add_sample(&mut self, value: f64) {
        self.max = self.max.max(value);
    }

    /// Quantize `value` against the observed maximum into a bar of
    /// exactly `width` character cells.
    ///
    /// A zero value (or an unobserved maximum) is an all-space bar; a
    /// value equal to the maximum fills every cell with whole glyphs; any
    /// fractional remainder rounds up into one of the eight partial
    /// glyphs.
    pub fn length_for(&self, value: f64, width: usize) -> BarSegments {
        if self.max <= 0.0 || value <= 0.0 {
            return BarSegments {
                whole: 0,
                partial: 0,
                spacing: width,
            };
        }

        let ratio = (value / self.max).clamp(0.0, 1.0);
        let scaled = width as f64 * ratio;
        let whole = scaled.floor() as usize;
        if whole >= width {
            return BarSegments {
                whole: width,
                partial: 0,
                spacing: 0,
            };
        }

        let remainder = scaled - whole as f64;
        let partial = (remainder * BAR_PARTS as f64).ceil() as usize;
        BarSegments {
            whole,
            partial,
            spacing: width - whole - usize::from(partial > 0),
        }
    }
}

/// One quantized bar: whole glyphs, an optional partial glyph, trailing
/// spaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarSegments {
    pub whole: usize,
    /// Index into the eighth-block palette; 0 means no partial glyph.
    pub partial: usize,
    pub spacing: usize,
}

impl BarSegments {
    /// Character cells this bar occupies when rendered.
    pub fn width(&self) -> usize {
        self.whole + usize::from(self.partial > 0) + self.spacing
    }
}

/// Render to a string occupying exactly `segments.width()` cells.
pub fn render(segments: &BarSegments) -> String {
    let mut bar = String::with_capacity(segments.width() * WHOLE_GLYPH.len_utf8());
    for _ in 0..segments.whole {
        bar.push(WHOLE_GLYPH);
    }
    if segments.partial > 0 {
        bar.push(PARTIAL_GLYPHS[segments.partial.min(BAR_PARTS)]);
    }
    for _ in 0..segments.spacing {
        bar.push(' ');
    }
    bar
}
