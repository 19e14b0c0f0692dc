use crate::core::Plottable;
use crate::render::Color;
use crate::telemetry::{DiagnosticEvent, DiagnosticsSink};

/// Produces an ordered list of colors for a requested palette size.
///
/// Implementations may return fewer colors than requested; the allocator
/// cycles through whatever it gets.
pub trait PaletteProvider {
    fn palette(&self, size: usize) -> Vec<Color>;
}

impl<F> PaletteProvider for F
where
    F: Fn(usize) -> Vec<Color>,
{
    fn palette(&self, size: usize) -> Vec<Color> {
        self(size)
    }
}

const CATEGORICAL_COLORS: [(u8, u8, u8); 10] = [
    (0x75, 0x53, 0xff),
    (0xf2, 0xb7, 0x12),
    (0x3d, 0x74, 0xdb),
    (0xec, 0x5e, 0x44),
    (0x58, 0xc1, 0xff),
    (0xf8, 0x68, 0xbc),
    (0x6c, 0xd9, 0xd4),
    (0xd6, 0x56, 0x7f),
    (0xa3, 0x97, 0xf7),
    (0x44, 0x46, 0x74),
];

/// Default palette: the first `size` entries of a fixed categorical list.
#[derive(Debug, Default, Clone, Copy)]
pub struct CategoricalPalette;

impl PaletteProvider for CategoricalPalette {
    fn palette(&self, size: usize) -> Vec<Color> {
        CATEGORICAL_COLORS
            .iter()
            .take(size)
            .map(|&(red, green, blue)| Color::from_rgb8(red, green, blue))
            .collect()
    }
}

/// Caller-chosen colors, truncated to the requested size.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedPalette(pub Vec<Color>);

impl PaletteProvider for FixedPalette {
    fn palette(&self, size: usize) -> Vec<Color> {
        self.0.iter().take(size).copied().collect()
    }
}

/// Palette sized for one pass. Colors are handed out by cursor position and
/// wrap around when demand exceeds the palette.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorAllocator {
    palette: Vec<Color>,
}

impl ColorAllocator {
    #[must_use]
    pub fn new(palette: Vec<Color>) -> Self {
        Self { palette }
    }

    /// Requests one color per plottable that needs one.
    #[must_use]
    pub fn for_plottables(
        provider: &dyn PaletteProvider,
        plottables: &[&dyn Plottable],
        diagnostics: &dyn DiagnosticsSink,
    ) -> Self {
        let demand = plottables
            .iter()
            .filter(|plottable| plottable.needs_color())
            .count();
        let palette = if demand > 0 {
            provider.palette(demand)
        } else {
            Vec::new()
        };
        if demand > 0 && palette.is_empty() {
            diagnostics.report(&DiagnosticEvent::PaletteExhausted { requested: demand });
        }
        Self::new(palette)
    }

    #[must_use]
    pub fn palette(&self) -> &[Color] {
        &self.palette
    }

    /// Color for the `cursor`-th plottable needing one.
    #[must_use]
    pub fn color_at(&self, cursor: usize) -> Option<Color> {
        if self.palette.is_empty() {
            return None;
        }
        self.palette.get(cursor % self.palette.len()).copied()
    }
}
