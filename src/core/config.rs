// Shell-facing configuration: the five variants, the filter set, and
// the value ranges the panel is allowed to produce.

pub const SIZE_MIN: u32 = 100;
pub const SIZE_MAX: u32 = 500;
pub const SIZE_DEFAULT: u32 = 280;

pub const BACKGROUND_DEFAULT: &str = "#000000";

/// Logo overlay size as a fraction of the orb size.
pub const LOGO_SIZE_RATIO: f32 = 0.8;

/// Named swatches offered by the panel.
pub const BG_PALETTE: [(&str, &str); 10] = [
    ("Black", "#000000"),
    ("Dark Gray", "#1a1a1a"),
    ("Charcoal", "#2d2d2d"),
    ("Navy", "#0a1628"),
    ("Deep Blue", "#0f172a"),
    ("Green", "#064e3b"),
    ("Forest", "#14532d"),
    ("Purple", "#2e1065"),
    ("Wine", "#450a0a"),
    ("Midnight", "#020617"),
];

pub fn clamp_size(px: u32) -> u32 {
    px.clamp(SIZE_MIN, SIZE_MAX)
}

/// Presentation variant. `Branded` selects the stripe painter; the rest
/// share the sphere painter under different palettes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
    Branded,
    Obsidian,
    Mana,
    Opal,
    Halo,
}

impl Variant {
    pub const ALL: [Variant; 5] = [
        Variant::Branded,
        Variant::Obsidian,
        Variant::Mana,
        Variant::Opal,
        Variant::Halo,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Variant::Branded => "branded",
            Variant::Obsidian => "obsidian",
            Variant::Mana => "mana",
            Variant::Opal => "opal",
            Variant::Halo => "halo",
        }
    }

    pub fn parse(s: &str) -> Option<Variant> {
        Variant::ALL.into_iter().find(|v| v.as_str() == s)
    }

    pub fn is_branded(self) -> bool {
        self == Variant::Branded
    }
}

/// Post-process color filters, applied as a CSS `filter` over the canvas
/// for the sphere variants. Percent ranges follow the sliders: 0..=100
/// for grayscale/invert, 0..=200 for brightness/contrast/saturate,
/// 0..=360 degrees for hue rotation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorFilters {
    pub grayscale: u32,
    pub hue_rotate: u32,
    pub brightness: u32,
    pub contrast: u32,
    pub saturate: u32,
    pub invert: u32,
}

impl ColorFilters {
    pub const NEUTRAL: ColorFilters = ColorFilters {
        grayscale: 0,
        hue_rotate: 0,
        brightness: 100,
        contrast: 100,
        saturate: 100,
        invert: 0,
    };

    /// Preset: full grayscale, everything else neutral.
    pub const BLACK_WHITE: ColorFilters = ColorFilters {
        grayscale: 100,
        ..ColorFilters::NEUTRAL
    };

    pub fn clamped(self) -> ColorFilters {
        ColorFilters {
            grayscale: self.grayscale.min(100),
            hue_rotate: self.hue_rotate.min(360),
            brightness: self.brightness.min(200),
            contrast: self.contrast.min(200),
            saturate: self.saturate.min(200),
            invert: self.invert.min(100),
        }
    }

    pub fn is_neutral(self) -> bool {
        self == ColorFilters::NEUTRAL
    }

    /// The CSS filter value, in the fixed function order the browser
    /// applies them.
    pub fn css(&self) -> String {
        format!(
            "grayscale({}%) hue-rotate({}deg) brightness({}%) contrast({}%) saturate({}%) invert({}%)",
            self.grayscale,
            self.hue_rotate,
            self.brightness,
            self.contrast,
            self.saturate,
            self.invert
        )
    }
}

impl Default for ColorFilters {
    fn default() -> Self {
        ColorFilters::NEUTRAL
    }
}

/// Everything the shell hands the renderer. Treated as immutable for
/// the lifetime of one mounted orb; the shell rebuilds the orb when a
/// value that shapes the surface changes.
#[derive(Clone, Debug, PartialEq)]
pub struct VisualConfig {
    pub variant: Variant,
    pub size_px: u32,
    pub background: String,
    pub show_logo: bool,
    pub show_status: bool,
    pub filters: ColorFilters,
}

impl Default for VisualConfig {
    fn default() -> Self {
        VisualConfig {
            variant: Variant::Branded,
            size_px: SIZE_DEFAULT,
            background: BACKGROUND_DEFAULT.to_string(),
            show_logo: false,
            show_status: true,
            filters: ColorFilters::NEUTRAL,
        }
    }
}
