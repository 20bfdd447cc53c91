use std::borrow::Cow;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// One named color within a [ColorSet].
///
/// The shades are ordered from the variant's darkest-variant color
/// to its lightest. The accents carry no implied order.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Slot {
    #[default]
    Shade0 = 0,
    Shade1,
    Shade2,
    Shade3,
    Shade4,
    Shade5,
    Shade6,
    Shade7,
    Accent0,
    Accent1,
    Accent2,
    Accent3,
    Accent4,
    Accent5,
    Accent6,
    Accent7,
}

impl Display for Slot {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Slot {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Slot::from_name(s).ok_or(())
    }
}

impl Slot {
    pub const LEN: usize = 16;

    pub const fn array() -> [Slot; Slot::LEN] {
        use Slot::*;
        [
            Shade0, Shade1, Shade2, Shade3, Shade4, Shade5, Shade6, Shade7, Accent0, Accent1,
            Accent2, Accent3, Accent4, Accent5, Accent6, Accent7,
        ]
    }

    pub fn from_name(n: &str) -> Option<Self> {
        match n {
            "shade0" => Some(Slot::Shade0),
            "shade1" => Some(Slot::Shade1),
            "shade2" => Some(Slot::Shade2),
            "shade3" => Some(Slot::Shade3),
            "shade4" => Some(Slot::Shade4),
            "shade5" => Some(Slot::Shade5),
            "shade6" => Some(Slot::Shade6),
            "shade7" => Some(Slot::Shade7),
            "accent0" => Some(Slot::Accent0),
            "accent1" => Some(Slot::Accent1),
            "accent2" => Some(Slot::Accent2),
            "accent3" => Some(Slot::Accent3),
            "accent4" => Some(Slot::Accent4),
            "accent5" => Some(Slot::Accent5),
            "accent6" => Some(Slot::Accent6),
            "accent7" => Some(Slot::Accent7),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Slot::Shade0 => "shade0",
            Slot::Shade1 => "shade1",
            Slot::Shade2 => "shade2",
            Slot::Shade3 => "shade3",
            Slot::Shade4 => "shade4",
            Slot::Shade5 => "shade5",
            Slot::Shade6 => "shade6",
            Slot::Shade7 => "shade7",
            Slot::Accent0 => "accent0",
            Slot::Accent1 => "accent1",
            Slot::Accent2 => "accent2",
            Slot::Accent3 => "accent3",
            Slot::Accent4 => "accent4",
            Slot::Accent5 => "accent5",
            Slot::Accent6 => "accent6",
            Slot::Accent7 => "accent7",
        }
    }
}

/// Classification of a theme variant.
///
/// Resolved once per variant from the raw id and used for both the
/// dark-reference slot and the human label. Any id other than `"dark"`
/// counts as Light. If a third kind ever shows up this is the one
/// place to extend.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariantKind {
    Dark,
    #[default]
    Light,
}

impl VariantKind {
    pub fn from_id(id: &str) -> Self {
        if id == "dark" {
            VariantKind::Dark
        } else {
            VariantKind::Light
        }
    }

    /// Human-readable label, used in theme names and manifest labels.
    pub const fn label(self) -> &'static str {
        match self {
            VariantKind::Dark => "Dark",
            VariantKind::Light => "Light",
        }
    }

    /// The slot holding the variant's dark reference color.
    ///
    /// Shadows and overlays are derived from this color.
    pub const fn dark_slot(self) -> Slot {
        match self {
            VariantKind::Dark => Slot::Shade0,
            VariantKind::Light => Slot::Shade7,
        }
    }
}

/// The 16 colors of one theme variant.
///
/// Use [Slot] for indexing. Values are opaque color strings; nothing
/// here parses them beyond suffix concatenation in [with_alpha].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorSet {
    /// Color values. Use [Slot] for indexing.
    pub color: [Cow<'static, str>; Slot::LEN],
}

impl Default for ColorSet {
    fn default() -> Self {
        Self {
            color: [const { Cow::Borrowed("") }; Slot::LEN],
        }
    }
}

impl ColorSet {
    pub fn color(&self, slot: Slot) -> &str {
        self.color[slot as usize].as_ref()
    }

    pub fn set_color(&mut self, slot: Slot, color: impl Into<Cow<'static, str>>) {
        self.color[slot as usize] = color.into();
    }
}

/// One theme variant after normalization: the raw id, the kind
/// resolved from it, and the variant's colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variant {
    pub id: String,
    pub kind: VariantKind,
    pub colors: ColorSet,
}

/// The full input: variant id mapped to [ColorSet].
///
/// Keeps insertion order, which carries through to the manifest listing
/// and the artifact sequence.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<(String, ColorSet)>,
}

impl Palette {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the colors for a variant.
    /// Replacing keeps the variant's original position.
    pub fn set(&mut self, id: impl Into<String>, colors: ColorSet) {
        let id = id.into();
        match self.colors.iter().position(|(k, _)| *k == id) {
            Some(i) => self.colors[i].1 = colors,
            None => self.colors.push((id, colors)),
        }
    }

    pub fn get(&self, id: &str) -> Option<&ColorSet> {
        self.colors.iter().find(|(k, _)| k == id).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ColorSet)> {
        self.colors.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Normalize into an ordered list of [Variant]s, one per entry,
    /// in insertion order. Resolves the [VariantKind] once here.
    pub fn variants(&self) -> Vec<Variant> {
        self.colors
            .iter()
            .map(|(id, colors)| Variant {
                id: id.clone(),
                kind: VariantKind::from_id(id),
                colors: colors.clone(),
            })
            .collect()
    }
}

/// Append an 8-bit alpha value, given as two hex digits, to a color.
///
/// The color must be an opaque 6-hex-digit `#rrggbb` string; the result
/// is the `#rrggbbaa` concatenation. No color-space math happens here,
/// the suffix case is kept as given.
pub fn with_alpha(color: &str, alpha: &str) -> String {
    let mut s = String::with_capacity(color.len() + alpha.len());
    s.push_str(color);
    s.push_str(alpha);
    s
}
