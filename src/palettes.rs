//!
//! Stock color sets, usable as-is or as a starting point.
//!
//! The slot arrays are in [Slot](crate::Slot) order:
//! shade0..shade7, then accent0..accent7.
//!

use crate::palette::{ColorSet, Palette};
use std::borrow::Cow;

/// The stock dark color set.
pub const DEFAULT_DARK: ColorSet = ColorSet {
    color: [
        Cow::Borrowed("#282629"),
        Cow::Borrowed("#474247"),
        Cow::Borrowed("#656066"),
        Cow::Borrowed("#847e85"),
        Cow::Borrowed("#a29da3"),
        Cow::Borrowed("#c1bcc2"),
        Cow::Borrowed("#dfdbe0"),
        Cow::Borrowed("#fffcff"),
        Cow::Borrowed("#ff4050"),
        Cow::Borrowed("#f28144"),
        Cow::Borrowed("#ffd24a"),
        Cow::Borrowed("#a4cc35"),
        Cow::Borrowed("#26c99e"),
        Cow::Borrowed("#66bfff"),
        Cow::Borrowed("#cc78fa"),
        Cow::Borrowed("#f553bf"),
    ],
};

/// The stock light color set.
pub const DEFAULT_LIGHT: ColorSet = ColorSet {
    color: [
        Cow::Borrowed("#fffcff"),
        Cow::Borrowed("#e5e2e5"),
        Cow::Borrowed("#ccc9cc"),
        Cow::Borrowed("#b3b0b3"),
        Cow::Borrowed("#999799"),
        Cow::Borrowed("#807e80"),
        Cow::Borrowed("#666466"),
        Cow::Borrowed("#4d4b4d"),
        Cow::Borrowed("#f03e4d"),
        Cow::Borrowed("#f37735"),
        Cow::Borrowed("#eeba21"),
        Cow::Borrowed("#97bd2d"),
        Cow::Borrowed("#1fc598"),
        Cow::Borrowed("#53a6e1"),
        Cow::Borrowed("#bf65f0"),
        Cow::Borrowed("#ee4eb8"),
    ],
};

/// The stock palette: a dark and a light variant.
pub fn default_palette() -> Palette {
    let mut pal = Palette::new();
    pal.set("dark", DEFAULT_DARK);
    pal.set("light", DEFAULT_LIGHT);
    pal
}
