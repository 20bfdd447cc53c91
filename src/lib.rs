//!
//! Generates a VS Code theme extension from a themer palette.
//!
//! A [Palette] maps variant ids (usually `"dark"` and `"light"`) to a
//! [ColorSet] of 16 named slots: `shade0`..`shade7` and
//! `accent0`..`accent7`. [render()] expands each variant through the
//! fixed [token tables](token_map) into a complete color-theme JSON
//! file, and produces the extension manifest alongside.
//!
//! The result is a list of [RenderedArtifact]s, relative path plus
//! serialized bytes. Writing them to disk is left to the caller.
//!
//! ## Usage
//!
//! ```rust
//! use themer_vscode::palettes::default_palette;
//! use themer_vscode::render;
//!
//! let palette = default_palette();
//! let artifacts = render(&palette).expect("render");
//!
//! // manifest first, then one theme file per variant
//! assert_eq!(artifacts.len(), 3);
//! assert_eq!(artifacts[0].name, "theme-themer-vscode/package.json");
//! ```
//!
//! Palettes usually come from a generator; [load_palette] reads one
//! from JSON and rejects incomplete variants.
//!

mod error;
mod pal_io;
mod palette;
pub mod palettes;
mod render;
pub mod token_map;

pub use error::{LoadPaletteErr, RenderErr};
pub use pal_io::{load_palette, store_palette};
pub use palette::{ColorSet, Palette, Slot, Variant, VariantKind, with_alpha};
pub use render::{PACKAGE_NAME, RenderedArtifact, render};
