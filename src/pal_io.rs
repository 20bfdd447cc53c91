//!
//! Load/store a [Palette] as a JSON document.
//!
//! The document maps variant id to an object with the 16 slot names,
//! `{"dark": {"shade0": "#282629", ...}, "light": {...}}`. This is the
//! boundary where generated palettes enter the crate, and the one
//! place where ColorSet completeness is checked: a variant missing a
//! slot is rejected instead of leaking holes into the output.
//!

use crate::error::LoadPaletteErr;
use crate::palette::{ColorSet, Palette, Slot};
use serde_json::{Map, Value};
use std::borrow::Cow;
use std::io;

/// Store a Palette as JSON, variants and slots in insertion order.
pub fn store_palette(pal: &Palette, mut buf: impl io::Write) -> Result<(), io::Error> {
    let mut doc = Map::with_capacity(pal.len());
    for (id, colors) in pal.iter() {
        let mut variant = Map::with_capacity(Slot::LEN);
        for slot in Slot::array() {
            variant.insert(slot.name().to_string(), Value::String(colors.color(slot).to_string()));
        }
        doc.insert(id.to_string(), Value::Object(variant));
    }

    let json = serde_json::to_vec_pretty(&Value::Object(doc)).map_err(io::Error::other)?;
    buf.write_all(&json)?;
    Ok(())
}

/// Load a JSON document as a Palette.
///
/// Fails with a wrapped [LoadPaletteErr] if the document is not an
/// object of variant objects, uses a slot name outside the 16, holds
/// a non-string color, or leaves any slot of a variant unset.
pub fn load_palette(mut r: impl io::Read) -> Result<Palette, io::Error> {
    let mut buf = String::new();
    r.read_to_string(&mut buf)?;

    let doc: Value = serde_json::from_str(&buf).map_err(io::Error::other)?;
    let Value::Object(doc) = doc else {
        return Err(io::Error::other(LoadPaletteErr::NotAnObject));
    };

    let mut pal = Palette::new();
    for (id, variant) in doc {
        let Value::Object(variant) = variant else {
            return Err(io::Error::other(LoadPaletteErr::VariantNotAnObject(id)));
        };

        let mut colors = ColorSet::default();
        let mut seen = [false; Slot::LEN];
        for (name, color) in variant {
            let Some(slot) = Slot::from_name(&name) else {
                return Err(io::Error::other(LoadPaletteErr::UnknownSlot(id.clone(), name)));
            };
            let Value::String(color) = color else {
                return Err(io::Error::other(LoadPaletteErr::NotAColor(id.clone(), slot)));
            };
            colors.color[slot as usize] = Cow::Owned(color);
            seen[slot as usize] = true;
        }
        for slot in Slot::array() {
            if !seen[slot as usize] {
                return Err(io::Error::other(LoadPaletteErr::MissingSlot(id.clone(), slot)));
            }
        }

        pal.set(id, colors);
    }
    Ok(pal)
}
