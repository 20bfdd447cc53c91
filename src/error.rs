use crate::palette::Slot;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Structural errors when reading a palette from JSON.
#[derive(Debug)]
pub enum LoadPaletteErr {
    /// The document is not a JSON object.
    NotAnObject,
    /// The value for a variant is not a JSON object.
    VariantNotAnObject(String),
    /// A key that is not one of the 16 slot names.
    UnknownSlot(String, String),
    /// A slot value that is not a JSON string.
    NotAColor(String, Slot),
    /// A variant without all 16 slots.
    MissingSlot(String, Slot),
}

impl Display for LoadPaletteErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadPaletteErr::NotAnObject => {
                write!(f, "load palette failed: not a JSON object")
            }
            LoadPaletteErr::VariantNotAnObject(id) => {
                write!(f, "load palette failed: variant {:?} is not an object", id)
            }
            LoadPaletteErr::UnknownSlot(id, slot) => {
                write!(f, "load palette failed: unknown slot {:?} in variant {:?}", slot, id)
            }
            LoadPaletteErr::NotAColor(id, slot) => {
                write!(
                    f,
                    "load palette failed: slot {} in variant {:?} is not a color string",
                    slot, id
                )
            }
            LoadPaletteErr::MissingSlot(id, slot) => {
                write!(f, "load palette failed: variant {:?} has no slot {}", id, slot)
            }
        }
    }
}

impl Error for LoadPaletteErr {}

/// Serialization failure while rendering the artifacts.
#[derive(Debug)]
pub struct RenderErr(pub serde_json::Error);

impl Display for RenderErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "render theme failed: {}", self.0)
    }
}

impl Error for RenderErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.0)
    }
}

impl From<serde_json::Error> for RenderErr {
    fn from(e: serde_json::Error) -> Self {
        RenderErr(e)
    }
}
