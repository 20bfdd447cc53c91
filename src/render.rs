//!
//! Renders a [Palette] into the extension artifacts: one manifest
//! plus one color-theme file per variant.
//!
//! Everything here is pure computation over the palette; writing the
//! artifacts to disk is somebody else's job.
//!

use crate::error::RenderErr;
use crate::palette::{Palette, Variant};
use crate::token_map::{COLOR_MAP, Setting, TOKEN_COLORS, TokenRule};
use log::debug;
use serde::Serialize;
use serde_json::{Map, Value};

/// Name of the generated extension package. All artifact paths are
/// relative to the directory of this name.
pub const PACKAGE_NAME: &str = "theme-themer-vscode";

const THEMES_DIR: &str = "themes";

/// One generated output unit: a relative path and the serialized
/// UTF-8 JSON payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedArtifact {
    pub name: String,
    pub contents: Vec<u8>,
}

#[derive(Debug, Serialize)]
struct Manifest {
    name: &'static str,
    #[serde(rename = "displayName")]
    display_name: &'static str,
    description: &'static str,
    version: &'static str,
    publisher: &'static str,
    engines: Engines,
    categories: &'static [&'static str],
    contributes: Contributes,
}

#[derive(Debug, Serialize)]
struct Engines {
    vscode: &'static str,
}

#[derive(Debug, Serialize)]
struct Contributes {
    themes: Vec<ThemeEntry>,
}

#[derive(Debug, Serialize)]
struct ThemeEntry {
    label: String,
    #[serde(rename = "uiTheme")]
    ui_theme: String,
    path: String,
}

/// Render all artifacts for the palette.
///
/// The manifest comes first, then one theme file per variant in
/// palette order. For a palette with N variants this always produces
/// N+1 artifacts; rendering twice yields byte-identical output.
pub fn render(palette: &Palette) -> Result<Vec<RenderedArtifact>, RenderErr> {
    let variants = palette.variants();

    let mut artifacts = Vec::with_capacity(variants.len() + 1);
    artifacts.push(render_manifest(&variants)?);
    for variant in &variants {
        artifacts.push(render_theme(variant)?);
    }
    Ok(artifacts)
}

fn theme_file_name(id: &str) -> String {
    format!("themer-{}-color-theme.json", id)
}

fn render_manifest(variants: &[Variant]) -> Result<RenderedArtifact, RenderErr> {
    let manifest = Manifest {
        name: PACKAGE_NAME,
        display_name: "Themer VS Code Themes",
        description: "Personal theme generated by themer",
        version: env!("CARGO_PKG_VERSION"),
        publisher: "Themer User",
        engines: Engines { vscode: "^1.14.0" },
        categories: &["Themes"],
        contributes: Contributes {
            themes: variants
                .iter()
                .map(|v| ThemeEntry {
                    label: format!("Themer {}", v.kind.label()),
                    ui_theme: format!("vs-{}", v.id),
                    path: format!("./{}/{}", THEMES_DIR, theme_file_name(&v.id)),
                })
                .collect(),
        },
    };

    let name = format!("{}/package.json", PACKAGE_NAME);
    debug!("themer: render {:?}", name);

    Ok(RenderedArtifact {
        name,
        contents: serde_json::to_vec_pretty(&manifest)?,
    })
}

fn render_theme(variant: &Variant) -> Result<RenderedArtifact, RenderErr> {
    let mut colors = Map::with_capacity(COLOR_MAP.len());
    for (key, sel) in COLOR_MAP {
        colors.insert((*key).to_string(), Value::String(sel.resolve(&variant.colors, variant.kind)));
    }

    let token_colors = TOKEN_COLORS
        .iter()
        .map(|rule| token_rule_value(rule, variant))
        .collect::<Vec<_>>();

    let mut doc = Map::with_capacity(4);
    doc.insert(
        "name".to_string(),
        Value::String(format!("Themer {}", variant.kind.label())),
    );
    doc.insert("type".to_string(), Value::String(variant.id.clone()));
    doc.insert("colors".to_string(), Value::Object(colors));
    doc.insert("tokenColors".to_string(), Value::Array(token_colors));

    let name = format!("{}/{}/{}", PACKAGE_NAME, THEMES_DIR, theme_file_name(&variant.id));
    debug!("themer: render {:?}", name);

    Ok(RenderedArtifact {
        name,
        contents: serde_json::to_vec_pretty(&Value::Object(doc))?,
    })
}

fn token_rule_value(rule: &TokenRule, variant: &Variant) -> Value {
    let mut entry = Map::new();
    if let Some(name) = rule.name {
        entry.insert("name".to_string(), Value::String(name.to_string()));
    }
    if let Some(scope) = rule.scope {
        entry.insert("scope".to_string(), Value::String(scope.to_string()));
    }

    let mut settings = Map::with_capacity(rule.settings.len());
    for (key, setting) in rule.settings {
        let value = match setting {
            Setting::Color(sel) => sel.resolve(&variant.colors, variant.kind),
            Setting::Keyword(kw) => (*kw).to_string(),
        };
        settings.insert((*key).to_string(), Value::String(value));
    }
    entry.insert("settings".to_string(), Value::Object(settings));

    Value::Object(entry)
}
