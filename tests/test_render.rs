use anyhow::Error;
use serde_json::Value;
use themer_vscode::palettes::default_palette;
use themer_vscode::token_map::{COLOR_MAP, TOKEN_COLORS};
use themer_vscode::{ColorSet, Palette, Slot, render};

fn flat(color: &'static str) -> ColorSet {
    let mut c = ColorSet::default();
    for slot in Slot::array() {
        c.set_color(slot, color);
    }
    c
}

#[test]
fn test_totality() -> Result<(), Error> {
    let artifacts = render(&default_palette())?;

    assert_eq!(artifacts.len(), 3);
    assert_eq!(artifacts[0].name, "theme-themer-vscode/package.json");
    assert_eq!(
        artifacts[1].name,
        "theme-themer-vscode/themes/themer-dark-color-theme.json"
    );
    assert_eq!(
        artifacts[2].name,
        "theme-themer-vscode/themes/themer-light-color-theme.json"
    );
    Ok(())
}

#[test]
fn test_determinism() -> Result<(), Error> {
    let pal = default_palette();
    assert_eq!(render(&pal)?, render(&pal)?);
    Ok(())
}

#[test]
fn test_shadow_selection() -> Result<(), Error> {
    let mut colors = flat("#808080");
    colors.set_color(Slot::Shade0, "#000000");
    colors.set_color(Slot::Shade7, "#ffffff");

    let mut pal = Palette::new();
    pal.set("dark", colors.clone());
    pal.set("light", colors);

    let artifacts = render(&pal)?;
    let dark: Value = serde_json::from_slice(&artifacts[1].contents)?;
    let light: Value = serde_json::from_slice(&artifacts[2].contents)?;

    // dark reference is shade0 for the dark variant, shade7 otherwise
    assert_eq!(dark["colors"]["widget.shadow"], "#00000066");
    assert_eq!(dark["colors"]["scrollbar.shadow"], "#00000066");
    assert_eq!(light["colors"]["widget.shadow"], "#ffffff66");
    assert_eq!(light["colors"]["scrollbar.shadow"], "#ffffff66");
    Ok(())
}

#[test]
fn test_alpha_suffixing() -> Result<(), Error> {
    let mut colors = flat("#808080");
    colors.set_color(Slot::Accent5, "#112233");
    colors.set_color(Slot::Accent6, "#aabbcc");

    let mut pal = Palette::new();
    pal.set("dark", colors);

    let artifacts = render(&pal)?;
    let theme: Value = serde_json::from_slice(&artifacts[1].contents)?;

    // plain string suffixing, case preserved, no color math
    assert_eq!(theme["colors"]["editor.selectionBackground"], "#11223355");
    assert_eq!(theme["colors"]["editor.inactiveSelectionBackground"], "#11223333");
    assert_eq!(theme["colors"]["editor.wordHighlightBackground"], "#aabbcc7f");
    assert_eq!(theme["colors"]["statusBar.background"], "#112233");
    Ok(())
}

#[test]
fn test_key_stability() -> Result<(), Error> {
    // structure is input-independent, only the values vary
    let mut pal = Palette::new();
    pal.set("solarized", flat("#002b36"));

    let artifacts = render(&pal)?;
    assert_eq!(artifacts.len(), 2);
    assert_eq!(
        artifacts[1].name,
        "theme-themer-vscode/themes/themer-solarized-color-theme.json"
    );

    let theme: Value = serde_json::from_slice(&artifacts[1].contents)?;
    assert_eq!(theme["name"], "Themer Light");
    assert_eq!(theme["type"], "solarized");

    let colors = theme["colors"].as_object().expect("colors");
    let keys = colors.keys().map(|k| k.as_str()).collect::<Vec<_>>();
    let expected = COLOR_MAP.iter().map(|(k, _)| *k).collect::<Vec<_>>();
    assert_eq!(keys, expected);

    let token_colors = theme["tokenColors"].as_array().expect("tokenColors");
    assert_eq!(token_colors.len(), TOKEN_COLORS.len());
    assert!(token_colors[0].get("name").is_none());
    assert!(token_colors[0].get("scope").is_none());
    for (entry, rule) in token_colors[1..].iter().zip(&TOKEN_COLORS[1..]) {
        assert_eq!(entry["name"], rule.name.expect("name"));
        assert_eq!(entry["scope"], rule.scope.expect("scope"));
    }
    Ok(())
}

#[test]
fn test_token_color_values() -> Result<(), Error> {
    let mut colors = flat("#808080");
    colors.set_color(Slot::Shade2, "#222222");
    colors.set_color(Slot::Shade6, "#cdcdcd");

    let mut pal = Palette::new();
    pal.set("dark", colors);

    let artifacts = render(&pal)?;
    let theme: Value = serde_json::from_slice(&artifacts[1].contents)?;
    let token_colors = theme["tokenColors"].as_array().expect("tokenColors");

    // defaults entry: uppercase "7F" suffix and verbatim style keywords
    let defaults = &token_colors[0]["settings"];
    assert_eq!(defaults["bracketsForeground"], "#cdcdcd7F");
    assert_eq!(defaults["bracketsOptions"], "stippled_underline");

    // Comment takes shade2, Markup Underline is a bare font style
    assert_eq!(token_colors[1]["name"], "Comment");
    assert_eq!(token_colors[1]["settings"]["foreground"], "#222222");
    let underline = token_colors
        .iter()
        .find(|e| e["scope"] == "markup.underline")
        .expect("markup.underline");
    assert_eq!(underline["settings"]["fontStyle"], "underline");
    assert!(underline["settings"].get("foreground").is_none());
    Ok(())
}

#[test]
fn test_serialization_format() -> Result<(), Error> {
    let artifacts = render(&default_palette())?;

    for a in &artifacts {
        // 2-space indent, no trailing newline
        let text = std::str::from_utf8(&a.contents)?;
        assert!(text.starts_with("{\n  \"name\""), "{}", a.name);
        assert!(!text.ends_with('\n'), "{}", a.name);
    }
    Ok(())
}
