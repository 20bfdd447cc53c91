use anyhow::Error;
use serde_json::Value;
use themer_vscode::palettes::{DEFAULT_DARK, DEFAULT_LIGHT, default_palette};
use themer_vscode::{PACKAGE_NAME, Palette, render};

#[test]
fn test_manifest_metadata() -> Result<(), Error> {
    let artifacts = render(&default_palette())?;
    let manifest: Value = serde_json::from_slice(&artifacts[0].contents)?;
    dbg!(&manifest);

    assert_eq!(manifest["name"], PACKAGE_NAME);
    assert_eq!(manifest["displayName"], "Themer VS Code Themes");
    assert_eq!(manifest["description"], "Personal theme generated by themer");
    assert_eq!(manifest["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(manifest["publisher"], "Themer User");
    assert_eq!(manifest["engines"]["vscode"], "^1.14.0");
    assert_eq!(manifest["categories"][0], "Themes");
    Ok(())
}

#[test]
fn test_manifest_theme_list() -> Result<(), Error> {
    let artifacts = render(&default_palette())?;
    let manifest: Value = serde_json::from_slice(&artifacts[0].contents)?;

    let themes = manifest["contributes"]["themes"].as_array().expect("themes");
    assert_eq!(themes.len(), 2);

    assert_eq!(themes[0]["label"], "Themer Dark");
    assert_eq!(themes[0]["uiTheme"], "vs-dark");
    assert_eq!(themes[0]["path"], "./themes/themer-dark-color-theme.json");

    assert_eq!(themes[1]["label"], "Themer Light");
    assert_eq!(themes[1]["uiTheme"], "vs-light");
    assert_eq!(themes[1]["path"], "./themes/themer-light-color-theme.json");
    Ok(())
}

#[test]
fn test_manifest_follows_palette_order() -> Result<(), Error> {
    let mut pal = Palette::new();
    pal.set("light", DEFAULT_LIGHT);
    pal.set("dark", DEFAULT_DARK);

    let artifacts = render(&pal)?;
    let manifest: Value = serde_json::from_slice(&artifacts[0].contents)?;

    let themes = manifest["contributes"]["themes"].as_array().expect("themes");
    assert_eq!(themes[0]["label"], "Themer Light");
    assert_eq!(themes[1]["label"], "Themer Dark");

    // theme artifacts follow the same order
    assert!(artifacts[1].name.ends_with("themer-light-color-theme.json"));
    assert!(artifacts[2].name.ends_with("themer-dark-color-theme.json"));
    Ok(())
}

#[test]
fn test_empty_palette() -> Result<(), Error> {
    // degenerate but total: just the manifest, with no theme entries
    let artifacts = render(&Palette::new())?;
    assert_eq!(artifacts.len(), 1);

    let manifest: Value = serde_json::from_slice(&artifacts[0].contents)?;
    let themes = manifest["contributes"]["themes"].as_array().expect("themes");
    assert!(themes.is_empty());
    Ok(())
}
