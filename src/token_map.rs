//!
//! The fixed palette→token tables.
//!
//! [COLOR_MAP] assigns every workbench color key, in emission order, to
//! one of the 16 palette slots, plain or alpha-suffixed. [TOKEN_COLORS]
//! is the ordered list of syntax scope rules. Both are part of the
//! compatibility contract with the editor host: the exact key names and
//! their order are load-bearing, the palette values are not.
//!

use crate::palette::Slot::*;
use crate::palette::{ColorSet, Slot, VariantKind, with_alpha};

/// Selects the value for one output key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sel {
    /// A palette slot, verbatim.
    Plain(Slot),
    /// A palette slot with a two-hex-digit alpha suffix appended.
    Alpha(Slot, &'static str),
    /// The variant's dark reference color with alpha `"66"`.
    Shadow,
}

impl Sel {
    /// Resolve against a variant's colors.
    pub fn resolve(self, colors: &ColorSet, kind: VariantKind) -> String {
        match self {
            Sel::Plain(slot) => colors.color(slot).to_string(),
            Sel::Alpha(slot, alpha) => with_alpha(colors.color(slot), alpha),
            Sel::Shadow => with_alpha(colors.color(kind.dark_slot()), "66"),
        }
    }
}

const fn plain(key: &'static str, slot: Slot) -> (&'static str, Sel) {
    (key, Sel::Plain(slot))
}

const fn alpha(key: &'static str, slot: Slot, a: &'static str) -> (&'static str, Sel) {
    (key, Sel::Alpha(slot, a))
}

const fn shadow(key: &'static str) -> (&'static str, Sel) {
    (key, Sel::Shadow)
}

/// The workbench color table. Emission order is the array order.
pub const COLOR_MAP: &[(&str, Sel)] = &[
    // Base colors
    plain("focusBorder", Accent6),
    plain("foreground", Shade7),
    shadow("widget.shadow"),
    plain("selection.background", Shade2),
    plain("errorForeground", Accent0),
    // Button control
    plain("button.background", Accent5),
    plain("button.foreground", Shade0),
    plain("button.hoverBackground", Accent4),
    // Dropdown control
    plain("dropdown.background", Shade1),
    plain("dropdown.border", Shade1),
    plain("dropdown.foreground", Shade6),
    // Input control
    plain("input.background", Shade1),
    plain("input.border", Shade1),
    plain("input.foreground", Shade6),
    plain("input.placeholderForeground", Shade2),
    plain("inputOption.activeBorder", Accent4),
    plain("inputValidation.errorBackground", Shade1),
    plain("inputValidation.errorBorder", Accent0),
    plain("inputValidation.infoBackground", Shade1),
    plain("inputValidation.infoBorder", Accent5),
    plain("inputValidation.warningBackground", Shade1),
    plain("inputValidation.warningBorder", Accent1),
    // Scroll bar control
    shadow("scrollbar.shadow"),
    plain("scrollbarSlider.activeBackground", Shade3),
    plain("scrollbarSlider.background", Shade1),
    plain("scrollbarSlider.hoverBackground", Shade2),
    // Badge
    plain("badge.foreground", Shade7),
    plain("badge.background", Accent6),
    // Progress bar
    plain("progressBar.background", Accent3),
    // Lists and trees
    plain("list.activeSelectionBackground", Accent3),
    plain("list.activeSelectionForeground", Shade7),
    plain("list.dropBackground", Shade3),
    plain("list.focusBackground", Accent3),
    plain("list.highlightForeground", Accent2),
    plain("list.hoverBackground", Shade1),
    plain("list.inactiveSelectionBackground", Shade3),
    plain("list.inactiveSelectionForeground", Shade7),
    plain("list.hoverForeground", Shade5),
    plain("list.focusForeground", Shade6),
    // Activity bar
    plain("activityBar.background", Shade0),
    plain("activityBar.dropBackground", Shade1),
    plain("activityBar.foreground", Shade5),
    plain("activityBar.border", Shade0),
    plain("activityBarBadge.background", Accent6),
    plain("activityBarBadge.foreground", Shade7),
    // Side bar
    plain("sideBar.background", Shade0),
    plain("sideBar.foreground", Shade6),
    plain("sideBar.border", Shade0),
    plain("sideBarTitle.foreground", Shade7),
    plain("sideBarSectionHeader.background", Shade1),
    plain("sideBarSectionHeader.foreground", Shade5),
    // Editor groups & tabs
    plain("editorGroup.background", Shade0),
    plain("editorGroup.border", Shade1),
    plain("editorGroup.dropBackground", Shade2),
    plain("editorGroupHeader.noTabsBackground", Shade0),
    plain("editorGroupHeader.tabsBackground", Shade1),
    plain("editorGroupHeader.tabsBorder", Shade1),
    plain("tab.activeBackground", Shade0),
    plain("tab.activeForeground", Shade7),
    plain("tab.border", Shade0),
    plain("tab.inactiveBackground", Shade1),
    plain("tab.inactiveForeground", Shade4),
    plain("tab.unfocusedActiveForeground", Shade1),
    plain("tab.unfocusedInactiveForeground", Shade3),
    // Editor colors
    plain("editor.background", Shade0),
    plain("editor.foreground", Shade7),
    plain("editorLineNumber.foreground", Shade2),
    plain("editorCursor.foreground", Accent6),
    alpha("editor.selectionBackground", Accent5, "55"),
    plain("editor.selectionHighlightBackground", Shade1),
    alpha("editor.inactiveSelectionBackground", Accent5, "33"),
    alpha("editor.wordHighlightBackground", Accent6, "7f"),
    alpha("editor.wordHighlightStrongBackground", Accent7, "7f"),
    plain("editor.findMatchBackground", Accent2),
    alpha("editor.findMatchHighlightBackground", Accent2, "7f"),
    plain("editor.findRangeHighlightBackground", Shade1),
    plain("editor.hoverHighlightBackground", Shade2),
    plain("editor.lineHighlightBackground", Shade1),
    plain("editor.lineHighlightBorder", Shade1),
    plain("editorLink.activeForeground", Accent4),
    plain("editor.rangeHighlightBackground", Accent2),
    plain("editorWhitespace.foreground", Shade1),
    plain("editorIndentGuide.background", Shade1),
    plain("editorRuler.foreground", Shade1),
    plain("editorCodeLens.foreground", Shade5),
    plain("editorBracketMatch.background", Shade1),
    plain("editorBracketMatch.border", Shade1),
    plain("editorOverviewRuler.border", Shade1),
    plain("editorError.foreground", Accent0),
    plain("editorError.border", Shade7),
    plain("editorWarning.foreground", Accent1),
    plain("editorWarning.border", Shade6),
    plain("editorGutter.background", Shade0),
    plain("editorGutter.modifiedBackground", Accent2),
    plain("editorGutter.addedBackground", Accent3),
    plain("editorGutter.deletedBackground", Accent0),
    // Diff editor colors
    alpha("diffEditor.insertedTextBackground", Accent3, "55"),
    plain("diffEditor.insertedTextBorder", Accent3),
    alpha("diffEditor.removedTextBackground", Accent0, "55"),
    plain("diffEditor.removedTextBorder", Accent0),
    // Editor widget colors
    plain("editorWidget.background", Shade1),
    plain("editorWidget.border", Shade1),
    plain("editorSuggestWidget.background", Shade1),
    plain("editorSuggestWidget.border", Shade1),
    plain("editorSuggestWidget.foreground", Shade6),
    plain("editorSuggestWidget.highlightForeground", Accent7),
    plain("editorSuggestWidget.selectedBackground", Shade2),
    plain("editorHoverWidget.background", Shade1),
    plain("editorHoverWidget.border", Shade1),
    plain("debugExceptionWidget.background", Shade1),
    plain("debugExceptionWidget.border", Shade1),
    plain("editorMarkerNavigation.background", Shade1),
    plain("editorMarkerNavigationError.background", Accent0),
    plain("editorMarkerNavigationWarning.background", Accent1),
    // Peek view colors
    plain("peekView.border", Accent7),
    plain("peekViewEditor.background", Shade1),
    plain("peekViewEditorGutter.background", Shade1),
    plain("peekViewEditor.matchHighlightBackground", Accent2),
    plain("peekViewResult.background", Shade1),
    plain("peekViewResult.fileForeground", Shade6),
    plain("peekViewResult.lineForeground", Shade2),
    plain("peekViewResult.matchHighlightBackground", Accent2),
    plain("peekViewResult.selectionBackground", Shade3),
    plain("peekViewResult.selectionForeground", Shade7),
    plain("peekViewTitle.background", Shade2),
    plain("peekViewTitleDescription.foreground", Shade5),
    plain("peekViewTitleLabel.foreground", Shade7),
    // Merge conflicts
    plain("merge.currentHeaderBackground", Accent4),
    alpha("merge.currentContentBackground", Accent4, "7f"),
    plain("merge.incomingHeaderBackground", Accent5),
    alpha("merge.incomingContentBackground", Accent5, "7f"),
    plain("merge.border", Shade4),
    plain("editorOverviewRuler.currentContentForeground", Accent4),
    plain("editorOverviewRuler.incomingContentForeground", Accent5),
    // Panel colors
    plain("panel.background", Shade0),
    plain("panel.border", Shade1),
    plain("panelTitle.activeBorder", Shade3),
    plain("panelTitle.activeForeground", Shade6),
    plain("panelTitle.inactiveForeground", Shade4),
    // Status bar colors
    plain("statusBar.background", Accent5),
    plain("statusBar.foreground", Shade7),
    plain("statusBar.debuggingBackground", Accent1),
    plain("statusBar.debuggingForeground", Shade7),
    plain("statusBar.noFolderForeground", Shade7),
    plain("statusBar.noFolderBackground", Accent6),
    plain("statusBarItem.activeBackground", Accent4),
    plain("statusBarItem.hoverBackground", Accent3),
    plain("statusBarItem.prominentBackground", Accent4),
    plain("statusBarItem.prominentHoverBackground", Accent3),
    plain("statusBar.border", Accent5),
    // Title bar colors
    plain("titleBar.activeBackground", Shade0),
    plain("titleBar.activeForeground", Shade5),
    plain("titleBar.inactiveBackground", Shade0),
    plain("titleBar.inactiveForeground", Shade4),
    // Notification dialog colors
    plain("notification.background", Shade1),
    plain("notification.foreground", Shade7),
    plain("notification.buttonBackground", Accent5),
    plain("notification.buttonHoverBackground", Accent4),
    plain("notification.buttonForeground", Shade7),
    plain("notification.infoBackground", Accent5),
    plain("notification.infoForeground", Shade7),
    plain("notification.warningBackground", Accent1),
    plain("notification.warningForeground", Shade7),
    plain("notification.errorBackground", Accent0),
    plain("notification.errorForeground", Shade7),
    // Extensions
    plain("extensionButton.prominentForeground", Shade7),
    plain("extensionButton.prominentBackground", Accent5),
    plain("extensionButton.prominentHoverBackground", Accent4),
    // Quick picker
    plain("pickerGroup.border", Accent7),
    plain("pickerGroup.foreground", Accent3),
    // Integrated terminal colors
    plain("terminal.background", Shade0),
    plain("terminal.foreground", Shade6),
    plain("terminal.ansiBlack", Shade0),
    plain("terminal.ansiBlue", Accent5),
    plain("terminal.ansiBrightBlack", Shade1),
    plain("terminal.ansiBrightBlue", Accent5),
    plain("terminal.ansiBrightCyan", Accent4),
    plain("terminal.ansiBrightGreen", Accent4),
    plain("terminal.ansiBrightMagenta", Accent7),
    plain("terminal.ansiBrightRed", Accent1),
    plain("terminal.ansiBrightWhite", Shade7),
    plain("terminal.ansiBrightYellow", Accent2),
    plain("terminal.ansiCyan", Accent4),
    plain("terminal.ansiGreen", Accent3),
    plain("terminal.ansiMagenta", Accent7),
    plain("terminal.ansiRed", Accent0),
    plain("terminal.ansiWhite", Shade6),
    plain("terminal.ansiYellow", Accent2),
    // Debug
    plain("debugToolBar.background", Shade1),
    // Welcome page
    plain("welcomePage.buttonBackground", Accent5),
    plain("welcomePage.buttonHoverBackground", Accent4),
    plain("walkThrough.embeddedEditorBackground", Shade0),
];

/// One setting value in a [TokenRule].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Setting {
    /// Palette-derived color.
    Color(Sel),
    /// Fixed style keyword, emitted verbatim.
    Keyword(&'static str),
}

/// One syntax scope rule. `name` and `scope` are absent for the
/// global defaults entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenRule {
    pub name: Option<&'static str>,
    pub scope: Option<&'static str>,
    pub settings: &'static [(&'static str, Setting)],
}

const fn set(key: &'static str, slot: Slot) -> (&'static str, Setting) {
    (key, Setting::Color(Sel::Plain(slot)))
}

const fn set_alpha(key: &'static str, slot: Slot, a: &'static str) -> (&'static str, Setting) {
    (key, Setting::Color(Sel::Alpha(slot, a)))
}

const fn set_keyword(key: &'static str, kw: &'static str) -> (&'static str, Setting) {
    (key, Setting::Keyword(kw))
}

const fn rule(
    name: &'static str,
    scope: &'static str,
    settings: &'static [(&'static str, Setting)],
) -> TokenRule {
    TokenRule {
        name: Some(name),
        scope: Some(scope),
        settings,
    }
}

/// The syntax token-color rules. Emission order is the array order.
pub const TOKEN_COLORS: &[TokenRule] = &[
    TokenRule {
        name: None,
        scope: None,
        settings: &[
            set("background", Shade0),
            set("foreground", Shade6),
            set("selectionBorder", Shade5),
            set("findHighlight", Accent2),
            set("findHighlightForeground", Shade0),
            set("activeGuide", Accent1),
            set_alpha("bracketsForeground", Shade6, "7F"),
            set_keyword("bracketsOptions", "stippled_underline"),
            set_alpha("bracketsContentsForeground", Shade6, "7F"),
            set_keyword("tagsOptions", "stippled_underline"),
        ],
    },
    rule("Comment", "comment", &[set("foreground", Shade2)]),
    rule("Constant", "constant", &[set("foreground", Accent7)]),
    rule("Entity", "entity", &[set("foreground", Accent4)]),
    rule(
        "Invalid",
        "invalid",
        &[set("background", Accent0), set("foreground", Shade1)],
    ),
    rule("Keyword", "keyword", &[set("foreground", Accent6)]),
    rule("Storage", "storage", &[set("foreground", Accent7)]),
    rule("String", "string", &[set("foreground", Accent3)]),
    rule("Support", "support", &[set("foreground", Accent4)]),
    rule("Variable", "variable", &[set("foreground", Shade7)]),
    rule("Markup Heading", "markup.heading", &[set("foreground", Accent4)]),
    rule("Markup Deleted", "markup.deleted", &[set("foreground", Accent0)]),
    rule("Markup Inserted", "markup.inserted", &[set("foreground", Accent3)]),
    rule("Markup Changed", "markup.changed", &[set("foreground", Accent2)]),
    rule(
        "Markup Underline",
        "markup.underline",
        &[set_keyword("fontStyle", "underline")],
    ),
    rule(
        "Markup Underline Link",
        "markup.underline.link",
        &[set("foreground", Accent5)],
    ),
    rule("Markup List", "markup.list", &[set("foreground", Shade7)]),
    rule("Markup Raw", "markup.raw", &[set("foreground", Accent7)]),
];
