//! Theme Registry: the five fixed visual styles a resume can be rendered in.
//!
//! Themes are immutable statics. Selection swaps the whole theme; nothing in
//! a theme is ever edited at runtime.

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Theme names
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    /// Cyan accents on Inter.
    #[default]
    Modern,
    /// Navy with a Merriweather serif heading.
    Classic,
    /// Near-monochrome gray.
    Minimal,
    /// Purple accents.
    Creative,
    /// Green accents on navy text.
    Professional,
}

impl ThemeName {
    pub const ALL: [ThemeName; 5] = [
        ThemeName::Modern,
        ThemeName::Classic,
        ThemeName::Minimal,
        ThemeName::Creative,
        ThemeName::Professional,
    ];

    pub fn all_names() -> Vec<&'static str> {
        Self::ALL.iter().map(ThemeName::as_str).collect()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeName::Modern => "modern",
            ThemeName::Classic => "classic",
            ThemeName::Minimal => "minimal",
            ThemeName::Creative => "creative",
            ThemeName::Professional => "professional",
        }
    }

    /// Looks a theme up by name. Unknown names resolve to `modern`.
    pub fn from_name(name: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(name.trim()))
            .unwrap_or_default()
    }

    /// Capitalized label for theme pickers ("Modern", "Classic", ...).
    pub fn label(&self) -> String {
        let name = self.as_str();
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            None => String::new(),
        }
    }

    pub fn theme(&self) -> &'static Theme {
        match self {
            ThemeName::Modern => &MODERN,
            ThemeName::Classic => &CLASSIC,
            ThemeName::Minimal => &MINIMAL,
            ThemeName::Creative => &CREATIVE,
            ThemeName::Professional => &PROFESSIONAL,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Style descriptor
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub name: ThemeName,
    pub font_family: FontPair,
    pub colors: Palette,
    pub spacing: Spacing,
    pub font_size: FontSizes,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FontPair {
    pub heading: &'static str,
    pub body: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Palette {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub text: TextColors,
    pub background: BackgroundColors,
    pub border: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextColors {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BackgroundColors {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Spacing {
    pub section: &'static str,
    pub item: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FontSizes {
    pub name: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub body: &'static str,
    pub small: &'static str,
}

/// The four swatches shown next to each theme in a picker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreviewColors {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub background: &'static str,
    pub accent: &'static str,
}

impl Theme {
    pub fn preview_colors(&self) -> PreviewColors {
        PreviewColors {
            primary: self.colors.primary,
            secondary: self.colors.secondary,
            background: self.colors.background.primary,
            accent: self.colors.background.accent,
        }
    }

    /// The theme as `--theme-*` CSS custom properties, in a stable order.
    pub fn css_variables(&self) -> Vec<(&'static str, &'static str)> {
        vec![
            ("--theme-primary", self.colors.primary),
            ("--theme-secondary", self.colors.secondary),
            ("--theme-text-primary", self.colors.text.primary),
            ("--theme-text-secondary", self.colors.text.secondary),
            ("--theme-text-accent", self.colors.text.accent),
            ("--theme-bg-primary", self.colors.background.primary),
            ("--theme-bg-secondary", self.colors.background.secondary),
            ("--theme-bg-accent", self.colors.background.accent),
            ("--theme-border", self.colors.border),
            ("--theme-spacing-section", self.spacing.section),
            ("--theme-spacing-item", self.spacing.item),
            ("--theme-font-heading", self.font_family.heading),
            ("--theme-font-body", self.font_family.body),
            ("--theme-font-size-name", self.font_size.name),
            ("--theme-font-size-title", self.font_size.title),
            ("--theme-font-size-subtitle", self.font_size.subtitle),
            ("--theme-font-size-body", self.font_size.body),
            ("--theme-font-size-small", self.font_size.small),
        ]
    }

    /// `css_variables` joined into one `style` attribute value.
    pub fn css_variables_inline(&self) -> String {
        self.css_variables()
            .into_iter()
            .map(|(k, v)| format!("{k}: {v};"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Registry
// ────────────────────────────────────────────────────────────────────────────

const INTER: &str = "Inter, sans-serif";
const PAGE_WHITE: &str = "#ffffff";
const SHARED_BG_ACCENT: &str = "#0284c7";

static MODERN: Theme = Theme {
    name: ThemeName::Modern,
    font_family: FontPair {
        heading: INTER,
        body: INTER,
    },
    colors: Palette {
        primary: "#0891b2",
        secondary: "#0e7490",
        text: TextColors {
            primary: "#1F2937",
            secondary: "#4B5563",
            accent: "#0891b2",
        },
        background: BackgroundColors {
            primary: PAGE_WHITE,
            secondary: "#F4F5F7",
            accent: SHARED_BG_ACCENT,
        },
        border: "#D2D6DC",
    },
    spacing: Spacing {
        section: "2rem",
        item: "1.5rem",
    },
    font_size: FontSizes {
        name: "2.25rem",
        title: "1.5rem",
        subtitle: "1.25rem",
        body: "1rem",
        small: "0.875rem",
    },
};

static CLASSIC: Theme = Theme {
    name: ThemeName::Classic,
    font_family: FontPair {
        heading: "Merriweather, serif",
        body: INTER,
    },
    colors: Palette {
        primary: "#1b3bbb",
        secondary: "#1B254B",
        text: TextColors {
            primary: "#1B2559",
            secondary: "#707eae",
            accent: "#1b3bbb",
        },
        background: BackgroundColors {
            primary: PAGE_WHITE,
            secondary: "#EEF0F6",
            accent: SHARED_BG_ACCENT,
        },
        border: "#C9D0E3",
    },
    spacing: Spacing {
        section: "2.5rem",
        item: "1.75rem",
    },
    font_size: FontSizes {
        name: "2.5rem",
        title: "1.75rem",
        subtitle: "1.375rem",
        body: "1rem",
        small: "0.875rem",
    },
};

static MINIMAL: Theme = Theme {
    name: ThemeName::Minimal,
    font_family: FontPair {
        heading: INTER,
        body: INTER,
    },
    colors: Palette {
        primary: "#1B2559",
        secondary: "#707eae",
        text: TextColors {
            primary: "#1B2559",
            secondary: "#A3AED0",
            accent: "#1B2559",
        },
        background: BackgroundColors {
            primary: PAGE_WHITE,
            secondary: "#F9FAFB",
            accent: SHARED_BG_ACCENT,
        },
        border: "#E5E7EB",
    },
    spacing: Spacing {
        section: "2rem",
        item: "1.5rem",
    },
    font_size: FontSizes {
        name: "2rem",
        title: "1.5rem",
        subtitle: "1.25rem",
        body: "1rem",
        small: "0.875rem",
    },
};

static CREATIVE: Theme = Theme {
    name: ThemeName::Creative,
    font_family: FontPair {
        heading: INTER,
        body: INTER,
    },
    colors: Palette {
        primary: "#9333ea",
        secondary: "#7928ca",
        text: TextColors {
            primary: "#1F2937",
            secondary: "#4B5563",
            accent: "#9333ea",
        },
        background: BackgroundColors {
            primary: PAGE_WHITE,
            secondary: "#f3e8ff",
            accent: SHARED_BG_ACCENT,
        },
        border: "#d8b4fe",
    },
    spacing: Spacing {
        section: "2.25rem",
        item: "1.5rem",
    },
    font_size: FontSizes {
        name: "2.25rem",
        title: "1.625rem",
        subtitle: "1.25rem",
        body: "1rem",
        small: "0.875rem",
    },
};

static PROFESSIONAL: Theme = Theme {
    name: ThemeName::Professional,
    font_family: FontPair {
        heading: INTER,
        body: INTER,
    },
    colors: Palette {
        primary: "#01B574",
        secondary: "#016B44",
        text: TextColors {
            primary: "#111c44",
            secondary: "#24388a",
            accent: "#01B574",
        },
        background: BackgroundColors {
            primary: PAGE_WHITE,
            secondary: "#E1FFF4",
            accent: SHARED_BG_ACCENT,
        },
        border: "#39FEB6",
    },
    spacing: Spacing {
        section: "2.25rem",
        item: "1.5rem",
    },
    font_size: FontSizes {
        name: "2.25rem",
        title: "1.5rem",
        subtitle: "1.25rem",
        body: "1rem",
        small: "0.875rem",
    },
};
