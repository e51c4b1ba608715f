/// A style knob exposed by the live-editing panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Setting {
    BackgroundColor,
    TextColor,
    Font,
}

impl Setting {
    pub const ALL: [Setting; 3] = [Setting::BackgroundColor, Setting::TextColor, Setting::Font];

    /// Custom property on `:root` that the stylesheet reads.
    pub fn css_property(self) -> &'static str {
        match self {
            Setting::BackgroundColor => "--bg-color",
            Setting::TextColor => "--text-color",
            Setting::Font => "--font-main",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Setting::BackgroundColor => "Background Color",
            Setting::TextColor => "Text Color",
            Setting::Font => "Main Font",
        }
    }

    pub fn default_value(self) -> &'static str {
        match self {
            Setting::BackgroundColor => "#000000",
            Setting::TextColor => "#ffffff",
            Setting::Font => FONT_CHOICES[0].value,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FontChoice {
    pub name: &'static str,
    pub value: &'static str,
}

pub const FONT_CHOICES: [FontChoice; 5] = [
    FontChoice {
        name: "Inter (Default)",
        value: "'Inter', sans-serif",
    },
    FontChoice {
        name: "JetBrains Mono",
        value: "'JetBrains Mono', monospace",
    },
    FontChoice {
        name: "Serif (Times)",
        value: "'Times New Roman', serif",
    },
    FontChoice {
        name: "Arial",
        value: "Arial, sans-serif",
    },
    FontChoice {
        name: "Courier New",
        value: "'Courier New', monospace",
    },
];

/// Accepts `#rgb` and `#rrggbb`, which is all `<input type=color>` emits.
pub fn is_hex_color(value: &str) -> bool {
    let Some(hex) = value.strip_prefix('#') else {
        return false;
    };
    matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit())
}

/// Validate an incoming value for `setting`; `None` means leave the page alone.
pub fn accept_value(setting: Setting, value: &str) -> Option<String> {
    match setting {
        Setting::BackgroundColor | Setting::TextColor => {
            is_hex_color(value).then(|| value.to_ascii_lowercase())
        }
        Setting::Font => FONT_CHOICES
            .iter()
            .find(|f| f.value == value)
            .map(|f| f.value.to_string()),
    }
}

/// Body cursor while free-text editing is on or off.
#[inline]
pub fn edit_cursor(enabled: bool) -> &'static str {
    if enabled {
        "text"
    } else {
        "default"
    }
}
