// Settings panel validation, logo mask strings and scroll-reveal timing.

#![allow(dead_code)]
mod fx {
    pub mod editor {
        include!("../src/core/editor.rs");
    }
    pub mod logo {
        include!("../src/core/logo.rs");
    }
    pub mod reveal {
        include!("../src/core/reveal.rs");
    }
}

use fx::editor::*;
use fx::logo::*;
use fx::reveal::*;

#[test]
fn settings_map_to_root_custom_properties() {
    let props: Vec<_> = Setting::ALL.iter().map(|s| s.css_property()).collect();
    assert_eq!(props, ["--bg-color", "--text-color", "--font-main"]);
    assert_eq!(Setting::BackgroundColor.default_value(), "#000000");
    assert_eq!(Setting::TextColor.default_value(), "#ffffff");
    assert_eq!(Setting::Font.default_value(), "'Inter', sans-serif");
}

#[test]
fn colour_values_are_validated_and_normalised() {
    assert_eq!(
        accept_value(Setting::BackgroundColor, "#1A2b3C"),
        Some("#1a2b3c".to_string())
    );
    assert_eq!(accept_value(Setting::TextColor, "#fff"), Some("#fff".to_string()));
    assert_eq!(accept_value(Setting::TextColor, "red"), None);
    assert_eq!(accept_value(Setting::TextColor, "#12345g"), None);
    assert_eq!(accept_value(Setting::TextColor, "#1234"), None);
}

#[test]
fn only_listed_fonts_are_accepted() {
    for f in FONT_CHOICES {
        assert_eq!(accept_value(Setting::Font, f.value), Some(f.value.to_string()));
    }
    assert_eq!(accept_value(Setting::Font, "Comic Sans MS"), None);
    assert_eq!(accept_value(Setting::Font, "#ffffff"), None);
}

#[test]
fn edit_mode_swaps_the_cursor() {
    assert_eq!(edit_cursor(true), "text");
    assert_eq!(edit_cursor(false), "default");
}

#[test]
fn mask_follows_the_pointer() {
    assert_eq!(
        reveal_mask(12.5, 40.0),
        "radial-gradient(circle 180px at 12.5px 40px, black 30%, transparent 80%)"
    );
    assert_eq!(
        hidden_mask(),
        "radial-gradient(circle 180px at -1000px -1000px, black 100%, transparent 100%)"
    );
}

#[test]
fn bio_words_cascade_down_the_viewport() {
    assert_eq!(
        bio_word_trigger(0, 10),
        WordTrigger {
            start: "top 90%".into(),
            end: "top 50%".into()
        }
    );
    assert_eq!(
        bio_word_trigger(5, 10),
        WordTrigger {
            start: "top 70%".into(),
            end: "top 30%".into()
        }
    );
    assert_eq!(bio_word_trigger(0, 0).start, "top 90%");
}

#[test]
fn right_column_cells_lag_slightly() {
    assert_eq!(work_cell_delay(0), 0.0);
    assert_eq!(work_cell_delay(1), 0.1);
    assert_eq!(work_cell_delay(4), 0.0);
    assert_eq!(WORK_CELL_START, "top 90%");
}
