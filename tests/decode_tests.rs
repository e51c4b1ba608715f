// The decode sequencer runs on a logical tick clock, so the whole
// animation can be stepped here with a seeded RNG.

#![allow(dead_code)]
mod fx {
    pub mod decode {
        include!("../src/core/decode.rs");
    }
}

use fx::decode::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

const LINES: [&str; 3] = ["DIGITAL", "/", "MATTER"];

fn sequencer(seed: u64) -> DecodeSequencer<StdRng> {
    DecodeSequencer::new(
        "WAARP",
        &LINES,
        DecodeConfig::default(),
        StdRng::seed_from_u64(seed),
    )
}

fn run_to_end(seq: &mut DecodeSequencer<StdRng>) -> Vec<(Phase, Vec<String>)> {
    let mut frames = Vec::new();
    seq.start();
    for _ in 0..1000 {
        let before = seq.phase();
        if !seq.tick() {
            break;
        }
        frames.push((before, seq.lines().to_vec()));
    }
    frames
}

#[test]
fn idle_until_started() {
    let mut seq = sequencer(1);
    assert_eq!(seq.phase(), Phase::Idle);
    assert!(!seq.tick());
    assert_eq!(seq.text(), "WAARP");
    assert_eq!(seq.total_len(), 14);
}

#[test]
fn settles_on_the_target_lines() {
    let mut seq = sequencer(7);
    run_to_end(&mut seq);
    assert!(seq.is_settled());
    assert_eq!(seq.text(), "DIGITAL/MATTER");
    assert_eq!(seq.lines(), ["DIGITAL", "/", "MATTER"]);
    assert!(!seq.spacing_expanded());
    assert!(!seq.tick(), "ticks after settling are no-ops");
    assert_eq!(seq.text(), "DIGITAL/MATTER");
}

#[test]
fn phases_run_in_order() {
    let mut seq = sequencer(3);
    let frames = run_to_end(&mut seq);
    let rank = |p: &Phase| match p {
        Phase::Idle => 0,
        Phase::Glitching { .. } => 1,
        Phase::Scrambling { .. } => 2,
        Phase::Decoding { .. } => 3,
        Phase::Settled => 4,
    };
    for pair in frames.windows(2) {
        assert!(rank(&pair[0].0) <= rank(&pair[1].0));
    }
    let glitch = frames.iter().filter(|f| rank(&f.0) == 1).count();
    let scramble = frames.iter().filter(|f| rank(&f.0) == 2).count();
    assert_eq!(glitch, 10);
    assert_eq!(scramble, 12);
}

#[test]
fn glitch_frames_keep_the_source_length_and_end_clean() {
    let mut seq = sequencer(11);
    let frames = run_to_end(&mut seq);
    let glitch: Vec<_> = frames
        .iter()
        .filter(|(p, _)| matches!(p, Phase::Glitching { .. }))
        .collect();
    for (_, lines) in &glitch {
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].chars().count(), 5);
    }
    assert_eq!(glitch.last().map(|f| f.1.concat()), Some("WAARP".to_string()));
}

#[test]
fn scramble_frames_match_target_layout() {
    let mut seq = sequencer(5);
    seq.start();
    while !matches!(seq.phase(), Phase::Scrambling { .. }) {
        assert!(seq.tick());
    }
    while let Phase::Scrambling { .. } = seq.phase() {
        seq.tick();
        let lens: Vec<usize> = seq.lines().iter().map(|l| l.chars().count()).collect();
        assert_eq!(lens, [7, 1, 6]);
        assert_eq!(seq.text().chars().count(), 14);
        assert!(seq.spacing_expanded());
        assert!(seq.text().chars().all(|c| GLYPHS.contains(c)));
    }
}

#[test]
fn characters_lock_left_to_right() {
    let config = DecodeConfig::default();
    let target: Vec<char> = "DIGITAL/MATTER".chars().collect();
    let mut seq = sequencer(9);
    seq.start();
    while !seq.is_settled() {
        let phase = seq.phase();
        seq.tick();
        let Phase::Decoding { tick } = phase else {
            continue;
        };
        let shown: Vec<char> = seq.text().chars().collect();
        assert_eq!(shown.len(), target.len());
        for (k, (&s, &t)) in shown.iter().zip(&target).enumerate() {
            let start = k as u32 * config.char_delay_ticks;
            if tick >= start + config.char_iterations {
                assert_eq!(s, t, "char {k} should be locked at decode tick {tick}");
            }
        }
    }
}

#[test]
fn start_is_idempotent() {
    let mut seq = sequencer(2);
    seq.start();
    seq.tick();
    seq.tick();
    let phase = seq.phase();
    seq.start();
    assert_eq!(seq.phase(), phase);
}

#[test]
fn same_seed_same_animation() {
    let a = run_to_end(&mut sequencer(42));
    let b = run_to_end(&mut sequencer(42));
    assert_eq!(a, b);
}

#[test]
fn empty_alphabet_falls_back_to_targets() {
    let config = DecodeConfig {
        alphabet: Vec::new(),
        ..DecodeConfig::default()
    };
    let mut seq = DecodeSequencer::new("AB", &["CD"], config, StdRng::seed_from_u64(0));
    seq.start();
    while seq.tick() {}
    assert_eq!(seq.text(), "CD");
}

#[test]
fn zero_scramble_ticks_skips_straight_to_decoding() {
    let config = DecodeConfig {
        scramble_ticks: 0,
        ..DecodeConfig::default()
    };
    let mut seq = DecodeSequencer::new("WAARP", &LINES, config, StdRng::seed_from_u64(4));
    seq.start();
    let mut scramble_frames = 0;
    while !seq.is_settled() {
        assert!(seq.tick());
        if matches!(seq.phase(), Phase::Scrambling { .. }) || seq.spacing_expanded() {
            scramble_frames += 1;
        }
    }
    assert_eq!(scramble_frames, 0);
    assert_eq!(seq.text(), "DIGITAL/MATTER");
}

#[test]
fn non_finite_keep_probability_glitches_every_char() {
    for keep in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let config = DecodeConfig {
            glitch_keep_probability: keep,
            alphabet: vec!['#'],
            ..DecodeConfig::default()
        };
        let mut seq = DecodeSequencer::new("WAARP", &LINES, config, StdRng::seed_from_u64(8));
        seq.start();
        assert!(seq.tick());
        assert_eq!(seq.text(), "#####");
        while seq.tick() {}
        assert_eq!(seq.text(), "DIGITAL/MATTER");
    }
}

#[test]
fn glitch_keeps_about_thirty_percent_of_chars() {
    // Alphabet disjoint from the source, so every kept char is recognisable.
    let frames = 2000u32;
    let config = DecodeConfig {
        glitch_ticks: frames + 1,
        alphabet: vec!['#'],
        ..DecodeConfig::default()
    };
    let source = "WAARPWAARP";
    let mut seq = DecodeSequencer::new(source, &LINES, config, StdRng::seed_from_u64(21));
    seq.start();
    let (mut kept, mut total) = (0usize, 0usize);
    for _ in 0..frames {
        assert!(seq.tick());
        assert!(matches!(seq.phase(), Phase::Glitching { .. }));
        for (shown, real) in seq.text().chars().zip(source.chars()) {
            total += 1;
            if shown == real {
                kept += 1;
            } else {
                assert_eq!(shown, '#');
            }
        }
    }
    let ratio = kept as f64 / total as f64;
    assert!((ratio - 0.3).abs() < 0.02, "keep ratio {ratio}");
}

#[test]
fn chars_show_noise_until_their_start_tick() {
    let config = DecodeConfig {
        alphabet: vec!['#'],
        ..DecodeConfig::default()
    };
    let delay = config.char_delay_ticks;
    let iterations = config.char_iterations;
    let mut seq = DecodeSequencer::new("WAARP", &LINES, config, StdRng::seed_from_u64(13));
    seq.start();
    while !seq.is_settled() {
        let phase = seq.phase();
        seq.tick();
        let Phase::Decoding { tick } = phase else {
            continue;
        };
        for (k, c) in seq.text().chars().enumerate() {
            let start = k as u32 * delay;
            if tick < start + iterations {
                assert_eq!(c, '#', "char {k} resolved early at decode tick {tick}");
            }
        }
    }
}
