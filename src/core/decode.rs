use rand::prelude::*;

/// Symbols shown while a character is still "hacking".
pub const GLYPHS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!<>-_\\/[]{}=+*^?#";

#[derive(Clone, Debug)]
pub struct DecodeConfig {
    /// Frames of per-character glitching on the source word (last one is clean).
    pub glitch_ticks: u32,
    /// Chance a glitching character shows its real value on a given frame.
    pub glitch_keep_probability: f64,
    /// Frames of fully random text at the final length.
    pub scramble_ticks: u32,
    /// Random symbols each character cycles through before locking.
    pub char_iterations: u32,
    /// Frames between consecutive characters starting to decode.
    pub char_delay_ticks: u32,
    pub alphabet: Vec<char>,
}

impl Default for DecodeConfig {
    fn default() -> Self {
        Self {
            glitch_ticks: 10,
            glitch_keep_probability: 0.3,
            scramble_ticks: 12,
            char_iterations: 6,
            char_delay_ticks: 2,
            alphabet: GLYPHS.chars().collect(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Glitching { tick: u32 },
    Scrambling { tick: u32 },
    Decoding { tick: u32 },
    Settled,
}

#[derive(Clone, Copy, Debug)]
struct Slot {
    target: char,
    start_tick: u32,
}

/// Glitch → scramble → cascade-decode animation for a multi-line heading.
///
/// Driven by `tick()` from a single timer; time is counted in ticks so the
/// whole sequence can be stepped without a real clock.
pub struct DecodeSequencer<R: Rng> {
    config: DecodeConfig,
    source: String,
    line_lens: Vec<usize>,
    slots: Vec<Slot>,
    display: Vec<String>,
    spacing_expanded: bool,
    phase: Phase,
    rng: R,
}

impl<R: Rng> DecodeSequencer<R> {
    pub fn new(source: &str, lines: &[&str], config: DecodeConfig, rng: R) -> Self {
        let mut slots = Vec::new();
        let mut line_lens = Vec::with_capacity(lines.len());
        for line in lines {
            let mut len = 0;
            for c in line.chars() {
                let k = slots.len() as u32;
                slots.push(Slot {
                    target: c,
                    start_tick: k * config.char_delay_ticks,
                });
                len += 1;
            }
            line_lens.push(len);
        }
        Self {
            config,
            source: source.to_string(),
            line_lens,
            slots,
            display: vec![source.to_string()],
            spacing_expanded: false,
            phase: Phase::Idle,
            rng,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_settled(&self) -> bool {
        self.phase == Phase::Settled
    }

    /// Combined character count of all target lines.
    pub fn total_len(&self) -> usize {
        self.slots.len()
    }

    /// Current frame, one string per displayed line.
    pub fn lines(&self) -> &[String] {
        &self.display
    }

    /// Current frame with the lines concatenated in order.
    pub fn text(&self) -> String {
        self.display.concat()
    }

    pub fn spacing_expanded(&self) -> bool {
        self.spacing_expanded
    }

    /// Leave `Idle`. Later calls are ignored; the sequence runs once.
    pub fn start(&mut self) {
        if self.phase == Phase::Idle {
            self.phase = Phase::Glitching { tick: 0 };
        }
    }

    /// Render the next frame. Returns false once there is nothing left to do.
    pub fn tick(&mut self) -> bool {
        match self.phase {
            Phase::Idle | Phase::Settled => return false,
            Phase::Glitching { tick } => {
                if tick + 1 >= self.config.glitch_ticks {
                    self.display = vec![self.source.clone()];
                    self.phase = if self.config.scramble_ticks == 0 {
                        Phase::Decoding { tick: 0 }
                    } else {
                        Phase::Scrambling { tick: 0 }
                    };
                } else {
                    self.display = vec![self.glitch_word()];
                    self.phase = Phase::Glitching { tick: tick + 1 };
                }
            }
            Phase::Scrambling { tick } => {
                self.display = self.scrambled_lines();
                self.spacing_expanded = true;
                self.phase = if tick + 1 >= self.config.scramble_ticks {
                    Phase::Decoding { tick: 0 }
                } else {
                    Phase::Scrambling { tick: tick + 1 }
                };
            }
            Phase::Decoding { tick } => {
                let done = self.decode_frame(tick);
                self.spacing_expanded = false;
                self.phase = if done {
                    Phase::Settled
                } else {
                    Phase::Decoding { tick: tick + 1 }
                };
            }
        }
        true
    }

    fn random_glyph(&mut self, fallback: char) -> char {
        self.config
            .alphabet
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(fallback)
    }

    fn glitch_word(&mut self) -> String {
        let keep = self.config.glitch_keep_probability;
        let keep = if keep.is_finite() {
            keep.clamp(0.0, 1.0)
        } else {
            0.0
        };
        let source: Vec<char> = self.source.chars().collect();
        source
            .into_iter()
            .map(|c| {
                if c.is_whitespace() || self.rng.gen_bool(keep) {
                    c
                } else {
                    self.random_glyph(c)
                }
            })
            .collect()
    }

    fn scrambled_lines(&mut self) -> Vec<String> {
        let lens = self.line_lens.clone();
        lens.into_iter()
            .map(|len| (0..len).map(|_| self.random_glyph('#')).collect::<String>())
            .collect()
    }

    // Fills `display` for decode tick `tick`; true when every slot is locked.
    fn decode_frame(&mut self, tick: u32) -> bool {
        let iterations = self.config.char_iterations;
        let mut all_locked = true;
        let mut chars = Vec::with_capacity(self.slots.len());
        for i in 0..self.slots.len() {
            let slot = self.slots[i];
            let locked = tick >= slot.start_tick && tick - slot.start_tick >= iterations;
            if locked {
                chars.push(slot.target);
            } else {
                all_locked = false;
                chars.push(self.random_glyph(slot.target));
            }
        }
        let mut lines = Vec::with_capacity(self.line_lens.len());
        let mut rest = chars.as_slice();
        for &len in &self.line_lens {
            let (head, tail) = rest.split_at(len);
            lines.push(head.iter().collect());
            rest = tail;
        }
        self.display = lines;
        all_locked
    }
}
