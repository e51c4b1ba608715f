use super::constants::SCROLL_TOTAL_BARS;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrollReadout {
    pub percent: u32,
    pub filled_bars: u32,
}

impl ScrollReadout {
    /// `doc_height` is the scrollable distance (scrollHeight - innerHeight).
    pub fn new(scroll_top: f64, doc_height: f64) -> Self {
        let percent = if doc_height > 0.0 {
            ((scroll_top / doc_height) * 100.0).round().clamp(0.0, 100.0) as u32
        } else {
            0
        };
        let filled_bars = ((percent as f64 / 100.0) * SCROLL_TOTAL_BARS as f64).round() as u32;
        Self {
            percent,
            filled_bars: filled_bars.min(SCROLL_TOTAL_BARS),
        }
    }

    pub fn empty_bars(&self) -> u32 {
        SCROLL_TOTAL_BARS - self.filled_bars
    }

    /// e.g. `SCROLL [|||||||||||||||] 100%`
    pub fn render(&self) -> String {
        format!(
            "SCROLL [{}{}] {:03}%",
            "|".repeat(self.filled_bars as usize),
            ".".repeat(self.empty_bars() as usize),
            self.percent
        )
    }
}

#[inline]
pub fn clock_text(hours: u32, minutes: u32, seconds: u32) -> String {
    format!("LOC: {:02}:{:02}:{:02}", hours, minutes, seconds)
}

#[inline]
pub fn coords_text(x: i32, y: i32) -> String {
    format!("POS: {:04} | {:04}", x, y)
}
