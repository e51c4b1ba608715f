// Scroll-reveal timing for the bio word cascade and the work grid.

/// Share of the scroll range the word starts are spread across (percent).
pub const BIO_SPREAD_PERCENT: f64 = 40.0;
/// Scroll distance each word animates over (percent).
pub const BIO_WORD_SPAN_PERCENT: f64 = 10.0;
pub const BIO_START_BASE: f64 = 90.0;
pub const BIO_END_BASE: f64 = 60.0;
pub const BIO_SCRUB: f64 = 0.5;

pub const WORK_CELL_START: &str = "top 90%";
pub const WORK_CELL_COLUMN_DELAY: f64 = 0.1;

#[derive(Clone, Debug, PartialEq)]
pub struct WordTrigger {
    pub start: String,
    pub end: String,
}

/// ScrollTrigger `start`/`end` strings for word `index` of `total`.
pub fn bio_word_trigger(index: usize, total: usize) -> WordTrigger {
    let start_offset = if total == 0 {
        0.0
    } else {
        index as f64 / total as f64 * BIO_SPREAD_PERCENT
    };
    let end_offset = start_offset + BIO_WORD_SPAN_PERCENT;
    WordTrigger {
        start: format!("top {}%", BIO_START_BASE - start_offset),
        end: format!("top {}%", BIO_END_BASE - end_offset),
    }
}

/// Cells in the right-hand column start slightly later.
#[inline]
pub fn work_cell_delay(index: usize) -> f64 {
    (index % 2) as f64 * WORK_CELL_COLUMN_DELAY
}
