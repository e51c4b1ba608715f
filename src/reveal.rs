use crate::constants::*;
use crate::core::reveal::{bio_word_trigger, work_cell_delay, BIO_SCRUB, WORK_CELL_START};
use crate::gsap::{self, Vars};

/// Register scroll-scrubbed bio words and the work grid fade-ups.
pub fn init() {
    if !gsap::register_scroll_trigger() {
        return;
    }

    let words = gsap::to_array(BIO_WORDS_SELECTOR);
    let total = words.len();
    for (i, word) in words.iter().enumerate() {
        let trigger = bio_word_trigger(i, total);
        gsap::from_to(
            word,
            Vars::new()
                .num("opacity", 0.1)
                .str("filter", "blur(4px)")
                .num("y", 8.0),
            Vars::new()
                .num("opacity", 1.0)
                .str("filter", "blur(0px)")
                .num("y", 0.0)
                .str("ease", "power2.out")
                .nested(
                    "scrollTrigger",
                    Vars::new()
                        .str("trigger", BIO_TRIGGER)
                        .str("start", &trigger.start)
                        .str("end", &trigger.end)
                        .num("scrub", BIO_SCRUB),
                ),
        );
    }

    let cells = gsap::to_array(WORK_CELL_SELECTOR);
    for (i, cell) in cells.iter().enumerate() {
        gsap::from(
            cell,
            Vars::new()
                .nested(
                    "scrollTrigger",
                    Vars::new()
                        .value("trigger", cell)
                        .str("start", WORK_CELL_START),
                )
                .num("y", 50.0)
                .num("opacity", 0.0)
                .num("duration", 0.8)
                .num("delay", work_cell_delay(i))
                .str("ease", "power2.out"),
        );
    }
    log::info!("[reveal] {} bio words, {} work cells", total, cells.len());
}
