//! Maps confession text to a star color.
//!
//! Matching is case-insensitive substring search against three keyword
//! groups, checked in a fixed priority order: sadness wins over anger,
//! anger over affection, and anything unmatched falls back to pink.
//! The precedence must stay exactly as written.

const BLUE: &str = "#4facfe";
const RED: &str = "#ff0844";
const GOLD: &str = "#fddb92";
// Default when no keyword group matches.
const PINK: &str = "#ff007f";

const SAD_WORDS: [&str; 3] = ["sad", "lonely", "lost"];
const ANGRY_WORDS: [&str; 3] = ["angry", "hate", "mad"];
const LOVE_WORDS: [&str; 3] = ["love", "happy", "hope"];

/// Returns the color code for a confession. Total over any input; empty or
/// unmatched text yields the default.
pub fn classify(text: &str) -> &'static str {
    let lowered = text.to_lowercase();
    let contains_any = |words: &[&str]| words.iter().any(|w| lowered.contains(w));

    if contains_any(&SAD_WORDS) {
        BLUE
    } else if contains_any(&ANGRY_WORDS) {
        RED
    } else if contains_any(&LOVE_WORDS) {
        GOLD
    } else {
        PINK
    }
}
