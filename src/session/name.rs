//! Random session name generator.
//!
//! Produces names in the format `AdjectiveNounNN` (e.g. `MellowHeron7`),
//! used for the sidebar header and log file attribution.

use rand::RngExt;

const ADJECTIVES: &[&str] = &[
    "Amber", "Mellow", "Brisk", "Quiet", "Vivid", "Dusty", "Nimble", "Plush", "Sunny", "Misty",
    "Bold", "Calm", "Eager", "Fuzzy", "Jolly", "Keen", "Lively", "Merry", "Proud", "Swift",
    "Tidy", "Witty", "Zesty", "Candid", "Gentle", "Humble", "Patient", "Rustic", "Sleek", "Warm",
];

const NOUNS: &[&str] = &[
    "Heron", "Finch", "Wren", "Ibis", "Swan", "Crane", "Robin", "Stork", "Lark", "Teal",
    "Plover", "Sparrow", "Magpie", "Osprey", "Petrel", "Puffin", "Egret", "Kestrel", "Swift",
    "Tern", "Gull", "Dove", "Quail", "Raven", "Jay", "Kite", "Loon", "Owl", "Pipit", "Rook",
];

/// Generate a session name like `MellowHeron7`.
pub fn generate_session_name() -> String {
    let mut rng = rand::rng();
    let adj = ADJECTIVES[rng.random_range(0..ADJECTIVES.len())];
    let noun = NOUNS[rng.random_range(0..NOUNS.len())];
    let num: u8 = rng.random_range(0..100);
    format!("{}{}{}", adj, noun, num)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_short_and_nonempty() {
        for _ in 0..50 {
            let name = generate_session_name();
            assert!(!name.is_empty());
            assert!(name.len() <= 16);
            assert!(name.chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }
}
