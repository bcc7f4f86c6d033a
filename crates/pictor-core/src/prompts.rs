//! Built-in example prompts.

use rand::seq::SliceRandom;
use rand::Rng;

/// Example events offered by the History screen.
pub const HISTORICAL_EXAMPLES: [&str; 5] = [
    "The signing of the Declaration of Independence in 1776, with founding fathers gathered around a wooden table in Independence Hall",
    "Napoleon Bonaparte crossing the Alps in 1800, leading his army through treacherous mountain passes",
    "The construction of the Great Wall of China during the Ming Dynasty, with thousands of workers on steep mountainous terrain",
    "Leonardo da Vinci's workshop during the Renaissance, surrounded by inventions, paintings, and scientific drawings",
    "The ancient Library of Alexandria in its golden age, with scholars studying scrolls among towering shelves",
];

/// Prompts picked by "Surprise me" on the Studio screen.
pub const SURPRISE_PROMPTS: [&str; 8] = [
    "A majestic dragon soaring over a neon-lit cyberpunk city at night",
    "An astronaut discovering a field of glowing crystal flowers on an alien planet",
    "A floating island with a waterfall cascading into clouds below",
    "A steampunk robot gardening in a greenhouse full of mechanical plants",
    "A magical library where books fly around like birds between floating shelves",
    "An underwater city with bioluminescent coral architecture",
    "A giant tree house city connected by bridges made of rainbow light",
    "A cosmic whale swimming through a nebula filled with starlight",
];

/// Pick one prompt uniformly at random. `None` only for an empty set.
pub fn pick<'a, R: Rng + ?Sized>(set: &[&'a str], rng: &mut R) -> Option<&'a str> {
    set.choose(rng).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_pick_returns_member() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let prompt = pick(&SURPRISE_PROMPTS, &mut rng).unwrap();
            assert!(SURPRISE_PROMPTS.contains(&prompt));
        }
    }

    #[test]
    fn test_pick_reaches_every_entry() {
        let mut rng = StdRng::seed_from_u64(42);
        let seen: HashSet<&str> = (0..500)
            .filter_map(|_| pick(&SURPRISE_PROMPTS, &mut rng))
            .collect();
        assert_eq!(seen.len(), SURPRISE_PROMPTS.len());
    }

    #[test]
    fn test_pick_empty_set() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(pick(&[], &mut rng), None);
    }

    #[test]
    fn test_sets_have_no_blank_entries() {
        assert!(HISTORICAL_EXAMPLES
            .iter()
            .chain(SURPRISE_PROMPTS.iter())
            .all(|p| !p.trim().is_empty()));
    }
}
