//! Built-in emoji catalog.
//!
//! The same rows seed an empty SQLite catalog at startup and back the
//! in-memory mirror when the database is unavailable, so both gateway modes
//! answer from identical data.

pub struct SeedEmoji {
    pub id: i64,
    pub glyph: &'static str,
    pub short_name: &'static str,
    pub group_name: &'static str,
    pub subgroup: &'static str,
    pub keywords: &'static [&'static str],
}

pub const SEED_CATALOG: &[SeedEmoji] = &[
    SeedEmoji {
        id: 1,
        glyph: "😀",
        short_name: "grinning face",
        group_name: "Smileys & Emotion",
        subgroup: "face-smiling",
        keywords: &["grin", "smile", "happy"],
    },
    SeedEmoji {
        id: 2,
        glyph: "😊",
        short_name: "smiling face with smiling eyes",
        group_name: "Smileys & Emotion",
        subgroup: "face-smiling",
        keywords: &["blush", "smile", "warm"],
    },
    SeedEmoji {
        id: 3,
        glyph: "😂",
        short_name: "face with tears of joy",
        group_name: "Smileys & Emotion",
        subgroup: "face-smiling",
        keywords: &["laugh", "tears", "joy", "funny"],
    },
    SeedEmoji {
        id: 4,
        glyph: "😢",
        short_name: "crying face",
        group_name: "Smileys & Emotion",
        subgroup: "face-concerned",
        keywords: &["cry", "sad", "tear"],
    },
    SeedEmoji {
        id: 5,
        glyph: "😡",
        short_name: "enraged face",
        group_name: "Smileys & Emotion",
        subgroup: "face-negative",
        keywords: &["angry", "mad", "rage"],
    },
    SeedEmoji {
        id: 6,
        glyph: "🥰",
        short_name: "smiling face with hearts",
        group_name: "Smileys & Emotion",
        subgroup: "face-affection",
        keywords: &["love", "adore", "hearts"],
    },
    SeedEmoji {
        id: 7,
        glyph: "👍",
        short_name: "thumbs up",
        group_name: "People & Body",
        subgroup: "hand-fingers-closed",
        keywords: &["approve", "yes", "like", "plus one"],
    },
    SeedEmoji {
        id: 8,
        glyph: "👋",
        short_name: "waving hand",
        group_name: "People & Body",
        subgroup: "hand-fingers-open",
        keywords: &["wave", "hello", "goodbye"],
    },
    SeedEmoji {
        id: 9,
        glyph: "🙏",
        short_name: "folded hands",
        group_name: "People & Body",
        subgroup: "hands",
        keywords: &["please", "thanks", "pray"],
    },
    SeedEmoji {
        id: 10,
        glyph: "💪",
        short_name: "flexed biceps",
        group_name: "People & Body",
        subgroup: "body-parts",
        keywords: &["strong", "muscle", "flex"],
    },
    SeedEmoji {
        id: 11,
        glyph: "🐱",
        short_name: "cat face",
        group_name: "Animals & Nature",
        subgroup: "animal-mammal",
        keywords: &["cat", "pet", "kitten"],
    },
    SeedEmoji {
        id: 12,
        glyph: "🐶",
        short_name: "dog face",
        group_name: "Animals & Nature",
        subgroup: "animal-mammal",
        keywords: &["dog", "pet", "puppy"],
    },
    SeedEmoji {
        id: 13,
        glyph: "🦊",
        short_name: "fox",
        group_name: "Animals & Nature",
        subgroup: "animal-mammal",
        keywords: &["fox", "sly"],
    },
    SeedEmoji {
        id: 14,
        glyph: "🌸",
        short_name: "cherry blossom",
        group_name: "Animals & Nature",
        subgroup: "plant-flower",
        keywords: &["flower", "spring", "blossom"],
    },
    SeedEmoji {
        id: 15,
        glyph: "🌳",
        short_name: "deciduous tree",
        group_name: "Animals & Nature",
        subgroup: "plant-other",
        keywords: &["tree", "forest", "nature"],
    },
    SeedEmoji {
        id: 16,
        glyph: "🍎",
        short_name: "red apple",
        group_name: "Food & Drink",
        subgroup: "food-fruit",
        keywords: &["apple", "fruit"],
    },
    SeedEmoji {
        id: 17,
        glyph: "🍕",
        short_name: "pizza",
        group_name: "Food & Drink",
        subgroup: "food-prepared",
        keywords: &["pizza", "slice", "cheese"],
    },
    SeedEmoji {
        id: 18,
        glyph: "🍣",
        short_name: "sushi",
        group_name: "Food & Drink",
        subgroup: "food-asian",
        keywords: &["sushi", "fish", "rice"],
    },
    SeedEmoji {
        id: 19,
        glyph: "☕",
        short_name: "hot beverage",
        group_name: "Food & Drink",
        subgroup: "drink",
        keywords: &["coffee", "tea", "drink"],
    },
    SeedEmoji {
        id: 20,
        glyph: "🍰",
        short_name: "shortcake",
        group_name: "Food & Drink",
        subgroup: "food-sweet",
        keywords: &["cake", "dessert", "sweet"],
    },
    SeedEmoji {
        id: 21,
        glyph: "🚗",
        short_name: "automobile",
        group_name: "Travel & Places",
        subgroup: "transport-ground",
        keywords: &["car", "drive", "vehicle"],
    },
    SeedEmoji {
        id: 22,
        glyph: "✈️",
        short_name: "airplane",
        group_name: "Travel & Places",
        subgroup: "transport-air",
        keywords: &["plane", "flight", "travel"],
    },
    SeedEmoji {
        id: 23,
        glyph: "🗻",
        short_name: "mount fuji",
        group_name: "Travel & Places",
        subgroup: "place-geographic",
        keywords: &["mountain", "fuji", "japan"],
    },
    SeedEmoji {
        id: 24,
        glyph: "🏠",
        short_name: "house",
        group_name: "Travel & Places",
        subgroup: "place-building",
        keywords: &["home", "house", "building"],
    },
    SeedEmoji {
        id: 25,
        glyph: "⚽",
        short_name: "soccer ball",
        group_name: "Activities",
        subgroup: "sport",
        keywords: &["soccer", "football", "sport"],
    },
    SeedEmoji {
        id: 26,
        glyph: "🎮",
        short_name: "video game",
        group_name: "Activities",
        subgroup: "game",
        keywords: &["game", "controller", "play"],
    },
    SeedEmoji {
        id: 27,
        glyph: "🎉",
        short_name: "party popper",
        group_name: "Activities",
        subgroup: "event",
        keywords: &["party", "celebrate", "tada"],
    },
    SeedEmoji {
        id: 28,
        glyph: "🎸",
        short_name: "guitar",
        group_name: "Activities",
        subgroup: "musical-instrument",
        keywords: &["guitar", "music", "rock"],
    },
    SeedEmoji {
        id: 29,
        glyph: "💻",
        short_name: "laptop",
        group_name: "Objects",
        subgroup: "computer",
        keywords: &["computer", "laptop", "work"],
    },
    SeedEmoji {
        id: 30,
        glyph: "📱",
        short_name: "mobile phone",
        group_name: "Objects",
        subgroup: "phone",
        keywords: &["phone", "mobile", "smartphone"],
    },
    SeedEmoji {
        id: 31,
        glyph: "📚",
        short_name: "books",
        group_name: "Objects",
        subgroup: "book-paper",
        keywords: &["books", "read", "library"],
    },
    SeedEmoji {
        id: 32,
        glyph: "🔑",
        short_name: "key",
        group_name: "Objects",
        subgroup: "lock",
        keywords: &["key", "lock", "password"],
    },
    SeedEmoji {
        id: 33,
        glyph: "❤️",
        short_name: "red heart",
        group_name: "Symbols",
        subgroup: "heart",
        keywords: &["heart", "love", "red"],
    },
    SeedEmoji {
        id: 34,
        glyph: "✅",
        short_name: "check mark button",
        group_name: "Symbols",
        subgroup: "other-symbol",
        keywords: &["check", "done", "yes"],
    },
    SeedEmoji {
        id: 35,
        glyph: "⚠️",
        short_name: "warning",
        group_name: "Symbols",
        subgroup: "warning",
        keywords: &["warning", "caution", "alert"],
    },
    SeedEmoji {
        id: 36,
        glyph: "🏳️‍🌈",
        short_name: "rainbow flag",
        group_name: "Flags",
        subgroup: "flag",
        keywords: &["rainbow", "pride", "flag"],
    },
    SeedEmoji {
        id: 37,
        glyph: "🇯🇵",
        short_name: "flag japan",
        group_name: "Flags",
        subgroup: "country-flag",
        keywords: &["japan", "flag", "jp"],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn seed_ids_are_unique() {
        let mut seen = HashSet::new();
        for emoji in SEED_CATALOG {
            assert!(seen.insert(emoji.id), "duplicate seed id {}", emoji.id);
        }
    }

    #[test]
    fn seed_rows_are_complete() {
        for emoji in SEED_CATALOG {
            assert!(!emoji.glyph.is_empty());
            assert!(!emoji.short_name.is_empty());
            assert!(!emoji.group_name.is_empty());
            assert!(!emoji.keywords.is_empty());
        }
    }
}
