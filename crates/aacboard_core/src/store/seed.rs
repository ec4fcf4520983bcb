//! Fixed default board loaded at startup.

use crate::model::symbol::NewSymbol;
use crate::store::BoardStore;
use log::info;

struct SeedCategory {
    name: &'static str,
    color: &'static str,
    items: &'static [(&'static str, &'static str, bool)],
}

const DEFAULT_CATALOG: &[SeedCategory] = &[
    SeedCategory {
        name: "I want",
        color: "blue",
        items: &[("I want", "👋", true)],
    },
    SeedCategory {
        name: "Food",
        color: "green",
        items: &[
            ("apple", "🍎", false),
            ("banana", "🍌", false),
            ("water", "💧", false),
            ("milk", "🥛", false),
            ("cookie", "🍪", false),
            ("pizza", "🍕", false),
        ],
    },
    SeedCategory {
        name: "Activities",
        color: "purple",
        items: &[
            ("play", "⚽", false),
            ("read", "📖", false),
            ("draw", "🎨", false),
            ("music", "🎵", false),
            ("sleep", "😴", false),
            ("outside", "🌳", false),
        ],
    },
    SeedCategory {
        name: "Feelings",
        color: "yellow",
        items: &[
            ("I feel", "💭", true),
            ("happy", "😊", false),
            ("sad", "😢", false),
            ("tired", "😴", false),
            ("angry", "😠", false),
            ("scared", "😨", false),
        ],
    },
    SeedCategory {
        name: "People",
        color: "pink",
        items: &[
            ("mom", "👩", false),
            ("dad", "👨", false),
            ("teacher", "👨‍🏫", false),
            ("friend", "👦", false),
        ],
    },
    SeedCategory {
        name: "Help",
        color: "red",
        items: &[
            ("help me", "🆘", false),
            ("bathroom", "🚽", false),
            ("break", "⏸️", false),
            ("quiet", "🤫", false),
        ],
    },
];

impl BoardStore {
    /// Creates a store seeded with the default six-category board.
    pub fn with_default_catalog() -> Self {
        let mut store = Self::new();
        for seed in DEFAULT_CATALOG {
            let Some(category_id) = store.add_category(seed.name, seed.color) else {
                continue;
            };
            for &(text, emoji, prefix) in seed.items {
                let new_symbol = if prefix {
                    NewSymbol::prefix(text, emoji)
                } else {
                    NewSymbol::new(text, emoji)
                };
                store.add_symbol(category_id, new_symbol);
            }
        }
        info!(
            "event=catalog_seed module=store status=ok categories={} symbols={}",
            store.category_count(),
            store.listed_symbol_count()
        );
        store
    }
}

#[cfg(test)]
mod tests {
    use crate::store::BoardStore;

    #[test]
    fn default_catalog_has_six_categories_and_twenty_seven_symbols() {
        let store = BoardStore::with_default_catalog();
        assert_eq!(store.category_count(), 6);
        assert_eq!(store.listed_symbol_count(), 27);
    }

    #[test]
    fn default_prefix_symbols_are_the_sentence_starters() {
        let store = BoardStore::with_default_catalog();
        let prefixes = store
            .categories()
            .flat_map(|category| store.items(category.id))
            .filter(|symbol| symbol.prefix)
            .map(|symbol| symbol.text.as_str())
            .collect::<Vec<_>>();
        assert_eq!(prefixes, vec!["I want", "I feel"]);
    }
}
