//! Static recipe corpora used across harnesses.

use super::builders::RecipeRowBuilder;

/// The two-row sheet used by the end-to-end scenarios.
pub fn corpus_two() -> Vec<RecipeRowBuilder> {
    vec![
        RecipeRowBuilder::new("Mojito")
            .id("1")
            .ingredients("Rum, Mint, Soda")
            .method("Muddle")
            .glass("Highball"),
        RecipeRowBuilder::new("Martini")
            .id("2")
            .ingredients("Gin, Vermouth")
            .method("Stir")
            .glass("Cocktail")
            .garnish("Olive"),
    ]
}

/// A larger bar menu with mixed casing, accents, odd spacing, and a row
/// without a name.
pub fn corpus_bar() -> Vec<RecipeRowBuilder> {
    vec![
        RecipeRowBuilder::new("Negroni")
            .id("10")
            .ingredients("Gin, Campari, Sweet vermouth")
            .method("Stir over ice")
            .glass("Rocks")
            .garnish("Orange peel"),
        RecipeRowBuilder::new("daiquiri")
            .id("11")
            .ingredients(" White rum ,Lime juice,, Sugar syrup ")
            .method("Shake hard.\nDouble strain.")
            .glass("Coupe"),
        RecipeRowBuilder::new("Aperol Spritz")
            .id("12")
            .ingredients("Aperol, Prosecco, Soda")
            .method("Build in glass")
            .glass("Wine")
            .garnish("Orange slice"),
        RecipeRowBuilder::nameless()
            .id("13")
            .ingredients("Mystery spirit")
            .glass("Shot"),
        RecipeRowBuilder::new("Café Brûlot")
            .id("14")
            .ingredients("Brandy, Coffee, Orange peel, Clove")
            .method("Flame at the table")
            .glass("Demitasse"),
        RecipeRowBuilder::new("Gin Fizz")
            .id("15")
            .ingredients("Gin, Lemon juice, Sugar, Soda")
            .method("Shake; top with soda")
            .glass("Highball")
            .garnish("Lemon wheel"),
        RecipeRowBuilder::new("Mai Tai")
            .id("16")
            .ingredients("Aged rum, Orgeat, Curaçao, Lime juice")
            .method("Shake with crushed ice")
            .glass("Double rocks")
            .garnish("Mint sprig"),
        RecipeRowBuilder::nameless().id("17").method("Unnamed house pour"),
    ]
}

/// `count` synthetic rows for throughput-style tests.
pub fn corpus_high_volume(count: usize) -> Vec<RecipeRowBuilder> {
    const GLASSES: &[&str] = &["Highball", "Coupe", "Rocks", "Martini", "Collins"];
    const SPIRITS: &[&str] = &["Gin", "Rum", "Vodka", "Tequila", "Whiskey", "Brandy"];
    (0..count)
        .map(|i| {
            let spirit = SPIRITS[i % SPIRITS.len()];
            RecipeRowBuilder::new(format!("{spirit} Special No. {i}"))
                .id(i.to_string())
                .ingredients(format!("{spirit}, Lime juice, Syrup {}", i % 7))
                .method("Shake and strain")
                .glass(GLASSES[i % GLASSES.len()])
        })
        .collect()
}
