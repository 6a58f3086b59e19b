/// A successful ingredient match for a resale item.
#[derive(Debug, Clone, PartialEq)]
pub struct IngredientMatch {
    /// Ingredient name exactly as keyed in the menu's price table.
    pub ingredient: String,
    /// Similarity score that won, 0-100.
    pub score: u32,
}
