#[derive(Debug, Clone)]
pub struct Options {
    /// Fall back to the snake_case form of a field's identifier when reading
    /// (`TestId` reads from `test_id`).
    pub fold_names: bool,
    /// Turn quoted numbers (`"123"`) at numeric fields back into numbers.
    pub coerce_numbers: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            fold_names: true,
            coerce_numbers: true,
        }
    }
}
