//! Text value with a hard character budget.

/// A string that never grows past `limit` characters.
///
/// Characters are Unicode scalar values, so a multi-byte glyph counts once.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct CharBudget {
    value: String,
    limit: usize,
}

impl CharBudget {
    pub fn new(limit: usize) -> Self {
        Self {
            value: String::new(),
            limit,
        }
    }

    /// Replace the value with the first `limit` characters of `next`.
    pub fn set_value(&mut self, next: &str) {
        self.value = next.chars().take(self.limit).collect();
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn count(&self) -> usize {
        self.value.chars().count()
    }

    pub fn remaining(&self) -> usize {
        self.limit.saturating_sub(self.count())
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn reset(&mut self) {
        self.value.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_reports_remaining_and_resets() {
        let mut budget = CharBudget::new(5);
        assert_eq!(budget.value(), "");
        assert_eq!(budget.count(), 0);
        assert_eq!(budget.remaining(), 5);

        budget.set_value("characters");
        assert_eq!(budget.value(), "chara");
        assert_eq!(budget.count(), 5);
        assert_eq!(budget.remaining(), 0);

        budget.set_value("hey");
        assert_eq!(budget.value(), "hey");
        assert_eq!(budget.count(), 3);
        assert_eq!(budget.remaining(), 2);

        budget.reset();
        assert_eq!(budget.value(), "");
        assert_eq!(budget.remaining(), 5);
    }

    #[test]
    fn zero_limit_always_empty() {
        let mut budget = CharBudget::new(0);
        budget.set_value("anything");
        assert_eq!(budget.value(), "");
        assert_eq!(budget.remaining(), 0);
    }

    #[test]
    fn counts_characters_not_bytes() {
        let mut budget = CharBudget::new(3);
        budget.set_value("résumé");
        assert_eq!(budget.value(), "rés");
        assert_eq!(budget.count(), 3);
    }
}
