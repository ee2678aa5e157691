//! Word list loaded once at startup.

use super::{error::ValidationError, value_object::Word};

/// Ordered, immutable, non-empty sequence of secret words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    words: Vec<Word>,
}

impl WordList {
    pub fn new(words: Vec<Word>) -> Result<Self, ValidationError> {
        if words.is_empty() {
            return Err(ValidationError::EmptyWordList);
        }
        Ok(Self { words })
    }

    pub fn as_slice(&self) -> &[Word] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_list_rejects_empty() {
        // テスト項目: 空の単語リストは作成できない
        // given (前提条件):
        let words = vec![];

        // when (操作):
        let result = WordList::new(words);

        // then (期待する結果):
        assert_eq!(result, Err(ValidationError::EmptyWordList));
    }

    #[test]
    fn test_word_list_preserves_order() {
        // テスト項目: 単語リストの順序が保持される
        // given (前提条件):
        let words = vec![Word::new("pear"), Word::new("apple"), Word::new("fig")];

        // when (操作):
        let list = WordList::new(words).unwrap();

        // then (期待する結果):
        assert_eq!(list.len(), 3);
        let ordered: Vec<&str> = list.as_slice().iter().map(Word::as_str).collect();
        assert_eq!(ordered, vec!["pear", "apple", "fig"]);
    }
}
