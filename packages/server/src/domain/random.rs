//! Random selection capability.

/// Uniform random index source
///
/// Swapped for a deterministic implementation in tests.
#[cfg_attr(test, mockall::automock)]
pub trait RandomSource: Send + Sync {
    /// Pick an index in `0..len` uniformly at random. `len` is never zero.
    fn pick_index(&self, len: usize) -> usize;
}

/// Choose one item uniformly at random.
///
/// Returns `None` for an empty slice or when the source yields an index out of range.
pub fn choose<'a, T>(source: &dyn RandomSource, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    items.get(source.pick_index(items.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;

    #[test]
    fn test_choose_uses_picked_index() {
        // テスト項目: RandomSource が返したインデックスの要素が選ばれる
        // given (前提条件):
        let mut source = MockRandomSource::new();
        source.expect_pick_index().with(eq(3)).return_const(2usize);
        let items = ["a", "b", "c"];

        // when (操作):
        let chosen = choose(&source, &items);

        // then (期待する結果):
        assert_eq!(chosen, Some(&"c"));
    }

    #[test]
    fn test_choose_from_empty_slice_skips_source() {
        // テスト項目: 空のスライスでは RandomSource を呼ばずに None を返す
        // given (前提条件):
        let mut source = MockRandomSource::new();
        source.expect_pick_index().never();
        let items: [&str; 0] = [];

        // when (操作):
        let chosen = choose(&source, &items);

        // then (期待する結果):
        assert_eq!(chosen, None);
    }

    #[test]
    fn test_choose_out_of_range_index() {
        // テスト項目: 範囲外のインデックスが返された場合は None になる
        // given (前提条件):
        let mut source = MockRandomSource::new();
        source.expect_pick_index().return_const(5usize);
        let items = ["a", "b"];

        // when (操作):
        let chosen = choose(&source, &items);

        // then (期待する結果):
        assert_eq!(chosen, None);
    }
}
