/// One-slot memo: remembers the value computed for the most recent key only.
#[derive(Debug)]
pub struct Memo<K, V> {
    last: Option<(K, V)>,
}

impl<K, V> Default for Memo<K, V> {
    fn default() -> Self {
        Self { last: None }
    }
}

impl<K: PartialEq, V: Clone> Memo<K, V> {
    /// Returns the cached value when `key` equals the previous key, otherwise computes,
    /// stores and returns a fresh one.
    pub fn get_or_compute<F>(&mut self, key: K, compute: F) -> V
    where
        F: FnOnce(&K) -> V,
    {
        if let Some((last_key, value)) = &self.last {
            if *last_key == key {
                return value.clone();
            }
        }
        let value = compute(&key);
        self.last = Some((key, value.clone()));
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recomputes_only_on_key_change() {
        let mut memo: Memo<(u64, &str), usize> = Memo::default();
        assert_eq!(memo.get_or_compute((0, "a"), |_| 1), 1);
        assert_eq!(memo.get_or_compute((0, "a"), |_| 2), 1);
        assert_eq!(memo.get_or_compute((1, "a"), |_| 3), 3);
        assert_eq!(memo.get_or_compute((0, "a"), |_| 4), 4);
    }
}
