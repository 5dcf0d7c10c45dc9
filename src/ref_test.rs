// Reference index, a plain vector kept in sort order. Duplicate keys are
// kept in insertion order, later entries after earlier ones.
struct RefNodes {
    entries: Vec<(i64, i64)>,
}

impl RefNodes {
    fn new() -> RefNodes {
        RefNodes { entries: vec![] }
    }

    fn insert(&mut self, key: i64, value: i64) {
        let off = self
            .entries
            .iter()
            .position(|(k, _)| *k > key)
            .unwrap_or_else(|| self.entries.len());
        self.entries.insert(off, (key, value));
    }

    fn contains(&self, key: i64) -> bool {
        self.entries.iter().any(|(k, _)| *k == key)
    }

    fn iter(&self) -> std::vec::IntoIter<(i64, i64)> {
        self.entries.clone().into_iter()
    }

    fn range(&self, low: Bound<i64>, high: Bound<i64>) -> std::vec::IntoIter<(i64, i64)> {
        self.entries
            .iter()
            .filter(|(k, _)| within(*k, low, high))
            .cloned()
            .collect::<Vec<(i64, i64)>>()
            .into_iter()
    }

    fn reverse(&self, low: Bound<i64>, high: Bound<i64>) -> std::vec::IntoIter<(i64, i64)> {
        self.entries
            .iter()
            .rev()
            .filter(|(k, _)| within(*k, low, high))
            .cloned()
            .collect::<Vec<(i64, i64)>>()
            .into_iter()
    }
}

fn within(key: i64, low: Bound<i64>, high: Bound<i64>) -> bool {
    let ok = match low {
        Bound::Included(low) => key >= low,
        Bound::Excluded(low) => key > low,
        Bound::Unbounded => true,
    };
    ok && match high {
        Bound::Included(high) => key <= high,
        Bound::Excluded(high) => key < high,
        Bound::Unbounded => true,
    }
}

fn random_low_high<R: Rng>(rng: &mut R, size: i64) -> (Bound<i64>, Bound<i64>) {
    let low = rng.gen_range(0, size);
    let high = rng.gen_range(0, size);
    let low = match rng.gen::<u8>() % 3 {
        0 => Bound::Included(low),
        1 => Bound::Excluded(low),
        2 => Bound::Unbounded,
        _ => unreachable!(),
    };
    let high = match rng.gen::<u8>() % 3 {
        0 => Bound::Included(high),
        1 => Bound::Excluded(high),
        2 => Bound::Unbounded,
        _ => unreachable!(),
    };
    (low, high)
}
