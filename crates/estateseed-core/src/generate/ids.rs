/// Identity-key allocator for one table.
///
/// Each generation step owns its own sequence; child steps never see or
/// mutate another table's counter. Keys start at 1 to match the store's
/// `INTEGER PRIMARY KEY` convention.
#[derive(Debug, Default)]
pub struct IdSequence {
    next: i64,
}

impl IdSequence {
    pub fn new() -> Self {
        IdSequence { next: 0 }
    }

    /// Allocate the next identity key.
    pub fn next(&mut self) -> i64 {
        self.next += 1;
        self.next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_start_at_one_and_increment() {
        let mut seq = IdSequence::new();
        assert_eq!(seq.next(), 1);
        assert_eq!(seq.next(), 2);
        assert_eq!(seq.next(), 3);
    }
}
