/// Sequential numeric ID generator.
///
/// Each instance is an independent counter. Values from two generators are
/// not comparable; documents and tree items use separate instances.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    count: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self { count: 0 }
    }

    /// Generate next sequential ID (first value is 1)
    pub fn next_id(&mut self) -> u64 {
        self.count += 1;
        self.count
    }

    /// Last value handed out, 0 if none yet
    pub fn last(&self) -> u64 {
        self.count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_ids() {
        let mut gen = IdGenerator::new();

        assert_eq!(gen.next_id(), 1);
        assert_eq!(gen.next_id(), 2);
        assert_eq!(gen.next_id(), 3);
        assert_eq!(gen.last(), 3);
    }

    #[test]
    fn test_independent_generators() {
        let mut documents = IdGenerator::new();
        let mut items = IdGenerator::new();

        documents.next_id();
        documents.next_id();

        // A second generator starts its own sequence
        assert_eq!(items.next_id(), 1);
        assert_eq!(documents.next_id(), 3);
    }

    #[test]
    fn test_cloned_generator_continues_sequence() {
        let mut gen = IdGenerator::new();
        gen.next_id();

        let mut copy = gen.clone();
        assert_eq!(copy.next_id(), 2);
        assert_eq!(gen.next_id(), 2);
    }
}
