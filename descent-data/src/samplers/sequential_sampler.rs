use super::traits::Sampler;

/// Yields `0, 1, ..., len - 1` every epoch.
#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialSampler;

impl SequentialSampler {
    pub fn new() -> Self {
        SequentialSampler
    }
}

impl Sampler for SequentialSampler {
    fn iter(&self, dataset_len: usize) -> Box<dyn Iterator<Item = usize>> {
        Box::new(0..dataset_len)
    }

    fn len(&self, dataset_len: usize) -> usize {
        dataset_len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_sampler_order() {
        let sampler = SequentialSampler::new();
        assert_eq!(sampler.iter(4).collect::<Vec<_>>(), vec![0, 1, 2, 3]);
        assert_eq!(sampler.len(4), 4);
    }

    #[test]
    fn test_sequential_sampler_empty() {
        assert_eq!(SequentialSampler::new().iter(0).count(), 0);
    }
}
