use dbscan1d_core::{SourceError, ValueSource};

/// In-memory source with a fixed name, optionally failing at one index.
#[derive(Clone)]
pub struct Readings {
    data: Vec<f64>,
    fail_at: Option<usize>,
}

impl Readings {
    #[must_use]
    pub fn new(data: Vec<f64>) -> Self {
        Self {
            data,
            fail_at: None,
        }
    }

    #[must_use]
    pub fn failing_at(mut self, index: usize) -> Self {
        self.fail_at = Some(index);
        self
    }
}

impl ValueSource for Readings {
    fn len(&self) -> usize {
        self.data.len()
    }

    fn name(&self) -> &str {
        "readings"
    }

    fn value(&self, index: usize) -> Result<f64, SourceError> {
        if self.fail_at == Some(index) {
            return Err(SourceError::OutOfBounds { index });
        }
        self.data
            .get(index)
            .copied()
            .ok_or(SourceError::OutOfBounds { index })
    }
}
