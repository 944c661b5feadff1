use indexmap::IndexMap;

use crate::error::{ChartError, ChartResult};

/// Named, ordered sequence of values edited by the user.
///
/// A dataset always holds at least one entry: it is created with a single
/// zero and refuses to drop its last entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    name: String,
    values: Vec<f64>,
}

impl Dataset {
    /// Creates a dataset seeded with one zero-valued entry.
    pub fn new(name: impl Into<String>) -> ChartResult<Self> {
        Self::with_values(name, vec![0.0])
    }

    pub fn with_values(name: impl Into<String>, values: Vec<f64>) -> ChartResult<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(ChartError::InvalidData(
                "dataset name must not be empty".to_owned(),
            ));
        }
        if values.is_empty() {
            return Err(ChartError::InvalidData(format!(
                "dataset `{name}` must hold at least one entry"
            )));
        }
        if let Some(value) = values.iter().find(|value| !value.is_finite()) {
            return Err(ChartError::InvalidData(format!(
                "dataset `{name}` contains non-finite value {value}"
            )));
        }
        Ok(Self { name, values })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[must_use]
    pub fn has_negative(&self) -> bool {
        super::types::has_negative(&self.values)
    }

    pub(crate) fn push_zero(&mut self) -> usize {
        self.values.push(0.0);
        self.values.len() - 1
    }

    pub(crate) fn set(&mut self, index: usize, value: f64) -> ChartResult<f64> {
        if !value.is_finite() {
            return Err(ChartError::InvalidData(format!(
                "entry value must be finite, got {value}"
            )));
        }
        let len = self.values.len();
        let slot = self
            .values
            .get_mut(index)
            .ok_or(ChartError::IndexOutOfRange { index, len })?;
        Ok(std::mem::replace(slot, value))
    }

    /// Removes `index`. Returns `Ok(None)` when the dataset only has one entry.
    pub(crate) fn remove(&mut self, index: usize) -> ChartResult<Option<f64>> {
        let len = self.values.len();
        if index >= len {
            return Err(ChartError::IndexOutOfRange { index, len });
        }
        if len == 1 {
            return Ok(None);
        }
        Ok(Some(self.values.remove(index)))
    }
}

/// Datasets keyed by name, iterated in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DatasetRegistry {
    datasets: IndexMap<String, Dataset>,
}

impl DatasetRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `dataset` unless its name is taken. Returns `true` when inserted.
    pub fn insert(&mut self, dataset: Dataset) -> bool {
        if self.datasets.contains_key(dataset.name()) {
            return false;
        }
        self.datasets.insert(dataset.name().to_owned(), dataset);
        true
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.datasets.contains_key(name)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Dataset> {
        self.datasets.get(name)
    }

    pub(crate) fn get_mut(&mut self, name: &str) -> Option<&mut Dataset> {
        self.datasets.get_mut(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.datasets.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.datasets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.datasets.is_empty()
    }
}
