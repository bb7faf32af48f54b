use crate::errors::ClassifierError;

/// Pluggable classification capability used by the retention axis.
///
/// Labels are dense class indices `0..n_classes`. Implementations must be
/// deterministic for a fixed construction (seed included).
pub trait Classifier: Send + Sync {
    /// Fit on row-major features and their labels.
    fn fit(&mut self, features: &[Vec<f64>], labels: &[usize]) -> Result<(), ClassifierError>;

    /// Predict one label per feature row.
    fn predict(&self, features: &[Vec<f64>]) -> Result<Vec<usize>, ClassifierError>;
}

/// Builds fresh, unfitted classifiers of one kind.
pub trait ClassifierFactory: Send + Sync {
    fn create(&self) -> Box<dyn Classifier>;
}

impl<F> ClassifierFactory for F
where
    F: Fn() -> Box<dyn Classifier> + Send + Sync,
{
    fn create(&self) -> Box<dyn Classifier> {
        self()
    }
}
