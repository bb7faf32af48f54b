//! Turning a pair of snapshots into aligned, label-encoded training sets.

use axes_core::errors::FrameError;
use axes_core::frame::{Column, FeatureMatrix};
use rustc_hash::FxHashMap;

/// Complete rows of one snapshot: numeric features and encoded labels.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LabeledSet {
    pub features: Vec<Vec<f64>>,
    pub labels: Vec<usize>,
}

impl LabeledSet {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Distinct labels actually present.
    pub fn n_classes(&self) -> usize {
        let mut seen: Vec<usize> = self.labels.clone();
        seen.sort_unstable();
        seen.dedup();
        seen.len()
    }

    pub fn rows_at(&self, idx: &[usize]) -> Vec<Vec<f64>> {
        idx.iter().map(|&i| self.features[i].clone()).collect()
    }

    pub fn labels_at(&self, idx: &[usize]) -> Vec<usize> {
        idx.iter().map(|&i| self.labels[i]).collect()
    }
}

/// Align `shift` to `base` and encode both targets over one vocabulary.
///
/// The target is the last column of `base`; `shift` must end with a column
/// of the same name and carry every numeric feature column of `base`.
pub fn prepare(base: &FeatureMatrix, shift: &FeatureMatrix) -> Result<(LabeledSet, LabeledSet), FrameError> {
    let target = base.last_column();
    let shift_target = shift.last_column();
    if shift_target.name != target.name {
        return Err(FrameError::TargetMismatch {
            expected: target.name.clone(),
            actual: shift_target.name.clone(),
        });
    }

    let base_features: Vec<&Column> = base
        .numeric_columns()
        .filter(|c| c.name != target.name)
        .collect();
    let shift_features = base_features
        .iter()
        .map(|c| {
            shift
                .column(&c.name)
                .filter(|s| s.is_numeric())
                .ok_or_else(|| FrameError::ColumnMismatch {
                    column: c.name.clone(),
                })
        })
        .collect::<Result<Vec<&Column>, FrameError>>()?;

    let mut vocabulary: Vec<String> = target
        .cells
        .iter()
        .chain(&shift_target.cells)
        .filter_map(|cell| cell.label_key())
        .collect();
    vocabulary.sort();
    vocabulary.dedup();
    let encoding: FxHashMap<String, usize> = vocabulary
        .into_iter()
        .enumerate()
        .map(|(i, key)| (key, i))
        .collect();

    Ok((
        collect_rows(&base_features, target, &encoding),
        collect_rows(&shift_features, shift_target, &encoding),
    ))
}

/// Rows with every feature present and a non-null target.
fn collect_rows(features: &[&Column], target: &Column, encoding: &FxHashMap<String, usize>) -> LabeledSet {
    let mut set = LabeledSet::default();
    for (r, cell) in target.cells.iter().enumerate() {
        let Some(label) = cell.label_key().and_then(|k| encoding.get(&k).copied()) else {
            continue;
        };
        let row: Option<Vec<f64>> = features.iter().map(|c| c.cells[r].to_number()).collect();
        if let Some(row) = row {
            set.features.push(row);
            set.labels.push(label);
        }
    }
    set
}
