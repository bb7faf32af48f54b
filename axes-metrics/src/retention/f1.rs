//! Macro-averaged F1.

use rustc_hash::FxHashMap;

#[derive(Debug, Default, Clone, Copy)]
struct Confusion {
    tp: usize,
    fp: usize,
    fn_: usize,
}

impl Confusion {
    fn f1(&self) -> f64 {
        let precision = ratio_or_zero(self.tp, self.tp + self.fp);
        let recall = ratio_or_zero(self.tp, self.tp + self.fn_);
        if precision + recall == 0.0 {
            0.0
        } else {
            2.0 * precision * recall / (precision + recall)
        }
    }
}

fn ratio_or_zero(num: usize, den: usize) -> f64 {
    if den == 0 {
        0.0
    } else {
        num as f64 / den as f64
    }
}

/// Unweighted mean of per-class F1 over every label seen in either the truth
/// or the prediction. `None` for empty or misaligned input.
pub fn macro_f1(y_true: &[usize], y_pred: &[usize]) -> Option<f64> {
    if y_true.is_empty() || y_true.len() != y_pred.len() {
        return None;
    }

    let mut per_class: FxHashMap<usize, Confusion> = FxHashMap::default();
    for (&truth, &pred) in y_true.iter().zip(y_pred) {
        if truth == pred {
            per_class.entry(truth).or_default().tp += 1;
        } else {
            per_class.entry(truth).or_default().fn_ += 1;
            per_class.entry(pred).or_default().fp += 1;
        }
    }

    let total: f64 = per_class.values().map(Confusion::f1).sum();
    Some(total / per_class.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perfect_prediction() {
        assert_eq!(macro_f1(&[0, 1, 1, 2], &[0, 1, 1, 2]), Some(1.0));
    }

    #[test]
    fn test_macro_average_weights_classes_equally() {
        // class 0: tp=2, fn=0, fp=1 -> p=2/3 r=1 f1=0.8
        // class 1: tp=0, fn=1       -> f1=0
        let f1 = macro_f1(&[0, 0, 1], &[0, 0, 0]).unwrap();
        assert!((f1 - 0.4).abs() < 1e-12);
    }

    #[test]
    fn test_predicted_only_label_counts() {
        // label 2 never appears in truth but is predicted
        let f1 = macro_f1(&[0, 0], &[0, 2]).unwrap();
        // class 0: tp=1 fn=1 -> p=1 r=0.5 f1=2/3 ; class 2: f1=0
        assert!((f1 - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_misaligned_input() {
        assert_eq!(macro_f1(&[], &[]), None);
        assert_eq!(macro_f1(&[0], &[0, 1]), None);
    }
}
