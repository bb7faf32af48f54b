//! Seeded train/test splitting with optional stratification.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

/// Row indices of one train/test partition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Split {
    pub train: Vec<usize>,
    pub test: Vec<usize>,
}

/// Split `labels` into train and test rows with `ceil(test_fraction * n)`
/// test rows.
///
/// Classes keep their proportions in both parts unless some class has fewer
/// than two members; then the rows are shuffled and cut without
/// stratification.
pub fn train_test_split(labels: &[usize], test_fraction: f64, seed: u64) -> Split {
    let n = labels.len();
    let n_test = ((test_fraction * n as f64).ceil() as usize)
        .clamp(usize::from(n > 1), n.saturating_sub(1));
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);

    let n_classes = labels.iter().max().map_or(0, |m| m + 1);
    let mut by_class: Vec<Vec<usize>> = vec![Vec::new(); n_classes];
    for (i, &label) in labels.iter().enumerate() {
        by_class[label].push(i);
    }
    by_class.retain(|members| !members.is_empty());

    if by_class.iter().any(|members| members.len() < 2) {
        let mut order: Vec<usize> = (0..n).collect();
        order.shuffle(&mut rng);
        let train = order.split_off(n_test);
        return Split { train, test: order };
    }

    let quotas = allocate(&by_class, n_test, n);
    let mut split = Split {
        train: Vec::with_capacity(n - n_test),
        test: Vec::with_capacity(n_test),
    };
    for (mut members, quota) in by_class.into_iter().zip(quotas) {
        members.shuffle(&mut rng);
        let train = members.split_off(quota);
        split.test.extend(members);
        split.train.extend(train);
    }
    split.test.shuffle(&mut rng);
    split.train.shuffle(&mut rng);
    split
}

/// Per-class test counts by largest remainder, each within `1..=len-1`.
fn allocate(by_class: &[Vec<usize>], n_test: usize, n: usize) -> Vec<usize> {
    let shares: Vec<f64> = by_class
        .iter()
        .map(|m| m.len() as f64 * n_test as f64 / n as f64)
        .collect();
    let mut quotas: Vec<usize> = shares.iter().map(|s| s.floor() as usize).collect();

    let mut order: Vec<usize> = (0..by_class.len()).collect();
    order.sort_by(|&a, &b| {
        let ra = shares[a] - shares[a].floor();
        let rb = shares[b] - shares[b].floor();
        rb.total_cmp(&ra).then(a.cmp(&b))
    });
    let mut remaining = n_test.saturating_sub(quotas.iter().sum());
    for &c in order.iter().cycle().take(order.len() * 2) {
        if remaining == 0 {
            break;
        }
        if quotas[c] + 1 < by_class[c].len() {
            quotas[c] += 1;
            remaining -= 1;
        }
    }

    for (quota, members) in quotas.iter_mut().zip(by_class) {
        *quota = (*quota).clamp(1, members.len() - 1);
    }
    quotas
}
