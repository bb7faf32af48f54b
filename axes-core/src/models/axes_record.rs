//! The flat axes record - the persisted form consumed by the checkers.

use serde::{Deserialize, Serialize};

use super::{DensityMetrics, DriftMetrics, ShapeMetrics, TemporalMetrics};

/// All nine axis metrics in one flat record.
///
/// Built only through [`AxesRecord::merge`], which destructures the typed
/// per-axis records: a key collision between axes cannot compile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AxesRecord {
    pub st_var_ratio: Option<f64>,
    pub seasonal_corr: Option<f64>,
    pub psi_trigger_rate: f64,
    pub sk_k_score: Option<f64>,
    pub outlier_impact: Option<f64>,
    pub dip_stat: Option<f64>,
    pub intra_cluster_density: Option<f64>,
    pub silhouette_approx: Option<f64>,
    pub density_k: Option<u32>,
}

impl AxesRecord {
    pub fn merge(
        temporal: TemporalMetrics,
        drift: DriftMetrics,
        shape: ShapeMetrics,
        density: DensityMetrics,
    ) -> Self {
        let TemporalMetrics {
            st_var_ratio,
            seasonal_corr,
        } = temporal;
        let DriftMetrics { psi_trigger_rate } = drift;
        let ShapeMetrics {
            sk_k_score,
            outlier_impact,
            dip_stat,
        } = shape;
        let DensityMetrics {
            intra_cluster_density,
            silhouette_approx,
            density_k,
        } = density;
        Self {
            st_var_ratio,
            seasonal_corr,
            psi_trigger_rate,
            sk_k_score,
            outlier_impact,
            dip_stat,
            intra_cluster_density,
            silhouette_approx,
            density_k,
        }
    }

    /// `(key, value)` pairs in the fixed vocabulary order.
    pub fn entries(&self) -> [(&'static str, Option<f64>); 9] {
        [
            ("st_var_ratio", self.st_var_ratio),
            ("seasonal_corr", self.seasonal_corr),
            ("psi_trigger_rate", Some(self.psi_trigger_rate)),
            ("sk_k_score", self.sk_k_score),
            ("outlier_impact", self.outlier_impact),
            ("dip_stat", self.dip_stat),
            ("intra_cluster_density", self.intra_cluster_density),
            ("silhouette_approx", self.silhouette_approx),
            ("density_k", self.density_k.map(f64::from)),
        ]
    }

    /// Number of unavailable metrics.
    pub fn unavailable_count(&self) -> usize {
        self.entries().iter().filter(|(_, v)| v.is_none()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::AXES_KEYS;

    fn sample() -> AxesRecord {
        AxesRecord::merge(
            TemporalMetrics {
                st_var_ratio: Some(0.8),
                seasonal_corr: None,
            },
            DriftMetrics {
                psi_trigger_rate: 0.2,
            },
            ShapeMetrics {
                sk_k_score: Some(1.5),
                outlier_impact: Some(0.1),
                dip_stat: None,
            },
            DensityMetrics {
                intra_cluster_density: Some(0.4),
                silhouette_approx: Some(0.3),
                density_k: Some(3),
            },
        )
    }

    #[test]
    fn test_entries_follow_key_vocabulary() {
        let keys: Vec<&str> = sample().entries().iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, AXES_KEYS.to_vec());
    }

    #[test]
    fn test_serializes_unavailable_as_null() {
        let json = serde_json::to_value(sample()).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 9);
        assert!(obj["seasonal_corr"].is_null());
        assert!(obj["dip_stat"].is_null());
        assert_eq!(obj["density_k"], serde_json::json!(3));
    }

    #[test]
    fn test_unavailable_count() {
        assert_eq!(sample().unavailable_count(), 2);
    }
}
