use crate::model::HoleStat;
use crate::view::score::types::{ParSign, SeriesPoint};

/// Chart-ready series in table order: one labeled vs-par value per hole
/// with its dispersion, plus the over/under/even sign styling keys off.
#[must_use]
pub fn to_series(stats: &[HoleStat]) -> Vec<SeriesPoint> {
    stats
        .iter()
        .map(|stat| SeriesPoint {
            label: format!("H{}", stat.hole),
            vs_par: stat.vs_par,
            std_dev: stat.std_dev,
            sign: ParSign::from_vs_par(stat.vs_par),
        })
        .collect()
}
