use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    Hole,
    Par,
    Avg,
    VsPar,
    StdDev,
    Best,
    Worst,
    Rounds,
}

impl SortColumn {
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "hole" => Some(Self::Hole),
            "par" => Some(Self::Par),
            "avg" => Some(Self::Avg),
            "vspar" | "vs_par" => Some(Self::VsPar),
            "stddev" | "std_dev" => Some(Self::StdDev),
            "best" => Some(Self::Best),
            "worst" => Some(Self::Worst),
            "rounds" => Some(Self::Rounds),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// The pinned totals row under the stats table. `avg` sums the per-hole
/// averages as already rounded, and `rounds` repeats the first unsorted
/// row's count as a representative sample size.
#[derive(Debug, Clone, PartialEq)]
pub struct TotalsRow {
    pub par: i32,
    pub avg: f64,
    pub vs_par: f64,
    pub best: i32,
    pub worst: i32,
    pub rounds: usize,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ParSign {
    Over,
    Under,
    Even,
}

impl ParSign {
    #[must_use]
    pub fn from_vs_par(vs_par: f64) -> Self {
        if vs_par > 0.0 {
            Self::Over
        } else if vs_par < 0.0 {
            Self::Under
        } else {
            Self::Even
        }
    }
}

/// One bar of the vs-par chart, ready for whatever draws it.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SeriesPoint {
    pub label: String,
    pub vs_par: f64,
    pub std_dev: f64,
    pub sign: ParSign,
}
