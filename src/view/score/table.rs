use std::cmp::Ordering;

use crate::controller::score::round2;
use crate::model::HoleStat;
use crate::view::score::types::{SortColumn, SortDirection, TotalsRow};

/// Sortable view over the per-hole stats. Keeps the engine's rows untouched
/// for the totals row and re-sorts a display copy on demand. Re-sorting is
/// stable over the previous materialization, so equal keys keep whatever
/// relative order the last sort produced.
#[derive(Debug, Clone)]
pub struct HoleStatsTable {
    stats: Vec<HoleStat>,
    display: Vec<HoleStat>,
    sort_column: Option<SortColumn>,
    direction: SortDirection,
}

impl HoleStatsTable {
    #[must_use]
    pub fn new(stats: Vec<HoleStat>) -> Self {
        let display = stats.clone();
        Self {
            stats,
            display,
            sort_column: None,
            direction: SortDirection::Ascending,
        }
    }

    /// Same column toggles the direction; a new column starts ascending.
    pub fn sort_by(&mut self, column: SortColumn) {
        if self.sort_column == Some(column) {
            self.direction = self.direction.flipped();
        } else {
            self.sort_column = Some(column);
            self.direction = SortDirection::Ascending;
        }
        self.resort();
    }

    fn resort(&mut self) {
        let Some(column) = self.sort_column else {
            return;
        };
        let direction = self.direction;
        self.display.sort_by(|a, b| {
            let ord = compare_column(a, b, column);
            match direction {
                SortDirection::Ascending => ord,
                SortDirection::Descending => ord.reverse(),
            }
        });
    }

    #[must_use]
    pub fn rows(&self) -> &[HoleStat] {
        &self.display
    }

    #[must_use]
    pub fn sort_column(&self) -> Option<SortColumn> {
        self.sort_column
    }

    #[must_use]
    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    /// Always derived from the unsorted stat set, whatever the current
    /// display order is.
    #[must_use]
    pub fn totals(&self) -> TotalsRow {
        let par: i32 = self.stats.iter().map(|s| s.par).sum();
        let avg: f64 = self.stats.iter().map(|s| s.avg).sum();

        TotalsRow {
            par,
            avg: round2(avg),
            vs_par: round2(avg - f64::from(par)),
            best: self.stats.iter().map(|s| s.best).sum(),
            worst: self.stats.iter().map(|s| s.worst).sum(),
            rounds: self.stats.first().map_or(0, |s| s.rounds),
        }
    }
}

fn compare_column(a: &HoleStat, b: &HoleStat, column: SortColumn) -> Ordering {
    match column {
        SortColumn::Hole => a.hole.cmp(&b.hole),
        SortColumn::Par => a.par.cmp(&b.par),
        SortColumn::Avg => a.avg.total_cmp(&b.avg),
        SortColumn::VsPar => a.vs_par.total_cmp(&b.vs_par),
        SortColumn::StdDev => a.std_dev.total_cmp(&b.std_dev),
        SortColumn::Best => a.best.cmp(&b.best),
        SortColumn::Worst => a.worst.cmp(&b.worst),
        SortColumn::Rounds => a.rounds.cmp(&b.rounds),
    }
}
