use std::cmp::max;
use std::fmt::{Display, Formatter};

use crate::app::TickReport;

/// Collect statistics about the current session
#[derive(Default, Debug)]
pub struct Stats {
    pub ticks: u64,
    pub apples_eaten: usize,
    pub bad_food_eaten: usize,
    pub crashes: usize,
    /// Rounds that ended with a full board
    pub wins: usize,
    pub longest_snake: usize,
}

impl Stats {
    pub fn record(&mut self, report: &TickReport, snake_len: usize) {
        self.ticks += 1;
        self.apples_eaten += report.ate_apple as usize;
        self.bad_food_eaten += report.ate_bad_food as usize;
        self.crashes += report.crash.is_some() as usize;
        self.wins += report.won as usize;
        self.longest_snake = max(self.longest_snake, snake_len);
    }
}

impl Display for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ticks: {}, apples: {}, bad food: {}, crashes: {}, wins: {}, longest snake: {}",
            self.ticks,
            self.apples_eaten,
            self.bad_food_eaten,
            self.crashes,
            self.wins,
            self.longest_snake,
        )
    }
}
