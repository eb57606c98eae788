use std::ops::RangeInclusive;
use std::time::Duration;

use crate::config::{
    DEFAULT_GROWTH_FOOD_COUNT, DEFAULT_SHRINK_FOOD_COUNT, DEFAULT_TICK_RATE, MAX_OBSTACLES,
    MIN_FOOD_COUNT, MIN_OBSTACLES, MIN_TICK_RATE,
};

/// Runtime tunables shared by every session of one process.
///
/// Adjustments never fail: anything below a floor is clamped to it.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct SessionSettings {
    tick_rate: u32,
    growth_food_count: u32,
    shrink_food_count: u32,
    high_score: u32,
    obstacle_range: RangeInclusive<u32>,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            tick_rate: DEFAULT_TICK_RATE,
            growth_food_count: DEFAULT_GROWTH_FOOD_COUNT,
            shrink_food_count: DEFAULT_SHRINK_FOOD_COUNT,
            high_score: 0,
            obstacle_range: MIN_OBSTACLES..=MAX_OBSTACLES,
        }
    }
}

impl SessionSettings {
    /// Starts from defaults with an already loaded high score.
    #[must_use]
    pub fn with_high_score(high_score: u32) -> Self {
        Self {
            high_score,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn tick_rate(&self) -> u32 {
        self.tick_rate
    }

    #[must_use]
    pub fn growth_food_count(&self) -> u32 {
        self.growth_food_count
    }

    #[must_use]
    pub fn shrink_food_count(&self) -> u32 {
        self.shrink_food_count
    }

    #[must_use]
    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    /// Inclusive range the per-session obstacle count is drawn from.
    #[must_use]
    pub fn obstacle_range(&self) -> RangeInclusive<u32> {
        self.obstacle_range.clone()
    }

    /// Time between two ticks at the current rate.
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(1) / self.tick_rate
    }

    pub fn set_tick_rate(&mut self, tick_rate: u32) {
        self.tick_rate = tick_rate.max(MIN_TICK_RATE);
    }

    pub fn set_growth_food_count(&mut self, count: u32) {
        self.growth_food_count = count.max(MIN_FOOD_COUNT);
    }

    pub fn set_shrink_food_count(&mut self, count: u32) {
        self.shrink_food_count = count.max(MIN_FOOD_COUNT);
    }

    /// Sets the obstacle range; a reversed range collapses onto its start.
    pub fn set_obstacle_range(&mut self, min: u32, max: u32) {
        self.obstacle_range = min..=max.max(min);
    }

    pub fn adjust_tick_rate(&mut self, delta: i32) {
        self.set_tick_rate(apply_delta(self.tick_rate, delta));
    }

    pub fn adjust_growth_food(&mut self, delta: i32) {
        self.set_growth_food_count(apply_delta(self.growth_food_count, delta));
    }

    pub fn adjust_shrink_food(&mut self, delta: i32) {
        self.set_shrink_food_count(apply_delta(self.shrink_food_count, delta));
    }

    /// Raises the high score to `length` if it beats it. Returns whether it rose.
    pub fn record_length(&mut self, length: usize) -> bool {
        let length = u32::try_from(length).unwrap_or(u32::MAX);
        if length <= self.high_score {
            return false;
        }
        self.high_score = length;
        true
    }
}

fn apply_delta(value: u32, delta: i32) -> u32 {
    value.saturating_add_signed(delta)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::SessionSettings;

    #[test]
    fn defaults_match_the_classic_game() {
        let settings = SessionSettings::default();

        assert_eq!(settings.tick_rate(), 20);
        assert_eq!(settings.growth_food_count(), 1);
        assert_eq!(settings.shrink_food_count(), 1);
        assert_eq!(settings.high_score(), 0);
        assert_eq!(settings.obstacle_range(), 1..=5);
    }

    #[test]
    fn adjustments_are_clamped_at_one() {
        let mut settings = SessionSettings::default();
        settings.set_tick_rate(2);

        settings.adjust_tick_rate(-1);
        settings.adjust_tick_rate(-1);
        settings.adjust_tick_rate(-5);
        settings.adjust_growth_food(-1);
        settings.adjust_shrink_food(-3);

        assert_eq!(settings.tick_rate(), 1);
        assert_eq!(settings.growth_food_count(), 1);
        assert_eq!(settings.shrink_food_count(), 1);
    }

    #[test]
    fn adjustments_increase_by_delta() {
        let mut settings = SessionSettings::default();

        settings.adjust_tick_rate(1);
        settings.adjust_growth_food(1);
        settings.adjust_growth_food(1);
        settings.adjust_shrink_food(1);

        assert_eq!(settings.tick_rate(), 21);
        assert_eq!(settings.growth_food_count(), 3);
        assert_eq!(settings.shrink_food_count(), 2);
    }

    #[test]
    fn setters_clamp_zero() {
        let mut settings = SessionSettings::default();

        settings.set_tick_rate(0);
        settings.set_growth_food_count(0);
        settings.set_shrink_food_count(0);

        assert_eq!(settings.tick_rate(), 1);
        assert_eq!(settings.growth_food_count(), 1);
        assert_eq!(settings.shrink_food_count(), 1);
    }

    #[test]
    fn high_score_never_decreases() {
        let mut settings = SessionSettings::with_high_score(5);

        assert!(!settings.record_length(3));
        assert_eq!(settings.high_score(), 5);

        assert!(settings.record_length(8));
        assert_eq!(settings.high_score(), 8);

        assert!(!settings.record_length(8));
    }

    #[test]
    fn tick_interval_follows_rate() {
        let mut settings = SessionSettings::default();
        assert_eq!(settings.tick_interval(), Duration::from_millis(50));

        settings.set_tick_rate(1);
        assert_eq!(settings.tick_interval(), Duration::from_secs(1));
    }

    #[test]
    fn reversed_obstacle_range_collapses() {
        let mut settings = SessionSettings::default();
        settings.set_obstacle_range(4, 2);
        assert_eq!(settings.obstacle_range(), 4..=4);
    }
}
