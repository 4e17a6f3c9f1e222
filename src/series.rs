use crate::error::SeriesError;
use serde::{Deserialize, Serialize};

/// Lowest physically meaningful temperature accepted at construction.
pub const MIN_TEMPERATURE: f64 = -273.0;

/// Ordered series of temperature readings.
///
/// Storage is split into real values and reserved slots. Appending fills a
/// reserved slot, and when none is left the slot count doubles first.
/// The series is not synchronized: shared use across threads must be
/// serialized by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    temps: Vec<f64>,
    n_slots: usize,
}

/// Snapshot of the main statistics of a [`Series`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryStatistics {
    pub avg: f64,
    pub deviation: f64,
    pub min: f64,
    pub max: f64,
}

impl Series {
    /// Create a series from the given temperatures.
    ///
    /// # Errors
    /// Returns [`SeriesError::InvalidInput`] if any temperature is below
    /// [`MIN_TEMPERATURE`]. No series is produced in that case.
    pub fn new(temps: Vec<f64>) -> Result<Self, SeriesError> {
        if let Some((index, &value)) = temps
            .iter()
            .enumerate()
            .find(|&(_, &temp)| temp < MIN_TEMPERATURE)
        {
            return Err(SeriesError::InvalidInput { value, index });
        }

        let n_slots = temps.len();
        log::debug!("created series with {n_slots} temperatures");

        Ok(Self { temps, n_slots })
    }

    /// Number of real temperatures held.
    pub fn len(&self) -> usize {
        self.temps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.temps.is_empty()
    }

    /// Total number of slots, real and reserved.
    pub fn capacity(&self) -> usize {
        self.n_slots
    }

    /// Number of reserved slots available to future appends.
    pub fn empty_slots(&self) -> usize {
        self.n_slots - self.temps.len()
    }

    /// Real temperatures in storage order.
    pub fn values(&self) -> &[f64] {
        &self.temps
    }

    /// Sum of all temperatures, `0.0` for an empty series.
    pub fn sum(&self) -> f64 {
        self.temps.iter().sum()
    }

    pub fn average(&self) -> Result<f64, SeriesError> {
        self.check_not_empty()?;
        Ok(self.sum() / self.temps.len() as f64)
    }

    /// Population standard deviation (the divisor is the count).
    pub fn deviation(&self) -> Result<f64, SeriesError> {
        let avg = self.average()?;
        let var = self
            .temps
            .iter()
            .map(|&temp| (temp - avg).powi(2))
            .sum::<f64>()
            / self.temps.len() as f64;
        Ok(var.sqrt())
    }

    pub fn min(&self) -> Result<f64, SeriesError> {
        self.check_not_empty()?;
        Ok(self.temps.iter().copied().fold(self.temps[0], nan_min))
    }

    pub fn max(&self) -> Result<f64, SeriesError> {
        self.check_not_empty()?;
        Ok(self.temps.iter().copied().fold(self.temps[0], nan_max))
    }

    pub fn find_temp_closest_to_zero(&self) -> Result<f64, SeriesError> {
        self.find_temp_closest_to_value(0.0)
    }

    /// Temperature with the smallest distance to `target`.
    ///
    /// Among temperatures at the same smallest distance the greatest one wins.
    pub fn find_temp_closest_to_value(&self, target: f64) -> Result<f64, SeriesError> {
        self.check_not_empty()?;

        let mut closest = self.temps[0];
        for &temp in &self.temps {
            let dist = (temp - target).abs();
            let best_dist = (closest - target).abs();
            if dist < best_dist || (dist == best_dist && temp > closest) {
                closest = temp;
            }
        }

        Ok(closest)
    }

    /// Temperatures strictly below `threshold`, in storage order.
    pub fn find_temps_less_than(&self, threshold: f64) -> Vec<f64> {
        self.filter_temps(|temp| temp < threshold)
    }

    /// Temperatures strictly above `threshold`, in storage order.
    pub fn find_temps_greater_than(&self, threshold: f64) -> Vec<f64> {
        self.filter_temps(|temp| temp > threshold)
    }

    pub fn summary_statistics(&self) -> Result<SummaryStatistics, SeriesError> {
        self.check_not_empty()?;

        Ok(SummaryStatistics {
            avg: self.average()?,
            deviation: self.deviation()?,
            min: self.min()?,
            max: self.max()?,
        })
    }

    /// Append temperatures one at a time, in order.
    ///
    /// Appended values are not checked against [`MIN_TEMPERATURE`].
    /// Returns the total slot count afterwards, not the number of real values.
    pub fn add_temps(&mut self, temps: &[f64]) -> usize {
        for &temp in temps {
            if self.empty_slots() == 0 {
                self.grow();
            }
            self.temps.push(temp);
        }
        self.n_slots
    }

    fn grow(&mut self) {
        // Doubling an empty series would stay at zero slots.
        let n_slots_new = (2 * self.n_slots).max(1);
        self.temps.reserve_exact(n_slots_new - self.temps.len());
        log::debug!("growing series from {} to {n_slots_new} slots", self.n_slots);
        self.n_slots = n_slots_new;
    }

    fn filter_temps<F>(&self, pred: F) -> Vec<f64>
    where
        F: Fn(f64) -> bool,
    {
        let n_match = self.temps.iter().filter(|&&temp| pred(temp)).count();
        let mut matches = Vec::with_capacity(n_match);
        matches.extend(self.temps.iter().copied().filter(|&temp| pred(temp)));
        matches
    }

    fn check_not_empty(&self) -> Result<(), SeriesError> {
        if self.temps.is_empty() {
            return Err(SeriesError::EmptySeries);
        }
        Ok(())
    }
}

// NaN in either operand yields NaN, unlike `f64::min`/`f64::max`.
fn nan_min(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        return f64::NAN;
    }
    a.min(b)
}

fn nan_max(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        return f64::NAN;
    }
    a.max(b)
}
