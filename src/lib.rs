//! Temperature series analysis.
//!
//! A [`Series`] holds temperature readings validated against
//! [`MIN_TEMPERATURE`], answers descriptive statistics over them and grows by
//! doubling its slot count when values are appended.
//!
//! ```rust
//! use tempseries::Series;
//!
//! let mut series = Series::new(vec![3.0, -5.0, 1.0, 5.0]).unwrap();
//! assert_eq!(series.sum(), 4.0);
//! assert_eq!(series.find_temp_closest_to_value(4.0).unwrap(), 5.0);
//!
//! let capacity = series.add_temps(&[2.0]);
//! assert_eq!(capacity, 8);
//! assert_eq!(series.len(), 5);
//! ```

pub mod error;
pub mod input;
pub mod series;

pub use error::SeriesError;
pub use input::SeriesInput;
pub use series::{MIN_TEMPERATURE, Series, SummaryStatistics};
