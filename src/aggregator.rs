use crate::error::AveragerError;
use crate::metric::AggregationResult;
use serde_json::Value;

#[derive(Debug, PartialEq)]
enum State {
    Accepting { count: u64, total: f64 },
    Finalized,
}

/// Running count and mean over one series of samples.
///
/// Samples are fed with [`Averager::accept`] and the result is taken once with
/// [`Averager::finalize`]. After that every call fails with
/// `AlreadyFinalized`. Finalizing an averager that never saw a sample fails
/// with `EmptyAggregation`.
#[derive(Debug, PartialEq)]
pub struct Averager {
    state: State,
}

impl Default for Averager {
    fn default() -> Self {
        Self {
            state: State::Accepting {
                count: 0,
                total: 0.0,
            },
        }
    }
}

impl Averager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn accept(&mut self, sample: f64) -> Result<(), AveragerError> {
        match self.state {
            State::Finalized => Err(AveragerError::AlreadyFinalized),
            State::Accepting { .. } if !sample.is_finite() => {
                Err(AveragerError::InvalidInput(sample.to_string()))
            }
            State::Accepting {
                ref mut count,
                ref mut total,
            } => {
                *count += 1;
                *total += sample;
                Ok(())
            }
        }
    }

    /// Accepts a sample that arrived as untyped JSON. Anything but a number
    /// is rejected before the running state is touched.
    pub fn accept_value(&mut self, value: &Value) -> Result<(), AveragerError> {
        let sample = value
            .as_f64()
            .ok_or_else(|| AveragerError::InvalidInput(value.to_string()))?;
        self.accept(sample)
    }

    pub fn finalize(&mut self) -> Result<AggregationResult, AveragerError> {
        match std::mem::replace(&mut self.state, State::Finalized) {
            State::Finalized => Err(AveragerError::AlreadyFinalized),
            State::Accepting { count: 0, .. } => Err(AveragerError::EmptyAggregation),
            State::Accepting { count, total } => {
                Ok(AggregationResult::new(count, total / count as f64))
            }
        }
    }

    pub fn count(&self) -> u64 {
        match self.state {
            State::Accepting { count, .. } => count,
            State::Finalized => 0,
        }
    }

    pub fn total(&self) -> f64 {
        match self.state {
            State::Accepting { total, .. } => total,
            State::Finalized => 0.0,
        }
    }

    pub fn is_finalized(&self) -> bool {
        self.state == State::Finalized
    }
}
