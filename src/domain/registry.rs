//! In-process metrics registry.
//!
//! The registry owns named instruments (counters and histograms), accepts
//! measurement updates from any number of concurrent callers, and produces
//! point-in-time snapshots for an external collector to pull.
//!
//! Synchronization is per-instrument: each counter is a single `AtomicU64`,
//! each histogram guards its aggregates with its own short-lived `Mutex`.
//! The registry-level `RwLock` only covers the name index, so registration
//! and snapshots never serialize updates to unrelated instruments.

use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, RwLock};

use super::error::RegistryError;

/// The kind of a registered instrument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstrumentKind {
    Counter,
    Histogram,
}

impl fmt::Display for InstrumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Matches the exposition `# TYPE` keyword.
        match self {
            InstrumentKind::Counter => write!(f, "counter"),
            InstrumentKind::Histogram => write!(f, "histogram"),
        }
    }
}

/// Process-wide registry of instruments.
///
/// Created once at startup and shared (via [`SharedRegistry`]) with every
/// component that records measurements. Instruments are immutable after
/// creation and live for the life of the process; the registry never drops
/// a registered instrument.
#[derive(Default)]
pub struct Registry {
    inner: RwLock<Inner>,
}

/// Shared handle to a [`Registry`], cheap to clone into handlers and tasks.
pub type SharedRegistry = Arc<Registry>;

#[derive(Default)]
struct Inner {
    // Registration order drives snapshot order.
    instruments: Vec<Instrument>,
    index: HashMap<String, usize>,
}

enum Instrument {
    Counter(Arc<CounterCore>),
    Histogram(Arc<HistogramCore>),
}

impl Instrument {
    fn kind(&self) -> InstrumentKind {
        match self {
            Instrument::Counter(_) => InstrumentKind::Counter,
            Instrument::Histogram(_) => InstrumentKind::Histogram,
        }
    }
}

#[derive(Debug)]
struct CounterCore {
    name: String,
    value: AtomicU64,
}

#[derive(Debug)]
struct HistogramCore {
    name: String,
    // Strictly ascending, finite, fixed at creation.
    boundaries: Vec<f64>,
    state: Mutex<HistogramState>,
}

#[derive(Debug)]
struct HistogramState {
    // Per-bin observation counts; the last bin collects observations above
    // the highest boundary. Cumulative counts are derived at snapshot time,
    // which makes the monotonicity invariant hold by construction.
    bin_counts: Vec<u64>,
    sum: f64,
    count: u64,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry already wrapped for sharing across tasks.
    pub fn shared() -> SharedRegistry {
        Arc::new(Self::new())
    }

    /// Registers a counter, or returns a handle to the existing one.
    ///
    /// Re-registering the same name as a counter is idempotent. Registering
    /// a name already held by a histogram fails with
    /// [`RegistryError::DuplicateName`].
    pub fn create_counter(&self, name: &str) -> Result<CounterHandle, RegistryError> {
        let mut inner = self.inner.write().expect("registry lock poisoned");

        if let Some(&idx) = inner.index.get(name) {
            return match &inner.instruments[idx] {
                Instrument::Counter(core) => Ok(CounterHandle(Arc::clone(core))),
                other => Err(RegistryError::DuplicateName {
                    name: name.to_string(),
                    existing: other.kind(),
                }),
            };
        }

        let core = Arc::new(CounterCore {
            name: name.to_string(),
            value: AtomicU64::new(0),
        });
        let idx = inner.instruments.len();
        inner.instruments.push(Instrument::Counter(Arc::clone(&core)));
        inner.index.insert(name.to_string(), idx);

        tracing::debug!(name, "registered counter");
        Ok(CounterHandle(core))
    }

    /// Registers a histogram with fixed bucket `boundaries`, or returns a
    /// handle to the existing one.
    ///
    /// Boundaries must be non-empty, finite, and strictly ascending, or the
    /// call fails with [`RegistryError::InvalidBoundaries`]. Re-registering
    /// the same name with identical boundaries is idempotent; re-registering
    /// with different boundaries is a conflicting definition and fails with
    /// [`RegistryError::DuplicateName`].
    pub fn create_histogram(
        &self,
        name: &str,
        boundaries: &[f64],
    ) -> Result<HistogramHandle, RegistryError> {
        validate_boundaries(name, boundaries)?;

        let mut inner = self.inner.write().expect("registry lock poisoned");

        if let Some(&idx) = inner.index.get(name) {
            return match &inner.instruments[idx] {
                Instrument::Histogram(core) if core.boundaries == boundaries => {
                    Ok(HistogramHandle(Arc::clone(core)))
                }
                other => Err(RegistryError::DuplicateName {
                    name: name.to_string(),
                    existing: other.kind(),
                }),
            };
        }

        let core = Arc::new(HistogramCore {
            name: name.to_string(),
            boundaries: boundaries.to_vec(),
            state: Mutex::new(HistogramState {
                bin_counts: vec![0; boundaries.len() + 1],
                sum: 0.0,
                count: 0,
            }),
        });
        let idx = inner.instruments.len();
        inner
            .instruments
            .push(Instrument::Histogram(Arc::clone(&core)));
        inner.index.insert(name.to_string(), idx);

        tracing::debug!(name, buckets = boundaries.len(), "registered histogram");
        Ok(HistogramHandle(core))
    }

    /// Produces a consistent point-in-time reading of every instrument, in
    /// registration order.
    ///
    /// Never mutates state. Counters are a single atomic load; histograms
    /// take their own mutex for the duration of one copy, so a reading is
    /// never partially applied. Concurrent `add`/`record` calls land either
    /// entirely before or entirely after the reading of that instrument.
    pub fn snapshot(&self) -> Vec<InstrumentReading> {
        let inner = self.inner.read().expect("registry lock poisoned");

        inner
            .instruments
            .iter()
            .map(|instrument| match instrument {
                Instrument::Counter(core) => InstrumentReading::Counter(CounterReading {
                    name: core.name.clone(),
                    value: core.value.load(Ordering::Relaxed),
                }),
                Instrument::Histogram(core) => {
                    let state = core.state.lock().expect("histogram lock poisoned");
                    let mut buckets = Vec::with_capacity(core.boundaries.len());
                    let mut cumulative = 0;
                    for (boundary, bin) in core.boundaries.iter().zip(&state.bin_counts) {
                        cumulative += *bin;
                        buckets.push(BucketReading {
                            upper_bound: *boundary,
                            cumulative_count: cumulative,
                        });
                    }
                    InstrumentReading::Histogram(HistogramReading {
                        name: core.name.clone(),
                        buckets,
                        sum: state.sum,
                        count: state.count,
                    })
                }
            })
            .collect()
    }
}

fn validate_boundaries(name: &str, boundaries: &[f64]) -> Result<(), RegistryError> {
    if boundaries.is_empty() {
        return Err(RegistryError::InvalidBoundaries {
            name: name.to_string(),
            reason: "boundaries must not be empty",
        });
    }
    if boundaries.iter().any(|b| !b.is_finite()) {
        return Err(RegistryError::InvalidBoundaries {
            name: name.to_string(),
            reason: "boundaries must be finite",
        });
    }
    if boundaries.windows(2).any(|w| w[0] >= w[1]) {
        return Err(RegistryError::InvalidBoundaries {
            name: name.to_string(),
            reason: "boundaries must be strictly ascending",
        });
    }
    Ok(())
}

/// Handle for updating one registered counter from any thread or task.
#[derive(Debug, Clone)]
pub struct CounterHandle(Arc<CounterCore>);

impl CounterHandle {
    /// Atomically adds `delta` to the accumulator.
    ///
    /// Counters are monotone by contract; the unsigned delta makes a
    /// negative increment unrepresentable.
    pub fn add(&self, delta: u64) {
        self.0.value.fetch_add(delta, Ordering::Relaxed);
    }

    /// Current accumulated value.
    pub fn value(&self) -> u64 {
        self.0.value.load(Ordering::Relaxed)
    }

    pub fn name(&self) -> &str {
        &self.0.name
    }
}

/// Handle for recording observations into one registered histogram.
#[derive(Debug, Clone)]
pub struct HistogramHandle(Arc<HistogramCore>);

impl HistogramHandle {
    /// Records one observation: updates the running sum, the total count,
    /// and the bucket covering `value`, atomically with respect to
    /// [`Registry::snapshot`].
    ///
    /// Non-finite values are rejected with [`RegistryError::InvalidValue`]
    /// so they cannot corrupt the running sum.
    pub fn record(&self, value: f64) -> Result<(), RegistryError> {
        if !value.is_finite() {
            return Err(RegistryError::InvalidValue {
                name: self.0.name.clone(),
                value,
            });
        }

        // First boundary >= value; boundaries.len() means above the highest
        // boundary, which only the total count and +Inf bucket see.
        let bin = self.0.boundaries.partition_point(|b| *b < value);

        let mut state = self.0.state.lock().expect("histogram lock poisoned");
        state.bin_counts[bin] += 1;
        state.sum += value;
        state.count += 1;
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.0.name
    }
}

/// Point-in-time reading of one instrument, produced by
/// [`Registry::snapshot`].
#[derive(Debug, Clone, PartialEq)]
pub enum InstrumentReading {
    Counter(CounterReading),
    Histogram(HistogramReading),
}

impl InstrumentReading {
    pub fn name(&self) -> &str {
        match self {
            InstrumentReading::Counter(c) => &c.name,
            InstrumentReading::Histogram(h) => &h.name,
        }
    }

    pub fn kind(&self) -> InstrumentKind {
        match self {
            InstrumentReading::Counter(_) => InstrumentKind::Counter,
            InstrumentReading::Histogram(_) => InstrumentKind::Histogram,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CounterReading {
    pub name: String,
    pub value: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HistogramReading {
    pub name: String,
    /// Cumulative counts per boundary, ascending.
    pub buckets: Vec<BucketReading>,
    pub sum: f64,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BucketReading {
    pub upper_bound: f64,
    /// Number of observations ≤ `upper_bound`.
    pub cumulative_count: u64,
}
