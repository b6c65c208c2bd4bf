mod error;
mod registry;

// Publicly expose the registry abstraction
pub use error::RegistryError;
pub use registry::{
    BucketReading, CounterHandle, CounterReading, HistogramHandle, HistogramReading,
    InstrumentKind, InstrumentReading, Registry, SharedRegistry,
};
