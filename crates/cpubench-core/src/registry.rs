//! Workload factory and registry.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::chudnovsky::ChudnovskyPi;
use crate::kernel_bigint::BigIntKernel;
use crate::primes::TrialDivision;
use crate::workload::{BenchError, Workload};

/// Factory trait for resolving workloads by mode name.
pub trait WorkloadFactory: Send + Sync {
    /// Get or create a workload by mode name.
    fn get(&self, mode: &str) -> Result<Arc<dyn Workload>, BenchError>;

    /// List all available mode names.
    fn available(&self) -> Vec<&str>;
}

/// Default factory with lazy creation and cache.
pub struct DefaultFactory {
    cache: RwLock<HashMap<String, Arc<dyn Workload>>>,
}

impl DefaultFactory {
    /// Create a new default factory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cache: RwLock::new(HashMap::new()),
        }
    }

    fn create_workload(mode: &str) -> Result<Arc<dyn Workload>, BenchError> {
        match mode {
            "pi" => Ok(Arc::new(ChudnovskyPi::<BigIntKernel>::new())),
            #[cfg(feature = "gmp")]
            "pi-gmp" => Ok(Arc::new(ChudnovskyPi::<crate::kernel_gmp::GmpKernel>::new())),
            "primes" => Ok(Arc::new(TrialDivision::new())),
            _ => Err(BenchError::Config(format!("unknown workload mode: {mode}"))),
        }
    }
}

impl Default for DefaultFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkloadFactory for DefaultFactory {
    fn get(&self, mode: &str) -> Result<Arc<dyn Workload>, BenchError> {
        // Check cache first
        if let Some(workload) = self.cache.read().get(mode) {
            return Ok(Arc::clone(workload));
        }

        // Create and cache
        let workload = Self::create_workload(mode)?;
        self.cache
            .write()
            .insert(mode.to_string(), Arc::clone(&workload));
        Ok(workload)
    }

    fn available(&self) -> Vec<&str> {
        #[cfg(feature = "gmp")]
        {
            vec!["pi", "pi-gmp", "primes"]
        }
        #[cfg(not(feature = "gmp"))]
        {
            vec!["pi", "primes"]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_creates_pi_workload() {
        let factory = DefaultFactory::new();
        let workload = factory.get("pi");
        assert!(workload.is_ok());
        assert_eq!(workload.unwrap().name(), "Chudnovsky");
    }

    #[test]
    fn factory_creates_primes_workload() {
        let factory = DefaultFactory::new();
        let workload = factory.get("primes");
        assert!(workload.is_ok());
        assert_eq!(workload.unwrap().name(), "TrialDivision");
    }

    #[test]
    fn factory_caches() {
        let factory = DefaultFactory::new();
        let a = factory.get("pi").unwrap();
        let b = factory.get("pi").unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn factory_unknown_mode() {
        let factory = DefaultFactory::new();
        assert!(matches!(
            factory.get("sieve"),
            Err(BenchError::Config(_))
        ));
    }

    #[test]
    fn factory_available() {
        let factory = DefaultFactory::new();
        let available = factory.available();
        assert!(available.contains(&"pi"));
        assert!(available.contains(&"primes"));
    }
}
