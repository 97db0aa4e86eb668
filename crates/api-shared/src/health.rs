use crate::types::HealthRes;

/// Simple health service used by the REST API
///
/// Provides a standardised way to check that the filedrop service is up. It holds no state and
/// never touches storage.
#[derive(Clone, Default)]
pub struct HealthService;

impl HealthService {
    /// Check health without creating an instance
    ///
    /// # Returns
    /// A `HealthRes` indicating the service is healthy.
    pub fn check_health() -> HealthRes {
        HealthRes {
            ok: true,
            message: "filedrop is alive".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_is_ok() {
        let res = HealthService::check_health();
        assert!(res.ok);
        assert_eq!(res.message, "filedrop is alive");
    }
}
