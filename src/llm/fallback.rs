//! Fallback classifier: wraps any [`SectorClassifier`] and turns every error
//! into "no classification".
//!
//! The result panel must always render, so a failed AI call (`Request`,
//! `Timeout`, `Status`, `Parse`, `EmptyResponse`) is reported as an empty
//! [`ClassificationResult`] and the static path carries on.

use async_trait::async_trait;

use crate::classify::ClassificationResult;
use crate::llm::classifier::{LlmError, SectorClassifier};

// ---------------------------------------------------------------------------
// FallbackClassifier
// ---------------------------------------------------------------------------

/// A transparent wrapper around any [`SectorClassifier`] that never returns
/// an error.
///
/// # Example
/// ```rust
/// use sector_mapper::catalog::SectorTable;
/// use sector_mapper::config::LlmConfig;
/// use sector_mapper::llm::{ApiClassifier, FallbackClassifier};
///
/// let inner = ApiClassifier::from_config(&LlmConfig::default(), "key".into(), SectorTable::builtin());
/// let classifier = FallbackClassifier::new(inner);
/// ```
pub struct FallbackClassifier<C: SectorClassifier> {
    inner: C,
}

impl<C: SectorClassifier> FallbackClassifier<C> {
    /// Wrap `inner` with fallback behaviour.
    pub fn new(inner: C) -> Self {
        Self { inner }
    }

    /// Return a reference to the wrapped classifier.
    pub fn inner(&self) -> &C {
        &self.inner
    }
}

#[async_trait]
impl<C: SectorClassifier + Send + Sync> SectorClassifier for FallbackClassifier<C> {
    /// This implementation **never** returns `Err(_)`.
    async fn classify(&self, org_name: &str) -> Result<ClassificationResult, LlmError> {
        match self.inner.classify(org_name).await {
            Ok(result) => Ok(result),
            Err(err) => {
                log::warn!(
                    "AI classification failed, continuing without it (name len={}): {err}",
                    org_name.len()
                );
                Ok(ClassificationResult::none())
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    // -----------------------------------------------------------------------
    // Test doubles
    // -----------------------------------------------------------------------

    struct AlwaysOk(ClassificationResult);

    #[async_trait]
    impl SectorClassifier for AlwaysOk {
        async fn classify(&self, _name: &str) -> Result<ClassificationResult, LlmError> {
            Ok(self.0.clone())
        }
    }

    enum ErrorKind {
        Request,
        Timeout,
        Status,
        Parse,
        Empty,
    }

    struct AlwaysFails(ErrorKind);

    #[async_trait]
    impl SectorClassifier for AlwaysFails {
        async fn classify(&self, _name: &str) -> Result<ClassificationResult, LlmError> {
            let err = match self.0 {
                ErrorKind::Request => LlmError::Request("connection refused".into()),
                ErrorKind::Timeout => LlmError::Timeout,
                ErrorKind::Status => LlmError::Status(401),
                ErrorKind::Parse => LlmError::Parse("bad json".into()),
                ErrorKind::Empty => LlmError::EmptyResponse,
            };
            Err(err)
        }
    }

    // -----------------------------------------------------------------------
    // Tests
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn passes_through_success() {
        let expected = ClassificationResult::new("Healthcare", "hospital");
        let classifier = FallbackClassifier::new(AlwaysOk(expected.clone()));
        assert_eq!(classifier.classify("รพ.").await.unwrap(), expected);
    }

    #[tokio::test]
    async fn every_error_becomes_no_classification() {
        for kind in [
            ErrorKind::Request,
            ErrorKind::Timeout,
            ErrorKind::Status,
            ErrorKind::Parse,
            ErrorKind::Empty,
        ] {
            let classifier = FallbackClassifier::new(AlwaysFails(kind));
            let result = classifier.classify("Bangkok Bank").await;
            assert_eq!(result.unwrap(), ClassificationResult::none());
        }
    }

    /// FallbackClassifier<C> must itself be a valid SectorClassifier (object-safe).
    #[test]
    fn fallback_is_object_safe() {
        let inner = AlwaysOk(ClassificationResult::none());
        let _: Box<dyn SectorClassifier> = Box::new(FallbackClassifier::new(inner));
    }
}
