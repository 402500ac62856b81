//! Demo authenticator: simulated latency, then a local credential check.

use std::rc::Rc;
use std::time::Duration;

use async_trait::async_trait;

use super::{Authenticator, Credentials, LoginError};
use crate::config::AuthMode;

pub const DEMO_EMAIL: &str = "eve.holt@reqres.in";
pub const DEMO_PASSWORD: &str = "cityslicka";

/// Suspends the current task for a duration.
///
/// Hosts supply their own timer; the core has no runtime of its own.
#[async_trait(?Send)]
pub trait Delay {
    async fn wait(&self, duration: Duration);
}

/// Completes immediately
#[derive(Debug, Default, Clone, Copy)]
pub struct NoDelay;

#[async_trait(?Send)]
impl Delay for NoDelay {
    async fn wait(&self, _duration: Duration) {}
}

pub struct DemoAuthenticator {
    delay: Rc<dyn Delay>,
    latency: Duration,
}

impl DemoAuthenticator {
    pub fn new(delay: Rc<dyn Delay>, latency: Duration) -> Self {
        Self { delay, latency }
    }

    fn issue_token() -> String {
        format!("demo_token_{}", chrono::Utc::now().timestamp_millis())
    }
}

#[async_trait(?Send)]
impl Authenticator for DemoAuthenticator {
    fn mode(&self) -> AuthMode {
        AuthMode::Demo
    }

    async fn authenticate(&self, credentials: &Credentials) -> Result<String, LoginError> {
        self.delay.wait(self.latency).await;

        if credentials.email == DEMO_EMAIL && credentials.password == DEMO_PASSWORD {
            Ok(Self::issue_token())
        } else {
            Err(LoginError::InvalidDemoCredentials)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingDelay {
        waits: RefCell<Vec<Duration>>,
    }

    #[async_trait(?Send)]
    impl Delay for RecordingDelay {
        async fn wait(&self, duration: Duration) {
            self.waits.borrow_mut().push(duration);
        }
    }

    #[tokio::test]
    async fn test_accepts_demo_identity() {
        let auth = DemoAuthenticator::new(Rc::new(NoDelay), Duration::ZERO);

        let token = auth
            .authenticate(&Credentials::new(DEMO_EMAIL, DEMO_PASSWORD))
            .await
            .unwrap();

        let millis = token.strip_prefix("demo_token_").unwrap();
        assert!(millis.parse::<i64>().unwrap() > 0);
    }

    #[tokio::test]
    async fn test_rejects_other_credentials() {
        let auth = DemoAuthenticator::new(Rc::new(NoDelay), Duration::ZERO);

        for (email, password) in [
            (DEMO_EMAIL, "wrong"),
            ("someone@reqres.in", DEMO_PASSWORD),
            ("EVE.HOLT@reqres.in", DEMO_PASSWORD),
            ("", ""),
        ] {
            let err = auth
                .authenticate(&Credentials::new(email, password))
                .await
                .unwrap_err();
            assert_eq!(err.to_string(), "Invalid demo credentials");
        }
    }

    #[tokio::test]
    async fn test_waits_before_checking() {
        let delay = Rc::new(RecordingDelay::default());
        let auth = DemoAuthenticator::new(delay.clone(), Duration::from_millis(500));

        let _ = auth.authenticate(&Credentials::new("x@y.z", "nope")).await;

        assert_eq!(*delay.waits.borrow(), vec![Duration::from_millis(500)]);
    }
}
