use tracing::{info, warn};

use crate::core::state::AppState;
use crate::services::bootstrap::bootstrap;
use crate::services::community::refresh;

/// Resolve the demo identity and load the feed before serving.
///
/// Both run concurrently and independently. Failures are logged and leave
/// the corresponding state empty; the site still comes up.
pub async fn prepare(state: &AppState) {
    let (session, feed) = tokio::join!(
        bootstrap(&state.session, &state.backend),
        refresh(&state.feed, &state.backend),
    );

    match session {
        Ok(resolution) => {
            info!(
                handle = %state.session.handle(),
                resolution = ?resolution,
                "Demo user resolved"
            );
        }
        Err(e) => {
            warn!(
                handle = %state.session.handle(),
                error = %e,
                "Failed to resolve demo user, posting and ordering disabled"
            );
        }
    }

    match feed {
        Ok(posts) => info!(posts = posts, "Initial feed loaded"),
        Err(e) => warn!(error = %e, "Failed to load initial feed"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Config;
    use crate::testing::fake_backend::FakeBackend;

    fn test_config() -> Config {
        Config::from_toml("[server]\nport = 3000\n", None).unwrap()
    }

    #[tokio::test]
    async fn test_prepare_resolves_user_and_loads_feed() {
        let (client, backend) = FakeBackend::start().await;
        let state = AppState::new(test_config(), client);

        prepare(&state).await;

        assert!(state.session.is_resolved());
        assert!(state.feed.is_empty());
        assert_eq!(backend.calls("GET /api/posts"), 1);
        assert_eq!(backend.users().len(), 1);
    }

    #[tokio::test]
    async fn test_prepare_survives_failed_bootstrap() {
        let (client, backend) = FakeBackend::start().await;
        backend.reject_user_create(true);
        let state = AppState::new(test_config(), client);

        prepare(&state).await;

        assert!(!state.session.is_resolved());
        assert_eq!(backend.calls("GET /api/posts"), 1);
    }
}
