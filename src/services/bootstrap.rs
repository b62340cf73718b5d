use crate::api::client::BackendClient;
use crate::core::error::BackendError;
use crate::stores::session::SessionContext;
use tracing::info;

/// How the demo identity was resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Existing,
    Created,
}

/// Resolve the demo identity: look it up by handle, create it on a miss.
///
/// On error the session is left unresolved and nothing is retried.
pub async fn bootstrap(
    session: &SessionContext,
    backend: &BackendClient,
) -> Result<Resolution, BackendError> {
    let handle = session.handle();

    if let Some(user) = backend.find_user(handle).await? {
        info!(handle = %handle, user_id = %user.id, "Adopted existing demo user");
        session.adopt(user);
        return Ok(Resolution::Existing);
    }

    let user = backend.create_user(&session.signup_request()).await?;
    info!(handle = %handle, user_id = %user.id, "Created demo user");
    session.adopt(user);

    Ok(Resolution::Created)
}
