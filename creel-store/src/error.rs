use creel_api::{Error as ApiError, ThreadId, Uuid};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),

    #[error(transparent)]
    Api(#[from] ApiError),
}

impl Error {
    pub fn permission_denied() -> Error {
        Error::Api(ApiError::PermissionDenied)
    }

    pub fn thread_not_found(id: ThreadId) -> Error {
        Error::Api(ApiError::ThreadNotFound(id))
    }

    pub fn profile_not_found(username: &str) -> Error {
        Error::Api(ApiError::ProfileNotFound(String::from(username)))
    }

    pub fn uuid_already_used(uuid: Uuid) -> Error {
        Error::Api(ApiError::UuidAlreadyUsed(uuid))
    }

    pub fn name_already_used(name: String) -> Error {
        Error::Api(ApiError::NameAlreadyUsed(name))
    }

    pub fn email_already_used(email: String) -> Error {
        Error::Api(ApiError::EmailAlreadyUsed(email))
    }

    /// Collapses store-internal failures the way the request layer would:
    /// the anyhow chain goes to the logs, the client sees an opaque error
    pub fn into_api(self) -> ApiError {
        match self {
            Error::Anyhow(err) => {
                tracing::error!(?err, "internal store error");
                ApiError::Unknown(String::from("Internal server error, see logs for details"))
            }
            Error::Api(err) => err,
        }
    }
}
