use thiserror::Error;

/// Authorization errors for the RoomVerse admin surface
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Unauthorized: ADMIN_API_KEY required")]
    AdminKeyRequired,

    #[error("Unauthorized: admin key required from non-localhost")]
    NonLocalKeyRequired,
}
