/// Capabilities in the RoomVerse platform
///
/// This is a simplified model focused on identity administration since the
/// catalog and assistant surfaces are public and read-mostly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminCapability {
    /// Create users on the hosted auth provider
    ManageUsers,

    /// Mark provider accounts as email-confirmed
    ConfirmUsers,

    /// Look up provider accounts for support and debugging
    InspectUsers,
}

impl AdminCapability {
    /// Check if this capability is guarded by the admin key
    pub fn requires_admin_key(&self) -> bool {
        // All capabilities in this system touch the auth provider
        true
    }
}
