//! Diesel schema for profile persistence.

diesel::table! {
    /// Staff profiles mirrored from the hosted backend's account store.
    profiles (id) {
        /// Profile identifier, equal to the backend account identifier.
        id -> Uuid,
        /// Display name shown in admin views.
        #[max_length = 255]
        display_name -> Varchar,
        /// Normalized email address.
        #[max_length = 255]
        email -> Varchar,
        /// Coarse role.
        #[max_length = 50]
        role -> Varchar,
        /// Creation timestamp.
        created_at -> Timestamptz,
    }
}
