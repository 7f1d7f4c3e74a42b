//! Diesel schema for personal-task persistence.

diesel::table! {
    /// Personal to-do items, one owner per row.
    personal_tasks (id) {
        /// Task identifier.
        id -> Uuid,
        /// Owning profile identifier.
        owner -> Uuid,
        /// Task title.
        #[max_length = 255]
        title -> Varchar,
        /// Task description.
        description -> Text,
        /// Priority level.
        #[max_length = 20]
        priority -> Varchar,
        /// Board status.
        #[max_length = 20]
        status -> Varchar,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last mutation timestamp.
        updated_at -> Timestamptz,
    }
}
