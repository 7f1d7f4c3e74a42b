//! Diesel schema for work-order persistence.

diesel::table! {
    /// Work-order records across the full request lifecycle.
    work_orders (id) {
        /// Internal work-order identifier.
        id -> Uuid,
        /// Public sequential code in `WO-<n>` form.
        #[max_length = 20]
        code -> Varchar,
        /// Requestor contact block.
        requestor -> Jsonb,
        /// Request title.
        #[max_length = 255]
        title -> Varchar,
        /// Request description.
        description -> Text,
        /// Request category.
        #[max_length = 100]
        category -> Varchar,
        /// Request location.
        #[max_length = 255]
        location -> Varchar,
        /// Priority level.
        #[max_length = 20]
        priority -> Varchar,
        /// Lifecycle status.
        #[max_length = 20]
        status -> Varchar,
        /// Currently requested date.
        requested_date -> Date,
        /// Post-approval schedule change record.
        schedule_change -> Nullable<Jsonb>,
        /// Approval metadata including the captured checklist.
        approval -> Nullable<Jsonb>,
        /// Rejection metadata.
        rejection -> Nullable<Jsonb>,
        /// Execution start timestamp.
        started_at -> Nullable<Timestamptz>,
        /// Most recent pause timestamp.
        paused_at -> Nullable<Timestamptz>,
        /// Most recent resume timestamp.
        resumed_at -> Nullable<Timestamptz>,
        /// Completion metadata.
        completion -> Nullable<Jsonb>,
        /// Accumulated execution timer in seconds.
        timer_elapsed_seconds -> Int8,
        /// Whether the execution timer is running.
        timer_active -> Bool,
        /// Submission timestamp.
        created_at -> Timestamptz,
        /// Last mutation timestamp.
        updated_at -> Timestamptz,
    }
}
