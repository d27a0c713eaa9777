//! Diesel schema for task persistence.

diesel::table! {
    /// One row per task.
    tasks (id) {
        /// Task identifier.
        id -> Uuid,
        /// Task title.
        title -> Text,
        /// Task description.
        description -> Text,
        /// Task priority.
        #[max_length = 16]
        priority -> Varchar,
        /// Task status.
        #[max_length = 16]
        status -> Varchar,
    }
}
