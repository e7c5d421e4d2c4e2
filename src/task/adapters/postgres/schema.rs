//! Diesel schema for task persistence.

diesel::table! {
    /// Task records, one row per task.
    tasks (id) {
        /// Task identifier.
        id -> Uuid,
        /// Task title.
        #[max_length = 50]
        title -> Varchar,
        /// Task description.
        #[max_length = 140]
        description -> Varchar,
        /// Task status, `TODO` or `DONE`.
        #[max_length = 4]
        status -> Varchar,
        /// Monotonic insertion position giving storage order.
        position -> Int8,
    }
}
