// src/application/ports/time.rs
use chrono::{DateTime, Datelike, Utc};

/// Source of `created_at` / `updated_at` stamps and of the year prices are computed for.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    fn current_year(&self) -> i32 {
        self.now().year()
    }
}
