mod noop_backend;

pub use noop_backend::NoopBackend;

use gitview_core::services::GitBackend;
use std::sync::Arc;

pub fn default_backend() -> Arc<dyn GitBackend> {
    Arc::new(NoopBackend)
}
