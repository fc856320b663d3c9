// Common test utilities and fixtures

pub mod fixtures;

// Re-export commonly used items
// Note: These may appear unused in some test binaries but are used in others
#[allow(unused_imports)]
pub use fixtures::{MemorySource, SAMPLE_INDEX};
#[allow(unused_imports)]
pub use helpers::{create_test_services, services_in, stale_record, test_config};
