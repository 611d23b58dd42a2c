// tests/support/mod.rs
// The helpers, mocks and builders modules are test-only support code used by
// several integration test binaries. Some symbols are unused in individual
// test crates, so dead_code / unused_imports are allowed at module level.
#[allow(dead_code, unused_imports)]
pub mod mocks;

#[allow(dead_code, unused_imports)]
pub mod helpers;

#[allow(dead_code, unused_imports)]
pub mod builders;

#[allow(unused_imports)]
pub use builders::*;
#[allow(unused_imports)]
pub use helpers::*;
#[allow(unused_imports)]
pub use mocks::*;
