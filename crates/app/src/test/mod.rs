//! Shared test infrastructure for container-backed tests.


pub(crate) use context::TestContext;
pub(crate) use db::TestDb;
