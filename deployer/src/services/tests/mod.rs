//! Service tests for the deployer
//!
//! Covers the resolvers and both launchers.
