//! Behavioural test harness for `koin-codegen` using `rstest-bdd`.
//!
//! Fixtures and step implementations live under [`behaviour`]; the
//! `.feature` files under `tests/features` are bound there as well.

mod behaviour;
