//! Integration tests for end-to-end usage of Result
//!
//! Tests recursive fallible computations, combinator chains, early return,
//! and moving results across threads.

mod propagation;
