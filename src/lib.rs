//! Exploration of semi-Thue string rewriting systems.
//!
//! Given a set of `find->replace` rules and a root string,
//! [`rewriting::explorer::explore`] discovers every distinct string reachable
//! by rewriting at every position, and
//! [`rewriting::normal_form::collect_normal_forms`] reports the strings no
//! rule applies to anymore.

pub mod benchmark;
pub mod rewriting;

mod macros;
