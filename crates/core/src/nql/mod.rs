// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Compiled filter queries.
//!
//! A compiled query is the textual form of a filter carried in the `filter`
//! URL parameter and understood by the member list backend. It is a
//! `+`-separated conjunction of predicates:
//!
//! ```text
//! field:op operand
//! ```
//!
//! # Operators
//!
//! | operator        | symbol |
//! |-----------------|--------|
//! | `is`            | (none) |
//! | `is-not`        | `-`    |
//! | `is-greater`    | `>`    |
//! | `is-less`       | `<`    |
//! | `is-or-greater` | `>=`   |
//! | `is-or-less`    | `<=`   |
//!
//! # Operands
//!
//! - Bare atom: `paid`, `50`, `true`
//! - Quoted atom: `'2022-02-22 05:00:00'` (`\'` escapes a quote)
//! - List: `[vip,beta]`
//!
//! # Examples
//!
//! ```text
//! label:[vip,beta]                       # labelled vip or beta
//! status:-free                           # not a free member
//! email_open_rate:>50                    # opens more than half of emails
//! created_at:>='2022-02-22 05:00:00'     # created at or after this instant (UTC)
//! email_count:5+subscriptions.status:trialing
//! ```
//!
//! Timestamps are always UTC; site-local dates are resolved before a query
//! is compiled (see [`crate::compile`]).

mod eval;
mod expr;
mod parser;

pub use expr::{render, Comparator, Operand, Predicate};
pub use parser::{parse_predicate, parse_predicates, split_predicates};
