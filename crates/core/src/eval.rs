// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Evaluation of filter expressions against members.
//!
//! Clauses are lowered to their compiled predicates first, so a member
//! matches an expression exactly when it matches the compiled query.

use crate::clause::Expression;
use crate::compile::lower;
use crate::member::Member;
use crate::settings::FilterContext;

/// Whether a member satisfies every constraining clause.
pub fn matches(member: &Member, expression: &Expression, ctx: &FilterContext) -> bool {
    expression
        .clauses()
        .iter()
        .filter_map(|clause| lower(clause, ctx))
        .all(|predicate| predicate.matches(member))
}

/// Members satisfying an expression, in input order.
pub fn filter<'a>(
    members: &'a [Member],
    expression: &Expression,
    ctx: &FilterContext,
) -> Vec<&'a Member> {
    let predicates: Vec<_> = expression
        .clauses()
        .iter()
        .filter_map(|clause| lower(clause, ctx))
        .collect();
    members
        .iter()
        .filter(|member| predicates.iter().all(|p| p.matches(member)))
        .collect()
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod tests;
