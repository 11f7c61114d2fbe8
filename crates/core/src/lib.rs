// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! roster-core: member filter expressions.
//!
//! This crate provides the field registry, editable filter clauses, the
//! compiled query language they translate to, and the evaluation of both
//! against members. It is shared by the roster CLI and its tests.

pub mod bar;
pub mod clause;
pub mod compile;
pub mod date;
pub mod error;
pub mod eval;
pub mod member;
pub mod nql;
pub mod registry;
pub mod settings;
pub mod store;
pub mod view;

pub use bar::{BarState, FilterBar};
pub use clause::{Clause, ClauseValue, Expression};
pub use compile::{canonicalize, compile, parse, parse_lenient, ParsedQuery, SkippedPredicate};
pub use error::{Error, Result};
pub use member::{
    Dataset, Member, MemberStatus, NamedEntity, PlanInterval, Subscription, SubscriptionStatus,
};
pub use registry::{FieldDescriptor, FieldGroup, Operator, ValueContext, ValueOption, ValueType};
pub use settings::{FilterContext, Labs, SiteSettings};
pub use store::{ListResponse, MemberStore};
pub use view::{BulkAction, ListRequest, MembersView, QueryParams, ViewState};
