//! # Router Module
//!
//! The routing table and the two operations built on top of it: forward
//! matching (location → [`RouteContext`]) and reverse URL building
//! (name + params → URL string).
//!
//! ## Overview
//!
//! Routing works in two phases:
//!
//! 1. **Compilation**: at registration, each pattern (e.g. `/books/:id`)
//!    is compiled into an anchored regex with one capture group per
//!    placeholder (see [`crate::pattern`]).
//!
//! 2. **Matching**: for each location change, the table is scanned in
//!    registration order and the first matching entry produces a
//!    [`RouteContext`] with the captured arguments and the decoded
//!    query/hash mappings.
//!
//! Registration order is semantically significant: register more
//! specific patterns before more general ones.
//!
//! ## Example
//!
//! ```
//! use waypost::router::{BuildParams, RouteMatch, RouteTable};
//!
//! let mut table = RouteTable::new();
//! table.register("books", "/books/:id", None).unwrap();
//!
//! match table.match_location("/books/12", "show=author&show=isbn", "menu=1") {
//!     RouteMatch::Found(ctx) => {
//!         assert_eq!(ctx.name, "books");
//!         assert_eq!(ctx.arg("id"), Some("12"));
//!     }
//!     RouteMatch::NotFound => unreachable!(),
//! }
//!
//! let url = table
//!     .build_url("books", &BuildParams::new().arg("id", 12))
//!     .unwrap();
//! assert_eq!(url, "/books/12");
//! ```

mod builder;
mod core;
mod table;

pub use builder::BuildParams;
pub use core::{ArgVec, RouteContext, RouteMatch, MAX_INLINE_ARGS};
pub use table::{RouteDef, RouteEntry, RouteTable};
