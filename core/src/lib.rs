#![doc = include_str!("../README.md")]
#![deny(
    nonstandard_style,
    rust_2018_idioms,
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code
)]
#![forbid(non_ascii_idents)]
#![warn(
    deprecated_in_future,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    unused_import_braces,
    unused_labels,
    unused_qualifications,
    unused_results
)]

pub mod algebra;
pub mod error;
pub mod maybe;
pub mod render;
pub mod spell;

#[doc(inline)]
pub use self::{
    algebra::{match_just, match_or_else, unwrap_or},
    error::Absent,
    maybe::Maybe,
    render::{render_to, Rendered},
    spell::{Just, Nothing, Optional},
};
