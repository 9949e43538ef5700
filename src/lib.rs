#![warn(missing_docs)]
#![no_std]

//! ## Dependency-free JSON Core
//! A parser, generator and in-memory value-tree manipulation API for RFC 8259 JSON.
//!
//! ### Features
//! - Zero dependencies
//! - `no_std` support (with `alloc`)
//! - Recursive-descent parser with a closed, typed error taxonomy
//! - Order-insensitive object equality, order-sensitive array equality
//! - Full manipulation API: push/pop/insert/erase on arrays, set/find/remove on objects
//!
//! # Quick Example
//! ```rust
//! use json_core::{parse, stringify, Value};
//!
//! let mut v = parse(r#"{"name": "Billy Joel", "age": 70, "tags": ["singer"]}"#)?;
//! assert_eq!(v.find_value("name").and_then(Value::as_str), Some("Billy Joel"));
//!
//! // set_object_value always appends; upsert means find-then-remove first.
//! let i = v.find("age").unwrap();
//! v.remove(i);
//! v.set_object_value("age", Value::Number(71.0));
//! assert_eq!(stringify(&v).contains("71"), true);
//! # Ok::<(), json_core::ParseError>(())
//! ```
//!
//! #### Non-goals
//! This crate does not perform I/O, does not support streaming/incremental
//! parsing, and does not implement a schema or validation layer beyond
//! what RFC 8259 itself requires. It is a value-tree core, not a serde
//! backend: there is no derive support for mapping JSON onto arbitrary
//! Rust structs.
//!
//! ----------------------
//!
//! MIT License
//!
//! Copyright (c) 2020 Scott Lott
//!
//! Permission is hereby granted, free of charge, to any person obtaining a copy
//! of this software and associated documentation files (the "Software"), to deal
//! in the Software without restriction, including without limitation the rights
//! to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
//! copies of the Software, and to permit persons to whom the Software is
//! furnished to do so, subject to the following conditions:
//!
//! The above copyright notice and this permission notice shall be included in all
//! copies or substantial portions of the Software.
//!
//! THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
//! IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
//! FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
//! AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
//! LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
//! OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
//! SOFTWARE.

extern crate alloc;

#[cfg(any(feature = "std", test))]
extern crate std;

pub mod error;
pub mod generator;
pub mod parser;
pub mod scratch;
pub mod value;

pub use error::ParseError;
pub use generator::stringify;
pub use parser::parse;
pub use value::{Member, Value};
