// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Bag-of-words comparison of captured process output.
//!
//! Two texts are equivalent when they contain the same normalized words the
//! same number of times. Word order, adjacency and whitespace are ignored,
//! as are configurable noise fragments such as shell prompts.

mod comparator;
mod multiset;
mod normalize;

pub use comparator::{Comparison, MultisetComparator};
pub use multiset::WordMultiset;
pub use normalize::{Normalizer, DEFAULT_STOP_WORDS};
