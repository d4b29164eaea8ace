//! Probabilistic ordered map built on a skip list.
//!
//! A skip list keeps keys sorted the way a balanced tree does, but replaces
//! rebalancing with randomized index levels: every entry sits in a sorted
//! backbone list, and a coin-flip policy promotes some entries into sparser
//! express lanes above it. Search, insert, and removal all run in expected
//! O(log n) with no rotation logic anywhere.
//!
//! # Design
//!
//! - **Arena-backed nodes.** Nodes live in a [`slab::Slab`] and reference
//!   each other by slot index, not by pointer. Multi-level links in an
//!   ownership-checked language are much simpler this way: no aliasing
//!   gymnastics, no back-references to repair on removal, and freed slots
//!   are reused by later inserts.
//! - **Exact-height nodes.** Each node's forward vector is sized to the
//!   height it won at insertion, so level membership is structural.
//! - **Size-coupled promotion.** An insertion may promote its node one fair
//!   coin flip at a time, stopping at the first tails, and never past
//!   `floor(log2(len))` levels. Height growth therefore tracks the
//!   logarithm of the list's current size instead of racing ahead of it.
//! - **Injected randomness.** The coin-flip bit source is any
//!   [`rand_core::RngCore`], passed in at construction. Tests drive the
//!   promotion policy with scripted bits; production code hands in a seeded
//!   [`SmallRng`](https://docs.rs/rand/latest/rand/rngs/struct.SmallRng.html)
//!   or whatever else is at hand.
//!
//! Single-threaded by design: mutations are multi-step splice sequences, so
//! concurrent access needs external synchronization around the whole map.
//!
//! # Quick Start
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::SmallRng;
//! use skipmap::SkipList;
//!
//! let rng = SmallRng::seed_from_u64(12345);
//! let mut map: SkipList<u64, String, _> = SkipList::new(rng);
//!
//! map.insert(30, "thirty".into());
//! map.insert(10, "ten".into());
//! map.insert(20, "twenty".into());
//!
//! assert_eq!(map.len(), 3);
//! assert_eq!(map.get(&20), Some(&"twenty".into()));
//!
//! // Enumeration follows key order, not insertion order.
//! let keys: Vec<_> = map.keys().copied().collect();
//! assert_eq!(keys, vec![10, 20, 30]);
//!
//! assert_eq!(map.remove(&20), Some("twenty".into()));
//! assert_eq!(map.get(&20), None);
//! ```

#![warn(missing_docs)]

mod index;
pub mod skiplist;

pub use skiplist::{Iter, Keys, LevelIter, MAX_LEVEL, SkipList, Values};
