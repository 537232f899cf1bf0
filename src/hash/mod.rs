//! String hashing for seed derivation
//!
//! Colors and sequences are keyed by arbitrary strings (interface names,
//! MAC addresses, plugin identifiers). This module turns such a key into
//! the 32-bit value the generator is seeded with.
//!
//! The hash is a collaborator, not part of the generator: anything that is
//! deterministic and spreads keys reasonably can be plugged in through
//! [`StringHash`]. The default is SuperFastHash with tail bytes treated as
//! unsigned. Variants that sign-extend the tail bytes agree on ASCII keys
//! but diverge when a key ends in non-ASCII bytes.
//!
//! None of these hashes are cryptographic.

mod sfh;

pub use sfh::{DigestError, StringHash, SuperFastHash, parse_digest};
