#![deny(clippy::pedantic, warnings, missing_docs, unsafe_code)]
// Most of the 'allow' category...
#![deny(absolute_paths_not_starting_with_crate, dead_code)]
#![deny(elided_lifetimes_in_paths, explicit_outlives_requirements, keyword_idents)]
#![deny(let_underscore_drop, macro_use_extern_crate, meta_variable_misuse, missing_abi)]
#![deny(non_ascii_idents, rust_2021_incompatible_closure_captures)]
#![deny(rust_2021_incompatible_or_patterns, rust_2021_prefixes_incompatible_syntax)]
#![deny(rust_2021_prelude_collisions, single_use_lifetimes, trivial_casts)]
#![deny(trivial_numeric_casts, unreachable_pub, unsafe_op_in_unsafe_fn, unstable_features)]
#![deny(unused_extern_crates, unused_import_braces, unused_lifetimes, unused_macro_rules)]
#![deny(unused_qualifications, variant_size_differences)]
//
#![doc = include_str!("../README.md")]

// Learning-With-Errors symbol-wise public-key encryption core for avionics messaging.
//
// Operation map
//
// generate_keypair: draw (s, e), expand A from a fresh seed, b = A*s + e mod q  --> core_ops.rs
// encrypt: per symbol, draw sparse r, U = A^T*r mod q, V = <r,b> + encode(m)    --> core_ops.rs
// decrypt: per symbol, decode(V - <U,s> mod q)                                 --> core_ops.rs
// scaled symbol encode/decode                                                  --> encode.rs
// error sampling, sparse randomness sampling                                   --> sampling.rs
// modular ring arithmetic (reduce, mat*vec, dot products)                      --> ring.rs
// deterministic public-matrix expansion from a seed via Shake256               --> xof.rs
// key types (PublicMatrix, PublicKey, SecretKey) and their wire layout         --> keys.rs
// ciphertext types and their wire layout                                      --> cipher.rs
// parameter set construction and validation                                   --> params.rs
// error taxonomy                                                              --> error.rs
// byte-string convenience layer over the symbol-sequence API                  --> bytes.rs

/// The `rand_core` types are re-exported so that users of arlc do not have to worry about
/// using the exact correct version of `rand_core`.
pub use rand_core::{CryptoRng, Error as RngError, RngCore};

mod cipher;
mod core_ops;
mod encode;
mod error;
mod keys;
mod params;
mod ring;
mod sampling;
mod xof;

/// Byte-string convenience layer over the symbol-sequence API.
pub mod bytes;
/// All functionality is covered by traits, such that consumers can utilize trait objects if desired.
pub mod traits;

pub use bytes::{decrypt_bytes, encrypt_bytes};
pub use cipher::{CipherText, SymbolCipherText};
pub use core_ops::{decrypt, encrypt, generate_keypair};
pub use error::ArlcError;
pub use keys::{PublicKey, PublicMatrix, SecretKey};
pub use params::Params;
pub use xof::{MatrixSeed, SEED_LEN};
