//! Hash algorithm registry.
//!
//! Maps each [`AlgorithmId`] to a factory that builds a fresh hasher. Digest
//! functions handed out by [`HashProvider`] acquire a new hasher on every call
//! and drop it before returning, so no hasher state outlives one computation.

use anyhow::{anyhow, Result};
use clap::ValueEnum;
use hmac::{Hmac, Mac};
use md5::{Digest, Md5};
use ripemd::Ripemd160;
use sha1::Sha1;
use std::collections::HashMap;
use std::fmt;
use xxhash_rust::xxh32::Xxh32;

/// Key used by [`AlgorithmId::KeyedHash`].
pub const KEYED_HASH_KEY: &[u8] = b"hashbench-keyed-hash";

/// Seed for the xxHash32 pass.
pub const XXHASH_SEED: u32 = 0;

/// Display name of the xxHash32 pass, which sits outside [`AlgorithmId`].
pub const XXHASH_NAME: &str = "xxHash";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum AlgorithmId {
    Md5,
    Crc32,
    Elf32,
    Hmac,
    Sha1,
    KeyedHash,
    Ripemd160,
}

impl AlgorithmId {
    /// Every algorithm in declaration order.
    pub const ALL: [AlgorithmId; 7] = [
        AlgorithmId::Md5,
        AlgorithmId::Crc32,
        AlgorithmId::Elf32,
        AlgorithmId::Hmac,
        AlgorithmId::Sha1,
        AlgorithmId::KeyedHash,
        AlgorithmId::Ripemd160,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            AlgorithmId::Md5 => "MD5",
            AlgorithmId::Crc32 => "CRC32",
            AlgorithmId::Elf32 => "ELF32",
            AlgorithmId::Hmac => "HMAC",
            AlgorithmId::Sha1 => "SHA1",
            AlgorithmId::KeyedHash => "KeyedHashAlgorithm",
            AlgorithmId::Ripemd160 => "RIPEMD160",
        }
    }

    /// Digest size in bytes.
    pub fn digest_len(&self) -> usize {
        match self {
            AlgorithmId::Md5 => 16,
            AlgorithmId::Crc32 | AlgorithmId::Elf32 => 4,
            AlgorithmId::Hmac
            | AlgorithmId::Sha1
            | AlgorithmId::KeyedHash
            | AlgorithmId::Ripemd160 => 20,
        }
    }
}

impl fmt::Display for AlgorithmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Object-safe hasher: fed once, consumed by `finalize`.
pub trait DynDigest {
    fn update(&mut self, data: &[u8]);
    fn finalize(self: Box<Self>) -> Vec<u8>;
}

struct Md5Wrapper(Md5);
impl DynDigest for Md5Wrapper {
    fn update(&mut self, data: &[u8]) {
        Digest::update(&mut self.0, data);
    }
    fn finalize(self: Box<Self>) -> Vec<u8> {
        Digest::finalize(self.0).to_vec()
    }
}

struct Sha1Wrapper(Sha1);
impl DynDigest for Sha1Wrapper {
    fn update(&mut self, data: &[u8]) {
        Digest::update(&mut self.0, data);
    }
    fn finalize(self: Box<Self>) -> Vec<u8> {
        Digest::finalize(self.0).to_vec()
    }
}

struct Ripemd160Wrapper(Ripemd160);
impl DynDigest for Ripemd160Wrapper {
    fn update(&mut self, data: &[u8]) {
        Digest::update(&mut self.0, data);
    }
    fn finalize(self: Box<Self>) -> Vec<u8> {
        Digest::finalize(self.0).to_vec()
    }
}

struct HmacSha1Wrapper(Hmac<Sha1>);
impl DynDigest for HmacSha1Wrapper {
    fn update(&mut self, data: &[u8]) {
        Mac::update(&mut self.0, data);
    }
    fn finalize(self: Box<Self>) -> Vec<u8> {
        Mac::finalize(self.0).into_bytes().to_vec()
    }
}

struct Crc32Wrapper(crc32fast::Hasher);
impl DynDigest for Crc32Wrapper {
    fn update(&mut self, data: &[u8]) {
        self.0.update(data);
    }
    fn finalize(self: Box<Self>) -> Vec<u8> {
        self.0.finalize().to_be_bytes().to_vec()
    }
}

struct Xxh32Wrapper(Xxh32);
impl DynDigest for Xxh32Wrapper {
    fn update(&mut self, data: &[u8]) {
        self.0.update(data);
    }
    fn finalize(self: Box<Self>) -> Vec<u8> {
        self.0.digest().to_le_bytes().to_vec()
    }
}

/// ELF object file symbol hash (PJW variant with 28-bit folding).
#[derive(Default)]
struct Elf32 {
    state: u32,
}

impl DynDigest for Elf32 {
    fn update(&mut self, data: &[u8]) {
        for &byte in data {
            self.state = (self.state << 4).wrapping_add(byte as u32);
            let high = self.state & 0xF000_0000;
            if high != 0 {
                self.state ^= high >> 24;
            }
            self.state &= !high;
        }
    }
    fn finalize(self: Box<Self>) -> Vec<u8> {
        self.state.to_be_bytes().to_vec()
    }
}

type HasherFactory = fn() -> Result<Box<dyn DynDigest>>;

fn create_hasher(algo: AlgorithmId) -> Result<Box<dyn DynDigest>> {
    let hasher: Box<dyn DynDigest> = match algo {
        AlgorithmId::Md5 => Box::new(Md5Wrapper(Md5::new())),
        AlgorithmId::Crc32 => Box::new(Crc32Wrapper(crc32fast::Hasher::new())),
        AlgorithmId::Elf32 => Box::new(Elf32::default()),
        AlgorithmId::Hmac => Box::new(HmacSha1Wrapper(
            Hmac::<Sha1>::new_from_slice(&[])
                .map_err(|e| anyhow!("Failed to key HMAC-SHA1: {}", e))?,
        )),
        AlgorithmId::Sha1 => Box::new(Sha1Wrapper(Sha1::new())),
        AlgorithmId::KeyedHash => Box::new(HmacSha1Wrapper(
            Hmac::<Sha1>::new_from_slice(KEYED_HASH_KEY)
                .map_err(|e| anyhow!("Failed to key keyed HMAC-SHA1: {}", e))?,
        )),
        AlgorithmId::Ripemd160 => Box::new(Ripemd160Wrapper(Ripemd160::new())),
    };
    Ok(hasher)
}

fn factory_for(algo: AlgorithmId) -> HasherFactory {
    match algo {
        AlgorithmId::Md5 => || create_hasher(AlgorithmId::Md5),
        AlgorithmId::Crc32 => || create_hasher(AlgorithmId::Crc32),
        AlgorithmId::Elf32 => || create_hasher(AlgorithmId::Elf32),
        AlgorithmId::Hmac => || create_hasher(AlgorithmId::Hmac),
        AlgorithmId::Sha1 => || create_hasher(AlgorithmId::Sha1),
        AlgorithmId::KeyedHash => || create_hasher(AlgorithmId::KeyedHash),
        AlgorithmId::Ripemd160 => || create_hasher(AlgorithmId::Ripemd160),
    }
}

/// A digest computation over a byte slice. Each call owns its hasher.
pub type DigestFn<'a> = Box<dyn Fn(&[u8]) -> Result<Vec<u8>> + 'a>;

fn compute(factory: HasherFactory, data: &[u8]) -> Result<Vec<u8>> {
    let mut hasher = factory()?;
    hasher.update(data);
    Ok(hasher.finalize())
}

/// Registry from [`AlgorithmId`] to hasher factories.
///
/// Lookups for an id that was not registered fall back to MD5.
pub struct HashProvider {
    factories: HashMap<AlgorithmId, HasherFactory>,
}

impl HashProvider {
    pub fn new() -> Self {
        Self::with_algorithms(&AlgorithmId::ALL)
    }

    pub fn with_algorithms(algorithms: &[AlgorithmId]) -> Self {
        let factories = algorithms
            .iter()
            .map(|&algo| (algo, factory_for(algo)))
            .collect();
        Self { factories }
    }

    pub fn is_registered(&self, algo: AlgorithmId) -> bool {
        self.factories.contains_key(&algo)
    }

    fn factory(&self, algo: AlgorithmId) -> HasherFactory {
        self.factories
            .get(&algo)
            .copied()
            .unwrap_or(factory_for(AlgorithmId::Md5))
    }

    pub fn digest_function(&self, algo: AlgorithmId) -> DigestFn<'_> {
        let factory = self.factory(algo);
        Box::new(move |data: &[u8]| compute(factory, data))
    }

    pub fn xxhash32_function(&self, seed: u32) -> DigestFn<'_> {
        Box::new(move |data: &[u8]| {
            let mut hasher: Box<dyn DynDigest> = Box::new(Xxh32Wrapper(Xxh32::new(seed)));
            hasher.update(data);
            Ok(hasher.finalize())
        })
    }
}

impl Default for HashProvider {
    fn default() -> Self {
        Self::new()
    }
}
