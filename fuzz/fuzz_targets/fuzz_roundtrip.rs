#![no_main]

use arlc::traits::{Arlc, Decrypt, Encrypt, KeyGen, SerDes};
use arlc::{CipherText, Params, PublicKey};
use libfuzzer_sys::fuzz_target;
use rand_core::{CryptoRng, RngCore};

// A small parameter set keeps matrix expansion cheap enough for a fuzzer's iteration budget;
// the algorithm is otherwise identical to the default set.
fn fuzz_params() -> Params { Params::new(16, 32, 2048, 2, 16, 128, 4).unwrap() }

// A 'fake' random number generator that cycles through the fuzzer's input bytes.
struct TestRng<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> TestRng<'a> {
    fn new(data: &'a [u8]) -> Self {
        // Never empty: an all-zero byte keeps the cycling reader well-defined for empty input.
        Self { data: if data.is_empty() { &[0u8] } else { data }, pos: 0 }
    }
}

impl RngCore for TestRng<'_> {
    fn next_u32(&mut self) -> u32 { unimplemented!() }

    fn next_u64(&mut self) -> u64 { unimplemented!() }

    fn fill_bytes(&mut self, _out: &mut [u8]) { unimplemented!() }

    fn try_fill_bytes(&mut self, out: &mut [u8]) -> Result<(), rand_core::Error> {
        for byte in out {
            *byte = self.data[self.pos];
            self.pos = (self.pos + 1) % self.data.len();
        }
        Ok(())
    }
}

impl CryptoRng for TestRng<'_> {}

fuzz_target!(|data: &[u8]| {
    let params = fuzz_params();
    let mut rng = TestRng::new(data);

    let Ok((pk, sk)) = Arlc::try_keygen_with_rng(&params, &mut rng) else { return };

    // Malformed-deserialization surface: arbitrary bytes fed back as a public key or
    // ciphertext must never panic, only return an error or a well-formed value.
    let pk_bytes = pk.to_bytes(&params);
    let _ = PublicKey::try_from_bytes(&pk_bytes, &params);
    let _ = PublicKey::try_from_bytes(data, &params);

    let message: Vec<u32> = data.iter().map(|&b| u32::from(b) % params.p).collect();
    if let Ok(ciphertext) = pk.try_encrypt_with_rng(&params, &message, &mut rng) {
        let ct_bytes = ciphertext.to_bytes(&params);
        if let Ok(restored) = CipherText::try_from_bytes(&ct_bytes, &params) {
            assert_eq!(sk.decrypt(&params, &restored), message);
        }
    }
    let _ = CipherText::try_from_bytes(data, &params);
});
