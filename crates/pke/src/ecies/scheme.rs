//! ECIES encryption and decryption

use log::debug;
use monecc_algorithms::ec::{Curve, Point};
use monecc_api::{HashFunction, PaddedBlockCipher, Pke, Result as ApiResult};
use monecc_params::traditional::ecies::DEFAULT_SCALAR_RANGE;
use num_bigint::BigInt;
use rand::{CryptoRng, RngCore};

use super::{
    derive_key_iv, generate_keypair, sample_ephemeral, Cipher, Domain, EciesPublicKey,
    EciesSecretKey, Envelope, Kdf,
};
use crate::error::{Error as PkeError, Result as PkeResult};

/// Reject points that are off `curve` or the identity
fn check_affine(curve: &Curve, point: &Point, context: &'static str) -> PkeResult<()> {
    curve.check_point(point, context)?;
    if point.is_identity() {
        return Err(PkeError::InvalidPoint(context));
    }
    Ok(())
}

/// Encrypt `plaintext` for the holder of the secret behind `recipient`.
///
/// The ephemeral scalar is drawn from `[1, max_scalar]`. Returns the
/// cryptogram text `base64("Rx;Ry") ":" base64(ciphertext)`.
pub fn encrypt_message<R: CryptoRng + RngCore>(
    curve: &Curve,
    generator: &Point,
    recipient: &Point,
    plaintext: &str,
    max_scalar: &BigInt,
    rng: &mut R,
) -> ApiResult<String> {
    Ok(encrypt_envelope(curve, generator, recipient, plaintext, max_scalar, rng)?.serialize()?)
}

fn encrypt_envelope<R: CryptoRng + RngCore>(
    curve: &Curve,
    generator: &Point,
    recipient: &Point,
    plaintext: &str,
    max_scalar: &BigInt,
    rng: &mut R,
) -> PkeResult<Envelope> {
    check_affine(curve, generator, "ECIES generator")?;
    check_affine(curve, recipient, "ECIES recipient key")?;

    let (ephemeral, shared) = sample_ephemeral(curve, generator, recipient, max_scalar, rng)?;
    let (key, iv) = derive_key_iv(&shared)?;
    let ciphertext = Cipher::encrypt_padded(key.as_ref(), iv.as_ref(), plaintext.as_bytes())?;
    debug!(
        "encrypted {} plaintext bytes into {} ciphertext bytes with {} keyed by {}",
        plaintext.len(),
        ciphertext.len(),
        Cipher::name(),
        Kdf::name()
    );

    Ok(Envelope::new(ephemeral, ciphertext))
}

/// Decrypt a cryptogram with the secret scalar `k`.
///
/// Tampering is detected only when it breaks the padding or UTF-8 decoding;
/// the envelope carries no authentication tag.
pub fn decrypt_message(
    curve: &Curve,
    generator: &Point,
    k: &BigInt,
    cryptogram: &str,
) -> ApiResult<String> {
    Ok(decrypt_envelope(curve, generator, k, cryptogram)?)
}

fn decrypt_envelope(
    curve: &Curve,
    generator: &Point,
    k: &BigInt,
    cryptogram: &str,
) -> PkeResult<String> {
    check_affine(curve, generator, "ECIES generator")?;

    let envelope = Envelope::deserialize(cryptogram)?;
    check_affine(curve, &envelope.ephemeral_public_key, "ECIES ephemeral key")?;

    let shared = curve.scalar_mul(k, &envelope.ephemeral_public_key)?;
    let (key, iv) = derive_key_iv(&shared)?;
    let plaintext = Cipher::decrypt_padded(key.as_ref(), iv.as_ref(), &envelope.ciphertext)?;

    String::from_utf8(plaintext).map_err(|e| PkeError::Encoding(e.utf8_error().to_string()))
}

/// ECIES over a fixed [`Domain`] with a bounded ephemeral scalar range
#[derive(Debug, Clone)]
pub struct Ecies {
    domain: Domain,
    max_scalar: BigInt,
}

impl Ecies {
    /// Use the default scalar range, clamped to the generator order
    pub fn new(domain: Domain) -> PkeResult<Self> {
        Self::with_scalar_range(domain, DEFAULT_SCALAR_RANGE)
    }

    /// Use ephemeral scalars from `[1, min(size, n − 1)]`
    pub fn with_scalar_range(domain: Domain, size: u64) -> PkeResult<Self> {
        let max_scalar = domain.scalar_range(size)?;
        Ok(Ecies { domain, max_scalar })
    }

    /// Domain parameters
    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    /// Largest ephemeral scalar
    pub fn max_scalar(&self) -> &BigInt {
        &self.max_scalar
    }
}

impl Pke for Ecies {
    type PublicKey = EciesPublicKey;
    type SecretKey = EciesSecretKey;
    type Ciphertext = String;

    fn name(&self) -> &'static str {
        "ECIES-monECC-SHA256-AES128CBC"
    }

    fn keypair<R: CryptoRng + RngCore>(
        &self,
        rng: &mut R,
    ) -> ApiResult<(Self::PublicKey, Self::SecretKey)> {
        Ok(generate_keypair(&self.domain, rng)?)
    }

    fn encrypt<R: CryptoRng + RngCore>(
        &self,
        pk_recipient: &Self::PublicKey,
        plaintext: &str,
        rng: &mut R,
    ) -> ApiResult<Self::Ciphertext> {
        encrypt_message(
            self.domain.curve(),
            self.domain.generator(),
            pk_recipient.point(),
            plaintext,
            &self.max_scalar,
            rng,
        )
    }

    fn decrypt(&self, sk_recipient: &Self::SecretKey, ciphertext: &str) -> ApiResult<String> {
        decrypt_message(
            self.domain.curve(),
            self.domain.generator(),
            sk_recipient.scalar(),
            ciphertext,
        )
    }
}
