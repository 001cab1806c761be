//! AES-128 in CBC mode with PKCS#7 padding

use aes::Aes128;
use cbc::cipher::block_padding::Pkcs7;
use cbc::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use monecc_api::{Error as CoreError, PaddedBlockCipher, Result as CoreResult};
use monecc_params::utils::symmetric::{AES128_KEY_SIZE, AES_BLOCK_SIZE};

use crate::error::{validate, Error};

type Encryptor = cbc::Encryptor<Aes128>;
type Decryptor = cbc::Decryptor<Aes128>;

const ALGORITHM: &str = "AES-128-CBC";

/// AES-128-CBC cipher service with PKCS#7 padding
#[derive(Debug, Clone, Copy, Default)]
pub struct Aes128Cbc;

impl Aes128Cbc {
    fn check_key_iv(key: &[u8], iv: &[u8]) -> crate::error::Result<()> {
        validate::length("AES-128 key", key.len(), AES128_KEY_SIZE)?;
        validate::length("CBC initialization vector", iv.len(), AES_BLOCK_SIZE)
    }
}

impl PaddedBlockCipher for Aes128Cbc {
    const KEY_SIZE: usize = AES128_KEY_SIZE;
    const BLOCK_SIZE: usize = AES_BLOCK_SIZE;

    fn name() -> &'static str {
        ALGORITHM
    }

    fn encrypt_padded(key: &[u8], iv: &[u8], plaintext: &[u8]) -> CoreResult<Vec<u8>> {
        Self::check_key_iv(key, iv)?;
        let encryptor = Encryptor::new_from_slices(key, iv).map_err(|_| Error::Length {
            context: ALGORITHM,
            expected: AES128_KEY_SIZE,
            actual: key.len(),
        })?;
        Ok(encryptor.encrypt_padded_vec_mut::<Pkcs7>(plaintext))
    }

    fn decrypt_padded(key: &[u8], iv: &[u8], ciphertext: &[u8]) -> CoreResult<Vec<u8>> {
        Self::check_key_iv(key, iv)?;
        if ciphertext.is_empty() || ciphertext.len() % AES_BLOCK_SIZE != 0 {
            return Err(CoreError::DecryptionFailed {
                context: ALGORITHM,
                message: format!(
                    "ciphertext length {} is not a positive multiple of {}",
                    ciphertext.len(),
                    AES_BLOCK_SIZE
                ),
            });
        }

        let decryptor = Decryptor::new_from_slices(key, iv).map_err(|_| Error::Length {
            context: ALGORITHM,
            expected: AES128_KEY_SIZE,
            actual: key.len(),
        })?;
        let plaintext = decryptor
            .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
            .map_err(|_| Error::Padding {
                algorithm: ALGORITHM,
            })?;
        Ok(plaintext)
    }
}
