//! QRy AES-256-GCM 加解密算法
//!
//! token 布局：nonce (12 字节) || ciphertext + tag。

use aes_gcm::{
    Aes256Gcm, Nonce,
    aead::{Aead, AeadCore, KeyInit, OsRng},
};

use crate::error::QryError;

pub const NONCE_SIZE: usize = 12;

pub fn seal(key: &[u8; 32], plaintext: &[u8]) -> Result<Vec<u8>, QryError> {
    let cipher = Aes256Gcm::new_from_slice(key).map_err(|_| QryError::Internal)?;

    // 生成随机 nonce（96 bit，标准推荐值）
    let nonce = Aes256Gcm::generate_nonce(&mut OsRng);

    let ciphertext = cipher
        .encrypt(&nonce, plaintext)
        .map_err(|_| QryError::Internal)?;

    let mut token = Vec::with_capacity(NONCE_SIZE + ciphertext.len());
    token.extend_from_slice(&nonce);
    token.extend_from_slice(&ciphertext);

    Ok(token)
}

pub fn open(key: &[u8; 32], token: &[u8]) -> Result<Vec<u8>, QryError> {
    if token.len() < NONCE_SIZE {
        return Err(QryError::Authentication);
    }

    let cipher = Aes256Gcm::new_from_slice(key).map_err(|_| QryError::Internal)?;

    let (nonce, ciphertext) = token.split_at(NONCE_SIZE);

    cipher
        .decrypt(Nonce::from_slice(nonce), ciphertext)
        .map_err(|_| QryError::Authentication)
}
