//! QRy XChaCha20-Poly1305 加解密算法
//!
//! token 布局：nonce (24 字节) || ciphertext + tag。
//! 每次 seal 都生成全新的随机 nonce，严禁复用。

use chacha20poly1305::{
    XChaCha20Poly1305, XNonce,
    aead::{Aead, AeadCore, KeyInit, OsRng},
};

use crate::error::QryError;

pub const NONCE_SIZE: usize = 24;

pub fn seal(key: &[u8; 32], plaintext: &[u8]) -> Result<Vec<u8>, QryError> {
    let cipher = XChaCha20Poly1305::new_from_slice(key).map_err(|_| QryError::Internal)?;

    // 生成随机 nonce（192 bit）
    let nonce = XChaCha20Poly1305::generate_nonce(&mut OsRng);

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

    let cipher = XChaCha20Poly1305::new_from_slice(key).map_err(|_| QryError::Internal)?;

    let (nonce, ciphertext) = token.split_at(NONCE_SIZE);

    cipher
        .decrypt(XNonce::from_slice(nonce), ciphertext)
        .map_err(|_| QryError::Authentication)
}
