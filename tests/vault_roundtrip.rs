use std::fs;
use std::path::Path;

use tempfile::tempdir;

use qry::format::record::VaultRecord;
use qry::{QrDecoder, QryError, otp, service};

/// 测试用解码器：跳过 zbarimg，直接返回固定的 otpauth 载荷。
struct FakeDecoder(&'static str);

impl QrDecoder for FakeDecoder {
    fn decode(&self, image: &Path) -> Result<String, QryError> {
        if !image.is_file() {
            return Err(QryError::NotFound(image.to_path_buf()));
        }

        Ok(self.0.to_string())
    }
}

const SECRET_B32: &[u8] = b"GEZDGNBVGY3TQOJQGEZDGNBVGY3TQOJQ";

const PAYLOAD: &str =
    "QR-Code:otpauth://totp/QRy:alice?secret=GEZDGNBVGY3TQOJQGEZDGNBVGY3TQOJQ&issuer=QRy";

#[test]
fn register_generate_roundtrip() {
    // 注册后用同一密码生成，OTP 必须与直接对 secret 计算的结果一致。
    let temp_dir = tempdir().expect("create temp dir");
    let qrcode_path = temp_dir.path().join("qrcode.png");
    let config_path = temp_dir.path().join("qry.json");

    fs::write(&qrcode_path, b"fake image").expect("write qrcode stand-in");

    qry::register(&FakeDecoder(PAYLOAD), &qrcode_path, &config_path, "hunter2")
        .expect("register secret");

    // 窗口可能恰好在 generate 前后切换，两侧各取一次参考值。
    let before = otp::totp(SECRET_B32).expect("totp before");
    let code = qry::generate(&config_path, "hunter2").expect("generate otp");
    let after = otp::totp(SECRET_B32).expect("totp after");

    assert_eq!(code.len(), 6);
    assert!(code.bytes().all(|b| b.is_ascii_digit()));
    assert!(code == before || code == after);
}

#[test]
fn vault_file_has_the_expected_json_shape() {
    // 持久化的记录必须是 {alg, key, salt} 三个字段的 JSON 对象。
    let temp_dir = tempdir().expect("create temp dir");
    let config_path = temp_dir.path().join("qry.json");

    let record = service::register(SECRET_B32, "hunter2").expect("register");
    record.save(&config_path).expect("save record");

    let text = fs::read_to_string(&config_path).expect("read vault file");
    let value: serde_json::Value = serde_json::from_str(&text).expect("parse vault json");

    assert!(value.get("alg").is_some());
    assert!(value.get("key").is_some());
    assert!(value.get("salt").is_some());

    let loaded = VaultRecord::load(&config_path).expect("load record");
    assert_eq!(loaded.alg, record.alg);
    assert_eq!(loaded.key, record.key);
    assert_eq!(loaded.salt, record.salt);
}

#[test]
fn save_overwrites_an_existing_record_without_leftovers() {
    // 重新注册是整体覆盖：旧记录被完整替换，目录里不残留临时文件。
    let temp_dir = tempdir().expect("create temp dir");
    let config_path = temp_dir.path().join("qry.json");

    let first = service::register(SECRET_B32, "old-password").expect("register");
    first.save(&config_path).expect("save first record");

    let second = service::register(SECRET_B32, "new-password").expect("re-register");
    second.save(&config_path).expect("overwrite record");

    let loaded = VaultRecord::load(&config_path).expect("load record");
    assert_eq!(loaded.key, second.key);
    assert_eq!(loaded.salt, second.salt);

    let entries = fs::read_dir(temp_dir.path()).expect("list dir").count();
    assert_eq!(entries, 1, "only the vault file itself may remain");
}

#[test]
fn wrong_password_fails_authentication() {
    // 错误密码必须报 Authentication，绝不能返回任何明文。
    let record = service::register(SECRET_B32, "correct-password").expect("register");

    let result = service::generate(&record, "wrong-password");
    assert!(matches!(result, Err(QryError::Authentication)));
}

#[test]
fn tampered_token_fails_authentication() {
    // 存储的 token 被翻转一个 bit 后，生成必须失败。
    use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};

    let mut record = service::register(SECRET_B32, "hunter2").expect("register");

    let mut token = BASE64.decode(&record.key).expect("decode token");
    token[0] ^= 0x01;
    record.key = BASE64.encode(&token);

    let result = service::generate(&record, "hunter2");
    assert!(matches!(result, Err(QryError::Authentication)));
}

#[test]
fn unknown_algorithm_is_rejected_before_decryption() {
    // 无法识别的算法标识必须报 UnsupportedAlgorithm，即使密码正确。
    let mut record = service::register(SECRET_B32, "hunter2").expect("register");
    record.alg = "cryptography.Fernet".to_string();

    let result = service::generate(&record, "hunter2");
    assert!(matches!(result, Err(QryError::UnsupportedAlgorithm(alg)) if alg == "cryptography.Fernet"));
}

#[test]
fn generate_on_missing_vault_file_fails_not_found() {
    let temp_dir = tempdir().expect("create temp dir");
    let missing = temp_dir.path().join("no-such-qry.json");

    let result = qry::generate(&missing, "hunter2");
    assert!(matches!(result, Err(QryError::NotFound(_))));
}

#[test]
fn corrupted_vault_file_is_reported_as_corrupted() {
    let temp_dir = tempdir().expect("create temp dir");
    let config_path = temp_dir.path().join("qry.json");

    fs::write(&config_path, b"not json at all").expect("write bad vault file");

    let result = qry::generate(&config_path, "hunter2");
    assert!(matches!(result, Err(QryError::Corrupted(_))));
}

#[test]
fn secret_extraction_handles_percent_encoding() {
    // url crate 的 query 解析自带百分号解码。
    let secret = qry::qr::secret_from_otpauth(
        "QR-Code:otpauth://totp/Example:bob%40example.com?secret=JBSWY3DPEHPK3PXP&issuer=Example",
    )
    .expect("extract secret");

    assert_eq!(secret, "JBSWY3DPEHPK3PXP");
}

#[test]
fn secret_extraction_fails_without_a_secret_parameter() {
    let result = qry::qr::secret_from_otpauth("otpauth://totp/Example:bob?issuer=Example");
    assert!(matches!(result, Err(QryError::QrDecode(_))));
}

#[test]
fn missing_qr_image_fails_not_found() {
    let temp_dir = tempdir().expect("create temp dir");
    let missing = temp_dir.path().join("no-such-qrcode.png");
    let config_path = temp_dir.path().join("qry.json");

    let result = qry::register(&FakeDecoder(PAYLOAD), &missing, &config_path, "hunter2");
    assert!(matches!(result, Err(QryError::NotFound(_))));
}
