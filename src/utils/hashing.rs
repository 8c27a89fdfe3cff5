use sha2::{Digest, Sha256};

/// SHA-256，輸出小寫十六進位字串（64 字元）
pub fn sha256_hex(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}
