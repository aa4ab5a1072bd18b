use crate::error::Result;

/// 使用 bcrypt 对密码进行哈希
///
/// `cost` is the bcrypt work factor; production code passes
/// [`bcrypt::DEFAULT_COST`], tests use the minimum to stay fast.
pub fn hash_password(password: &str, cost: u32) -> Result<String> {
    let hash = bcrypt::hash(password, cost)?;
    Ok(hash)
}

/// 验证密码是否匹配哈希值
pub fn verify_password(password: &str, hash: &str) -> Result<bool> {
    Ok(bcrypt::verify(password, hash)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_COST: u32 = 4;

    #[test]
    fn test_hash_and_verify() {
        let hash = hash_password("password", TEST_COST).unwrap();
        assert_ne!(hash, "password");
        assert!(hash.starts_with("$2"));
        assert!(verify_password("password", &hash).unwrap());
        assert!(!verify_password("wrong_password", &hash).unwrap());
    }

    #[test]
    fn test_hash_is_salted() {
        let h1 = hash_password("password", TEST_COST).unwrap();
        let h2 = hash_password("password", TEST_COST).unwrap();
        assert_ne!(h1, h2);
    }

    #[test]
    fn test_malformed_hash_is_an_error() {
        assert!(verify_password("password", "not-a-bcrypt-hash").is_err());
    }
}
