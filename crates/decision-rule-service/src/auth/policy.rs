//! 规则集归属策略
//!
//! 规则集的修改和删除只允许创建者本人执行

/// 归属校验策略
///
/// 调用方身份与规则集 created_by 严格相等才放行，
/// 不做大小写归一或域名比较。
#[derive(Debug, Clone, Copy, Default)]
pub struct OwnershipPolicy;

impl OwnershipPolicy {
    pub fn new() -> Self {
        Self
    }

    /// 判断调用方是否为规则集的创建者
    pub fn allows(&self, caller: &str, owner: &str) -> bool {
        caller == owner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owner_allowed() {
        let policy = OwnershipPolicy::new();
        assert!(policy.allows("alice@example.com", "alice@example.com"));
    }

    #[test]
    fn test_non_owner_rejected() {
        let policy = OwnershipPolicy::new();
        assert!(!policy.allows("bob@example.com", "alice@example.com"));
    }

    #[test]
    fn test_case_sensitive_comparison() {
        // 身份比较按字节严格相等，大小写不同视为不同用户
        let policy = OwnershipPolicy::new();
        assert!(!policy.allows("Alice@example.com", "alice@example.com"));
    }
}
