use super::AuthenticatedUser;

/// 보호된 경로에 접근하기 위해 필요한 역할
///
/// 나열된 역할 중 하나라도 있으면 허용합니다 (OR 조건).
#[derive(Debug, Clone)]
pub struct RequiredRole(pub Vec<String>);

impl RequiredRole {
    pub fn any_of(roles: &[&str]) -> Self {
        Self(roles.iter().map(|role| role.to_string()).collect())
    }

    /// 사용자 역할이 요구사항을 만족하는지 확인
    pub fn is_satisfied(&self, user: &AuthenticatedUser) -> bool {
        self.0.iter().any(|role| user.has_role(role))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::AuthMethod;

    #[test]
    fn test_required_role() {
        let user = AuthenticatedUser {
            username: "user1".to_string(),
            auth_method: AuthMethod::Basic,
            roles: vec!["user".to_string()],
        };

        assert!(RequiredRole::any_of(&["user"]).is_satisfied(&user));
        assert!(!RequiredRole::any_of(&["admin"]).is_satisfied(&user));
        assert!(RequiredRole::any_of(&["admin", "user"]).is_satisfied(&user));
        assert!(!RequiredRole::any_of(&[]).is_satisfied(&user));
    }
}
