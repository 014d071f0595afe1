//! User entity representing a registered account.

/// A registered user.
///
/// The id is a UUID v4 generated at registration and never reused. Records
/// are immutable after creation; password rotation is not implemented.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: String,
    pub email: String,
    pub password_hash: String,
}

/// Input data for creating a new user.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub id: String,
    pub email: String,
    pub password_hash: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_fields() {
        let user = User {
            id: "3fa85f64-5717-4562-b3fc-2c963f66afa6".to_string(),
            email: "user@example.com".to_string(),
            password_hash: "$2b$12$abcdefghijklmnopqrstuv".to_string(),
        };

        assert_eq!(user.email, "user@example.com");
        assert!(user.password_hash.starts_with("$2b$"));
    }
}
