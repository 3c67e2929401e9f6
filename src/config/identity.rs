use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct IdentityConfig {
    // Header consulted before the Authorization schemes. Mock identity only,
    // never production authentication.
    #[validate(length(min = 1))]
    pub user_header: String, // e.g., "x-user-name"
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            user_header: "x-user-name".to_string(),
        }
    }
}
