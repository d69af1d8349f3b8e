//! Identity provider configuration (Supabase)

use serde::Deserialize;

use super::error::ValidationError;

/// Identity provider configuration
///
/// The anon key is stored as a plain string here and wrapped in `Secret`
/// by the Supabase adapter that actually sends it.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Supabase project base URL
    pub supabase_url: String,

    /// Supabase project anon key
    pub supabase_anon_key: String,
}

impl AuthConfig {
    /// Validate identity provider configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.supabase_url.is_empty() {
            return Err(ValidationError::MissingRequired("SUPABASE URL"));
        }
        if !self.supabase_url.starts_with("http://") && !self.supabase_url.starts_with("https://") {
            return Err(ValidationError::InvalidProviderUrl);
        }
        if self.supabase_anon_key.is_empty() {
            return Err(ValidationError::MissingRequired("SUPABASE ANON KEY"));
        }
        Ok(())
    }
}
