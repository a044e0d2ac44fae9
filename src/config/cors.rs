use std::env;

#[derive(Clone, Debug)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    pub fn from_env() -> Self {
        let allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000".to_string())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        Self { allowed_origins }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_env_splits_origins() {
        // Safety: tests in this module are the only readers of this var.
        unsafe {
            env::set_var(
                "CORS_ALLOWED_ORIGINS",
                "http://localhost:3000, https://app.example.com",
            );
        }
        let config = CorsConfig::from_env();
        assert_eq!(
            config.allowed_origins,
            vec!["http://localhost:3000", "https://app.example.com"]
        );
        unsafe {
            env::remove_var("CORS_ALLOWED_ORIGINS");
        }
    }
}
