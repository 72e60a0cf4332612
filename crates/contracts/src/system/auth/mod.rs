use serde::{Deserialize, Serialize};

/// Mode of the sign-in prompt shown by the dashboard shell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_login() {
        assert_eq!(AuthMode::default(), AuthMode::Login);
        assert_eq!(
            serde_json::to_string(&AuthMode::Register).unwrap(),
            "\"register\""
        );
    }
}
