use serde::{Deserialize, Serialize};

/// Body of `POST /auth/login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginBody {
    pub email: String,
    pub password: String,
}

impl LoginBody {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Body of `POST /auth/register`: login credentials plus the user's name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterBody {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_register_body_is_camel_case() {
        let body = RegisterBody {
            email: "ada@example.com".into(),
            password: "hunter22".into(),
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "email": "ada@example.com",
                "password": "hunter22",
                "firstName": "Ada",
                "lastName": "Lovelace"
            })
        );
    }
}
