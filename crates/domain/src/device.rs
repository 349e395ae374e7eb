use serde::{Deserialize, Serialize};

const MAX_TOKEN_LENGTH: usize = 4096;

/// Push token handed out by FCM (android) or APNs (ios).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceToken(String);

impl DeviceToken {
    pub fn parse(s: String) -> Result<DeviceToken, String> {
        if s.is_empty() {
            return Err("A device token cannot be empty.".to_string());
        }
        if s.chars().count() > MAX_TOKEN_LENGTH {
            return Err(format!(
                "A device token cannot be longer than {MAX_TOKEN_LENGTH} characters."
            ));
        }
        if s.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err("A device token cannot contain whitespace.".to_string());
        }

        Ok(Self(s))
    }

    /// Shortened form for logs.
    pub fn redacted(&self) -> String {
        let prefix: String = self.0.chars().take(12).collect();
        format!("{prefix}...")
    }
}

impl AsRef<str> for DeviceToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DevicePlatform {
    Android,
    Ios,
    Web,
}

impl DevicePlatform {
    pub fn as_str(&self) -> &'static str {
        match self {
            DevicePlatform::Android => "android",
            DevicePlatform::Ios => "ios",
            DevicePlatform::Web => "web",
        }
    }

    pub fn is_native(&self) -> bool {
        !matches!(self, DevicePlatform::Web)
    }
}

impl std::fmt::Display for DevicePlatform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for DevicePlatform {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "android" => Ok(Self::Android),
            "ios" => Ok(Self::Ios),
            "web" => Ok(Self::Web),
            other => Err(format!(
                "{other} is not a supported platform. Use `android`, `ios` or `web`."
            )),
        }
    }
}

/// A validated device token ready to be stored.
#[derive(Debug, Clone)]
pub struct DeviceRegistration {
    pub token: DeviceToken,
    pub platform: DevicePlatform,
}
