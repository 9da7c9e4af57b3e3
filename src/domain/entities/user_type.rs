use serde::{Deserialize, Serialize};

/// Role a registrant picks on the waitlist form.
/// Workers offer services, homeowners book them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Worker,
    Homeowner,
}

impl UserType {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserType::Worker => "worker",
            UserType::Homeowner => "homeowner",
        }
    }
}

impl std::fmt::Display for UserType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for UserType {
    type Err = String;

    /// Exact match only: the wire values are lowercase and nothing else is accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "worker" => Ok(UserType::Worker),
            "homeowner" => Ok(UserType::Homeowner),
            _ => Err(format!(
                "Invalid user type: {}. Must be 'worker' or 'homeowner'",
                s
            )),
        }
    }
}
