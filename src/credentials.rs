use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, PartialEq, Eq)]
/// Credentials for the client.
pub struct Credentials {
    /// The user name of the web services account.
    pub username: String,
    /// The password of the web services account.
    pub password: String,
    /// The client account code, sent on queries and reports.
    pub client_code: String,
    /// The contract code, sent on quotes and shipment creation.
    pub contract_code: String,
}

impl Credentials {
    /// Creates a new `Credentials` struct.
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        client_code: impl Into<String>,
        contract_code: impl Into<String>,
    ) -> Credentials {
        Credentials {
            username: username.into(),
            password: password.into(),
            client_code: client_code.into(),
            contract_code: contract_code.into(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .field("client_code", &self.client_code)
            .field("contract_code", &self.contract_code)
            .finish()
    }
}
