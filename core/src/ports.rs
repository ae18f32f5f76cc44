//! User port operations.

use crate::client::EcxClient;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest};
use crate::types::Port;
use crate::wire;

const USER_PORTS_PATH: &str = "/port/userport";

impl EcxClient {
    pub fn build_get_user_ports(&self) -> HttpRequest {
        HttpRequest::new(HttpMethod::Get, self.url(USER_PORTS_PATH))
    }

    /// All ports of the current user. The endpoint is not paginated.
    pub fn get_user_ports(&self) -> Result<Vec<Port>, ApiError> {
        let resp: Vec<wire::Port> = self.execute_json(self.build_get_user_ports())?;
        Ok(resp.into_iter().map(Into::into).collect())
    }

    /// The user port called `name`.
    pub fn get_user_port(&self, name: &str) -> Result<Port, ApiError> {
        self.get_user_ports()?
            .into_iter()
            .find(|p| p.name.as_deref() == Some(name))
            .ok_or_else(|| ApiError::NotFound(format!("port with name '{name}'")))
    }
}
