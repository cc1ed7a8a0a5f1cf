use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::configuration::ConfigValue;

/// Tenancy a configuration value belongs to
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum TenancyScope {
    Organization {
        organization_id: String,
    },
    Tenant {
        organization_id: String,
        tenant_id: String,
    },
}

/// Path of the configuration resource for an optional scope
pub fn configuration_endpoint(scope: Option<&TenancyScope>) -> String {
    match scope {
        None => "/api/system/configuration".to_string(),
        Some(TenancyScope::Organization { organization_id }) => {
            format!("/api/organizations/{organization_id}/configuration")
        }
        Some(TenancyScope::Tenant {
            organization_id,
            tenant_id,
        }) => format!("/api/organizations/{organization_id}/tenants/{tenant_id}/configuration"),
    }
}

/// Single-key change of a configuration value
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConfigurationPatch {
    pub key: String,
    pub value: ConfigValue,
}

/// Everything the remote update service needs for one update
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConfigurationUpdateRequest {
    pub patch: ConfigurationPatch,
    pub scope: Option<TenancyScope>,
}

impl ConfigurationUpdateRequest {
    pub fn endpoint(&self) -> String {
        configuration_endpoint(self.scope.as_ref())
    }

    /// JSON body in the shape `{"change": {key: value}}`
    pub fn body(&self) -> Value {
        let mut change = Map::new();
        change.insert(self.patch.key.clone(), self.patch.value.to_json());

        let mut body = Map::new();
        body.insert("change".to_string(), Value::Object(change));
        Value::Object(body)
    }
}
