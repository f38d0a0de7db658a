use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Settings for the reqwest client behind a [`Fetcher`](crate::Fetcher).
///
/// Deserializes from an empty table, so every key is optional in a config
/// file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientSetting {
    /// Overrides reqwest's default `User-Agent`.
    pub user_agent: Option<String>,

    /// Proxy URLs. `https://` proxies carry https traffic, all others carry
    /// plain http traffic.
    pub proxies: Vec<String>,

    /// Headers sent with every request made by the client.
    pub headers: BTreeMap<String, String>,
}

#[cfg(feature = "reqwest")]
impl ClientSetting {
    pub fn build(&self) -> Result<reqwest::Client, crate::error::ClientSettingError> {
        use crate::error::ClientSettingError;
        use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
        use reqwest::{Client, Proxy};

        let mut cb = Client::builder();

        if let Some(user_agent) = &self.user_agent {
            cb = cb.user_agent(user_agent.as_str());
        }

        let (secure, insecure): (Vec<&String>, Vec<&String>) = self
            .proxies
            .iter()
            .partition(|u| u.starts_with("https://"));

        for u in secure {
            cb = cb.proxy(Proxy::https(u.as_str()).map_err(|source| {
                ClientSettingError::Proxy {
                    url: u.clone(),
                    source,
                }
            })?);
        }

        for u in insecure {
            cb = cb.proxy(Proxy::http(u.as_str()).map_err(|source| {
                ClientSettingError::Proxy {
                    url: u.clone(),
                    source,
                }
            })?);
        }

        if !self.headers.is_empty() {
            let mut headers = HeaderMap::with_capacity(self.headers.len());
            for (name, value) in &self.headers {
                let invalid = || ClientSettingError::Header { name: name.clone() };
                let key = HeaderName::from_bytes(name.as_bytes()).map_err(|_| invalid())?;
                let value = HeaderValue::from_str(value).map_err(|_| invalid())?;
                headers.insert(key, value);
            }
            cb = cb.default_headers(headers);
        }

        Ok(cb.build()?)
    }
}

#[cfg(all(test, feature = "reqwest"))]
mod tests {
    use super::*;
    use crate::error::ClientSettingError;

    #[test]
    fn empty_table_is_default() {
        let setting: ClientSetting = serde_json::from_str("{}").unwrap();
        assert_eq!(setting, ClientSetting::default());
    }

    #[test]
    fn default_setting_builds() {
        assert!(ClientSetting::default().build().is_ok());
    }

    #[test]
    fn full_setting_builds() {
        let setting = ClientSetting {
            user_agent: Some("dataservice-test".into()),
            proxies: vec![
                "http://127.0.0.1:3128".into(),
                "https://127.0.0.1:3129".into(),
            ],
            headers: BTreeMap::from([("Accept".into(), "application/json".into())]),
        };
        assert!(setting.build().is_ok());
    }

    #[test]
    fn bad_header_name_is_rejected() {
        let setting = ClientSetting {
            headers: BTreeMap::from([("bad header".into(), "x".into())]),
            ..Default::default()
        };
        let err = setting.build().unwrap_err();
        assert!(matches!(err, ClientSettingError::Header { ref name } if name == "bad header"));
    }

    #[test]
    fn bad_header_value_is_rejected() {
        let setting = ClientSetting {
            headers: BTreeMap::from([("X-Token".into(), "line\nbreak".into())]),
            ..Default::default()
        };
        assert!(matches!(
            setting.build(),
            Err(ClientSettingError::Header { .. })
        ));
    }
}
