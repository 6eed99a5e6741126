#[cfg(feature = "cli")]
pub mod cli;

use crate::utils::error::{Result, TrackingError};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_YUNEXPRESS_BASE_URL: &str = "https://api.yunexpress.com/LMS.API/api/Tracking";
pub const DEFAULT_GLS_BASE_URL: &str = "https://gls-group.eu/app/service/open/rest/PL/pl";
pub const DEFAULT_GLS_API_BASE_URL: &str = "https://api.gls-group.eu/public/v1";
pub const DEFAULT_SHOPIFY_API_VERSION: &str = "2024-01";

/// 程式啟動時建立一次，之後唯讀
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackingConfig {
    pub yunexpress: YunExpressConfig,
    pub shopify: ShopifyConfig,
    #[serde(default)]
    pub gls: GlsConfig,
    #[serde(default)]
    pub request_timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YunExpressConfig {
    pub api_key: String,
    pub customer_code: String,
    #[serde(default = "default_yunexpress_base_url")]
    pub base_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShopifyConfig {
    pub store_domain: String,
    pub access_token: String,
    #[serde(default = "default_shopify_api_version")]
    pub api_version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlsConfig {
    /// 有設定時改走需授權的 API
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_gls_base_url")]
    pub base_url: String,
    #[serde(default = "default_gls_api_base_url")]
    pub api_base_url: String,
}

impl Default for GlsConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_gls_base_url(),
            api_base_url: default_gls_api_base_url(),
        }
    }
}

fn default_yunexpress_base_url() -> String {
    DEFAULT_YUNEXPRESS_BASE_URL.to_string()
}

fn default_gls_base_url() -> String {
    DEFAULT_GLS_BASE_URL.to_string()
}

fn default_gls_api_base_url() -> String {
    DEFAULT_GLS_API_BASE_URL.to_string()
}

fn default_shopify_api_version() -> String {
    DEFAULT_SHOPIFY_API_VERSION.to_string()
}

impl TrackingConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            yunexpress: YunExpressConfig {
                api_key: required_env("YUNEXPRESS_API_KEY")?,
                customer_code: required_env("YUNEXPRESS_CUSTOMER_CODE")?,
                base_url: env::var("YUNEXPRESS_BASE_URL")
                    .unwrap_or_else(|_| default_yunexpress_base_url()),
            },
            shopify: ShopifyConfig {
                store_domain: required_env("SHOPIFY_STORE_DOMAIN")?,
                access_token: required_env("SHOPIFY_ACCESS_TOKEN")?,
                api_version: env::var("SHOPIFY_API_VERSION")
                    .unwrap_or_else(|_| default_shopify_api_version()),
            },
            gls: GlsConfig {
                api_key: validation::usable_secret(env::var("GLS_API_KEY").ok()),
                base_url: env::var("GLS_BASE_URL").unwrap_or_else(|_| default_gls_base_url()),
                api_base_url: env::var("GLS_API_BASE_URL")
                    .unwrap_or_else(|_| default_gls_api_base_url()),
            },
            request_timeout_seconds: match env::var("REQUEST_TIMEOUT_SECONDS") {
                Ok(raw) => Some(raw.trim().parse().map_err(|_| {
                    TrackingError::InvalidConfigValueError {
                        field: "REQUEST_TIMEOUT_SECONDS".to_string(),
                        value: raw.clone(),
                        reason: "must be a whole number of seconds".to_string(),
                    }
                })?),
                Err(_) => None,
            },
        })
    }

    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置，支援 `${VAR}` 環境變數替換
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = substitute_env_vars(content);

        let mut config: Self =
            toml::from_str(&processed_content).map_err(|e| TrackingError::ConfigError {
                message: format!("TOML parsing error: {}", e),
            })?;
        config.gls.api_key = validation::usable_secret(config.gls.api_key.take());
        Ok(config)
    }

    /// 商店網域若已帶 http(s) 前綴就直接使用
    pub fn shopify_base_url(&self) -> String {
        let domain = self.shopify.store_domain.trim().trim_end_matches('/');
        if domain.starts_with("http://") || domain.starts_with("https://") {
            domain.to_string()
        } else {
            format!("https://{}", domain)
        }
    }

    pub fn http_client(&self) -> Result<reqwest::Client> {
        let mut builder = reqwest::Client::builder();
        if let Some(seconds) = self.request_timeout_seconds {
            builder = builder.timeout(Duration::from_secs(seconds));
        }
        Ok(builder.build()?)
    }
}

impl Validate for TrackingConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_secret("yunexpress.api_key", &self.yunexpress.api_key)?;
        validation::validate_present("yunexpress.customer_code", &self.yunexpress.customer_code)?;
        validation::validate_base_url("yunexpress.base_url", &self.yunexpress.base_url)?;

        validation::validate_present("shopify.store_domain", &self.shopify.store_domain)?;
        validation::validate_secret("shopify.access_token", &self.shopify.access_token)?;
        validation::validate_api_version("shopify.api_version", &self.shopify.api_version)?;
        validation::validate_base_url("shopify.store_domain", &self.shopify_base_url())?;

        validation::validate_base_url("gls.base_url", &self.gls.base_url)?;
        validation::validate_base_url("gls.api_base_url", &self.gls.api_base_url)?;

        if let Some(seconds) = self.request_timeout_seconds {
            validation::validate_timeout_seconds("request_timeout_seconds", seconds)?;
        }

        tracing::debug!("✅ Tracking configuration validation passed");
        Ok(())
    }
}

fn required_env(name: &str) -> Result<String> {
    let value = env::var(name).unwrap_or_default();
    validation::validate_secret(name, &value)?;
    Ok(value)
}

fn substitute_env_vars(content: &str) -> String {
    let re = Regex::new(r"\$\{([^}]+)\}").expect("valid env placeholder pattern");

    re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
    })
    .to_string()
}
