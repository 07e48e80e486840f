//! # API サーバー設定
//!
//! 環境変数から API サーバーとシードツールの設定を読み込む。
//!
//! | 変数 | デフォルト |
//! |------|-----------|
//! | `DB_URI` | `sqlite://app.db` |
//! | `API_HOST` | `127.0.0.1` |
//! | `API_PORT` | `5555` |

use std::env;

use thiserror::Error;

const DEFAULT_DATABASE_URL: &str = "sqlite://app.db";
const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 5555;

/// 設定の読み込みエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// 値を解釈できない
    #[error("環境変数 {name} の値が不正です: {value:?}")]
    InvalidValue { name: &'static str, value: String },
}

/// API サーバーの設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// バインドアドレス
    pub host:         String,
    /// ポート番号
    pub port:         u16,
    /// データベース接続 URL
    pub database_url: String,
}

impl ApiConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// 任意の取得関数から設定を読み込む
    ///
    /// 未設定の変数はデフォルト値になる。空文字列も未設定として扱う。
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let port = match get("API_PORT") {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue {
                    name: "API_PORT",
                    value,
                })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            host: get("API_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            database_url: get("DB_URI").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
        })
    }

    /// `host:port` 形式のバインドアドレス
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<ApiConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ApiConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_未設定ならデフォルト値になる() {
        let config = load(&[]).unwrap();

        assert_eq!(
            config,
            ApiConfig {
                host:         "127.0.0.1".to_string(),
                port:         5555,
                database_url: "sqlite://app.db".to_string(),
            }
        );
        assert_eq!(config.bind_address(), "127.0.0.1:5555");
    }

    #[test]
    fn test_環境変数の値が優先される() {
        let config = load(&[
            ("API_HOST", "0.0.0.0"),
            ("API_PORT", "8080"),
            ("DB_URI", "sqlite::memory:"),
        ])
        .unwrap();

        assert_eq!(config.bind_address(), "0.0.0.0:8080");
        assert_eq!(config.database_url, "sqlite::memory:");
    }

    #[test]
    fn test_空文字列は未設定として扱う() {
        let config = load(&[("DB_URI", ""), ("API_PORT", " ")]).unwrap();

        assert_eq!(config.database_url, "sqlite://app.db");
        assert_eq!(config.port, 5555);
    }

    #[rstest]
    #[case("http")]
    #[case("-1")]
    #[case("70000")]
    fn test_不正なポートは設定エラーになる(#[case] port: &str) {
        let result = load(&[("API_PORT", port)]);

        assert_eq!(
            result,
            Err(ConfigError::InvalidValue {
                name:  "API_PORT",
                value: port.to_string(),
            })
        );
    }
}
