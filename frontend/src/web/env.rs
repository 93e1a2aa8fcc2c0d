//! 构建期配置
//!
//! 浏览器里没有进程环境变量，配置在编译时通过 `option_env!` 注入，
//! 未设置的项由 `ClientConfig` 回落到默认值。

use rubro::config::{
    EnvAdapter, VAR_API_URL, VAR_NOTICE_TIMEOUT_MS, VAR_PROFILE_RETRY_MS, VAR_SESSION_KEY,
};

pub struct BuildEnv;

impl EnvAdapter for BuildEnv {
    fn var(&self, name: &str) -> Option<String> {
        let value = match name {
            VAR_API_URL => option_env!("RUBRO_API_URL"),
            VAR_SESSION_KEY => option_env!("RUBRO_SESSION_KEY"),
            VAR_PROFILE_RETRY_MS => option_env!("RUBRO_PROFILE_RETRY_MS"),
            VAR_NOTICE_TIMEOUT_MS => option_env!("RUBRO_NOTICE_TIMEOUT_MS"),
            _ => None,
        };
        value.map(str::to_string)
    }
}
