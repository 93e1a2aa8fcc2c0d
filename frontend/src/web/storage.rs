//! LocalStorage 会话存储
//!
//! token 以原始字符串保存在配置的键下（默认 `refreshToken`）。

use gloo_storage::{LocalStorage, Storage};
use rubro::session::SessionStorage;
use rubro::{AppError, AppResult, AuthToken};

pub struct BrowserSessionStorage {
    key: String,
}

impl BrowserSessionStorage {
    pub fn new(key: String) -> Self {
        Self { key }
    }

    fn storage() -> web_sys::Storage {
        LocalStorage::raw()
    }
}

impl SessionStorage for BrowserSessionStorage {
    fn save(&self, token: &AuthToken) -> AppResult<()> {
        Self::storage()
            .set_item(&self.key, token.as_str())
            .map_err(|e| AppError::storage(format!("{:?}", e)).in_op("session.save"))
    }

    fn load(&self) -> AppResult<Option<AuthToken>> {
        let value = Self::storage()
            .get_item(&self.key)
            .map_err(|e| AppError::storage(format!("{:?}", e)).in_op("session.load"))?;
        Ok(value.filter(|v| !v.is_empty()).map(AuthToken::new))
    }

    fn erase(&self) -> AppResult<()> {
        Self::storage()
            .remove_item(&self.key)
            .map_err(|e| AppError::storage(format!("{:?}", e)).in_op("session.erase"))
    }
}
