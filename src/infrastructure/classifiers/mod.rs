#[cfg(test)]
pub mod fake;
pub mod http;

use std::sync::Arc;

use anyhow::bail;
use anyhow::Result;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::SharedClassifier;

pub struct ClassifierManager {}

impl ClassifierManager {
    pub fn get() -> Result<SharedClassifier> {
        let url = Config::get(ConfigKey::ClassifierURL);
        if url.is_empty() {
            bail!("Classifier URL is not defined");
        }

        return Ok(Arc::new(http::HttpClassifier::default()));
    }
}
