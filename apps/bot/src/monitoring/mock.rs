use std::collections::HashMap;

use anyhow::{Result, anyhow};

use super::checker::Checker;

/// Checker double returning canned outcomes per target.
#[derive(Default)]
pub struct ScriptedChecker {
    responses: HashMap<String, Result<u16, String>>,
}

impl ScriptedChecker {
    pub fn with_status(mut self, target: &str, status: u16) -> Self {
        self.responses.insert(target.to_string(), Ok(status));
        self
    }

    pub fn with_error(mut self, target: &str, error: &str) -> Self {
        self.responses.insert(target.to_string(), Err(error.to_string()));
        self
    }
}

#[async_trait::async_trait]
impl Checker for ScriptedChecker {
    async fn check(&self, target: &str) -> Result<u16> {
        match self.responses.get(target) {
            Some(Ok(status)) => Ok(*status),
            Some(Err(error)) => Err(anyhow!("{error}")),
            None => Err(anyhow!("unscripted target: {target}")),
        }
    }
}
