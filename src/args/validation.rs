use super::types::Args;

impl Args {
    /// # Errors
    ///
    /// Will return `Err` if a required setting is blank or the API url is not http(s)
    pub fn validate(&self) -> Result<(), String> {
        if self.db_name.trim().is_empty() {
            return Err("Database name is required".to_string());
        }
        if self.api_key.trim().is_empty() {
            return Err("API_NBA_KEY is required".to_string());
        }
        if self.api_host.trim().is_empty() {
            return Err("API host is required".to_string());
        }
        let base_url = self.api_base_url.trim();
        if !(base_url.starts_with("https://") || base_url.starts_with("http://")) {
            return Err(format!(
                "API base url '{base_url}' must start with http:// or https://"
            ));
        }
        Ok(())
    }
}
