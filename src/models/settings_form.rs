use serde::Deserialize;

#[derive(Deserialize, Debug, Default)]
pub struct SettingsForm {
    pub api_url: Option<String>,
    pub api_key: Option<String>,
}
