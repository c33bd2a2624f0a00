use askama::Template;
use crate::models::Notice;

#[derive(Template)]
#[template(path = "admin.html")]
pub struct AdminPageTemplate<'a> {
    pub page_title: &'a str,
    pub base_url: &'a str,
    pub notice: Option<Notice>,
    pub api_url: String,
    pub api_key: String,
    pub api_hostname: String,
    pub cache_ttl_seconds: u64,
}
