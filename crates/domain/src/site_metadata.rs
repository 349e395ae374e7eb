use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use std::fmt::Write;

/// Public pages listed in the sitemap.
pub const STATIC_PATHS: [&str; 11] = [
    "/",
    "/restaurants",
    "/restaurant-request",
    "/login",
    "/partner",
    "/admin",
    "/delivery",
    "/advertise",
    "/contact",
    "/mentions-legales",
    "/cgv",
];

const DISALLOWED_PREFIXES: [&str; 2] = ["/api/", "/maintenance"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFrequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeFrequency::Always => "always",
            ChangeFrequency::Hourly => "hourly",
            ChangeFrequency::Daily => "daily",
            ChangeFrequency::Weekly => "weekly",
            ChangeFrequency::Monthly => "monthly",
            ChangeFrequency::Yearly => "yearly",
            ChangeFrequency::Never => "never",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SitemapEntry {
    pub url: String,
    pub last_modified: DateTime<Utc>,
    pub change_frequency: ChangeFrequency,
    pub priority: f32,
}

/// One entry per static path, the home page ranked above the rest.
pub fn sitemap(base_url: &str, generated_at: DateTime<Utc>) -> Vec<SitemapEntry> {
    let base_url = base_url.trim_end_matches('/');

    STATIC_PATHS
        .iter()
        .map(|path| SitemapEntry {
            url: format!("{base_url}{path}"),
            last_modified: generated_at,
            change_frequency: ChangeFrequency::Weekly,
            priority: if *path == "/" { 1.0 } else { 0.7 },
        })
        .collect()
}

/// Renders the entries following the sitemaps.org 0.9 schema.
pub fn sitemap_xml(entries: &[SitemapEntry]) -> String {
    let mut xml = String::from(concat!(
        r#"<?xml version="1.0" encoding="UTF-8"?>"#,
        "\n",
        r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#,
        "\n"
    ));

    for entry in entries {
        // writing into a String cannot fail
        let _ = write!(
            xml,
            "<url>\n<loc>{}</loc>\n<lastmod>{}</lastmod>\n<changefreq>{}</changefreq>\n<priority>{:.1}</priority>\n</url>\n",
            escape_xml(&entry.url),
            entry
                .last_modified
                .to_rfc3339_opts(SecondsFormat::Millis, true),
            entry.change_frequency.as_str(),
            entry.priority,
        );
    }

    xml.push_str("</urlset>\n");
    xml
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RobotsRules {
    pub user_agent: &'static str,
    pub allow: &'static str,
    pub disallow: Vec<&'static str>,
    pub host: String,
    pub sitemap: String,
}

impl RobotsRules {
    pub fn to_robots_txt(&self) -> String {
        let mut txt = format!("User-Agent: {}\nAllow: {}\n", self.user_agent, self.allow);
        for prefix in &self.disallow {
            txt.push_str(&format!("Disallow: {prefix}\n"));
        }
        txt.push_str(&format!("\nHost: {}\nSitemap: {}\n", self.host, self.sitemap));
        txt
    }
}

pub fn robots(base_url: &str) -> RobotsRules {
    let base_url = base_url.trim_end_matches('/');

    RobotsRules {
        user_agent: "*",
        allow: "/",
        disallow: DISALLOWED_PREFIXES.to_vec(),
        host: base_url.to_owned(),
        sitemap: format!("{base_url}/sitemap.xml"),
    }
}
