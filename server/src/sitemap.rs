use crate::catalog::CatalogSource;

/// Public pages that exist regardless of catalog contents.
pub const STATIC_PATHS: [&str; 4] = ["/", "/houses", "/tours", "/faq"];
/// Paths crawlers are asked to skip.
pub const DISALLOWED_PATHS: [&str; 2] = ["/admin", "/my-bookings"];

pub fn escape_xml(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            other => escaped.push(other),
        }
    }
    escaped
}

pub fn render_sitemap(site_url: &str, paths: &[String]) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );
    for path in paths {
        xml.push_str("  <url><loc>");
        xml.push_str(&escape_xml(&format!("{}{}", site_url, path)));
        xml.push_str("</loc></url>\n");
    }
    xml.push_str("</urlset>\n");
    xml
}

pub fn render_robots(site_url: &str) -> String {
    let mut robots = String::from("User-agent: *\nAllow: /\n");
    for path in DISALLOWED_PATHS {
        robots.push_str(&format!("Disallow: {}\n", path));
    }
    robots.push_str(&format!("Sitemap: {}/sitemap.xml\n", site_url));
    robots
}

/// Static pages first, then every house and tour detail page the catalog
/// knows about. A failing catalog only costs its own entries.
pub async fn collect_paths(catalog: &dyn CatalogSource) -> Vec<String> {
    let mut paths: Vec<String> = STATIC_PATHS.iter().map(|p| p.to_string()).collect();

    match catalog.house_ids().await {
        Ok(ids) => paths.extend(ids.into_iter().map(|id| format!("/houses/{}", id))),
        Err(err) => tracing::warn!(error = %err, "Sitemap is missing house pages"),
    }
    match catalog.tour_ids().await {
        Ok(ids) => paths.extend(ids.into_iter().map(|id| format!("/tours/{}", id))),
        Err(err) => tracing::warn!(error = %err, "Sitemap is missing tour pages"),
    }
    paths
}
