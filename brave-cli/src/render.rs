//! Plain-text rendering of a search response for terminal output.

use brave_client::SearchResponse;
use std::fmt::Write;

/// Render every returned vertical as an indented section. Absent verticals
/// are simply skipped.
pub fn render_response(resp: &SearchResponse) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Results for: {}", resp.query.original);

    if let Some(web) = &resp.web {
        let _ = writeln!(out, "\nWeb");
        for hit in &web.results {
            let _ = writeln!(out, "  {}", hit.title);
            let _ = writeln!(out, "    {}", hit.url);
            if !hit.description.is_empty() {
                let _ = writeln!(out, "    {}", hit.description);
            }
            if let Some(cluster) = &hit.cluster {
                for item in cluster {
                    let _ = writeln!(out, "    - {} ({})", item.title, item.url);
                }
            }
        }
    }

    if let Some(news) = &resp.news {
        let _ = writeln!(out, "\nNews");
        for hit in &news.results {
            let breaking = if hit.breaking { " [breaking]" } else { "" };
            let _ = writeln!(out, "  {}{breaking}", hit.title);
            let _ = writeln!(out, "    {}", hit.url);
            if let Some(age) = &hit.age {
                let _ = writeln!(out, "    {age}");
            }
        }
    }

    if let Some(videos) = &resp.videos {
        let _ = writeln!(out, "\nVideos");
        for hit in &videos.results {
            let _ = writeln!(out, "  {}", hit.title);
            let _ = writeln!(out, "    {}", hit.url);
        }
    }

    out
}
