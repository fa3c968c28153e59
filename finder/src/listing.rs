//! Crawling of plain HTML directory indexes.

use crate::cache::RepoCache;
use regex::Regex;
use srcfind_common::errors::*;
use std::cmp::Ordering;
use std::sync::LazyLock;

static ANCHOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<a\s[^>]*?href\s*=\s*"([^"]*)"[^>]*>(.*?)</a>"#).unwrap()
});
static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());
static VERSION_DIR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+\.\d").unwrap());

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub href: String,
    pub text: String,
}

impl Link {
    /// The entry name with any trailing directory slash removed.
    pub fn name(&self) -> &str {
        self.text.trim_end_matches('/')
    }
}

pub fn parse_links(html: &str) -> Vec<Link> {
    ANCHOR
        .captures_iter(html)
        .map(|cap| {
            let text = TAG.replace_all(&cap[2], "");
            Link {
                href: cap[1].to_string(),
                text: text.trim().to_string(),
            }
        })
        .collect()
}

/// The distribution major encoded in a release, eg. `7` for `.el7` with marker `el`.
pub fn release_major(version: &str, marker: &str) -> Option<u32> {
    let tag = format!(".{marker}");
    version.match_indices(&tag).find_map(|(idx, _)| {
        let rest = &version[idx + tag.len()..];
        let end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        rest[..end].parse().ok()
    })
}

fn numeric_parts(dir: &str) -> Vec<u64> {
    dir.split(|c: char| !c.is_ascii_digit())
        .filter(|s| !s.is_empty())
        .filter_map(|s| s.parse().ok())
        .collect()
}

fn newest_first(a: &str, b: &str) -> Ordering {
    numeric_parts(b)
        .cmp(&numeric_parts(a))
        .then_with(|| b.cmp(a))
}

/// Keep version-numbered release directories, newest first.
///
/// Pre-releases and the floating single-number directories (`7/` pointing at
/// the current point release) are dropped. With a `major` only directories of
/// that major are kept.
pub fn version_dirs<'a, I>(names: I, major: Option<u32>) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut dirs = names
        .into_iter()
        .map(|name| name.trim_end_matches('/'))
        .filter(|name| VERSION_DIR.is_match(name))
        .filter(|name| {
            let lower = name.to_ascii_lowercase();
            !lower.contains("beta") && !lower.contains("-rc")
        })
        .filter(|name| match major {
            Some(major) => numeric_parts(name).first() == Some(&(major as u64)),
            None => true,
        })
        .map(String::from)
        .collect::<Vec<_>>();
    dirs.sort_by(|a, b| newest_first(a, b));
    dirs.dedup();
    dirs
}

/// Fetch a directory index and return its version directories.
pub fn fetch_version_dirs(cache: &RepoCache, url: &str, major: Option<u32>) -> Result<Vec<String>> {
    let body = cache
        .get_content(url)
        .with_context(|| anyhow!("Failed to fetch directory listing {:?}", url))?;
    let html = String::from_utf8_lossy(&body);
    let links = parse_links(&html);
    let dirs = version_dirs(links.iter().map(Link::name), major);
    debug!("Found {} release directories in {:?}: {:?}", dirs.len(), url, dirs);
    Ok(dirs)
}
