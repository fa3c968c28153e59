use serde::{Deserialize, Serialize};
use srcfind_common::errors::*;
use std::io::Read;

#[derive(Debug, Serialize, Deserialize)]
pub struct RepomdXml {
    #[serde(rename = "#content")]
    pub data: Vec<RepomdXmlItem>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RepomdXmlItem {
    #[serde(rename = "@type")]
    pub item_type: Option<String>,
    pub location: Option<RepomdXmlLocation>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RepomdXmlLocation {
    #[serde(rename = "@href")]
    pub href: String,
}

pub fn primary_location(bytes: &[u8]) -> Result<String> {
    let list = serde_xml_rs::from_reader::<RepomdXml, _>(bytes)?;
    let primary = list
        .data
        .into_iter()
        .find(|x| x.item_type.as_deref() == Some("primary"))
        .context("Failed to find 'primary' in repomd file")?;
    let location = primary
        .location
        .context("Failed to find 'location' attribute")?;
    Ok(location.href)
}

pub fn parse_primary<R: Read>(r: R) -> Result<Vec<PackagesXmlItem>> {
    let list = serde_xml_rs::from_reader::<PackagesXml, _>(r)?;
    Ok(list.packages)
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PackagesXml {
    #[serde(rename = "#content")]
    pub packages: Vec<PackagesXmlItem>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct PackagesXmlItem {
    pub name: String,
    pub arch: String,
    pub version: PackagesXmlItemVersion,
    pub location: PackagesXmlItemLocation,
    #[serde(default)]
    pub format: PackagesXmlItemMetadata,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct PackagesXmlItemVersion {
    #[serde(rename = "@epoch", default)]
    pub epoch: String,
    #[serde(rename = "@ver")]
    pub ver: String,
    #[serde(rename = "@rel")]
    pub rel: String,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct PackagesXmlItemLocation {
    #[serde(rename = "@href")]
    pub href: String,
}

#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PackagesXmlItemMetadata {
    // empty for source packages
    #[serde(rename = "rpm:sourcerpm", default)]
    pub sourcerpm: Option<String>,
}
