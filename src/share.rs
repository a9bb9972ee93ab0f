//! Article links and social share URLs

use crate::article::Article;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use url::Url;

/// Networks an article can be shared to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SharePlatform {
    Facebook,
    Twitter,
    #[value(name = "linkedin")]
    LinkedIn,
}

impl SharePlatform {
    /// Every supported platform
    pub const ALL: [Self; 3] = [Self::Facebook, Self::Twitter, Self::LinkedIn];

    pub fn name(self) -> &'static str {
        match self {
            Self::Facebook => "facebook",
            Self::Twitter => "twitter",
            Self::LinkedIn => "linkedin",
        }
    }
}

/// Detail-page URL of an article under `site`
pub fn article_url(site: &Url, article: &Article) -> Result<Url> {
    let mut url = site.clone();
    url.set_query(None);
    url.set_fragment(None);
    url.path_segments_mut()
        .map_err(|()| Error::invalid_value("site", format!("'{site}' cannot be a base URL")))?
        .pop_if_empty()
        .push(&article.id);
    Ok(url)
}

/// Share URL for one platform, with every parameter percent-encoded
pub fn share_url(platform: SharePlatform, page_url: &Url, title: &str) -> Result<Url> {
    let page = page_url.as_str();
    let url = match platform {
        SharePlatform::Facebook => {
            Url::parse_with_params("https://www.facebook.com/sharer/sharer.php", &[("u", page)])?
        }
        SharePlatform::Twitter => Url::parse_with_params(
            "https://twitter.com/intent/tweet",
            &[("text", title), ("url", page)],
        )?,
        SharePlatform::LinkedIn => Url::parse_with_params(
            "https://www.linkedin.com/sharing/share-offsite/",
            &[("url", page)],
        )?,
    };
    Ok(url)
}

/// One share link
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShareLink {
    pub platform: SharePlatform,
    pub url: String,
}

/// Share links for every platform, pointing at the article's page
pub fn share_links(site: &Url, article: &Article) -> Result<Vec<ShareLink>> {
    let page = article_url(site, article)?;
    SharePlatform::ALL
        .iter()
        .map(|&platform| {
            Ok(ShareLink {
                platform,
                url: share_url(platform, &page, &article.title)?.into(),
            })
        })
        .collect()
}
