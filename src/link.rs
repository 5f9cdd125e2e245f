//! Hyperlink payload: the attributes a link node carries.
//!
//! [`LinkData`] mirrors the anchor attributes of HTML (`href`, `hreflang`,
//! `target`, `rel`, `type`, `referrerpolicy`, `media`, `ping`, `download`)
//! without interpreting any of them. The tree in [`crate::arena`] treats the
//! payload as opaque cargo.

use std::fmt;

use itertools::Itertools;

use crate::title::Title;

/// Browsing context a link opens in.
///
/// The four keyword contexts plus arbitrary named frames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// `_blank`: a new tab or window
    Blank,
    /// `_self`: the current browsing context
    Current,
    /// `_parent`: the parent browsing context
    Parent,
    /// `_top`: the topmost browsing context
    Top,
    /// A named frame or window
    Named(String),
}

impl Target {
    pub fn as_str(&self) -> &str {
        match self {
            Target::Blank => "_blank",
            Target::Current => "_self",
            Target::Parent => "_parent",
            Target::Top => "_top",
            Target::Named(name) => name,
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Target {
    fn from(value: &str) -> Self {
        match value {
            "_blank" => Target::Blank,
            "_self" => Target::Current,
            "_parent" => Target::Parent,
            "_top" => Target::Top,
            name => Target::Named(name.to_string()),
        }
    }
}

/// Attributes of a single hyperlink.
///
/// All fields are optional; a bare `LinkData::default()` is a valid payload
/// for structural nodes like menu groups that never render as anchors.
#[derive(Debug, Clone, Default)]
pub struct LinkData {
    pub title: Option<Title>,
    pub href: Option<String>,
    pub hreflang: Option<String>,
    pub target: Option<Target>,
    pub rel: Option<String>,
    pub media_type: Option<String>,
    pub referrer_policy: Option<String>,
    pub media: Option<String>,
    /// URLs notified when the link is followed, one POST per entry
    pub ping: Vec<String>,
    pub is_download: bool,
}

impl LinkData {
    pub fn new(title: impl Into<Title>) -> Self {
        LinkData {
            title: Some(title.into()),
            ..LinkData::default()
        }
    }

    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    pub fn with_hreflang(mut self, hreflang: impl Into<String>) -> Self {
        self.hreflang = Some(hreflang.into());
        self
    }

    pub fn with_target(mut self, target: Target) -> Self {
        self.target = Some(target);
        self
    }

    pub fn with_rel(mut self, rel: impl Into<String>) -> Self {
        self.rel = Some(rel.into());
        self
    }

    pub fn with_media_type(mut self, media_type: impl Into<String>) -> Self {
        self.media_type = Some(media_type.into());
        self
    }

    pub fn with_referrer_policy(mut self, policy: impl Into<String>) -> Self {
        self.referrer_policy = Some(policy.into());
        self
    }

    pub fn with_media(mut self, media: impl Into<String>) -> Self {
        self.media = Some(media.into());
        self
    }

    pub fn with_download(mut self, is_download: bool) -> Self {
        self.is_download = is_download;
        self
    }

    pub fn add_ping(&mut self, url: impl Into<String>) {
        self.ping.push(url.into());
    }

    /// Removes every occurrence of `url` from the ping list.
    pub fn remove_ping(&mut self, url: &str) {
        self.ping.retain(|entry| entry != url);
    }

    /// The `ping` attribute value: entries joined by spaces, `None` when the
    /// list is empty.
    pub fn ping_attr(&self) -> Option<String> {
        if self.ping.is_empty() {
            None
        } else {
            Some(self.ping.iter().join(" "))
        }
    }

    /// Replaces the ping list from a space separated attribute value.
    pub fn set_ping_attr(&mut self, value: &str) {
        self.ping = value.split_whitespace().map(str::to_string).collect();
    }
}

impl fmt::Display for LinkData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(title) = &self.title {
            write!(f, "{title}")
        } else if let Some(href) = &self.href {
            f.write_str(href)
        } else {
            f.write_str("link")
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("_blank", Target::Blank)]
    #[case("_self", Target::Current)]
    #[case("_parent", Target::Parent)]
    #[case("_top", Target::Top)]
    #[case("sidebar", Target::Named("sidebar".to_string()))]
    fn given_attribute_value_when_parsed_then_roundtrips(
        #[case] value: &str,
        #[case] expected: Target,
    ) {
        let target = Target::from(value);
        assert_eq!(target, expected);
        assert_eq!(target.as_str(), value);
    }

    #[test]
    fn given_builder_chain_when_built_then_all_fields_set() {
        let data = LinkData::new("Downloads")
            .with_href("/downloads")
            .with_hreflang("en")
            .with_target(Target::Blank)
            .with_rel("noopener")
            .with_media_type("text/html")
            .with_referrer_policy("no-referrer")
            .with_media("screen")
            .with_download(true);

        assert_eq!(data.href.as_deref(), Some("/downloads"));
        assert_eq!(data.hreflang.as_deref(), Some("en"));
        assert_eq!(data.target, Some(Target::Blank));
        assert_eq!(data.rel.as_deref(), Some("noopener"));
        assert_eq!(data.media_type.as_deref(), Some("text/html"));
        assert_eq!(data.referrer_policy.as_deref(), Some("no-referrer"));
        assert_eq!(data.media.as_deref(), Some("screen"));
        assert!(data.is_download);
    }

    #[test]
    fn given_ping_entries_when_rendered_then_joined_by_spaces() {
        let mut data = LinkData::new("Tracked");
        assert_eq!(data.ping_attr(), None);

        data.add_ping("https://a.example/ping");
        data.add_ping("https://b.example/ping");

        assert_eq!(
            data.ping_attr().as_deref(),
            Some("https://a.example/ping https://b.example/ping")
        );
    }

    #[test]
    fn given_ping_entry_when_removed_then_attribute_shrinks() {
        let mut data = LinkData::default();
        data.set_ping_attr("https://a.example/ping https://b.example/ping");
        data.remove_ping("https://a.example/ping");

        assert_eq!(data.ping_attr().as_deref(), Some("https://b.example/ping"));

        data.remove_ping("https://b.example/ping");
        assert_eq!(data.ping_attr(), None);
    }

    #[test]
    fn given_no_title_when_displayed_then_falls_back_to_href() {
        let data = LinkData::default().with_href("/imprint");
        assert_eq!(data.to_string(), "/imprint");

        let bare = LinkData::default();
        assert_eq!(bare.to_string(), "link");
    }
}
