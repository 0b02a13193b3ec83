use chrono::{NaiveTime, TimeZone, Utc};
use rss::{
    extension::atom::{AtomExtensionBuilder, Link},
    Channel, ChannelBuilder, GuidBuilder, ItemBuilder,
};

use crate::content::{Post, Profile, SiteMeta};
use crate::error::SiteError;

pub fn build_channel(
    site: &SiteMeta,
    profile: &Profile,
    posts: &[Post],
) -> Result<Channel, SiteError> {
    let items = posts
        .iter()
        .map(|p| {
            let published = p.published().ok_or_else(|| SiteError::PostDate {
                title: p.title.to_string(),
                date: p.date.to_string(),
            })?;
            let pub_date = Utc.from_utc_datetime(&published.and_time(NaiveTime::MIN));
            // posts have no pages of their own, so they all point at the writing section
            let link = format!("{}/#blog", site.url);
            let guid = GuidBuilder::default()
                .value(format!("{link}/{}", slug(p.title)))
                .permalink(false)
                .build();
            Ok(ItemBuilder::default()
                .title(p.title.to_string())
                .description(p.excerpt.to_string())
                .author(format!("{} ({})", profile.email, profile.name))
                .pub_date(pub_date.to_rfc2822())
                .link(link)
                .guid(guid)
                .build())
        })
        .collect::<Result<Vec<_>, SiteError>>()?;

    let mut atom_link = Link::default();
    atom_link.set_rel("self");
    atom_link.set_href(format!("{}/rss.xml", site.url));
    atom_link.set_mime_type("application/rss+xml".to_string());

    Ok(ChannelBuilder::default()
        .title(format!("{} | Writing & Talks", profile.name))
        .description(site.twitter_description.to_string())
        .link(site.url.to_string())
        .language("en-us".to_string())
        .ttl("60".to_string())
        .atom_ext(AtomExtensionBuilder::default().links(vec![atom_link]).build())
        .items(items)
        .build())
}

fn slug(title: &str) -> String {
    title
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_ascii_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{POSTS, PROFILE, SITE};

    #[test]
    fn test_build_channel() {
        let channel = build_channel(&SITE, &PROFILE, POSTS).expect("posts have valid dates");
        assert_eq!(channel.items().len(), POSTS.len());

        let item = &channel.items()[0];
        assert_eq!(item.title(), Some(POSTS[0].title));
        assert_eq!(item.description(), Some(POSTS[0].excerpt));
        assert_eq!(item.pub_date(), Some("Tue, 1 Jul 2025 00:00:00 +0000"));
        assert_eq!(
            item.guid().map(|g| g.value()),
            Some("https://portfolio-hadex.vercel.app/#blog/beyond-accuracy-evaluating-ml-with-business-kpis")
        );
    }

    #[test]
    fn test_bad_post_date() {
        let posts = [Post {
            date: "soon",
            ..POSTS[0]
        }];
        let err = build_channel(&SITE, &PROFILE, &posts).unwrap_err();
        assert!(matches!(err, SiteError::PostDate { .. }));
    }

    #[test]
    fn test_slug() {
        assert_eq!(slug("Beyond Accuracy: ML & KPIs"), "beyond-accuracy-ml-kpis");
    }
}
