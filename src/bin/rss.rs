use std::fs::{self, File};

use hadex_portfolio::content::{POSTS, PROFILE, SITE};
use hadex_portfolio::error::SiteError;
use hadex_portfolio::rss::build_channel;

fn main() -> Result<(), SiteError> {
    let channel = build_channel(&SITE, &PROFILE, POSTS)?;

    fs::create_dir_all("public")?;
    let file = File::create("public/rss.xml")?;
    channel
        .pretty_write_to(file, b' ', 2)
        .map_err(|e| SiteError::Feed(e.to_string()))?;
    Ok(())
}
