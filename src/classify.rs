use url::Url;

/// Decide whether `link` is a profile/channel/page on `platform_domain`, as
/// opposed to a post, video, or search page. Returns the normalized URL for
/// profiles, `None` for everything else (including unparseable links).
///
/// The rules are per-platform and keyed off the first path segment; they track
/// the URL layouts observed as of 2025 and may need updating as platforms
/// reshuffle their routes.
pub fn classify(link: &str, platform_domain: &str) -> Option<String> {
    let parsed = Url::parse(link).ok()?;
    let scheme = parsed.scheme();
    let host = parsed.host_str()?;
    let bare_host = host.strip_prefix("www.").unwrap_or(host);
    if !bare_host.eq_ignore_ascii_case(platform_domain) {
        return None;
    }

    let path = parsed.path().trim_end_matches('/');
    let query = parsed.query().unwrap_or("");
    // Query and fragment dropped, host kept as given.
    let cleaned = format!("{}://{}{}", scheme, host, path);

    let mut segments = path.trim_start_matches('/').split('/');
    let first = segments.next().unwrap_or("");
    let second = segments.next();

    let profile_of = |segment: &str| format!("{}://{}/{}", scheme, platform_domain, segment);

    match platform_domain {
        "instagram.com" => {
            const CONTENT: [&str; 4] = ["p", "reels", "stories", "explore"];
            (!first.is_empty() && !CONTENT.contains(&first)).then(|| profile_of(first))
        }
        "twitter.com" | "x.com" => {
            const CONTENT: [&str; 6] =
                ["i", "status", "explore", "home", "notifications", "messages"];
            (!first.is_empty() && !CONTENT.contains(&first)).then(|| profile_of(first))
        }
        "tiktok.com" => {
            const CONTENT: [&str; 5] = ["video", "music", "explore", "discover", "tag"];
            if first.starts_with('@') {
                Some(profile_of(first))
            } else if !first.is_empty() && !CONTENT.contains(&first) {
                // Profile links occasionally omit the '@'; let the operator
                // confirm.
                Some(profile_of(first))
            } else {
                None
            }
        }
        "facebook.com" => {
            const CONTENT: [&str; 8] = [
                "/posts", "/videos", "/photos", "/story.php", "/watch", "/events", "/notes",
                "/sharer",
            ];
            const UTILITY: [&str; 7] = [
                "login.php", "signup.php", "help", "settings", "ajax", "dialog", "photo.php",
            ];
            if CONTENT.iter().any(|p| path.contains(p)) || UTILITY.contains(&first) {
                return None;
            }
            if path.contains("profile.php") && query.contains("id=") {
                // Numeric profiles only exist with their id query.
                return Some(link.to_string());
            }
            if query.is_empty() || !query.contains("sk=") {
                return Some(cleaned);
            }
            None
        }
        "youtube.com" => {
            let accepted = first == "channel"
                || first == "c"
                || first.starts_with('@')
                || (first == "user" && second.is_some())
                || first.is_empty();
            accepted.then_some(cleaned)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::classify;

    #[test]
    fn instagram_profile_accepted_and_normalized() {
        assert_eq!(
            classify("https://www.instagram.com/janedoe/?hl=en", "instagram.com").as_deref(),
            Some("https://instagram.com/janedoe"),
        );
        assert_eq!(
            classify("https://instagram.com/janedoe", "instagram.com").as_deref(),
            Some("https://instagram.com/janedoe"),
        );
    }

    #[test]
    fn instagram_content_paths_rejected() {
        assert_eq!(classify("https://www.instagram.com/p/abc123/", "instagram.com"), None);
        assert_eq!(classify("https://instagram.com/reels/xyz", "instagram.com"), None);
        assert_eq!(classify("https://instagram.com/explore/tags/dpr", "instagram.com"), None);
        assert_eq!(classify("https://instagram.com/", "instagram.com"), None);
    }

    #[test]
    fn twitter_profile_vs_status() {
        // Rejection keys off the first path segment, so a status link still
        // yields the owning profile.
        assert_eq!(
            classify("https://twitter.com/janedoe/status/123", "twitter.com").as_deref(),
            Some("https://twitter.com/janedoe"),
        );
        assert_eq!(
            classify("https://twitter.com/status/123", "twitter.com"),
            None,
        );
        assert_eq!(
            classify("https://twitter.com/i/flow/login", "twitter.com"),
            None,
        );
        assert_eq!(
            classify("https://www.twitter.com/janedoe", "twitter.com").as_deref(),
            Some("https://twitter.com/janedoe"),
        );
        // x.com results do not pass a twitter.com domain gate.
        assert_eq!(classify("https://x.com/janedoe", "twitter.com"), None);
        assert_eq!(
            classify("https://x.com/janedoe", "x.com").as_deref(),
            Some("https://x.com/janedoe"),
        );
    }

    #[test]
    fn tiktok_handles_and_bare_usernames() {
        assert_eq!(
            classify("https://www.tiktok.com/@janedoe?lang=en", "tiktok.com").as_deref(),
            Some("https://tiktok.com/@janedoe"),
        );
        assert_eq!(
            classify("https://tiktok.com/janedoe", "tiktok.com").as_deref(),
            Some("https://tiktok.com/janedoe"),
        );
        assert_eq!(
            classify("https://www.tiktok.com/@janedoe/video/7123", "tiktok.com").as_deref(),
            Some("https://tiktok.com/@janedoe"),
        );
        assert_eq!(classify("https://tiktok.com/discover/dpr-ri", "tiktok.com"), None);
        assert_eq!(classify("https://tiktok.com/tag/dpr", "tiktok.com"), None);
    }

    #[test]
    fn facebook_profile_php_keeps_query() {
        let link = "https://www.facebook.com/profile.php?id=100012345";
        assert_eq!(classify(link, "facebook.com").as_deref(), Some(link));
    }

    #[test]
    fn facebook_pages_and_rejections() {
        assert_eq!(
            classify("https://www.facebook.com/janedoe/", "facebook.com").as_deref(),
            Some("https://www.facebook.com/janedoe"),
        );
        assert_eq!(
            classify("https://www.facebook.com/janedoe/posts/123", "facebook.com"),
            None,
        );
        assert_eq!(
            classify("https://www.facebook.com/watch/?v=123", "facebook.com"),
            None,
        );
        assert_eq!(
            classify("https://www.facebook.com/janedoe?sk=photos", "facebook.com"),
            None,
        );
        assert_eq!(
            classify("https://www.facebook.com/login.php", "facebook.com"),
            None,
        );
    }

    #[test]
    fn youtube_channels_users_and_watch() {
        assert_eq!(classify("https://youtube.com/watch?v=xyz", "youtube.com"), None);
        assert_eq!(classify("https://youtube.com/shorts/abc", "youtube.com"), None);
        assert_eq!(
            classify("https://www.youtube.com/channel/UCabc123", "youtube.com").as_deref(),
            Some("https://www.youtube.com/channel/UCabc123"),
        );
        assert_eq!(
            classify("https://youtube.com/@janedoe?si=x", "youtube.com").as_deref(),
            Some("https://youtube.com/@janedoe"),
        );
        assert_eq!(
            classify("https://youtube.com/user/janedoe", "youtube.com").as_deref(),
            Some("https://youtube.com/user/janedoe"),
        );
        // Bare /user without a handle is not a channel.
        assert_eq!(classify("https://youtube.com/user", "youtube.com"), None);
        assert_eq!(
            classify("https://www.youtube.com/", "youtube.com").as_deref(),
            Some("https://www.youtube.com"),
        );
    }

    #[test]
    fn domain_gate_and_garbage() {
        assert_eq!(classify("janedoe", "instagram.com"), None);
        assert_eq!(classify("not a url at all", "instagram.com"), None);
        assert_eq!(classify("https://example.com/janedoe", "instagram.com"), None);
        assert_eq!(
            classify("https://WWW.Instagram.COM/janedoe", "instagram.com").as_deref(),
            Some("https://instagram.com/janedoe"),
        );
    }
}
