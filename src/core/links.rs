use crate::domain::model::KeywordSet;
use url::Url;

/// Stock-footage marketplaces the tool links out to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPlatform {
    YouTube,
    Pexels,
    Shutterstock,
    Artgrid,
    Pond5,
    Pinterest,
}

impl SearchPlatform {
    pub const ALL: [SearchPlatform; 6] = [
        SearchPlatform::YouTube,
        SearchPlatform::Pexels,
        SearchPlatform::Shutterstock,
        SearchPlatform::Artgrid,
        SearchPlatform::Pond5,
        SearchPlatform::Pinterest,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SearchPlatform::YouTube => "YouTube",
            SearchPlatform::Pexels => "Pexels",
            SearchPlatform::Shutterstock => "Shutterstock",
            SearchPlatform::Artgrid => "Artgrid",
            SearchPlatform::Pond5 => "Pond5",
            SearchPlatform::Pinterest => "Pinterest",
        }
    }
}

// Bases are compile-time constants and always parse.

fn query_url(base: &str, param: &str, query: &str) -> Url {
    let mut url = Url::parse(base).unwrap();
    url.query_pairs_mut().append_pair(param, query);
    url
}

fn segment_url(base: &str, query: &str) -> Url {
    let mut url = Url::parse(base).unwrap();
    url.path_segments_mut()
        .unwrap()
        .pop_if_empty()
        .push(query);
    url
}

/// Builds an outbound search URL for one platform. Pexels, Shutterstock and
/// Pond5 take the query as a percent-encoded path segment; the rest take a
/// query parameter. YouTube searches get a "cinematic b-roll" suffix so
/// results skew toward usable footage.
pub fn search_url(platform: SearchPlatform, query: &str) -> Url {
    match platform {
        SearchPlatform::YouTube => query_url(
            "https://www.youtube.com/results",
            "search_query",
            &format!("{} cinematic b-roll", query),
        ),
        SearchPlatform::Pexels => segment_url("https://www.pexels.com/search/videos/", query),
        SearchPlatform::Shutterstock => {
            segment_url("https://www.shutterstock.com/video/search/", query)
        }
        SearchPlatform::Artgrid => query_url("https://artgrid.io/search", "term", query),
        SearchPlatform::Pond5 => segment_url("https://www.pond5.com/stock-footage/", query),
        SearchPlatform::Pinterest => {
            query_url("https://www.pinterest.com/search/pins/", "q", query)
        }
    }
}

/// One (platform, url) pair per supported marketplace, using the keyword
/// set's primary query.
pub fn search_links(set: &KeywordSet) -> Vec<(SearchPlatform, Url)> {
    let query = set.primary_query();
    SearchPlatform::ALL
        .iter()
        .map(|&platform| (platform, search_url(platform, query)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_platforms_encode_query_in_path() {
        let url = search_url(SearchPlatform::Shutterstock, "tired nurse night shift");
        assert_eq!(
            url.as_str(),
            "https://www.shutterstock.com/video/search/tired%20nurse%20night%20shift"
        );

        let url = search_url(SearchPlatform::Pexels, "tired nurse");
        assert_eq!(
            url.as_str(),
            "https://www.pexels.com/search/videos/tired%20nurse"
        );

        let url = search_url(SearchPlatform::Pond5, "tired nurse");
        assert_eq!(
            url.as_str(),
            "https://www.pond5.com/stock-footage/tired%20nurse"
        );
    }

    #[test]
    fn test_artgrid_uses_term_parameter() {
        let url = search_url(SearchPlatform::Artgrid, "tired nurse");
        assert_eq!(url.as_str(), "https://artgrid.io/search?term=tired+nurse");
    }

    #[test]
    fn test_youtube_url_appends_broll_suffix() {
        let url = search_url(SearchPlatform::YouTube, "sunrise over mountains");
        assert!(url
            .query_pairs()
            .any(|(k, v)| k == "search_query" && v == "sunrise over mountains cinematic b-roll"));
    }

    #[test]
    fn test_search_links_covers_all_platforms() {
        let set = KeywordSet {
            literal: vec!["man typing".to_string()],
            conceptual: vec![],
            emotional: vec![],
            technical: vec![],
            search_phrases: vec![],
        };

        let links = search_links(&set);
        assert_eq!(links.len(), SearchPlatform::ALL.len());
        // No search phrases, so the literal keyword is the query.
        assert!(links
            .iter()
            .all(|(_, url)| url.as_str().contains("man+typing")
                || url.as_str().contains("man%20typing")));
    }
}
