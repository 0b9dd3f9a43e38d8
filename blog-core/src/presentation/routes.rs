use std::collections::BTreeMap;

use tracing::debug;

const MAX_REDIRECTS: usize = 8;
const CATCH_ALL_PARAM: &str = "pathMatch";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageId {
    Home,
    ArticleList,
    ArticleDetail,
    FriendLinks,
    AboutMe,
    NotFound,
}

impl PageId {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::ArticleList => "articles",
            Self::ArticleDetail => "articleDetail",
            Self::FriendLinks => "friendLinks",
            Self::AboutMe => "aboutMe",
            Self::NotFound => "notFound",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteTarget {
    Page(PageId),
    Redirect(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub pattern: &'static str,
    pub target: RouteTarget,
}

impl Route {
    pub const fn page(pattern: &'static str, page: PageId) -> Self {
        Self {
            pattern,
            target: RouteTarget::Page(page),
        }
    }

    pub const fn redirect(pattern: &'static str, to: &'static str) -> Self {
        Self {
            pattern,
            target: RouteTarget::Redirect(to),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    pub page: PageId,
    /// Normalized path that produced the match, after redirects.
    pub path: String,
    pub params: BTreeMap<String, String>,
    pub redirected_from: Option<String>,
}

impl RouteMatch {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}

/// Ordered path rules, evaluated top to bottom; the first match wins.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    pub fn new(routes: Vec<Route>) -> Self {
        Self { routes }
    }

    pub fn standard() -> Self {
        Self::new(vec![
            Route::page("/", PageId::Home),
            Route::page("/articles", PageId::ArticleList),
            Route::page("/article/:id", PageId::ArticleDetail),
            Route::redirect("/blog", "/articles"),
            Route::page("/friend-links", PageId::FriendLinks),
            Route::page("/aboutme", PageId::AboutMe),
            Route::page("/*", PageId::NotFound),
        ])
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Query string and fragment are ignored, a trailing slash is accepted and
    /// static segments compare case-insensitively.
    pub fn resolve(&self, raw_path: &str) -> RouteMatch {
        let mut path = normalize(raw_path);
        let mut redirected_from = None;

        for _ in 0..=MAX_REDIRECTS {
            let segments = split(&path);
            let hit = self.routes.iter().find_map(|route| {
                match_segments(route.pattern, &segments).map(|params| (route.target, params))
            });

            match hit {
                Some((RouteTarget::Page(page), params)) => {
                    debug!(path = %path, page = page.name(), "route resolved");
                    return RouteMatch {
                        page,
                        path,
                        params,
                        redirected_from,
                    };
                }
                Some((RouteTarget::Redirect(to), _)) => {
                    debug!(from = %path, to, "route redirected");
                    redirected_from.get_or_insert_with(|| path.clone());
                    path = normalize(to);
                }
                None => break,
            }
        }

        RouteMatch {
            page: PageId::NotFound,
            path,
            params: BTreeMap::new(),
            redirected_from,
        }
    }

    /// Builds the path of the first rule rendering `page`. `None` when the page
    /// has no concrete rule or a parameter is missing.
    pub fn path_for(&self, page: PageId, params: &[(&str, &str)]) -> Option<String> {
        let route = self.routes.iter().find(|route| {
            route.target == RouteTarget::Page(page) && !route.pattern.contains('*')
        })?;

        let mut built = Vec::new();
        for segment in split(route.pattern) {
            match segment.strip_prefix(':') {
                Some(name) => {
                    let (_, value) = params.iter().find(|(key, _)| *key == name)?;
                    built.push(urlencoding::encode(value).into_owned());
                }
                None => built.push(segment.to_string()),
            }
        }
        Some(format!("/{}", built.join("/")))
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::standard()
    }
}

fn normalize(raw: &str) -> String {
    let end = raw.find(['?', '#']).unwrap_or(raw.len());
    let trimmed = raw[..end].trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return "/".to_string();
    }
    if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}

fn split(path: &str) -> Vec<&str> {
    let inner = path.trim_matches('/');
    if inner.is_empty() {
        Vec::new()
    } else {
        inner.split('/').collect()
    }
}

fn match_segments(pattern: &str, segments: &[&str]) -> Option<BTreeMap<String, String>> {
    let mut params = BTreeMap::new();
    let pattern = split(pattern);

    for (index, expected) in pattern.iter().enumerate() {
        if *expected == "*" {
            params.insert(CATCH_ALL_PARAM.to_string(), segments.get(index..)?.join("/"));
            return Some(params);
        }

        let actual = segments.get(index)?;
        match expected.strip_prefix(':') {
            Some(name) => {
                if actual.is_empty() {
                    return None;
                }
                let value = urlencoding::decode(actual)
                    .map(|decoded| decoded.into_owned())
                    .unwrap_or_else(|_| actual.to_string());
                params.insert(name.to_string(), value);
            }
            None if expected.eq_ignore_ascii_case(actual) => {}
            None => return None,
        }
    }

    (pattern.len() == segments.len()).then_some(params)
}

#[cfg(test)]
mod tests {
    use super::{PageId, Route, RouteTable};

    fn resolve(path: &str) -> super::RouteMatch {
        RouteTable::standard().resolve(path)
    }

    #[test]
    fn maps_every_static_path() {
        assert_eq!(resolve("/").page, PageId::Home);
        assert_eq!(resolve("/articles").page, PageId::ArticleList);
        assert_eq!(resolve("/friend-links").page, PageId::FriendLinks);
        assert_eq!(resolve("/aboutme").page, PageId::AboutMe);
    }

    #[test]
    fn article_detail_passes_id_through() {
        let matched = resolve("/article/42");
        assert_eq!(matched.page, PageId::ArticleDetail);
        assert_eq!(matched.param("id"), Some("42"));
    }

    #[test]
    fn article_id_is_percent_decoded() {
        let matched = resolve("/article/hello%20world");
        assert_eq!(matched.param("id"), Some("hello world"));
    }

    #[test]
    fn blog_redirects_to_articles() {
        let matched = resolve("/blog");
        assert_eq!(matched.page, PageId::ArticleList);
        assert_eq!(matched.path, "/articles");
        assert_eq!(matched.redirected_from.as_deref(), Some("/blog"));
    }

    #[test]
    fn unknown_paths_fall_into_catch_all() {
        let matched = resolve("/does/not/exist");
        assert_eq!(matched.page, PageId::NotFound);
        assert_eq!(matched.param("pathMatch"), Some("does/not/exist"));

        assert_eq!(resolve("/article").page, PageId::NotFound);
        assert_eq!(resolve("/article/1/comments").page, PageId::NotFound);
    }

    #[test]
    fn ignores_query_fragment_and_trailing_slash() {
        assert_eq!(resolve("/articles/?page=2#top").page, PageId::ArticleList);
        assert_eq!(resolve("").page, PageId::Home);
        assert_eq!(resolve("articles").page, PageId::ArticleList);
    }

    #[test]
    fn static_segments_are_case_insensitive() {
        assert_eq!(resolve("/AboutMe").page, PageId::AboutMe);
        assert_eq!(resolve("/Article/AbC").param("id"), Some("AbC"));
    }

    #[test]
    fn first_matching_rule_wins() {
        let table = RouteTable::new(vec![
            Route::page("/article/:id", PageId::ArticleDetail),
            Route::page("/article/special", PageId::AboutMe),
        ]);
        assert_eq!(table.resolve("/article/special").page, PageId::ArticleDetail);
    }

    #[test]
    fn redirect_loop_ends_in_not_found() {
        let table = RouteTable::new(vec![Route::redirect("/a", "/b"), Route::redirect("/b", "/a")]);
        let matched = table.resolve("/a");
        assert_eq!(matched.page, PageId::NotFound);
        assert_eq!(matched.redirected_from.as_deref(), Some("/a"));
    }

    #[test]
    fn table_without_catch_all_still_resolves() {
        let table = RouteTable::new(vec![Route::page("/", PageId::Home)]);
        assert_eq!(table.resolve("/missing").page, PageId::NotFound);
    }

    #[test]
    fn path_for_builds_named_paths() {
        let table = RouteTable::standard();
        assert_eq!(table.path_for(PageId::Home, &[]).as_deref(), Some("/"));
        assert_eq!(
            table.path_for(PageId::ArticleDetail, &[("id", "a b")]).as_deref(),
            Some("/article/a%20b")
        );
        assert!(table.path_for(PageId::ArticleDetail, &[]).is_none());
        assert!(table.path_for(PageId::NotFound, &[]).is_none());
    }

    #[test]
    fn page_names_follow_route_names() {
        assert_eq!(PageId::ArticleDetail.name(), "articleDetail");
        assert_eq!(PageId::FriendLinks.name(), "friendLinks");
    }
}
