//! REST paths, relative to the API base URL.
//!
//! Only paths live here; the frontend prepends `api_base()`.

use urlencoding::encode;

/// `path?k=v&...` with values percent-encoded; `None` pairs are skipped
pub fn with_query(path: &str, params: &[(&str, Option<&str>)]) -> String {
    let query: Vec<String> = params
        .iter()
        .filter_map(|(key, value)| value.map(|v| format!("{}={}", key, encode(v))))
        .collect();
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{}?{}", path, query.join("&"))
    }
}

pub mod configurator {
    use super::with_query;
    use urlencoding::encode;

    pub const GENERATE_EDIT_TOKEN: &str = "/api/configurator/generate-edit-token";
    pub const VERIFY_EDIT_TOKEN: &str = "/api/configurator/verify-edit-token";
    pub const CREATE: &str = "/api/configurator/create";
    pub const UPDATE: &str = "/api/configurator/update";
    pub const DUPLICATE: &str = "/api/configurator/duplicate";

    pub fn by_public_id(public_id: &str, public_key: &str) -> String {
        format!(
            "/api/configurator/{}?publicKey={}",
            encode(public_id),
            encode(public_key)
        )
    }

    pub fn list(token: &str) -> String {
        with_query("/api/configurator/list", &[("token", Some(token))])
    }

    pub fn delete(id: &str, token: &str) -> String {
        with_query(
            "/api/configurator/delete",
            &[("id", Some(id)), ("token", Some(token))],
        )
    }
}

pub mod category {
    use super::with_query;

    pub const CREATE: &str = "/api/category/create";
    pub const UPDATE: &str = "/api/category/update";

    pub fn list(configurator_id: &str) -> String {
        with_query(
            "/api/category/list",
            &[("configuratorId", Some(configurator_id))],
        )
    }

    /// Deletes go through the update route with `DELETE`
    pub fn delete(id: &str, token: &str) -> String {
        with_query(UPDATE, &[("id", Some(id)), ("token", Some(token))])
    }
}

pub mod option {
    use super::with_query;

    pub const CREATE: &str = "/api/option/create";
    pub const UPDATE: &str = "/api/option/update";

    pub fn list(category_id: &str) -> String {
        with_query("/api/option/list", &[("categoryId", Some(category_id))])
    }

    pub fn delete(id: &str, token: &str) -> String {
        with_query(UPDATE, &[("id", Some(id)), ("token", Some(token))])
    }
}

pub mod quote {
    use super::with_query;
    use urlencoding::encode;

    pub const CREATE: &str = "/api/quote/create";
    pub const UPDATE: &str = "/api/quote/update";

    pub fn list(token: &str, status: Option<&str>, configurator_id: Option<&str>) -> String {
        with_query(
            "/api/quote/list",
            &[
                ("status", status),
                ("configuratorId", configurator_id),
                ("token", Some(token)),
            ],
        )
    }

    pub fn by_code(quote_code: &str) -> String {
        format!("/api/quote/{}", encode(quote_code))
    }
}

pub mod theme {
    use super::with_query;

    pub const CREATE: &str = "/api/theme/create";
    pub const UPDATE: &str = "/api/theme/update";

    pub fn list(token: &str) -> String {
        with_query("/api/theme/list", &[("token", Some(token))])
    }

    pub fn delete(id: &str, token: &str) -> String {
        with_query(UPDATE, &[("id", Some(id)), ("token", Some(token))])
    }
}

pub mod email {
    use super::with_query;

    pub const PREVIEW: &str = "/api/email/preview";
    pub const SEND: &str = "/api/email/send";

    pub fn templates(token: &str, template_type: Option<&str>) -> String {
        with_query(
            "/api/email/templates",
            &[("type", template_type), ("token", Some(token))],
        )
    }
}

pub mod files {
    use super::with_query;

    pub const UPLOAD: &str = "/api/files/upload";

    pub fn signed_upload_url(filename: &str, content_type: &str) -> String {
        with_query(
            UPLOAD,
            &[("filename", Some(filename)), ("contentType", Some(content_type))],
        )
    }

    pub fn list(token: &str, file_type: Option<&str>) -> String {
        with_query("/api/files/list", &[("type", file_type), ("token", Some(token))])
    }

    pub fn delete(id: &str, token: &str) -> String {
        with_query("/api/files/delete", &[("id", Some(id)), ("token", Some(token))])
    }
}

pub mod client {
    use super::with_query;

    pub const UPDATE: &str = "/api/client/update";
    pub const DOMAINS: &str = "/api/client/domains";

    pub fn me(token: &str) -> String {
        with_query("/api/client/me", &[("token", Some(token))])
    }

    pub fn domains(token: &str) -> String {
        with_query(DOMAINS, &[("token", Some(token))])
    }
}

pub mod analytics {
    use super::with_query;

    pub fn usage(
        token: &str,
        configurator_id: Option<&str>,
        from: Option<&str>,
        to: Option<&str>,
    ) -> String {
        with_query(
            "/api/analytics/usage",
            &[
                ("configuratorId", configurator_id),
                ("from", from),
                ("to", to),
                ("token", Some(token)),
            ],
        )
    }

    pub fn performance(token: &str, configurator_id: Option<&str>) -> String {
        with_query(
            "/api/analytics/performance",
            &[("configuratorId", configurator_id), ("token", Some(token))],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_query_skips_missing() {
        assert_eq!(with_query("/api/x", &[("a", None)]), "/api/x");
        assert_eq!(
            with_query("/api/x", &[("a", None), ("b", Some("1 2"))]),
            "/api/x?b=1%202"
        );
    }

    #[test]
    fn test_public_configurator_path() {
        assert_eq!(
            configurator::by_public_id("pub-1", "k/ey+"),
            "/api/configurator/pub-1?publicKey=k%2Fey%2B"
        );
    }

    #[test]
    fn test_delete_goes_through_update_route() {
        assert_eq!(
            category::delete("c1", "t&k"),
            "/api/category/update?id=c1&token=t%26k"
        );
        assert_eq!(option::delete("o1", "tok"), "/api/option/update?id=o1&token=tok");
        assert_eq!(theme::delete("th", "tok"), "/api/theme/update?id=th&token=tok");
    }

    #[test]
    fn test_quote_list_filters() {
        assert_eq!(
            quote::list("tok", Some("PENDING"), None),
            "/api/quote/list?status=PENDING&token=tok"
        );
        assert_eq!(quote::by_code("Q 1"), "/api/quote/Q%201");
    }

    #[test]
    fn test_analytics_usage() {
        assert_eq!(
            analytics::usage("tok", Some("cfg"), Some("2024-01-01"), None),
            "/api/analytics/usage?configuratorId=cfg&from=2024-01-01&token=tok"
        );
    }
}
