//! HTTP span helpers.

/// Collapse numeric path segments so `/api/products/42` logs as
/// `/api/products/{id}`.
pub(super) fn route_template(path: &str) -> String {
    if path == "/" {
        return "/".to_owned();
    }

    let mut template = String::from("/");

    for (index, segment) in path.trim_start_matches('/').split('/').enumerate() {
        if index > 0 {
            template.push('/');
        }

        if !segment.is_empty() && segment.bytes().all(|byte| byte.is_ascii_digit()) {
            template.push_str("{id}");
        } else {
            template.push_str(segment);
        }
    }

    template
}
