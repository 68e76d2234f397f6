//! Route classification
//!
//! A static table decides, per method + path, whether authentication is
//! mandatory, optional or skipped. The table is built once at startup and
//! is read-only afterwards, so concurrent lookups need no synchronization.

/// Authentication requirement for a route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthRequirement {
    /// A valid credential is mandatory; failures terminate the request
    Required,
    /// A credential is validated when present; failures are ignored
    Optional,
    /// Validation is skipped entirely
    None,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(&'static str),
    /// `{name}` — matches exactly one path segment
    Param,
    /// `*` — matches one or more trailing segments
    Tail,
}

/// One classification rule: method pattern, path pattern, requirement
#[derive(Debug, Clone)]
pub struct RouteRule {
    /// Uppercase method name, or `None` to match any method
    method: Option<&'static str>,
    segments: Vec<Segment>,
    requirement: AuthRequirement,
}

impl RouteRule {
    /// Parse a rule from a path pattern like `/events/{id}` or `/orders/*`
    pub fn new(
        method: Option<&'static str>,
        pattern: &'static str,
        requirement: AuthRequirement,
    ) -> Self {
        let segments = pattern
            .split('/')
            .filter(|s| !s.is_empty())
            .map(|s| {
                if s == "*" {
                    Segment::Tail
                } else if s.starts_with('{') && s.ends_with('}') {
                    Segment::Param
                } else {
                    Segment::Literal(s)
                }
            })
            .collect();
        Self {
            method,
            segments,
            requirement,
        }
    }

    fn matches(&self, method: &str, path: &[&str]) -> bool {
        if let Some(m) = self.method
            && !m.eq_ignore_ascii_case(method)
        {
            return false;
        }
        let mut i = 0;
        for segment in &self.segments {
            match segment {
                Segment::Tail => return path.len() > i,
                Segment::Literal(lit) => {
                    if path.get(i) != Some(lit) {
                        return false;
                    }
                }
                Segment::Param => {
                    if path.get(i).is_none() {
                        return false;
                    }
                }
            }
            i += 1;
        }
        path.len() == i
    }

    /// Higher wins: literal segments beat params, params beat tails, an
    /// exact method beats a wildcard method.
    fn specificity(&self) -> (usize, usize, u8) {
        let literals = self
            .segments
            .iter()
            .filter(|s| matches!(s, Segment::Literal(_)))
            .count();
        let fixed = self
            .segments
            .iter()
            .filter(|s| !matches!(s, Segment::Tail))
            .count();
        (literals, fixed, u8::from(self.method.is_some()))
    }
}

/// Static route classification table; most-specific match wins
#[derive(Debug, Clone)]
pub struct RouteTable {
    rules: Vec<RouteRule>,
}

impl RouteTable {
    pub fn with_rules(rules: Vec<RouteRule>) -> Self {
        Self { rules }
    }

    /// Classify a request.
    ///
    /// Returns `None` when the path is outside the gateway's API surface,
    /// letting the router's 404 fallback answer without an auth check.
    /// Legacy `/api`-prefixed aliases classify like their bare forms.
    pub fn classify(&self, method: &str, path: &str) -> Option<AuthRequirement> {
        let path = strip_api_prefix(path);
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        self.rules
            .iter()
            .filter(|rule| rule.matches(method, &segments))
            .max_by_key(|rule| rule.specificity())
            .map(|rule| rule.requirement)
    }
}

fn strip_api_prefix(path: &str) -> &str {
    if path == "/api" {
        "/"
    } else {
        match path.strip_prefix("/api/") {
            Some(_) => &path[4..],
            None => path,
        }
    }
}

impl Default for RouteTable {
    /// The gateway's route policy.
    ///
    /// Wildcard rules make every path under a mounted prefix `Required` by
    /// default; the explicit rules below them grant `Optional` or `None`
    /// where a public or personalized read is allowed.
    fn default() -> Self {
        use AuthRequirement::{None, Optional, Required};
        let rule = RouteRule::new;
        Self::with_rules(vec![
            // default-deny over the mounted API surface
            rule(Option::None, "/auth/*", Required),
            rule(Option::None, "/users/*", Required),
            rule(Option::None, "/events", Required),
            rule(Option::None, "/events/*", Required),
            rule(Option::None, "/orders/*", Required),
            rule(Option::None, "/notifications", Required),
            rule(Option::None, "/notifications/*", Required),
            // public entry points
            rule(Some("POST"), "/auth/login", None),
            rule(Some("POST"), "/auth/register", None),
            rule(Some("GET"), "/health", None),
            rule(Some("GET"), "/", None),
            // public reads, personalized when a credential is present
            rule(Some("GET"), "/events", Optional),
            rule(Some("GET"), "/events/{id}", Optional),
            // protected routes, spelled out for readability
            rule(Some("POST"), "/events", Required),
            rule(Some("PUT"), "/events/{id}", Required),
            rule(Some("DELETE"), "/events/{id}", Required),
            rule(Some("POST"), "/orders/subscribe", Required),
            rule(Some("DELETE"), "/orders/{event_id}", Required),
            rule(Some("GET"), "/orders/my-subscriptions", Required),
            rule(Some("GET"), "/orders/event/{event_id}/attendees", Required),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> RouteTable {
        RouteTable::default()
    }

    #[test]
    fn login_and_register_are_public() {
        assert_eq!(
            table().classify("POST", "/auth/login"),
            Some(AuthRequirement::None)
        );
        assert_eq!(
            table().classify("POST", "/auth/register"),
            Some(AuthRequirement::None)
        );
    }

    #[test]
    fn event_reads_are_optional() {
        assert_eq!(
            table().classify("GET", "/events"),
            Some(AuthRequirement::Optional)
        );
        assert_eq!(
            table().classify("GET", "/events/42"),
            Some(AuthRequirement::Optional)
        );
    }

    #[test]
    fn mutations_are_required() {
        assert_eq!(
            table().classify("POST", "/events"),
            Some(AuthRequirement::Required)
        );
        assert_eq!(
            table().classify("PUT", "/events/42"),
            Some(AuthRequirement::Required)
        );
        assert_eq!(
            table().classify("DELETE", "/events/42"),
            Some(AuthRequirement::Required)
        );
        assert_eq!(
            table().classify("POST", "/orders/subscribe"),
            Some(AuthRequirement::Required)
        );
        assert_eq!(
            table().classify("DELETE", "/orders/42"),
            Some(AuthRequirement::Required)
        );
    }

    #[test]
    fn unruled_paths_under_a_prefix_default_to_required() {
        // no explicit PATCH rule exists; the wildcard default applies
        assert_eq!(
            table().classify("PATCH", "/events/42"),
            Some(AuthRequirement::Required)
        );
        assert_eq!(
            table().classify("GET", "/users/me"),
            Some(AuthRequirement::Required)
        );
    }

    #[test]
    fn unknown_paths_carry_no_rule() {
        assert_eq!(table().classify("GET", "/nonexistent"), None);
        assert_eq!(table().classify("POST", "/metrics/reset"), None);
    }

    #[test]
    fn api_prefix_aliases_classify_identically() {
        assert_eq!(
            table().classify("POST", "/api/auth/login"),
            Some(AuthRequirement::None)
        );
        assert_eq!(
            table().classify("GET", "/api/events"),
            Some(AuthRequirement::Optional)
        );
        assert_eq!(
            table().classify("DELETE", "/api/orders/42"),
            Some(AuthRequirement::Required)
        );
        // not actually the /api prefix
        assert_eq!(table().classify("GET", "/apifoo"), None);
    }

    #[test]
    fn specific_rules_beat_wildcards() {
        // `/events/{id}` (GET, Optional) must outrank `/events/*` (any, Required)
        assert_eq!(
            table().classify("GET", "/events/deep"),
            Some(AuthRequirement::Optional)
        );
        // but deeper unknown paths fall back to the wildcard
        assert_eq!(
            table().classify("GET", "/events/1/2/3"),
            Some(AuthRequirement::Required)
        );
    }

    #[test]
    fn health_and_root_are_public() {
        assert_eq!(
            table().classify("GET", "/health"),
            Some(AuthRequirement::None)
        );
        assert_eq!(table().classify("GET", "/"), Some(AuthRequirement::None));
        assert_eq!(
            table().classify("GET", "/api/health"),
            Some(AuthRequirement::None)
        );
    }
}
