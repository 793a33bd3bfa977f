//! Route table
//!
//! Routes are matched in table order and the first match wins. A template
//! segment written `{name}` matches exactly one path segment, possibly empty,
//! and captures it when it is non-empty.

use std::collections::HashMap;

use http::Method;

/// Name of the task identifier path parameter
pub const ID_PARAM: &str = "id";

/// The operation a request is dispatched to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// `GET /api/task` without an id
    ListTasks,
    /// `GET /api/task` with an id
    GetTask,
    /// `POST /api/task`
    CreateTask,
    /// `PUT /api/task/{id}`, sets status to done
    CompleteTask,
    /// `PUT /api/undoTask/{id}`, sets status to not done
    UndoTask,
    /// `DELETE /api/deleteTask/{id}`
    DeleteTask,
}

/// How a route entry treats the `id` parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum IdRule {
    Any,
    Absent,
    Present,
}

struct RouteEntry {
    method: Method,
    template: &'static str,
    id: IdRule,
    route: Route,
}

const fn entry(method: Method, template: &'static str, id: IdRule, route: Route) -> RouteEntry {
    RouteEntry {
        method,
        template,
        id,
        route,
    }
}

/// Priority-ordered route table
const ROUTES: [RouteEntry; 7] = [
    entry(Method::GET, "/api/task", IdRule::Absent, Route::ListTasks),
    entry(Method::GET, "/api/task", IdRule::Present, Route::GetTask),
    entry(Method::GET, "/api/task/{id}", IdRule::Present, Route::GetTask),
    entry(Method::POST, "/api/task", IdRule::Any, Route::CreateTask),
    entry(Method::PUT, "/api/task/{id}", IdRule::Any, Route::CompleteTask),
    entry(Method::PUT, "/api/undoTask/{id}", IdRule::Any, Route::UndoTask),
    entry(Method::DELETE, "/api/deleteTask/{id}", IdRule::Any, Route::DeleteTask),
];

/// A matched route with its path parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    /// The matched route
    pub route: Route,
    /// Gateway-supplied parameters merged over template captures
    pub params: HashMap<String, String>,
}

impl RouteMatch {
    /// The task identifier, if one was supplied
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.params.get(ID_PARAM).map(String::as_str)
    }
}

/// Match a request against the route table
///
/// `path_parameters` are the parameters the gateway already extracted; they
/// take precedence over values captured from the path.
#[must_use]
pub fn match_route(
    method: &Method,
    path: &str,
    path_parameters: &HashMap<String, String>,
) -> Option<RouteMatch> {
    ROUTES
        .iter()
        .filter(|e| e.method == *method)
        .find_map(|e| {
            let captures = match_template(e.template, path)?;
            let mut params: HashMap<String, String> = captures
                .into_iter()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect();
            params.extend(path_parameters.iter().map(|(k, v)| (k.clone(), v.clone())));

            let has_id = params.contains_key(ID_PARAM);
            let id_ok = match e.id {
                IdRule::Any => true,
                IdRule::Absent => !has_id,
                IdRule::Present => has_id,
            };
            id_ok.then_some(RouteMatch {
                route: e.route,
                params,
            })
        })
}

/// Match `path` against a template, returning the captured parameters
#[must_use]
pub fn match_template<'t, 'p>(template: &'t str, path: &'p str) -> Option<Vec<(&'t str, &'p str)>> {
    let mut captures = Vec::new();
    let mut template_segments = template.split('/');
    let mut path_segments = path.split('/');

    loop {
        match (template_segments.next(), path_segments.next()) {
            (None, None) => return Some(captures),
            (Some(expected), Some(actual)) => {
                if let Some(name) = expected.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
                    if !actual.is_empty() {
                        captures.push((name, actual));
                    }
                } else if expected != actual {
                    return None;
                }
            },
            _ => return None,
        }
    }
}
