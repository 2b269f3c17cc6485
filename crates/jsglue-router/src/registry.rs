/// Read-only access to a set of registered routes
///
/// Anything that can enumerate `(endpoint, rule)` pairs can feed the route
/// table extractor. Implementors must yield rules in registration order.
pub trait RouteRegistry {
    fn iter_rules(&self) -> Box<dyn Iterator<Item = (&str, &str)> + '_>;
}

impl RouteRegistry for crate::UrlMap {
    fn iter_rules(&self) -> Box<dyn Iterator<Item = (&str, &str)> + '_> {
        Box::new(self.rules().map(|r| (r.endpoint(), r.rule())))
    }
}

impl<E, R> RouteRegistry for [(E, R)]
where
    E: AsRef<str>,
    R: AsRef<str>,
{
    fn iter_rules(&self) -> Box<dyn Iterator<Item = (&str, &str)> + '_> {
        Box::new(self.iter().map(|(e, r)| (e.as_ref(), r.as_ref())))
    }
}

impl<E, R> RouteRegistry for Vec<(E, R)>
where
    E: AsRef<str>,
    R: AsRef<str>,
{
    fn iter_rules(&self) -> Box<dyn Iterator<Item = (&str, &str)> + '_> {
        self.as_slice().iter_rules()
    }
}
