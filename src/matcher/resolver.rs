use regex::{Captures, RegexSet};

use crate::registry::Route;

/// Finds the first route, in table order, whose matcher accepts `normalized`.
///
/// `prefilter` must hold the route matchers in table order; the lowest index
/// it reports is the first match of an in-order walk.
pub fn first_match<'r, 'p, H>(
    routes: &'r [Route<H>],
    prefilter: &RegexSet,
    normalized: &'p str,
) -> Option<(usize, &'r Route<H>, Captures<'p>)> {
    let position = prefilter.matches(normalized).iter().next()?;
    let route = routes.get(position)?;
    let captures = route.template().matcher().captures(normalized)?;
    Some((position, route, captures))
}
