use regex::Regex;

use super::lexer::{TemplateSegment, parse_segment};
use super::{PatternError, PatternResult};
use crate::path::{normalize_path, segments};
use crate::vartype::VariableType;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteVariable {
    pub key: String,
    pub ty: VariableType,
}

/// A template compiled into an anchored matcher plus its coercion plan.
#[derive(Debug, Clone)]
pub struct CompiledTemplate {
    raw: String,
    normalized: String,
    source: String,
    key: String,
    matcher: Regex,
    variables: Vec<RouteVariable>,
}

impl CompiledTemplate {
    /// Template as it was registered.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Slash-collapsed template, the form used for introspection.
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// Regex source of the matcher, with one named group per variable.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Route identity: the matcher shape without group names, with literals
    /// case-folded when matching ignores case. Templates sharing a key accept
    /// exactly the same paths.
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn matcher(&self) -> &Regex {
        &self.matcher
    }

    pub fn variables(&self) -> &[RouteVariable] {
        &self.variables
    }

    pub fn is_static(&self) -> bool {
        self.variables.is_empty()
    }
}

#[tracing::instrument(level = "trace", skip_all, fields(template = %template))]
pub fn compile_template(template: &str, case_sensitive: bool) -> PatternResult<CompiledTemplate> {
    let normalized = normalize_path(template);
    let mut variables: Vec<RouteVariable> = Vec::new();
    let mut source = String::with_capacity(normalized.len() * 2 + 8);
    let mut key = String::with_capacity(normalized.len() + 8);

    if !case_sensitive {
        source.push_str("(?i)");
        key.push_str("(?i)");
    }
    source.push('^');

    for seg in segments(&normalized) {
        source.push('/');
        key.push('/');
        match parse_segment(seg)? {
            TemplateSegment::Literal(lit) => {
                source.push_str(&regex::escape(&lit));
                if case_sensitive {
                    key.push_str(&regex::escape(&lit));
                } else {
                    key.push_str(&regex::escape(&lit.to_lowercase()));
                }
            }
            TemplateSegment::Placeholder { name, ty } => {
                if variables.iter().any(|v| v.key == name) {
                    return Err(PatternError::DuplicateParameterName {
                        name,
                        template: template.to_string(),
                    });
                }
                source.push_str("(?P<");
                source.push_str(&name);
                source.push('>');
                source.push_str(&ty.pattern_fragment());
                source.push(')');
                key.push('(');
                key.push_str(&ty.pattern_fragment());
                key.push(')');
                variables.push(RouteVariable { key: name, ty });
            }
        }
    }

    if normalized == "/" {
        source.push('/');
        key.push('/');
    }
    source.push('$');

    let matcher = Regex::new(&source).map_err(|err| PatternError::MatcherBuild {
        template: template.to_string(),
        source: err,
    })?;

    Ok(CompiledTemplate {
        raw: template.to_string(),
        normalized,
        source,
        key,
        matcher,
        variables,
    })
}
