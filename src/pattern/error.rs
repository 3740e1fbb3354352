use thiserror::Error;

/// Template syntax errors, raised while a route is registered.
#[derive(Debug, Error)]
pub enum PatternError {
    #[error("segment '{segment}' has unbalanced braces")]
    UnbalancedBrace { segment: String },
    #[error("segment '{segment}' nests placeholder braces")]
    NestedBrace { segment: String },
    #[error("segment '{segment}' mixes placeholder and literal syntax")]
    MixedPlaceholderLiteral { segment: String },
    #[error("placeholder in segment '{segment}' is missing a name")]
    ParameterNameEmpty { segment: String },
    #[error(
        "parameter name '{name}' in segment '{segment}' must start with an ASCII letter or underscore (found '{found}')"
    )]
    ParameterInvalidStart {
        segment: String,
        name: String,
        found: char,
    },
    #[error(
        "parameter name '{name}' in segment '{segment}' contains invalid character '{invalid}'"
    )]
    ParameterInvalidCharacter {
        segment: String,
        name: String,
        invalid: char,
    },
    #[error("placeholder in segment '{segment}' is missing its ':type' separator")]
    MissingTypeSeparator { segment: String },
    #[error("placeholder in segment '{segment}' has more than one ':' separator")]
    RepeatedTypeSeparator { segment: String },
    #[error("duplicate parameter name '{name}' in template '{template}'")]
    DuplicateParameterName { name: String, template: String },
    #[error("template '{template}' produced an invalid matcher: {source}")]
    MatcherBuild {
        template: String,
        #[source]
        source: regex::Error,
    },
    #[error("route set of {routes} matchers could not be assembled: {source}")]
    MatcherSetBuild {
        routes: usize,
        #[source]
        source: regex::Error,
    },
}

pub type PatternResult<T> = Result<T, PatternError>;
