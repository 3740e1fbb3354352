use super::{PatternError, PatternResult};
use crate::vartype::VariableType;

/// One `/`-delimited piece of a normalized template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSegment {
    Literal(String),
    Placeholder { name: String, ty: VariableType },
}

#[tracing::instrument(level = "trace", fields(segment = %seg))]
pub fn parse_segment(seg: &str) -> PatternResult<TemplateSegment> {
    let bytes = seg.as_bytes();

    if memchr::memchr2(b'{', b'}', bytes).is_none() {
        return Ok(TemplateSegment::Literal(seg.to_string()));
    }

    let opens = memchr::memchr_iter(b'{', bytes).count();
    let closes = memchr::memchr_iter(b'}', bytes).count();

    if opens != closes {
        return Err(PatternError::UnbalancedBrace {
            segment: seg.to_string(),
        });
    }

    if opens > 1 {
        let first_close = memchr::memchr(b'}', bytes).unwrap_or(bytes.len());
        let second_open = memchr::memchr_iter(b'{', bytes).nth(1).unwrap_or(bytes.len());
        return Err(if second_open < first_close {
            PatternError::NestedBrace {
                segment: seg.to_string(),
            }
        } else {
            PatternError::MixedPlaceholderLiteral {
                segment: seg.to_string(),
            }
        });
    }

    match (bytes.first(), bytes.last()) {
        (Some(b'{'), Some(b'}')) => {}
        _ => {
            let open = memchr::memchr(b'{', bytes).unwrap_or(0);
            let close = memchr::memchr(b'}', bytes).unwrap_or(0);
            return Err(if close < open {
                PatternError::UnbalancedBrace {
                    segment: seg.to_string(),
                }
            } else {
                PatternError::MixedPlaceholderLiteral {
                    segment: seg.to_string(),
                }
            });
        }
    }

    let inner = &seg[1..seg.len() - 1];
    let Some((name, tag)) = inner.split_once(':') else {
        return Err(PatternError::MissingTypeSeparator {
            segment: seg.to_string(),
        });
    };

    validate_name(seg, name)?;

    // any tag text resolves; unknown tags fall back to `str`
    if memchr::memchr(b':', tag.as_bytes()).is_some() {
        return Err(PatternError::RepeatedTypeSeparator {
            segment: seg.to_string(),
        });
    }

    Ok(TemplateSegment::Placeholder {
        name: name.to_string(),
        ty: VariableType::resolve(tag),
    })
}

fn validate_name(seg: &str, name: &str) -> PatternResult<()> {
    let mut chars = name.chars();

    let first = chars.next().ok_or_else(|| PatternError::ParameterNameEmpty {
        segment: seg.to_string(),
    })?;

    if !(first.is_ascii_alphabetic() || first == '_') {
        return Err(PatternError::ParameterInvalidStart {
            segment: seg.to_string(),
            name: name.to_string(),
            found: first,
        });
    }

    if let Some(invalid) = chars.find(|c| !(c.is_ascii_alphanumeric() || *c == '_')) {
        return Err(PatternError::ParameterInvalidCharacter {
            segment: seg.to_string(),
            name: name.to_string(),
            invalid,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placeholder(name: &str, ty: VariableType) -> TemplateSegment {
        TemplateSegment::Placeholder {
            name: name.to_string(),
            ty,
        }
    }

    #[test]
    fn parses_literal_segment() {
        assert_eq!(
            parse_segment("users").unwrap(),
            TemplateSegment::Literal("users".to_string())
        );
    }

    #[test]
    fn parses_typed_placeholder() {
        assert_eq!(
            parse_segment("{id:uint}").unwrap(),
            placeholder("id", VariableType::Uint)
        );
        assert_eq!(
            parse_segment("{digest:SHA256}").unwrap(),
            placeholder("digest", VariableType::Sha256)
        );
    }

    #[test]
    fn empty_or_unknown_type_defaults_to_str() {
        assert_eq!(
            parse_segment("{name:}").unwrap(),
            placeholder("name", VariableType::Str)
        );
        assert_eq!(
            parse_segment("{name:slug}").unwrap(),
            placeholder("name", VariableType::Str)
        );
        assert_eq!(
            parse_segment("{id:uuid-v4}").unwrap(),
            placeholder("id", VariableType::Str)
        );
        assert_eq!(
            parse_segment("{id:x.y+z}").unwrap(),
            placeholder("id", VariableType::Str)
        );
    }

    #[test]
    fn rejects_placeholder_without_type_separator() {
        assert!(matches!(
            parse_segment("{name}"),
            Err(PatternError::MissingTypeSeparator { .. })
        ));
    }

    #[test]
    fn rejects_unbalanced_braces() {
        assert!(matches!(
            parse_segment("{id:int"),
            Err(PatternError::UnbalancedBrace { .. })
        ));
        assert!(matches!(
            parse_segment("id}"),
            Err(PatternError::UnbalancedBrace { .. })
        ));
        assert!(matches!(
            parse_segment("}id{"),
            Err(PatternError::UnbalancedBrace { .. })
        ));
    }

    #[test]
    fn rejects_nested_and_mixed_syntax() {
        assert!(matches!(
            parse_segment("{{id:int}}"),
            Err(PatternError::NestedBrace { .. })
        ));
        assert!(matches!(
            parse_segment("v{id:int}"),
            Err(PatternError::MixedPlaceholderLiteral { .. })
        ));
        assert!(matches!(
            parse_segment("{a:str}{b:str}"),
            Err(PatternError::MixedPlaceholderLiteral { .. })
        ));
    }

    #[test]
    fn rejects_invalid_names() {
        assert!(matches!(
            parse_segment("{:int}"),
            Err(PatternError::ParameterNameEmpty { .. })
        ));
        match parse_segment("{1id:int}") {
            Err(PatternError::ParameterInvalidStart { found, .. }) => assert_eq!(found, '1'),
            other => panic!("unexpected result: {other:?}"),
        }
        match parse_segment("{id-raw:int}") {
            Err(PatternError::ParameterInvalidCharacter { invalid, .. }) => {
                assert_eq!(invalid, '-')
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn rejects_repeated_type_separator() {
        assert!(matches!(
            parse_segment("{id:int:extra}"),
            Err(PatternError::RepeatedTypeSeparator { .. })
        ));
        assert!(matches!(
            parse_segment("{a:b:c}"),
            Err(PatternError::RepeatedTypeSeparator { .. })
        ));
    }
}
