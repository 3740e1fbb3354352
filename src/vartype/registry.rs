use super::{ConversionError, ConversionResult, Value};

/// Catalog of placeholder types. Each variant bundles a coercion and the regex
/// fragment that admits exactly one value of the type.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum VariableType {
    #[default]
    Str,
    Path,
    Int,
    Uint,
    Float,
    Hex,
    Uuid,
    Uuid4,
    Md5,
    Sha1,
    Sha224,
    Sha256,
    Sha384,
    Sha512,
}

const HEX: &str = "[0-9a-fA-F]";

impl VariableType {
    /// Resolves a type tag, ignoring case. Unknown or empty tags fall back to
    /// [`VariableType::Str`]; resolution never fails.
    pub fn resolve(tag: &str) -> Self {
        match tag.to_ascii_lowercase().as_str() {
            "path" => VariableType::Path,
            "int" => VariableType::Int,
            "uint" => VariableType::Uint,
            "float" => VariableType::Float,
            "hex" => VariableType::Hex,
            "uuid" => VariableType::Uuid,
            "uuid4" => VariableType::Uuid4,
            "md5" => VariableType::Md5,
            "sha1" => VariableType::Sha1,
            "sha224" | "sha3_224" => VariableType::Sha224,
            "sha256" | "sha3_256" => VariableType::Sha256,
            "sha384" | "sha3_384" => VariableType::Sha384,
            "sha512" | "sha3_512" => VariableType::Sha512,
            _ => VariableType::Str,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            VariableType::Str => "str",
            VariableType::Path => "path",
            VariableType::Int => "int",
            VariableType::Uint => "uint",
            VariableType::Float => "float",
            VariableType::Hex => "hex",
            VariableType::Uuid => "uuid",
            VariableType::Uuid4 => "uuid4",
            VariableType::Md5 => "md5",
            VariableType::Sha1 => "sha1",
            VariableType::Sha224 => "sha224",
            VariableType::Sha256 => "sha256",
            VariableType::Sha384 => "sha384",
            VariableType::Sha512 => "sha512",
        }
    }

    /// Regex fragment without capture groups. Digit classes are ASCII only so
    /// that every admitted value parses.
    pub fn pattern_fragment(&self) -> String {
        match self {
            VariableType::Str => "[^/]+".to_string(),
            VariableType::Path => ".+".to_string(),
            VariableType::Int => "[-+]?[0-9]+".to_string(),
            VariableType::Uint => "[0-9]+".to_string(),
            VariableType::Float => r"[-+]?[0-9]*\.?[0-9]+".to_string(),
            VariableType::Hex => format!("{HEX}+"),
            VariableType::Uuid => {
                format!("{HEX}{{8}}-{HEX}{{4}}-{HEX}{{4}}-{HEX}{{4}}-{HEX}{{12}}")
            }
            VariableType::Uuid4 => {
                format!("{HEX}{{8}}-{HEX}{{4}}-4{HEX}{{3}}-[89abAB]{HEX}{{3}}-{HEX}{{12}}")
            }
            VariableType::Md5
            | VariableType::Sha1
            | VariableType::Sha224
            | VariableType::Sha256
            | VariableType::Sha384
            | VariableType::Sha512 => format!("{HEX}{{{}}}", self.digest_len().unwrap_or(1)),
        }
    }

    /// Hex digit count of digest types.
    pub fn digest_len(&self) -> Option<usize> {
        match self {
            VariableType::Md5 => Some(32),
            VariableType::Sha1 => Some(40),
            VariableType::Sha224 => Some(56),
            VariableType::Sha256 => Some(64),
            VariableType::Sha384 => Some(96),
            VariableType::Sha512 => Some(128),
            _ => None,
        }
    }

    /// True for types whose fragment may span several segments.
    pub fn is_multi_segment(&self) -> bool {
        matches!(self, VariableType::Path)
    }

    pub fn coerce(&self, key: &str, raw: &str) -> ConversionResult<Value> {
        let fail = |reason: String| ConversionError {
            key: key.to_string(),
            tag: self.tag(),
            raw: raw.to_string(),
            reason,
        };

        match self {
            VariableType::Int => raw
                .parse::<i64>()
                .map(Value::Int)
                .map_err(|e| fail(e.to_string())),
            VariableType::Uint => raw
                .parse::<u64>()
                .map(Value::Uint)
                .map_err(|e| fail(e.to_string())),
            VariableType::Float => raw
                .parse::<f64>()
                .map(Value::Float)
                .map_err(|e| fail(e.to_string())),
            _ => Ok(Value::Str(raw.to_string())),
        }
    }
}
