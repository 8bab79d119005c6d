//! Module with the built-in languages and the language definition type.
//! A language definition is the data a [`crate::LanguageDictionary`] is built from.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The languages with built-in word lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Language {
    /// The C language.
    C,
    /// The Java language.
    Java,
    /// The OpenGL shading language.
    Glsl,
}

impl Language {
    /// All built-in languages.
    pub const ALL: [Language; 3] = [Language::C, Language::Java, Language::Glsl];

    /// The name of the language. Registries use it as key.
    pub fn name(self) -> &'static str {
        match self {
            Language::C => "c",
            Language::Java => "java",
            Language::Glsl => "glsl",
        }
    }

    /// Get the language with the given name, ignoring case.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|language| language.name().eq_ignore_ascii_case(name))
    }

    /// Get the language for a file extension without the leading dot, ignoring case.
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "c" | "h" => Some(Language::C),
            "java" => Some(Language::Java),
            "glsl" | "vert" | "frag" | "geom" | "comp" | "tesc" | "tese" => Some(Language::Glsl),
            _ => None,
        }
    }

    /// The keywords of the language.
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Language::C => C_KEYWORDS,
            Language::Java => JAVA_KEYWORDS,
            Language::Glsl => GLSL_KEYWORDS,
        }
    }

    /// The datatypes of the language.
    pub fn datatypes(self) -> &'static [&'static str] {
        match self {
            Language::C => C_DATATYPES,
            Language::Java => JAVA_DATATYPES,
            Language::Glsl => GLSL_DATATYPES,
        }
    }

    /// The definition the dictionary of the language is built from.
    pub fn definition(self) -> LanguageDefinition {
        LanguageDefinition::new(self.name(), self.keywords(), self.datatypes())
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The word lists of a language.
///
/// Keywords and datatypes are expected to be disjoint. If a word is in both lists, the
/// datatype classification wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LanguageDefinition {
    /// The name of the language.
    pub name: String,
    /// The keywords of the language.
    #[cfg_attr(feature = "serde", serde(default))]
    pub keywords: Vec<String>,
    /// The datatypes of the language.
    #[cfg_attr(feature = "serde", serde(default))]
    pub datatypes: Vec<String>,
}

impl LanguageDefinition {
    /// Creates a new language definition.
    pub fn new<S: AsRef<str>>(name: &str, keywords: &[S], datatypes: &[S]) -> Self {
        Self {
            name: name.to_string(),
            keywords: keywords.iter().map(|w| w.as_ref().to_string()).collect(),
            datatypes: datatypes.iter().map(|w| w.as_ref().to_string()).collect(),
        }
    }

    /// Reads a language definition in JSON format.
    #[cfg(feature = "serde")]
    pub fn from_reader<R: std::io::Read>(reader: R) -> crate::Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Reads a list of language definitions in JSON format.
    #[cfg(feature = "serde")]
    pub fn list_from_reader<R: std::io::Read>(reader: R) -> crate::Result<Vec<Self>> {
        Ok(serde_json::from_reader(reader)?)
    }
}

const C_KEYWORDS: &[&str] = &[
    "auto", "break", "case", "const", "continue", "default", "do", "else", "enum", "extern",
    "for", "goto", "if", "register", "return", "sizeof", "static", "struct", "switch", "typedef",
    "union", "volatile", "while",
];

const C_DATATYPES: &[&str] = &[
    "bool", "double", "int", "long", "char", "short", "void", "float", "int8_t", "uint8_t",
    "int16_t", "uint16_t", "int32_t", "uint32_t", "int64_t", "uint64_t", "size_t", "signed",
    "unsigned",
];

const JAVA_KEYWORDS: &[&str] = &[
    "abstract", "continue", "for", "new", "switch", "assert", "default", "goto", "package",
    "synchronized", "do", "if", "private", "this", "break", "implements", "protected", "throw",
    "else", "import", "public", "throws", "case", "enum", "instanceof", "return", "transient",
    "catch", "extends", "try", "final", "interface", "static", "class", "finally", "strictfp",
    "volatile", "native", "super", "while",
];

const JAVA_DATATYPES: &[&str] = &[
    "boolean", "double", "byte", "int", "short", "char", "void", "long", "float",
];

const GLSL_KEYWORDS: &[&str] = &[
    "attribute", "const", "uniform", "varying", "buffer", "shared", "layout", "centroid", "flat",
    "smooth", "noperspective", "patch", "sample", "break", "continue", "do", "for", "while",
    "switch", "case", "default", "if", "else", "subroutine", "in", "out", "inout", "invariant",
    "precise", "discard", "return", "lowp", "mediump", "highp", "precision", "struct",
    "coherent", "volatile", "restrict", "readonly", "writeonly",
];

const GLSL_DATATYPES: &[&str] = &[
    "void", "bool", "int", "uint", "float", "double", "vec2", "vec3", "vec4", "dvec2", "dvec3",
    "dvec4", "bvec2", "bvec3", "bvec4", "ivec2", "ivec3", "ivec4", "uvec2", "uvec3", "uvec4",
    "mat2", "mat3", "mat4", "mat2x2", "mat2x3", "mat2x4", "mat3x2", "mat3x3", "mat3x4", "mat4x2",
    "mat4x3", "mat4x4", "sampler1D", "sampler2D", "sampler3D", "samplerCube", "sampler2DShadow",
    "sampler1DArray", "sampler2DArray", "samplerBuffer", "isampler2D", "usampler2D", "image2D",
];
