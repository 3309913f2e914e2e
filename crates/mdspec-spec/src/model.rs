use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

/// A `paths.<path>.<method>` entry in a spec.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OperationKey {
    /// The path key as written in the spec (e.g. "/users/{id}").
    pub path: String,
    /// The method key under that path (e.g. "get").
    pub method: String,
}

impl OperationKey {
    pub fn new(path: impl Into<String>, method: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            method: method.into(),
        }
    }
}

impl fmt::Display for OperationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.path)
    }
}

/// Languages with a known code-sample file extension.
///
/// Declaration order is the order samples appear in `x-codeSamples`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Python,
    Php,
    JavaScript,
    Java,
    C,
    Cpp,
    CSharp,
    Go,
    Dart,
}

impl Language {
    /// Every language, in declaration order.
    pub const ALL: [Language; 9] = [
        Language::Python,
        Language::Php,
        Language::JavaScript,
        Language::Java,
        Language::C,
        Language::Cpp,
        Language::CSharp,
        Language::Go,
        Language::Dart,
    ];

    /// Display names accepted on the command line, in declaration order.
    pub const NAMES: [&'static str; 9] = [
        "Python",
        "PHP",
        "JavaScript",
        "Java",
        "C",
        "C++",
        "C#",
        "Go",
        "Dart",
    ];

    /// Name written to the `lang` field of a code sample.
    pub fn name(self) -> &'static str {
        match self {
            Language::Python => "Python",
            Language::Php => "PHP",
            Language::JavaScript => "JavaScript",
            Language::Java => "Java",
            Language::C => "C",
            Language::Cpp => "C++",
            Language::CSharp => "C#",
            Language::Go => "Go",
            Language::Dart => "Dart",
        }
    }

    /// File extension, including the leading dot.
    pub fn extension(self) -> &'static str {
        match self {
            Language::Python => ".py",
            Language::Php => ".php",
            Language::JavaScript => ".js",
            Language::Java => ".java",
            Language::C => ".c",
            Language::Cpp => ".cpp",
            Language::CSharp => ".cs",
            Language::Go => ".go",
            Language::Dart => ".dart",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A language name outside the known table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown language '{0}'")]
pub struct UnknownLanguage(pub String);

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::ALL
            .into_iter()
            .find(|lang| lang.name() == s)
            .ok_or_else(|| UnknownLanguage(s.to_string()))
    }
}

/// One entry of an operation's `x-codeSamples` list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeSample {
    /// Language display name (e.g. "C++").
    pub lang: String,
    /// Sample file contents.
    pub source: String,
}

impl CodeSample {
    pub fn new(lang: Language, source: impl Into<String>) -> Self {
        Self {
            lang: lang.name().to_string(),
            source: source.into(),
        }
    }
}
